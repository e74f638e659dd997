//! Token schema: structural validation of token definition files.
//!
//! A token document is a tree of groups whose leaves are token values. The
//! three tiers differ only in the wrapper key; the nested grammar is the same
//! and nesting depth is unbounded.

pub mod files;
pub mod grammar;
pub mod types;
pub mod validator;

pub use files::{resolve_tokens_dir, token_files, validate_dir, validate_file, FileReport, ValidationReport};
pub use grammar::classify;
pub use types::{SchemaIssue, TokenDocument, TokenNode, TokenStats, TokenTier, TokenValue};
pub use validator::TokenSchema;
