//! Integrity: a content fingerprint of the tokens directory.

pub mod hasher;

pub use hasher::{hash_tokens_dir, TokensHash};
