//! Scanner subsystem: directory pruning and the depth-first tree walk.
//!
//! Every detector shares the same walk: the `PathFilter` decides which
//! directories are descended into, and a `FileVisitor` receives the text of
//! each file it asked for.

pub mod path_filter;
pub mod types;
pub mod walker;

pub use path_filter::PathFilter;
pub use types::WalkStats;
pub use walker::{FileVisitor, TreeWalker};
