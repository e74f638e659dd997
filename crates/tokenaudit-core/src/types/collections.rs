//! Re-exports of performance-oriented collection types.

pub use rustc_hash::FxHashSet;
pub use smallvec::SmallVec;

/// SmallVec sized for the handful of values a single declaration yields.
pub type SmallVec4<T> = SmallVec<[T; 4]>;
