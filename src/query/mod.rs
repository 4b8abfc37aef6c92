//! Listing query pipeline
//!
//! ## Architecture
//! - `criteria.rs` - FilterCriteria, CategoryMode, SortSpec
//! - `predicate.rs` - Predicate Builder (ANDed filter clauses)
//! - `comparator.rs` - Comparator Builder (stable ordering per sort key)
//! - `engine.rs` - Query Engine (filter + sort into a ResultView)

pub mod criteria;
pub mod predicate;
pub mod comparator;
pub mod engine;

// Re-export public API
pub use criteria::{CategoryMode, FilterCriteria, SortSpec};
pub use predicate::{matches, ListingPredicate};
pub use comparator::{distance_from, ListingComparator};
pub use engine::{evaluate, ResultView};
