//! Listing Query Engine
//!
//! Filter, sort, paginate and compare a read-only catalog of hotel and
//! business listings.
//!
//! Module layout:
//! - `model/`: Listing, Room, Coordinate and the MinPrice derived value
//! - `catalog/`: ListingStore snapshot, raw catalog adapter, facets
//! - `query/`: filter criteria, predicate, comparator, query engine
//! - `paginator`, `compare_set`: page state and the bounded compare selection
//! - `session`: reactive owner of all of the above for one caller
//! - `utils/`: haversine distance and name collation
//!
//! Everything is synchronous; the only fallible entry points are catalog
//! parsing and config loading.

pub mod utils;
pub mod model;
pub mod catalog;
pub mod config;
pub mod query;
pub mod paginator;
pub mod compare_set;
pub mod session;

// Re-export commonly used types
pub use model::{ContactDetail, Coordinate, Listing, ListingId, MinPrice, Room};
pub use catalog::{CatalogError, ListingStore};
pub use config::{EngineConfig, COMPARE_CAPACITY, DEFAULT_PAGE_SIZE};
pub use query::{
    evaluate, matches, CategoryMode, FilterCriteria, ListingComparator, ResultView, SortSpec,
};
pub use paginator::{PageInfo, Paginator};
pub use compare_set::{CompareSet, ToggleOutcome};
pub use session::{BrowseSession, PageView};
pub use utils::haversine_km;
