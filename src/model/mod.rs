//! Listing data model
//!
//! Read-only records handed to the engine by the catalog loader:
//! - `listing.rs` - Listing, Room, Coordinate, ContactDetail, ListingId
//! - `price.rs` - MinPrice derived value (recomputed on every call)

pub mod listing;
pub mod price;

pub use listing::{ContactDetail, Coordinate, Listing, ListingId, Room};
pub use price::MinPrice;
