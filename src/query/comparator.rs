//! Comparator Builder
//!
//! Turns a `SortSpec` (plus optional reference point) into an ordering over
//! listings. Every sort goes through the standard library's stable sort, so
//! listings with equal keys keep their filtered order.

use std::cmp::Ordering;

use crate::model::{Coordinate, Listing, MinPrice};
use crate::utils::{haversine_km, Collation};

use super::criteria::SortSpec;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListingComparator {
    /// Finite prices by direction; Unbounded always last
    Price { descending: bool },
    NameLocal { descending: bool },
    NameForeign { descending: bool },
    /// Ascending distance from `origin`; missing coordinates last
    Distance { origin: Coordinate },
    /// Keeps the incoming order
    Identity,
}

impl ListingComparator {
    /// `DistanceAsc` without a reference point falls back to `Identity`
    pub fn new(sort: SortSpec, reference: Option<Coordinate>) -> Self {
        match sort {
            SortSpec::PriceAsc => ListingComparator::Price { descending: false },
            SortSpec::PriceDesc => ListingComparator::Price { descending: true },
            SortSpec::NameLocalAsc => ListingComparator::NameLocal { descending: false },
            SortSpec::NameLocalDesc => ListingComparator::NameLocal { descending: true },
            SortSpec::NameForeignAsc => ListingComparator::NameForeign { descending: false },
            SortSpec::NameForeignDesc => ListingComparator::NameForeign { descending: true },
            SortSpec::DistanceAsc => match reference {
                Some(origin) => ListingComparator::Distance { origin },
                None => {
                    tracing::debug!(
                        "DISTANCE_ASC requested without a reference point, keeping filtered order"
                    );
                    ListingComparator::Identity
                }
            },
            SortSpec::Unsorted => ListingComparator::Identity,
        }
    }

    pub fn compare(&self, a: &Listing, b: &Listing) -> Ordering {
        match *self {
            ListingComparator::Price { descending } => {
                compare_min_price(a.min_price(), b.min_price(), descending)
            }
            ListingComparator::NameLocal { descending } => directed(
                Collation::Thai.compare(name_or_empty(&a.name_local), name_or_empty(&b.name_local)),
                descending,
            ),
            ListingComparator::NameForeign { descending } => directed(
                Collation::Neutral
                    .compare(name_or_empty(&a.name_foreign), name_or_empty(&b.name_foreign)),
                descending,
            ),
            ListingComparator::Distance { origin } => {
                distance_from(origin, a).total_cmp(&distance_from(origin, b))
            }
            ListingComparator::Identity => Ordering::Equal,
        }
    }

    /// Stable in-place sort of positions into `listings`
    pub fn sort_indices(&self, listings: &[Listing], order: &mut Vec<usize>) {
        match *self {
            ListingComparator::Identity => {}
            ListingComparator::Distance { origin } => {
                // One haversine evaluation per listing instead of per comparison
                let mut keyed: Vec<(f64, usize)> = order
                    .iter()
                    .map(|&i| (distance_from(origin, &listings[i]), i))
                    .collect();
                keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
                order.clear();
                order.extend(keyed.into_iter().map(|(_, i)| i));
            }
            ListingComparator::Price { descending } => {
                let mut keyed: Vec<(MinPrice, usize)> =
                    order.iter().map(|&i| (listings[i].min_price(), i)).collect();
                keyed.sort_by(|a, b| compare_min_price(a.0, b.0, descending));
                order.clear();
                order.extend(keyed.into_iter().map(|(_, i)| i));
            }
            _ => order.sort_by(|&a, &b| self.compare(&listings[a], &listings[b])),
        }
    }
}

/// Direction flips only finite-vs-finite; Unbounded is last either way
fn compare_min_price(a: MinPrice, b: MinPrice, descending: bool) -> Ordering {
    match (a, b) {
        (MinPrice::Finite(x), MinPrice::Finite(y)) => directed(x.total_cmp(&y), descending),
        (MinPrice::Finite(_), MinPrice::Unbounded) => Ordering::Less,
        (MinPrice::Unbounded, MinPrice::Finite(_)) => Ordering::Greater,
        (MinPrice::Unbounded, MinPrice::Unbounded) => Ordering::Equal,
    }
}

fn directed(ord: Ordering, descending: bool) -> Ordering {
    if descending {
        ord.reverse()
    } else {
        ord
    }
}

fn name_or_empty(name: &Option<String>) -> &str {
    name.as_deref().unwrap_or("")
}

/// Kilometers from `origin`, infinite without a coordinate
pub fn distance_from(origin: Coordinate, listing: &Listing) -> f64 {
    listing
        .coordinate
        .map_or(f64::INFINITY, |c| haversine_km(origin, c))
}
