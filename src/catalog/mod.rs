//! Listing Store - immutable in-memory catalog snapshot
//!
//! The snapshot is shared behind an `Arc`, so result views and sessions can
//! hold it without copying. A reload replaces the whole snapshot; there are
//! no partial updates. An empty store stands for "still loading".

pub mod raw;

use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;

use crate::model::{Coordinate, Listing, ListingId};
use crate::utils::centroid;

pub use raw::CatalogError;

#[derive(Debug, Clone)]
pub struct ListingStore {
    listings: Arc<[Listing]>,
    by_id: Arc<FxHashMap<ListingId, usize>>,
}

impl Default for ListingStore {
    fn default() -> Self {
        ListingStore {
            listings: Arc::from(Vec::new()),
            by_id: Arc::new(FxHashMap::default()),
        }
    }
}

impl ListingStore {
    /// Zero listings (catalog not loaded yet)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a snapshot; later records with an already-seen id are dropped
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        let mut by_id = FxHashMap::default();
        let mut kept = Vec::with_capacity(listings.len());

        for listing in listings {
            if by_id.contains_key(&listing.id) {
                tracing::warn!("Duplicate listing id '{}', keeping first occurrence", listing.id);
                continue;
            }
            by_id.insert(listing.id.clone(), kept.len());
            kept.push(listing);
        }

        tracing::info!("Loaded listing snapshot ({} listings)", kept.len());

        ListingStore {
            listings: kept.into(),
            by_id: Arc::new(by_id),
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Listing> {
        self.listings.iter()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Look up a listing for detail expansion
    pub fn get(&self, id: &ListingId) -> Option<&Listing> {
        self.by_id.get(id).map(|&i| &self.listings[i])
    }

    /// Distinct non-empty region values, sorted
    pub fn region_scopes(&self) -> Vec<String> {
        distinct_sorted(self.listings.iter().filter_map(|l| l.region_scope.as_deref()))
    }

    /// Distinct non-empty provinces, sorted
    pub fn provinces(&self) -> Vec<String> {
        distinct_sorted(self.listings.iter().filter_map(|l| l.province.as_deref()))
    }

    /// Mean coordinate of listings whose province contains `province_substring`
    ///
    /// Used as a default reference point for distance sorting. Listings
    /// without a coordinate are ignored; an empty substring covers the
    /// whole store.
    pub fn province_centroid(&self, province_substring: &str) -> Option<Coordinate> {
        centroid(
            self.listings
                .iter()
                .filter(|l| {
                    province_substring.is_empty()
                        || l.province
                            .as_deref()
                            .map_or(false, |p| p.contains(province_substring))
                })
                .filter_map(|l| l.coordinate),
        )
    }
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let unique: FxHashSet<&str> = values.map(str::trim).filter(|v| !v.is_empty()).collect();
    let mut out: Vec<String> = unique.into_iter().map(String::from).collect();
    out.sort();
    out
}
