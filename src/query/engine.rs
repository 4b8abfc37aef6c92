//! Query Engine
//!
//! Full re-filter and re-sort of the store on every call. Output depends
//! only on (store, criteria, sort, reference point); ties are resolved by
//! store order because every sort is stable.

use std::time::Instant;

use crate::catalog::ListingStore;
use crate::model::{Coordinate, Listing};

use super::comparator::ListingComparator;
use super::criteria::{FilterCriteria, SortSpec};
use super::predicate::ListingPredicate;

/// Ordered, immutable result of one evaluation
///
/// Shares the store snapshot and keeps positions into it, so cloning a view
/// never copies listings.
#[derive(Debug, Clone, Default)]
pub struct ResultView {
    store: ListingStore,
    order: Vec<usize>,
}

impl ResultView {
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Listing> {
        self.order.get(index).map(|&i| &self.store.listings()[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Listing> + '_ {
        let listings = self.store.listings();
        self.order.iter().map(move |&i| &listings[i])
    }

    /// Listings in `[start, end)`, clipped to the view
    pub fn range(&self, start: usize, end: usize) -> Vec<&Listing> {
        let end = end.min(self.order.len());
        let start = start.min(end);
        let listings = self.store.listings();
        self.order[start..end].iter().map(|&i| &listings[i]).collect()
    }
}

/// Filter then stably sort the store
pub fn evaluate(
    store: &ListingStore,
    criteria: &FilterCriteria,
    sort: SortSpec,
    reference: Option<Coordinate>,
) -> ResultView {
    let start = Instant::now();
    let listings = store.listings();

    let predicate = ListingPredicate::new(criteria);
    let mut order: Vec<usize> = listings
        .iter()
        .enumerate()
        .filter(|(_, l)| predicate.matches(l))
        .map(|(i, _)| i)
        .collect();

    ListingComparator::new(sort, reference).sort_indices(listings, &mut order);

    tracing::debug!(
        "Evaluated {} of {} listings (sort: {}, reference: {}) in {:?}",
        order.len(),
        listings.len(),
        sort.key(),
        reference.is_some(),
        start.elapsed()
    );

    ResultView {
        store: store.clone(),
        order,
    }
}
