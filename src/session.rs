//! Browse Session - reactive owner of all query state
//!
//! Holds the store snapshot, criteria, sort spec, reference point,
//! paginator and compare set for a single caller. Every change recomputes
//! the result view eagerly and synchronously; the paginator is re-clamped
//! only when the set of matching listings can have changed (store or
//! criteria), not on a pure re-sort.

use serde::Serialize;

use crate::catalog::ListingStore;
use crate::compare_set::{CompareSet, ToggleOutcome};
use crate::config::EngineConfig;
use crate::model::{Coordinate, Listing, ListingId};
use crate::paginator::{PageInfo, Paginator};
use crate::query::{evaluate, FilterCriteria, ResultView, SortSpec};

/// One rendered page: the visible listings plus pagination state
#[derive(Debug, Clone, Serialize)]
pub struct PageView<'s> {
    pub listings: Vec<&'s Listing>,
    pub info: PageInfo,
}

#[derive(Debug, Clone)]
pub struct BrowseSession {
    store: ListingStore,
    criteria: FilterCriteria,
    sort: SortSpec,
    reference: Option<Coordinate>,
    paginator: Paginator,
    compare: CompareSet,
    view: ResultView,
}

impl Default for BrowseSession {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl BrowseSession {
    /// Session over an empty store (catalog still loading)
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_store(config, ListingStore::empty())
    }

    pub fn with_store(config: &EngineConfig, store: ListingStore) -> Self {
        let mut session = BrowseSession {
            store,
            criteria: FilterCriteria::default(),
            sort: SortSpec::default(),
            reference: None,
            paginator: Paginator::new(config),
            compare: CompareSet::new(),
            view: ResultView::default(),
        };
        session.refilter();
        session
    }

    // ------------------------------------------------------------------
    // Inbound
    // ------------------------------------------------------------------

    /// Replace the whole snapshot (initial load or reload)
    pub fn load_store(&mut self, store: ListingStore) {
        tracing::info!(
            "Replacing listing snapshot ({} -> {} listings)",
            self.store.len(),
            store.len()
        );
        self.store = store;
        self.refilter();
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if criteria == self.criteria {
            return;
        }
        self.criteria = criteria;
        self.refilter();
    }

    /// Edit one or more criteria fields in place
    pub fn update_criteria(&mut self, edit: impl FnOnce(&mut FilterCriteria)) {
        let mut criteria = self.criteria.clone();
        edit(&mut criteria);
        self.set_criteria(criteria);
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        if sort == self.sort {
            return;
        }
        self.sort = sort;
        self.resort();
    }

    pub fn set_reference_point(&mut self, reference: Option<Coordinate>) {
        self.reference = reference;
        if self.sort.needs_reference_point() {
            self.resort();
        }
    }

    /// Use the mean coordinate of the current province filter as reference point
    ///
    /// Returns the chosen point; leaves the reference unchanged when no
    /// listing in the province has a coordinate.
    pub fn use_province_centroid(&mut self) -> Option<Coordinate> {
        let centroid = self.store.province_centroid(&self.criteria.province_substring)?;
        self.set_reference_point(Some(centroid));
        Some(centroid)
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.paginator.set_page_size(size);
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.paginator.go_to_page(page);
    }

    pub fn next_page(&mut self) {
        self.paginator.next_page();
    }

    pub fn previous_page(&mut self) {
        self.paginator.previous_page();
    }

    /// Toggle a listing in or out of the compare selection
    ///
    /// Ids unknown to the current store are ignored unless already selected,
    /// so a stale selection can still be removed after a reload.
    pub fn toggle_compare(&mut self, id: &ListingId) -> ToggleOutcome {
        if !self.compare.contains(id) && self.store.get(id).is_none() {
            tracing::debug!("Ignoring compare toggle for unknown listing '{}'", id);
            return ToggleOutcome::Ignored;
        }
        self.compare.toggle(id)
    }

    pub fn clear_compare(&mut self) {
        self.compare.clear();
    }

    // ------------------------------------------------------------------
    // Outbound
    // ------------------------------------------------------------------

    pub fn results(&self) -> &ResultView {
        &self.view
    }

    pub fn page(&self) -> PageView<'_> {
        let range = self.paginator.visible_range(self.view.len());
        PageView {
            listings: self.view.range(range.start, range.end),
            info: self.paginator.page_info(),
        }
    }

    pub fn page_info(&self) -> PageInfo {
        self.paginator.page_info()
    }

    pub fn compare_members(&self) -> Vec<&Listing> {
        self.compare.members(&self.view)
    }

    pub fn compare_set(&self) -> &CompareSet {
        &self.compare
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn reference_point(&self) -> Option<Coordinate> {
        self.reference
    }

    pub fn store(&self) -> &ListingStore {
        &self.store
    }

    /// True when distance sorting is active but has no origin to sort by
    pub fn needs_reference_point(&self) -> bool {
        self.sort.needs_reference_point() && self.reference.is_none()
    }

    // ------------------------------------------------------------------
    // Recompute
    // ------------------------------------------------------------------

    fn evaluate(&self) -> ResultView {
        evaluate(&self.store, &self.criteria, self.sort, self.reference)
    }

    /// Content may have changed: recompute and re-clamp the page
    fn refilter(&mut self) {
        self.view = self.evaluate();
        self.paginator.set_result_count(self.view.len());
    }

    /// Same content, new order: the page count cannot change
    fn resort(&mut self) {
        self.view = self.evaluate();
    }
}
