//! Compare Set Manager
//!
//! Small, insertion-ordered, duplicate-free selection of listing ids for a
//! side-by-side comparison. Capacity is `COMPARE_CAPACITY`; toggling a new id
//! into a full set is silently ignored.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::config::COMPARE_CAPACITY;
use crate::model::{Listing, ListingId};
use crate::query::ResultView;

/// What a `toggle` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Set was full and the id was not a member
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct CompareSet {
    ids: SmallVec<[ListingId; COMPARE_CAPACITY]>,
}

impl CompareSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a member, or append a non-member while there is room
    pub fn toggle(&mut self, id: &ListingId) -> ToggleOutcome {
        if let Some(pos) = self.ids.iter().position(|m| m == id) {
            self.ids.remove(pos);
            return ToggleOutcome::Removed;
        }
        if self.is_full() {
            tracing::debug!("Compare set full, ignoring '{}'", id);
            return ToggleOutcome::Ignored;
        }
        self.ids.push(id.clone());
        ToggleOutcome::Added
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &ListingId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= COMPARE_CAPACITY
    }

    /// Member ids in insertion order
    pub fn ids(&self) -> &[ListingId] {
        &self.ids
    }

    /// Members present in `view`, in insertion order
    ///
    /// Members filtered out of the view are skipped here but stay selected.
    pub fn members<'v>(&self, view: &'v ResultView) -> Vec<&'v Listing> {
        if self.ids.is_empty() {
            return Vec::new();
        }
        let visible: FxHashMap<&ListingId, &Listing> = view
            .iter()
            .filter(|l| self.contains(&l.id))
            .map(|l| (&l.id, l))
            .collect();

        self.ids.iter().filter_map(|id| visible.get(id).copied()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ListingStore;
    use crate::query::{evaluate, CategoryMode, FilterCriteria, SortSpec};
    use crate::model::Room;

    fn id(s: &str) -> ListingId {
        ListingId::from(s)
    }

    #[test]
    fn test_toggle_add_remove() {
        let mut set = CompareSet::new();
        assert_eq!(set.toggle(&id("a")), ToggleOutcome::Added);
        assert_eq!(set.toggle(&id("b")), ToggleOutcome::Added);
        assert_eq!(set.ids(), &[id("a"), id("b")]);

        assert_eq!(set.toggle(&id("a")), ToggleOutcome::Removed);
        assert_eq!(set.ids(), &[id("b")]);
    }

    #[test]
    fn test_capacity_cap() {
        let mut set = CompareSet::new();
        for s in ["a", "b", "c"] {
            set.toggle(&id(s));
        }
        assert!(set.is_full());

        assert_eq!(set.toggle(&id("d")), ToggleOutcome::Ignored);
        assert_eq!(set.ids(), &[id("a"), id("b"), id("c")]);

        // Removal still works at capacity
        assert_eq!(set.toggle(&id("b")), ToggleOutcome::Removed);
        assert_eq!(set.toggle(&id("d")), ToggleOutcome::Added);
        assert_eq!(set.ids(), &[id("a"), id("c"), id("d")]);
    }

    #[test]
    fn test_clear() {
        let mut set = CompareSet::new();
        set.toggle(&id("a"));
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(&id("a")));
    }

    #[test]
    fn test_members_follow_insertion_order_and_view() {
        let store = ListingStore::from_listings(vec![
            Listing {
                rooms: vec![Room::priced("r", 100.0)],
                ..Listing::new("hotel")
            },
            Listing::new("shop"),
            Listing::new("cafe"),
        ]);

        let mut set = CompareSet::new();
        set.toggle(&id("cafe"));
        set.toggle(&id("hotel"));
        set.toggle(&id("shop"));

        let all = evaluate(&store, &FilterCriteria::default(), SortSpec::Unsorted, None);
        let members: Vec<&str> = set.members(&all).iter().map(|l| l.id.as_str()).collect();
        assert_eq!(members, vec!["cafe", "hotel", "shop"]);

        let others_only = FilterCriteria {
            category_mode: CategoryMode::OthersOnly,
            ..FilterCriteria::default()
        };
        let view = evaluate(&store, &others_only, SortSpec::Unsorted, None);
        let members: Vec<&str> = set.members(&view).iter().map(|l| l.id.as_str()).collect();
        assert_eq!(members, vec!["cafe", "shop"]);

        // Filtered-out member is still selected
        assert!(set.contains(&id("hotel")));
        assert_eq!(set.len(), 3);
    }
}
