//! Predicate Builder
//!
//! Composes the active filter criteria into one boolean test over a listing.
//! All clauses are ANDed:
//! 1. Region: exact match when set; an absent region fails
//! 2. Province: substring match when set; an absent province fails
//! 3. Keyword: local name contains it (exact case) OR foreign name contains it (any case)
//! 4. Category: room-count constraint, with the price band applied only to hotels

use crate::model::Listing;

use super::criteria::{CategoryMode, FilterCriteria};

/// Criteria normalized once per evaluation
#[derive(Debug, Clone)]
pub struct ListingPredicate<'c> {
    criteria: &'c FilterCriteria,
    keyword_lower: String,
}

impl<'c> ListingPredicate<'c> {
    pub fn new(criteria: &'c FilterCriteria) -> Self {
        ListingPredicate {
            criteria,
            keyword_lower: criteria.keyword.to_lowercase(),
        }
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        self.region_matches(listing)
            && self.province_matches(listing)
            && self.keyword_matches(listing)
            && self.category_matches(listing)
    }

    fn region_matches(&self, listing: &Listing) -> bool {
        let wanted = &self.criteria.region_scope;
        wanted.is_empty() || listing.region_scope.as_deref() == Some(wanted.as_str())
    }

    fn province_matches(&self, listing: &Listing) -> bool {
        let wanted = &self.criteria.province_substring;
        wanted.is_empty()
            || listing
                .province
                .as_deref()
                .map_or(false, |p| p.contains(wanted.as_str()))
    }

    fn keyword_matches(&self, listing: &Listing) -> bool {
        let keyword = &self.criteria.keyword;
        if keyword.is_empty() {
            return true;
        }

        let local_hit = listing
            .name_local
            .as_deref()
            .map_or(false, |n| n.contains(keyword.as_str()));

        local_hit
            || listing
                .name_foreign
                .as_deref()
                .map_or(false, |n| n.to_lowercase().contains(&self.keyword_lower))
    }

    fn category_matches(&self, listing: &Listing) -> bool {
        match self.criteria.category_mode {
            CategoryMode::HotelsOnly => {
                if !listing.is_hotel() {
                    return false;
                }
                !self.criteria.price_enabled
                    || listing
                        .min_price()
                        .within(self.criteria.price_min, self.criteria.price_max)
            }
            CategoryMode::OthersOnly => !listing.is_hotel(),
            CategoryMode::All => true,
        }
    }
}

/// One-shot form of `ListingPredicate::matches`
pub fn matches(listing: &Listing, criteria: &FilterCriteria) -> bool {
    ListingPredicate::new(criteria).matches(listing)
}
