//! User-controlled filter and sort settings

use serde::{Deserialize, Serialize};

/// Business category facet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryMode {
    /// Listings with at least one room; the price band applies
    HotelsOnly,
    /// Listings without rooms; the price band never applies
    OthersOnly,
    #[default]
    All,
}

/// Active filter settings, updated field by field by the UI
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Substring of the local name (exact case) or foreign name (any case)
    pub keyword: String,
    /// Exact region match; empty means no constraint
    pub region_scope: String,
    /// Substring of the province; empty means no constraint
    pub province_substring: String,
    pub category_mode: CategoryMode,
    /// Price bounds are ignored unless this is set
    pub price_enabled: bool,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

impl FilterCriteria {
    /// Hotels within a price band
    pub fn hotels_priced(price_min: Option<f64>, price_max: Option<f64>) -> Self {
        FilterCriteria {
            category_mode: CategoryMode::HotelsOnly,
            price_enabled: true,
            price_min,
            price_max,
            ..FilterCriteria::default()
        }
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortSpec {
    PriceAsc,
    PriceDesc,
    NameLocalAsc,
    NameLocalDesc,
    NameForeignAsc,
    NameForeignDesc,
    /// Needs a reference point; without one the filtered order is kept
    DistanceAsc,
    /// Identity order; any unrecognized key maps here
    #[default]
    #[serde(other)]
    Unsorted,
}

impl SortSpec {
    pub const ALL: [SortSpec; 8] = [
        SortSpec::PriceAsc,
        SortSpec::PriceDesc,
        SortSpec::NameLocalAsc,
        SortSpec::NameLocalDesc,
        SortSpec::NameForeignAsc,
        SortSpec::NameForeignDesc,
        SortSpec::DistanceAsc,
        SortSpec::Unsorted,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SortSpec::PriceAsc => "PRICE_ASC",
            SortSpec::PriceDesc => "PRICE_DESC",
            SortSpec::NameLocalAsc => "NAME_LOCAL_ASC",
            SortSpec::NameLocalDesc => "NAME_LOCAL_DESC",
            SortSpec::NameForeignAsc => "NAME_FOREIGN_ASC",
            SortSpec::NameForeignDesc => "NAME_FOREIGN_DESC",
            SortSpec::DistanceAsc => "DISTANCE_ASC",
            SortSpec::Unsorted => "UNSORTED",
        }
    }

    /// Parse a sort key; unknown keys become `Unsorted` rather than an error
    pub fn from_key(key: &str) -> SortSpec {
        let key = key.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.key().eq_ignore_ascii_case(key))
            .unwrap_or_else(|| {
                tracing::debug!("Unrecognized sort key '{}', keeping identity order", key);
                SortSpec::Unsorted
            })
    }

    pub fn needs_reference_point(&self) -> bool {
        matches!(self, SortSpec::DistanceAsc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_round_trip() {
        for spec in SortSpec::ALL {
            assert_eq!(SortSpec::from_key(spec.key()), spec);
        }
        assert_eq!(SortSpec::from_key("price_desc"), SortSpec::PriceDesc);
    }

    #[test]
    fn test_unknown_sort_key_is_identity() {
        assert_eq!(SortSpec::from_key("RATING_DESC"), SortSpec::Unsorted);
        assert_eq!(SortSpec::from_key(""), SortSpec::Unsorted);
    }

    #[test]
    fn test_sort_spec_serde() {
        let spec: SortSpec = serde_json::from_str("\"NAME_FOREIGN_DESC\"").unwrap();
        assert_eq!(spec, SortSpec::NameForeignDesc);

        let spec: SortSpec = serde_json::from_str("\"STARS_ASC\"").unwrap();
        assert_eq!(spec, SortSpec::Unsorted);
    }

    #[test]
    fn test_criteria_defaults_from_partial_json() {
        let json = r#"{"keyword": "Beach", "category_mode": "HOTELS_ONLY"}"#;
        let criteria: FilterCriteria = serde_json::from_str(json).unwrap();
        assert_eq!(criteria.keyword, "Beach");
        assert_eq!(criteria.category_mode, CategoryMode::HotelsOnly);
        assert!(!criteria.price_enabled);
        assert_eq!(criteria.price_min, None);
    }
}
