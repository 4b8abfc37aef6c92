//! Paginator
//!
//! Owns page size and the 1-based current page. The current page is always
//! within `[1, total_pages]` where `total_pages = max(1, ceil(count / size))`;
//! every setter clamps instead of rejecting.

use serde::Serialize;
use std::ops::Range;

use crate::config::EngineConfig;

/// Snapshot of pagination state for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub result_count: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone)]
pub struct Paginator {
    page_sizes: Vec<usize>,
    page_size: usize,
    current_page: usize,
    total_pages: usize,
    result_count: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl Paginator {
    pub fn new(config: &EngineConfig) -> Self {
        let mut page_sizes = config.page_sizes.clone();
        page_sizes.retain(|&s| s > 0);
        if page_sizes.is_empty() {
            page_sizes = EngineConfig::default().page_sizes;
        }

        let mut paginator = Paginator {
            page_sizes,
            page_size: 1,
            current_page: 1,
            total_pages: 1,
            result_count: 0,
        };
        paginator.page_size = paginator.nearest_allowed(config.default_page_size);
        paginator
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn result_count(&self) -> usize {
        self.result_count
    }

    pub fn allowed_page_sizes(&self) -> &[usize] {
        &self.page_sizes
    }

    /// Recompute total pages for a new result size and clamp the current page
    pub fn set_result_count(&mut self, count: usize) {
        self.result_count = count;
        self.total_pages = count.div_ceil(self.page_size).max(1);
        if self.current_page > self.total_pages {
            tracing::debug!(
                "Clamping page {} to {} ({} results)",
                self.current_page,
                self.total_pages,
                count
            );
            self.current_page = self.total_pages;
        }
    }

    /// Change page size and return to the first page
    ///
    /// A size outside the allowed set snaps to the nearest allowed value.
    pub fn set_page_size(&mut self, size: usize) {
        let snapped = self.nearest_allowed(size);
        if snapped != size {
            tracing::debug!("Page size {} not allowed, using {}", size, snapped);
        }
        self.page_size = snapped;
        self.current_page = 1;
        self.set_result_count(self.result_count);
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages);
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.current_page.saturating_sub(1));
    }

    /// Index range of the current page within a sequence of `len` items
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        let start = (self.current_page - 1).saturating_mul(self.page_size).min(len);
        let end = start.saturating_add(self.page_size).min(len);
        start..end
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo {
            current_page: self.current_page,
            total_pages: self.total_pages,
            page_size: self.page_size,
            result_count: self.result_count,
            has_previous: self.current_page > 1,
            has_next: self.current_page < self.total_pages,
        }
    }

    /// Closest allowed size; ties go to the smaller one
    fn nearest_allowed(&self, size: usize) -> usize {
        self.page_sizes
            .iter()
            .copied()
            .min_by_key(|&allowed| (allowed.abs_diff(size), allowed))
            .unwrap_or(crate::config::DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = Paginator::default();
        assert_eq!(p.page_size(), 25);
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.total_pages(), 1);
    }

    #[test]
    fn test_clamp_scenario() {
        let mut p = Paginator::default();
        p.set_result_count(107);
        assert_eq!(p.total_pages(), 5);

        p.go_to_page(9);
        assert_eq!(p.current_page(), 5);

        p.set_result_count(10);
        assert_eq!(p.total_pages(), 1);
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn test_zero_results_has_one_page() {
        let mut p = Paginator::default();
        p.set_result_count(0);
        assert_eq!(p.total_pages(), 1);
        p.go_to_page(0);
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.visible_range(0), 0..0);
    }

    #[test]
    fn test_result_count_does_not_move_valid_page() {
        let mut p = Paginator::default();
        p.set_result_count(100);
        p.go_to_page(3);
        p.set_result_count(100);
        assert_eq!(p.current_page(), 3);
        p.set_result_count(60);
        assert_eq!(p.current_page(), 3);
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let mut p = Paginator::default();
        p.set_result_count(107);
        p.go_to_page(4);

        p.set_page_size(10);
        assert_eq!(p.page_size(), 10);
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.total_pages(), 11);
    }

    #[test]
    fn test_page_size_snaps_to_allowed() {
        let mut p = Paginator::default();
        p.set_page_size(30);
        assert_eq!(p.page_size(), 25);
        p.set_page_size(1000);
        assert_eq!(p.page_size(), 100);
        p.set_page_size(0);
        assert_eq!(p.page_size(), 10);

        // 75 is equidistant from 50 and 100
        p.set_page_size(75);
        assert_eq!(p.page_size(), 50);
    }

    #[test]
    fn test_visible_range() {
        let mut p = Paginator::default();
        p.set_result_count(107);
        assert_eq!(p.visible_range(107), 0..25);

        p.go_to_page(5);
        assert_eq!(p.visible_range(107), 100..107);

        // Shorter sequence than the count the paginator was told about
        assert!(p.visible_range(50).is_empty());
    }

    #[test]
    fn test_next_previous() {
        let mut p = Paginator::default();
        p.set_result_count(60);

        p.previous_page();
        assert_eq!(p.current_page(), 1);
        p.next_page();
        p.next_page();
        p.next_page();
        assert_eq!(p.current_page(), 3);

        let info = p.page_info();
        assert!(info.has_previous);
        assert!(!info.has_next);
        assert_eq!(info.result_count, 60);
    }

    #[test]
    fn test_custom_config() {
        let config = EngineConfig {
            page_sizes: vec![5, 15],
            default_page_size: 15,
        };
        let mut p = Paginator::new(&config);
        assert_eq!(p.page_size(), 15);
        assert_eq!(p.allowed_page_sizes(), &[5, 15]);

        p.set_result_count(16);
        assert_eq!(p.total_pages(), 2);
    }
}
