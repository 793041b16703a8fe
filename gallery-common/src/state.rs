use crate::config::{DEFAULT_INITIAL_VISIBLE_COUNT, DEFAULT_REVEAL_STEP};
use crate::{GalleryConfig, Item, PricingFilters, PricingOption};

/// Gallery state: the fetched items plus the user's filter, search and
/// reveal progress.
///
/// Pure data structure with no I/O. Every mutation is a whole-field
/// replacement; none of them validate or fail.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    items: Vec<Item>,
    pricing_filters: PricingFilters,
    search_query: String,
    visible_count: usize,
    reveal_step: usize,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pricing_filters: PricingFilters::new(),
            search_query: String::new(),
            visible_count: DEFAULT_INITIAL_VISIBLE_COUNT,
            reveal_step: DEFAULT_REVEAL_STEP,
        }
    }
}

impl GalleryState {
    pub fn new(config: &GalleryConfig) -> Self {
        Self {
            visible_count: config.initial_visible_count,
            reveal_step: config.reveal_step,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn pricing_filters(&self) -> &PricingFilters {
        &self.pricing_filters
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Replace the item list wholesale (one call per fetch).
    pub fn replace_items(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    pub fn set_pricing_filters(&mut self, filters: PricingFilters) {
        self.pricing_filters = filters;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Flip one category in the filter set.
    pub fn toggle_pricing(&mut self, option: PricingOption) {
        let mut filters = self.pricing_filters.clone();
        filters.toggle(option);
        self.set_pricing_filters(filters);
    }

    /// Grow the visible count by one reveal step. Never shrinks.
    pub fn reveal_more(&mut self) {
        self.visible_count = self.visible_count.saturating_add(self.reveal_step);
    }

    /// Clear filters and search. The visible count is left alone.
    pub fn reset_filters(&mut self) {
        self.pricing_filters = PricingFilters::new();
        self.search_query.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GalleryState::default();
        assert!(state.items().is_empty());
        assert!(state.pricing_filters().is_empty());
        assert_eq!(state.search_query(), "");
        assert_eq!(state.visible_count(), 12);
    }

    #[test]
    fn test_reveal_more_grows_by_step() {
        let mut state = GalleryState::default();
        for n in 1..=5 {
            state.reveal_more();
            assert_eq!(state.visible_count(), 12 + 8 * n);
        }
    }

    #[test]
    fn test_reveal_more_saturates() {
        let mut state = GalleryState::default();
        state.visible_count = usize::MAX - 1;
        state.reveal_more();
        assert_eq!(state.visible_count(), usize::MAX);
    }

    #[test]
    fn test_reset_keeps_visible_count() {
        let mut state = GalleryState::default();
        state.toggle_pricing(PricingOption::Free);
        state.set_search_query("hat");
        state.reveal_more();
        state.reset_filters();
        assert!(state.pricing_filters().is_empty());
        assert_eq!(state.search_query(), "");
        assert_eq!(state.visible_count(), 20);
    }

    #[test]
    fn test_new_uses_config() {
        let config = GalleryConfig {
            initial_visible_count: 4,
            reveal_step: 2,
            ..GalleryConfig::default()
        };
        let mut state = GalleryState::new(&config);
        assert_eq!(state.visible_count(), 4);
        state.reveal_more();
        assert_eq!(state.visible_count(), 6);
    }

    #[test]
    fn test_toggle_pricing_twice_clears() {
        let mut state = GalleryState::default();
        state.toggle_pricing(PricingOption::Paid);
        state.toggle_pricing(PricingOption::ViewOnly);
        state.toggle_pricing(PricingOption::Paid);
        let codes: Vec<u8> = state.pricing_filters().iter().map(|o| o.code()).collect();
        assert_eq!(codes, vec![2]);
    }
}
