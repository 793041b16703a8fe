//! Filter engine
//!
//! Recomputes the visible subset from a `GalleryState`. Deterministic, so the
//! view layer can memoize on state equality.

use crate::{GalleryState, Item, PricingFilters};

/// Whether an item passes both the pricing filter and the search query.
///
/// `query_lower` must already be lowercased.
pub fn matches(item: &Item, filters: &PricingFilters, query_lower: &str) -> bool {
    let matches_pricing = filters.is_empty() || filters.contains(item.pricing_option);
    let matches_search = query_lower.is_empty()
        || item.creator.to_lowercase().contains(query_lower)
        || item.title.to_lowercase().contains(query_lower);
    matches_pricing && matches_search
}

/// All items passing the current filters, in source order.
pub fn visible_items(state: &GalleryState) -> Vec<Item> {
    let query_lower = state.search_query().to_lowercase();
    state
        .items()
        .iter()
        .filter(|item| matches(item, state.pricing_filters(), &query_lower))
        .cloned()
        .collect()
}

/// `visible_items` truncated to the state's visible count.
pub fn displayed_items(state: &GalleryState) -> Vec<Item> {
    let mut items = visible_items(state);
    items.truncate(state.visible_count());
    items
}
