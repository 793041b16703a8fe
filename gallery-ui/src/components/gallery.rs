//! Gallery view component - pure rendering, no data fetching
//!
//! ## Reactive State Pattern
//! Accepts `ReadStore<GalleryUiState>` and reads through lenses. The visible
//! subset is a memo over the gallery state, so it only recomputes when items,
//! filters, search or the visible count change.

use crate::components::item_card::ItemCard;
use crate::components::pricing_filter_bar::PricingFilterBar;
use crate::components::search_input::SearchInput;
use crate::components::status::{ErrorNotice, StatusNotice};
use crate::stores::gallery::{GalleryUiState, GalleryUiStateStoreExt};
use dioxus::prelude::*;
use gallery_common::{displayed_items, PricingOption};

/// Gallery view: filter controls, search box and the item grid
#[component]
pub fn GalleryView(
    state: ReadStore<GalleryUiState>,
    on_toggle_pricing: EventHandler<PricingOption>,
    on_reset_filters: EventHandler<()>,
    on_search_change: EventHandler<String>,
) -> Element {
    let loading = *state.loading().read();
    let error = state.error().read().clone();
    let pricing_filters = state.gallery().read().pricing_filters().clone();
    let search_query = state.gallery().read().search_query().to_string();

    let shown = use_memo(move || displayed_items(&state.gallery().read()));

    rsx! {
        div { class: "gallery",
            div { class: "filter-container",
                PricingFilterBar {
                    selected: pricing_filters,
                    on_toggle: on_toggle_pricing,
                    on_reset: on_reset_filters,
                }
                SearchInput { value: search_query, on_input: on_search_change }
            }
            if loading {
                StatusNotice { message: "Loading...".to_string() }
            } else if let Some(err) = error {
                ErrorNotice { message: format!("Failed to load items: {err}") }
            } else if shown.read().is_empty() {
                StatusNotice { message: "No items match the current filters.".to_string() }
            } else {
                div { class: "gallery-grid",
                    for item in shown() {
                        ItemCard { key: "{item.id}", item }
                    }
                }
            }
        }
    }
}
