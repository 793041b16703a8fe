use crate::{api, url};
use dioxus::history::history;
use dioxus::prelude::*;
use gallery_common::{GalleryConfig, GalleryQuery, GalleryState, PricingOption};
use gallery_ui::stores::{GalleryUiState, GalleryUiStateStoreExt};
use gallery_ui::{use_scroll_reveal, GalleryView};
use tracing::{debug, error, info};

#[component]
pub fn Gallery() -> Element {
    let config: GalleryConfig = use_context();
    let threshold_px = config.scroll_threshold_px;

    // URL parameters are applied before the first render
    let mut state = use_store({
        let config = config.clone();
        move || {
            let mut gallery = GalleryState::new(&config);
            url::query_from_location(&history().current_route()).apply(&mut gallery);
            GalleryUiState {
                gallery,
                loading: true,
                error: None,
            }
        }
    });

    // One fetch per session, no retry
    use_future(move || {
        let endpoint = config.api_url.clone();
        async move {
            match api::fetch_items(endpoint).await {
                Ok(items) => {
                    info!("Loaded {} items", items.len());
                    let mut ui = state.write();
                    ui.gallery.replace_items(items);
                    ui.loading = false;
                }
                Err(e) => {
                    error!("Failed to load items: {e}");
                    let mut ui = state.write();
                    ui.error = Some(e);
                    ui.loading = false;
                }
            }
        }
    });

    // Mirror filter and search state into the URL. The memo only changes when
    // the query does, so item loads and reveals don't touch the URL.
    let query = use_memo(move || GalleryQuery::from(&*state.gallery().read()));
    let mut is_mounted = use_signal(|| false);
    use_effect(move || {
        let query = query();

        if !*is_mounted.peek() {
            is_mounted.set(true);
            return;
        }

        let url = url::gallery_url(&query);
        debug!("Syncing URL: {url}");
        history().replace(url);
    });

    let reveal = use_callback(move |()| state.gallery().write().reveal_more());
    use_scroll_reveal(threshold_px, reveal);

    rsx! {
        GalleryView {
            state,
            on_toggle_pricing: move |option: PricingOption| {
                state.gallery().write().toggle_pricing(option);
            },
            on_reset_filters: move |_| {
                state.gallery().write().reset_filters();
            },
            on_search_change: move |text: String| {
                state.gallery().write().set_search_query(text);
            },
        }
    }
}
