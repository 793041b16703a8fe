//! Gallery state store

use dioxus::prelude::*;
use gallery_common::GalleryState;

/// State for the gallery page
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct GalleryUiState {
    /// Items, filters, search text and reveal progress
    pub gallery: GalleryState,
    /// Whether the item fetch is still in flight
    pub loading: bool,
    /// Error message if the fetch failed
    pub error: Option<String>,
}
