//! gallery-ui - Stores and view components for the product gallery
//!
//! Components are pure views driven by a `GalleryUiState` store and event
//! callbacks; fetching and URL handling live in the web crate.

pub mod components;
pub mod scroll;
pub mod stores;

pub use components::*;
pub use scroll::{use_scroll_reveal, WindowEventListener};
