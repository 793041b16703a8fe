//! Shared UI components

pub mod gallery;
pub mod item_card;
pub mod pricing_filter_bar;
pub mod search_input;
pub mod status;

pub use gallery::GalleryView;
pub use item_card::ItemCard;
pub use pricing_filter_bar::PricingFilterBar;
pub use search_input::SearchInput;
pub use status::{ErrorNotice, StatusNotice};
