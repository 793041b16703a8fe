mod config;
pub mod filter;
mod item;
mod pricing;
pub mod query;
pub mod scroll;
mod state;
pub mod wire;

pub use config::GalleryConfig;
pub use filter::{displayed_items, visible_items};
pub use item::Item;
pub use pricing::{PricingFilters, PricingOption};
pub use query::GalleryQuery;
pub use state::GalleryState;
