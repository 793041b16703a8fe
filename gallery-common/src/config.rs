/// Endpoint used when no `GALLERY_API_URL` was set at build time
const DEFAULT_API_URL: &str = "https://closet-recruiting-api.azurewebsites.net/api/data";

pub const DEFAULT_INITIAL_VISIBLE_COUNT: usize = 12;
pub const DEFAULT_REVEAL_STEP: usize = 8;
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 100.0;

/// Gallery configuration.
///
/// A browser bundle has no process environment, so overrides are baked in at
/// compile time via `option_env!`.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryConfig {
    /// Endpoint returning the JSON item array
    pub api_url: String,
    /// Items shown before the first scroll reveal
    pub initial_visible_count: usize,
    /// Items added per scroll reveal
    pub reveal_step: usize,
    /// Distance from the bottom of the document that triggers a reveal
    pub scroll_threshold_px: f64,
}

impl GalleryConfig {
    pub fn from_env() -> Self {
        let api_url = option_env!("GALLERY_API_URL")
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .to_string();
        Self {
            api_url,
            ..Self::default()
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            initial_visible_count: DEFAULT_INITIAL_VISIBLE_COUNT,
            reveal_step: DEFAULT_REVEAL_STEP,
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
        }
    }
}
