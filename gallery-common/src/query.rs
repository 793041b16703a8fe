//! URL query persistence for the filter and search state
//!
//! Two parameters, both optional:
//! - `pricing`: comma-separated wire codes (`0,2`)
//! - `search`: the raw search text
//!
//! A parameter is omitted entirely when its state is empty.
//!
//! Unrecognized `pricing` tokens are dropped one by one. If none survive
//! (e.g. `pricing=abc`), the filter set is empty and every item shows,
//! rather than the parameter filtering everything out.

use crate::{GalleryState, PricingFilters, PricingOption};
use tracing::warn;

const PRICING_KEY: &str = "pricing";
const SEARCH_KEY: &str = "search";

/// Filter and search state as carried in the page URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryQuery {
    pub pricing: PricingFilters,
    pub search: String,
}

impl GalleryQuery {
    /// Build from already-split, already-decoded query parameters.
    pub fn from_params(pricing: Option<&str>, search: Option<&str>) -> Self {
        Self {
            pricing: pricing.map(parse_pricing).unwrap_or_default(),
            search: search.unwrap_or_default().to_string(),
        }
    }

    /// Parse a raw query string such as `?pricing=0,2&search=ann`.
    ///
    /// Unknown keys are ignored. When a key repeats, the last value wins.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut pricing = None;
        let mut search = None;

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match decode_component(key).as_str() {
                PRICING_KEY => pricing = Some(decode_component(value)),
                SEARCH_KEY => search = Some(decode_component(value)),
                _ => {}
            }
        }

        Self::from_params(pricing.as_deref(), search.as_deref())
    }

    pub fn pricing_param(&self) -> Option<String> {
        if self.pricing.is_empty() {
            None
        } else {
            Some(self.pricing.to_param())
        }
    }

    pub fn search_param(&self) -> Option<String> {
        if self.search.is_empty() {
            None
        } else {
            Some(self.search.clone())
        }
    }

    /// Serialize without the leading `?`. Empty when there is nothing to persist.
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::with_capacity(2);
        if let Some(pricing) = self.pricing_param() {
            parts.push(format!("{PRICING_KEY}={pricing}"));
        }
        if let Some(search) = self.search_param() {
            parts.push(format!("{SEARCH_KEY}={}", urlencoding::encode(&search)));
        }
        parts.join("&")
    }

    /// Push this query into the store through its regular mutations.
    pub fn apply(&self, state: &mut GalleryState) {
        state.set_pricing_filters(self.pricing.clone());
        state.set_search_query(self.search.clone());
    }
}

impl From<&GalleryState> for GalleryQuery {
    fn from(state: &GalleryState) -> Self {
        Self {
            pricing: state.pricing_filters().clone(),
            search: state.search_query().to_string(),
        }
    }
}

/// Parse the `pricing` parameter.
///
/// Tokens that are not a known wire code are dropped one by one; valid tokens
/// in the same parameter still apply.
fn parse_pricing(raw: &str) -> PricingFilters {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let option = token.parse::<i64>().ok().and_then(PricingOption::from_code);
            if option.is_none() {
                warn!("Ignoring unknown pricing filter in URL: {token:?}");
            }
            option
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
