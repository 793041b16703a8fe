//! Filter and search state written to the page URL and read back on load.

use dioxus::history::{History, MemoryHistory};
use gallery_common::{GalleryQuery, PricingFilters, PricingOption};
use gallery_web::url::{gallery_url, query_from_location};
use gallery_web::Route;

fn search_query(search: &str) -> GalleryQuery {
    GalleryQuery {
        pricing: PricingFilters::new(),
        search: search.to_string(),
    }
}

#[test]
fn pricing_and_search_serialize_in_place() {
    let query = GalleryQuery {
        pricing: [PricingOption::Paid, PricingOption::ViewOnly]
            .into_iter()
            .collect(),
        search: "ann".to_string(),
    };
    assert_eq!(gallery_url(&query), "/?pricing=0,2&search=ann");
    assert_eq!(query_from_location(&gallery_url(&query)), query);
}

#[test]
fn empty_state_is_bare_root() {
    assert_eq!(gallery_url(&GalleryQuery::default()), "/");
    assert_eq!(query_from_location("/"), GalleryQuery::default());
}

#[test]
fn search_with_reserved_characters_survives_reload() {
    for search in ["red & blue", "50% off", "a+b", "two  spaces", "x=y?z#w", "café"] {
        let query = search_query(search);
        let history = MemoryHistory::default();
        history.replace(gallery_url(&query));
        assert_eq!(
            query_from_location(&history.current_route()),
            query,
            "search {search:?} written as {}",
            gallery_url(&query)
        );
    }
}

#[test]
fn written_urls_resolve_to_the_gallery_route() {
    let queries = [
        GalleryQuery::default(),
        search_query("red & blue"),
        search_query("50% off"),
        GalleryQuery {
            pricing: [PricingOption::Free].into_iter().collect(),
            search: String::new(),
        },
    ];
    for query in queries {
        let url = gallery_url(&query);
        assert_eq!(url.parse::<Route>().ok(), Some(Route::Gallery {}), "{url}");
    }
}

#[test]
fn hand_written_url_is_read_on_load() {
    let query = query_from_location("/?search=blue+hat&pricing=1,abc#grid");
    assert_eq!(query.search, "blue hat");
    assert_eq!(query.pricing_param().as_deref(), Some("1"));
}
