//! Page URL for the gallery's filter and search state
//!
//! The query string is produced and read by `GalleryQuery` and handed to the
//! history provider as-is. The route itself is path-only: the router decodes a
//! whole query string before splitting it on `&`, so search text containing
//! `&` or `%` could not survive a trip through route query arguments.

use gallery_common::GalleryQuery;

/// Path and query for `query`. A bare `/` when there is nothing to persist.
pub fn gallery_url(query: &GalleryQuery) -> String {
    let query_string = query.to_query_string();
    if query_string.is_empty() {
        "/".to_string()
    } else {
        format!("/?{query_string}")
    }
}

/// Filter state from a history location such as `/?pricing=0,2&search=ann`.
pub fn query_from_location(location: &str) -> GalleryQuery {
    let location = location.split_once('#').map_or(location, |(path, _)| path);
    match location.split_once('?') {
        Some((_, query)) => GalleryQuery::parse(query),
        None => GalleryQuery::default(),
    }
}
