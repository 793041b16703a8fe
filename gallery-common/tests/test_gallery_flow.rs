//! End-to-end behavior of the gallery state: URL load, filtering, reveal, reset.

use gallery_common::wire::decode_items;
use gallery_common::{
    displayed_items, visible_items, GalleryConfig, GalleryQuery, GalleryState, Item,
    PricingOption,
};

fn sample_items() -> Vec<Item> {
    decode_items(
        r#"[
            {"id": 1, "title": "Red Dress", "creator": "Ann", "imagePath": "/1.jpg",
             "pricingOption": 0, "price": 19.99},
            {"id": 2, "title": "Blue Hat", "creator": "Bo", "imagePath": "/2.jpg",
             "pricingOption": 1, "price": 0}
        ]"#,
    )
    .expect("sample payload decodes")
}

fn ids(items: &[Item]) -> Vec<&str> {
    items.iter().map(|i| i.id.as_str()).collect()
}

fn many_items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| Item {
            id: format!("item-{i}"),
            title: format!("Title {i}"),
            creator: "Creator".to_string(),
            image_path: format!("/{i}.jpg"),
            pricing_option: PricingOption::ALL[i % 3],
            price: Some(1.0),
        })
        .collect()
}

#[test]
fn search_matches_creator_case_insensitively() {
    let mut state = GalleryState::default();
    state.replace_items(sample_items());
    state.set_search_query("ann");
    assert_eq!(ids(&visible_items(&state)), vec!["1"]);
}

#[test]
fn pricing_filter_selects_free_items() {
    let mut state = GalleryState::default();
    state.replace_items(sample_items());
    state.set_pricing_filters([PricingOption::Free].into_iter().collect());
    assert_eq!(ids(&visible_items(&state)), vec!["2"]);
}

#[test]
fn visible_count_limits_display_in_source_order() {
    let config = GalleryConfig {
        initial_visible_count: 1,
        ..GalleryConfig::default()
    };
    let mut state = GalleryState::new(&config);
    state.replace_items(sample_items());
    assert_eq!(visible_items(&state).len(), 2);
    assert_eq!(ids(&displayed_items(&state)), vec!["1"]);
}

#[test]
fn url_round_trip_restores_state() {
    let mut state = GalleryState::default();
    state.toggle_pricing(PricingOption::Paid);
    state.toggle_pricing(PricingOption::ViewOnly);
    state.set_search_query("ann");

    let query_string = GalleryQuery::from(&state).to_query_string();
    assert!(query_string.contains("pricing=0,2&search=ann"));

    let mut restored = GalleryState::default();
    GalleryQuery::parse(&query_string).apply(&mut restored);
    assert_eq!(restored.pricing_filters(), state.pricing_filters());
    assert_eq!(restored.search_query(), "ann");
}

#[test]
fn reveal_and_reset_interact_as_expected() {
    let mut state = GalleryState::default();
    state.replace_items(many_items(40));
    assert_eq!(displayed_items(&state).len(), 12);

    for _ in 0..3 {
        state.reveal_more();
    }
    assert_eq!(state.visible_count(), 36);
    assert_eq!(displayed_items(&state).len(), 36);

    state.set_pricing_filters([PricingOption::Free].into_iter().collect());
    state.set_search_query("title 1");
    state.reset_filters();
    assert!(state.pricing_filters().is_empty());
    assert_eq!(state.search_query(), "");
    assert_eq!(state.visible_count(), 36);
}

#[test]
fn reveal_past_the_end_is_harmless() {
    let mut state = GalleryState::default();
    state.replace_items(sample_items());
    for _ in 0..10 {
        state.reveal_more();
    }
    assert_eq!(displayed_items(&state).len(), 2);
}

#[test]
fn replacing_items_keeps_filters() {
    let mut state = GalleryState::default();
    state.set_search_query("hat");
    state.replace_items(sample_items());
    assert_eq!(ids(&visible_items(&state)), vec!["2"]);
    state.replace_items(Vec::new());
    assert!(visible_items(&state).is_empty());
    assert_eq!(state.search_query(), "hat");
}
