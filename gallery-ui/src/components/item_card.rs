//! Item card component - pure view

use dioxus::prelude::*;
use gallery_common::Item;

/// Card with thumbnail, title, creator and price label
#[component]
pub fn ItemCard(item: Item) -> Element {
    let price_label = item.price_label();

    rsx! {
        div { class: "item-card", "data-testid": "item-card",
            img {
                class: "item-card-image",
                src: "{item.image_path}",
                alt: "{item.title}",
                loading: "lazy",
            }
            div { class: "item-card-content",
                div {
                    h3 { class: "item-card-title", title: "{item.title}", "{item.title}" }
                    p { class: "item-card-creator", "By {item.creator}" }
                }
                div { class: "item-card-price", "{price_label}" }
            }
        }
    }
}
