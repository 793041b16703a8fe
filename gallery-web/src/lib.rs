pub mod api;
pub mod pages;
pub mod url;

use dioxus::prelude::*;
use gallery_common::GalleryConfig;
use pages::Gallery;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Gallery {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(GalleryConfig::from_env);

    rsx! {
        document::Title { "Gallery" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "app", Router::<Route> {} }
    }
}
