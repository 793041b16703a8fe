//! Inline status notices shown in place of the grid

use dioxus::prelude::*;

/// Neutral message, e.g. while loading or when nothing matches
#[component]
pub fn StatusNotice(message: String) -> Element {
    rsx! {
        div { class: "status-notice",
            p { "{message}" }
        }
    }
}

/// Error box
#[component]
pub fn ErrorNotice(message: String) -> Element {
    rsx! {
        div { class: "error-notice", role: "alert",
            p { "{message}" }
        }
    }
}
