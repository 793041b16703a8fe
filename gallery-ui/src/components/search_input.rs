//! Search box

use dioxus::prelude::*;

const PLACEHOLDER: &str = "Search creators or titles...";

/// Text input bound to the search query.
///
/// Every keystroke is forwarded; there is no debounce.
#[component]
pub fn SearchInput(value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        input {
            r#type: "text",
            class: "search-input",
            "data-testid": "search-input",
            value: "{value}",
            placeholder: PLACEHOLDER,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
