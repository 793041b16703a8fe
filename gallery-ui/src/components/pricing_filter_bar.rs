//! Pricing toggles and the reset control

use dioxus::prelude::*;
use gallery_common::{PricingFilters, PricingOption};

/// One toggle per pricing category plus a reset button.
///
/// Toggles are independent (any combination may be active), unlike a
/// segmented control.
#[component]
pub fn PricingFilterBar(
    selected: PricingFilters,
    on_toggle: EventHandler<PricingOption>,
    on_reset: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "filter-group",
            for option in PricingOption::ALL {
                button {
                    key: "{option}",
                    class: if selected.contains(option) { "filter-toggle active" } else { "filter-toggle" },
                    aria_pressed: if selected.contains(option) { "true" } else { "false" },
                    onclick: move |_| on_toggle.call(option),
                    {option.label()}
                }
            }
            button {
                class: "filter-reset",
                onclick: move |_| on_reset.call(()),
                "Reset Filters"
            }
        }
    }
}
