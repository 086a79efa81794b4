//! Toggle switch component
//!
//! Fully controlled: the displayed state is always the `checked` prop. Clicking
//! reports the negated value and waits for the caller's next render.

use dioxus::prelude::*;
use exporter_common::{ToggleState, ToggleSwitch};

/// An on/off switch with an optional trailing label
#[component]
pub fn Toggle(
    checked: bool,
    /// Called once per click with `!checked`
    on_checked_update: EventHandler<bool>,
    #[props(default)] label: Option<String>,
) -> Element {
    let switch = ToggleSwitch::new(checked);
    let state = switch.state();

    rsx! {
        div { class: "inline-flex items-center",
            button {
                r#type: "button",
                role: "switch",
                aria_checked: if checked { "true" } else { "false" },
                "data-state": state.data_state(),
                class: track_class(state),
                onclick: move |_| switch.interact(|value| on_checked_update.call(value)),
                span {
                    "data-state": state.data_state(),
                    class: thumb_class(state),
                }
            }
            if let Some(label) = label {
                span { class: "ml-3 text-sm font-medium text-gray-900 dark:text-gray-300",
                    "{label}"
                }
            }
        }
    }
}

fn track_class(state: ToggleState) -> &'static str {
    match state {
        ToggleState::Checked => {
            "relative h-6 w-[42px] shrink-0 cursor-pointer rounded-full bg-green-600"
        }
        ToggleState::Unchecked => {
            "relative h-6 w-[42px] shrink-0 cursor-pointer rounded-full bg-gray-200"
        }
    }
}

fn thumb_class(state: ToggleState) -> &'static str {
    match state {
        ToggleState::Checked => {
            "block h-5 w-5 rounded-full bg-white shadow-[0_1px_2px_rgba(0,0,0,0.45)] transition-transform duration-100 will-change-transform translate-x-[19px]"
        }
        ToggleState::Unchecked => {
            "block h-5 w-5 rounded-full bg-white shadow-[0_1px_2px_rgba(0,0,0,0.45)] transition-transform duration-100 will-change-transform translate-x-0.5"
        }
    }
}
