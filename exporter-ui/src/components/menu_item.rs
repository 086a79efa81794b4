//! Menu item and divider used by the export menu
//!
//! `MenuItem` is purely presentational: callers decide when success feedback
//! is showing and whether the item is disabled.

use dioxus::prelude::*;
use exporter_common::EntryWidth;

/// A single clickable row with an icon and label
#[component]
pub fn MenuItem(
    /// Label shown normally
    text: String,
    /// Leading icon
    icon: Element,
    /// Label shown instead of `text` while `show_success` is set
    #[props(default)]
    success_text: Option<String>,
    #[props(default)] show_success: bool,
    /// Disabled items render but never call `onclick`
    #[props(default)]
    disabled: bool,
    /// Native tooltip
    #[props(default)]
    title: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    let label = item_label(&text, success_text.as_deref(), show_success);
    let extra = class.unwrap_or_default();

    rsx! {
        button {
            r#type: "button",
            class: "{item_class(disabled)} {extra}",
            disabled,
            title: title.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e: MouseEvent| {
                if disabled {
                    return;
                }
                if let Some(ref handler) = onclick {
                    handler.call(e);
                }
            },
            {icon}
            span { class: "truncate", "{label}" }
        }
    }
}

/// Divider line rendered below the menu in the host navigation
#[component]
pub fn MenuDivider() -> Element {
    rsx! {
        div { class: "my-1.5 border-t border-white/20" }
    }
}

/// Grid column span for a catalog entry
pub fn entry_width_class(width: EntryWidth) -> &'static str {
    match width {
        EntryWidth::Full => "col-span-2",
        EntryWidth::Half => "col-span-1",
    }
}

fn item_label<'a>(text: &'a str, success_text: Option<&'a str>, show_success: bool) -> &'a str {
    match success_text {
        Some(success) if show_success => success,
        _ => text,
    }
}

fn item_class(disabled: bool) -> &'static str {
    if disabled {
        "flex w-full items-center gap-3 px-3 py-3 mb-2 rounded-md text-sm text-white/60 border border-white/20 cursor-not-allowed opacity-50"
    } else {
        "flex w-full items-center gap-3 px-3 py-3 mb-2 rounded-md text-sm text-white border border-white/20 hover:bg-gray-500/10 transition-colors duration-200 cursor-pointer"
    }
}
