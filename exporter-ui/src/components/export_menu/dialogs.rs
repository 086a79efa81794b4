//! Dialog-backed menu entries
//!
//! Each dialog owns its visibility and reports every change through
//! `on_open_change`. The menu keeps its panel mounted for as long as a dialog
//! reports open, even after hover intent has closed the panel.

use dioxus::prelude::*;
use exporter_common::{ExportRequest, MenuEntry};

use crate::components::dialog::OverlayDialog;
use crate::components::icons::EntryIconView;
use crate::components::menu_item::{entry_width_class, MenuItem};
use crate::components::toggle::Toggle;
use crate::host::HostHandle;
use crate::stores::{parse_meta_fields, ExportPreferences, ExportPreferencesStoreExt};

/// Visibility for a dialog entry that reports changes to its parent.
///
/// Repeated requests for the current state are dropped so the parent only sees
/// real transitions.
fn use_reported_open(on_open_change: EventHandler<bool>) -> (ReadSignal<bool>, Callback<bool>) {
    let mut is_open = use_signal(|| false);
    let set_open = use_callback(move |open: bool| {
        if *is_open.peek() == open {
            return;
        }
        is_open.set(open);
        on_open_change.call(open);
    });
    (is_open.into(), set_open)
}

/// Export format and metadata settings
#[component]
pub fn SettingsDialog(entry: MenuEntry, on_open_change: EventHandler<bool>) -> Element {
    let prefs = use_context::<Store<ExportPreferences>>();
    let (is_open, set_open) = use_reported_open(on_open_change);

    let format = prefs.format().read().clone();
    let enable_meta = *prefs.enable_meta().read();
    let meta_fields = prefs.meta_fields().read().join(", ");

    rsx! {
        MenuItem {
            text: entry.label,
            icon: rsx! { EntryIconView { icon: entry.icon } },
            class: entry_width_class(entry.width),
            onclick: move |_| set_open.call(true),
        }
        OverlayDialog {
            is_open,
            on_close: move |_| set_open.call(false),
            title: "Exporter Settings",
            div { class: "flex flex-col gap-4",
                label { class: "flex flex-col gap-1 text-sm text-gray-700 dark:text-gray-300",
                    "File name format"
                    input {
                        r#type: "text",
                        class: "rounded-md border border-gray-300 dark:border-gray-600 bg-transparent px-2 py-1",
                        value: "{format}",
                        oninput: move |e| prefs.format().set(e.value()),
                    }
                }
                Toggle {
                    checked: enable_meta,
                    on_checked_update: move |value| prefs.enable_meta().set(value),
                    label: "Include metadata",
                }
                if enable_meta {
                    label { class: "flex flex-col gap-1 text-sm text-gray-700 dark:text-gray-300",
                        "Metadata fields"
                        input {
                            r#type: "text",
                            class: "rounded-md border border-gray-300 dark:border-gray-600 bg-transparent px-2 py-1",
                            placeholder: "title, date, model",
                            value: "{meta_fields}",
                            onchange: move |e| prefs.meta_fields().set(parse_meta_fields(&e.value())),
                        }
                    }
                }
            }
        }
    }
}

/// Confirmation for exporting every conversation at once
#[component]
pub fn ExportAllDialog(entry: MenuEntry, on_open_change: EventHandler<bool>) -> Element {
    let host = use_context::<HostHandle>();
    let prefs = use_context::<Store<ExportPreferences>>();
    let (is_open, set_open) = use_reported_open(on_open_change);

    rsx! {
        MenuItem {
            text: entry.label,
            icon: rsx! { EntryIconView { icon: entry.icon } },
            class: entry_width_class(entry.width),
            onclick: move |_| set_open.call(true),
        }
        OverlayDialog {
            is_open,
            on_close: move |_| set_open.call(false),
            title: "Export All Conversations",
            p { class: "mb-4 text-sm text-gray-600 dark:text-gray-400",
                "Every conversation in the sidebar is exported into a single archive. This may take a while."
            }
            div { class: "flex justify-end",
                button {
                    r#type: "button",
                    class: "px-4 py-2 rounded-md text-sm text-white bg-green-600 hover:bg-green-700",
                    onclick: move |_| {
                        let format = prefs.format().read().clone();
                        host.spawn_export(ExportRequest::All { format }, || {});
                    },
                    "Export"
                }
            }
        }
    }
}
