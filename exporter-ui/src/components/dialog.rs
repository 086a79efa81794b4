//! Dialog frame using the native HTML `<dialog>` element
//!
//! `showModal()` gives us top-layer rendering, a focus trap, Escape to close and
//! `::backdrop` styling. The dialogs live inside the export panel's subtree,
//! which may be mounted but faded out (`pointer-events: none`) while the panel
//! is hover-closed, so the frame re-enables pointer events for itself.
//!
//! `showModal()` throws if the dialog is already open, so the effect checks the
//! `open` attribute first.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

use crate::components::icons::XIcon;
use crate::wasm_utils::{call_element_method, element_by_id};

/// Counter for generating unique dialog IDs
static DIALOG_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Titled modal dialog frame
#[component]
pub fn OverlayDialog(
    /// Controls whether the dialog is open
    is_open: ReadSignal<bool>,
    /// Called when the dialog asks to close (Escape, backdrop click, close button)
    on_close: EventHandler<()>,
    title: String,
    children: Element,
) -> Element {
    let dialog_id = use_hook(|| {
        let id = DIALOG_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("exporter-dialog-{}", id)
    });
    let dialog_id_for_effect = dialog_id.clone();

    use_effect(move || {
        let is_open = is_open();

        let Some(element) = element_by_id(&dialog_id_for_effect) else {
            return;
        };

        let is_dialog_open = element.has_attribute("open");
        match (is_open, is_dialog_open) {
            (true, false) => call_element_method(&element, "showModal"),
            (false, true) => call_element_method(&element, "close"),
            _ => {}
        }
    });

    // Don't put display classes on the <dialog> itself; they override the
    // native display:none while closed.
    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "p-0 bg-transparent pointer-events-auto backdrop:bg-black/50",
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                div {
                    class: "fixed inset-0 flex items-center justify-center",
                    onclick: move |_| on_close.call(()),
                    div {
                        class: "w-[90vw] max-w-md rounded-lg bg-white dark:bg-gray-800 p-6 shadow-xl",
                        onclick: move |evt| evt.stop_propagation(),
                        div { class: "flex items-center justify-between mb-4",
                            h2 { class: "text-lg font-medium text-gray-900 dark:text-white",
                                "{title}"
                            }
                            button {
                                r#type: "button",
                                class: "text-gray-400 hover:text-gray-600 dark:hover:text-white",
                                aria_label: "Close",
                                onclick: move |_| on_close.call(()),
                                XIcon { class: "w-4 h-4" }
                            }
                        }
                        {children}
                    }
                }
            }
        }
    }
}
