//! Grid of export actions inside the panel
//!
//! Entries never touch the disclosure state except through the dialogs'
//! visibility callbacks. Selecting an export leaves the panel open; hover
//! intent alone decides when it closes.

use dioxus::prelude::*;
use exporter_common::{DialogKind, MenuEntry, SuccessFeedback, MENU_ENTRIES};

use super::dialogs::{ExportAllDialog, SettingsDialog};
use super::handle::DisclosureHandle;
use crate::components::icons::EntryIconView;
use crate::components::menu_item::{entry_width_class, MenuItem};
use crate::host::HostHandle;
use crate::stores::{read_preferences, ExportPreferences};
use crate::timer::sleep_ms;

#[component]
pub fn ActionGrid(handle: DisclosureHandle, feedback_ms: u64) -> Element {
    let on_dialog_change = move |open: bool| handle.set_dialog_open(open);

    rsx! {
        for entry in MENU_ENTRIES {
            {
                match entry.action.dialog() {
                    Some(DialogKind::Settings) => rsx! {
                        SettingsDialog { key: "{entry.label}", entry, on_open_change: on_dialog_change }
                    },
                    Some(DialogKind::ExportAll) => rsx! {
                        ExportAllDialog { key: "{entry.label}", entry, on_open_change: on_dialog_change }
                    },
                    None => rsx! {
                        ActionEntry { key: "{entry.label}", entry, feedback_ms }
                    },
                }
            }
        }
    }
}

/// One export button with its own success feedback window
#[component]
fn ActionEntry(entry: MenuEntry, feedback_ms: u64) -> Element {
    let host = use_context::<HostHandle>();
    let prefs = use_context::<Store<ExportPreferences>>();
    let feedback = use_signal(SuccessFeedback::default);
    let feedback_task = use_signal(|| None::<Task>);

    use_drop(move || {
        if let Some(task) = feedback_task.peek().as_ref() {
            task.cancel();
        }
    });

    let onclick = move |_: MouseEvent| {
        let current = read_preferences(prefs);
        let Some(request) = entry
            .action
            .export_request(&current.format, &current.meta_selection())
        else {
            return;
        };
        let wants_feedback = entry.success_text.is_some();
        host.spawn_export(request, move || {
            if wants_feedback {
                show_feedback(feedback, feedback_task, feedback_ms);
            }
        });
    };

    rsx! {
        MenuItem {
            text: entry.label,
            icon: rsx! { EntryIconView { icon: entry.icon } },
            success_text: entry.success_text.map(str::to_string),
            show_success: feedback.read().is_visible(),
            class: entry_width_class(entry.width),
            onclick,
        }
    }
}

/// Show the entry's success text, hiding it again after `feedback_ms`.
///
/// The entry may have unmounted while the export ran, so signal access is
/// fallible here.
fn show_feedback(
    mut feedback: Signal<SuccessFeedback>,
    mut feedback_task: Signal<Option<Task>>,
    feedback_ms: u64,
) {
    let Ok(token) = feedback.try_write().map(|mut f| f.show()) else {
        return;
    };
    if let Ok(mut guard) = feedback_task.try_write() {
        if let Some(task) = guard.take() {
            task.cancel();
        }
    }
    let task = spawn(async move {
        sleep_ms(feedback_ms).await;
        if let Ok(mut guard) = feedback.try_write() {
            guard.expire(token);
        }
    });
    if let Ok(mut guard) = feedback_task.try_write() {
        *guard = Some(task);
    }
}
