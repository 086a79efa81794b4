//! Disclosure handle: the export menu's state machine wired to Dioxus signals
//!
//! The pure [`Disclosure`] machine decides transitions and returns timer
//! effects; this handle applies them by spawning or cancelling the close task.
//! Tokens make a close task that slipped past cancellation harmless, and the
//! task is cancelled on unmount so nothing fires into a dropped scope.

use dioxus::prelude::*;
use exporter_common::{Disclosure, DisclosureState, HoverEffect, Presentation};
use tracing::debug;

use crate::timer::{now_ms, sleep_ms};

/// Copyable handle to one menu instance's disclosure state.
///
/// Created by `use_disclosure_handle()`. Wire `pointer_enter`/`pointer_leave`
/// onto the trigger and panel, `activate` onto the trigger's click, and
/// `set_dialog_open` into child dialogs' visibility callbacks.
#[derive(Clone, Copy, PartialEq)]
pub struct DisclosureHandle {
    machine: Signal<Disclosure>,
    close_task: Signal<Option<Task>>,
}

impl DisclosureHandle {
    pub fn state(&self) -> DisclosureState {
        self.machine.read().state()
    }

    pub fn presentation(&self) -> Presentation {
        self.machine.read().presentation().clone()
    }

    pub fn backdrop_visible(&self) -> bool {
        self.machine.read().backdrop_visible()
    }

    /// Trigger click or keyboard activation.
    pub fn activate(&self) {
        let mut machine = self.machine;
        let effect = machine.write().activate_trigger();
        self.apply(effect);
    }

    pub fn pointer_enter(&self) {
        let mut machine = self.machine;
        let effect = machine.write().pointer_enter();
        self.apply(effect);
    }

    pub fn pointer_leave(&self) {
        let mut machine = self.machine;
        let effect = machine.write().pointer_leave(now_ms());
        self.apply(effect);
    }

    pub fn tap_backdrop(&self) {
        let mut machine = self.machine;
        let effect = machine.write().tap_backdrop();
        self.apply(effect);
    }

    /// Child dialog visibility callback.
    pub fn set_dialog_open(&self, open: bool) {
        let mut machine = self.machine;
        machine.write().set_dialog_open(open);
    }

    fn apply(&self, effect: HoverEffect) {
        let mut close_task = self.close_task;
        match effect {
            HoverEffect::None => {}
            HoverEffect::CancelClose { token } => {
                if let Some(task) = close_task.take() {
                    debug!(?token, "Cancelling pending close");
                    task.cancel();
                }
            }
            HoverEffect::ScheduleClose { token, delay_ms } => {
                if let Some(task) = close_task.take() {
                    task.cancel();
                }
                let mut machine = self.machine;
                let task = spawn(async move {
                    sleep_ms(delay_ms).await;
                    if let Ok(mut guard) = machine.try_write() {
                        guard.close_elapsed(token);
                    }
                    if let Ok(mut guard) = close_task.try_write() {
                        *guard = None;
                    }
                });
                close_task.set(Some(task));
            }
        }
    }
}

/// Hook that creates the disclosure state for one menu instance.
pub fn use_disclosure_handle(init: impl FnOnce() -> Disclosure) -> DisclosureHandle {
    let machine = use_signal(init);
    let close_task = use_signal(|| None::<Task>);

    use_drop(move || {
        if let Some(task) = close_task.peek().as_ref() {
            task.cancel();
        }
    });

    DisclosureHandle {
        machine,
        close_task,
    }
}
