//! Export menu entry point
//!
//! Reads the host's disabled flag and viewport width once at mount. A disabled
//! exporter renders a single inert entry; otherwise the trigger, the panel and
//! (on mobile) the backdrop are wired to one disclosure handle.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use exporter_common::{
    Disclosure, MenuConfig, MenuMount, TRIGGER_LABEL, UNAVAILABLE_LABEL, UNAVAILABLE_TITLE,
};

use super::action_grid::ActionGrid;
use super::handle::use_disclosure_handle;
use super::panel::MenuPanel;
use crate::components::icons::ExportIcon;
use crate::components::menu_item::{MenuDivider, MenuItem};
use crate::host::HostHandle;

static TRIGGER_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Export menu for the host page's navigation.
///
/// Expects a `Store<ExportPreferences>` in context.
#[component]
pub fn ExportMenu(host: HostHandle, #[props(default)] config: MenuConfig) -> Element {
    use_context_provider(|| host.clone());

    let mount = use_hook(|| {
        let mount = MenuMount::new(host.is_export_disabled(), host.viewport_width(), &config);
        tracing::debug!(interactive = mount.is_interactive(), "Export menu mounted");
        mount
    });

    let divider = renders_divider(&mount);
    let body = match mount {
        MenuMount::Unavailable => rsx! {
            MenuItem {
                text: UNAVAILABLE_LABEL,
                icon: rsx! { ExportIcon {} },
                disabled: true,
                title: UNAVAILABLE_TITLE.to_string(),
            }
        },
        MenuMount::Interactive(disclosure) => rsx! {
            InteractiveMenu { disclosure, config }
        },
    };

    rsx! {
        {body}
        if divider {
            MenuDivider {}
        }
    }
}

/// The unavailable entry stands alone; only the live menu is followed by a divider.
fn renders_divider(mount: &MenuMount) -> bool {
    mount.is_interactive()
}

#[component]
fn InteractiveMenu(disclosure: Disclosure, config: MenuConfig) -> Element {
    let handle = use_disclosure_handle(|| disclosure);
    let trigger_id = use_hook(|| {
        let id = TRIGGER_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("exporter-menu-trigger-{}", id)
    });
    let state = handle.state();

    rsx! {
        if handle.backdrop_visible() {
            div {
                class: "fixed inset-0 z-[999] bg-black/50",
                onclick: move |_| handle.tap_backdrop(),
            }
        }
        div {
            id: "{trigger_id}",
            "data-state": if state.open { "open" } else { "closed" },
            onmouseenter: move |_| handle.pointer_enter(),
            onmouseleave: move |_| handle.pointer_leave(),
            MenuItem {
                text: TRIGGER_LABEL,
                icon: rsx! { ExportIcon {} },
                onclick: move |_| handle.activate(),
            }
        }
        MenuPanel { handle, anchor_id: trigger_id.clone(),
            ActionGrid { handle, feedback_ms: config.feedback_ms }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_entry_has_no_divider() {
        let config = MenuConfig::default();
        assert!(!renders_divider(&MenuMount::new(true, 1280.0, &config)));
        assert!(renders_divider(&MenuMount::new(false, 1280.0, &config)));
        assert!(renders_divider(&MenuMount::new(false, 375.0, &config)));
    }
}
