//! Export panel container
//!
//! Desktop: a `popover="manual"` element in the top layer, positioned next to
//! the trigger with floating-ui. Mobile: an inline element fixed to the bottom
//! of the viewport, rendered inside the host container.
//!
//! The subtree exists only while force-mounted (open, or a child dialog is
//! up). While mounted but hover-closed it is faded out and ignores the
//! pointer, so it is never visible without being open.

use std::rc::Rc;

use dioxus::prelude::*;
use exporter_common::{PanelAnimation, PortalTarget, Presentation};

use super::handle::DisclosureHandle;
use crate::floating_ui::{self, ComputePositionOptions, Placement};
use crate::wasm_utils::{call_element_method, element_by_id, is_popover_open};

#[component]
pub fn MenuPanel(
    handle: DisclosureHandle,
    /// ID of the trigger element the desktop panel anchors to
    anchor_id: String,
    children: Element,
) -> Element {
    let state = handle.state();
    let presentation = handle.presentation();

    if !state.force_mount() {
        return rsx! {};
    }

    let class = panel_class(&presentation, state.open);

    match presentation.portal {
        PortalTarget::HostContainer => {
            let style = inline_style(&presentation);
            rsx! {
                div {
                    class: "{class}",
                    style: "{style}",
                    "data-state": open_state(state.open),
                    onmouseenter: move |_| handle.pointer_enter(),
                    onmouseleave: move |_| handle.pointer_leave(),
                    {children}
                }
            }
        }
        PortalTarget::OverlayLayer => rsx! {
            OverlayPanel {
                handle,
                anchor_id,
                presentation,
                class,
                open: state.open,
                {children}
            }
        },
    }
}

/// Top-layer variant of the panel
#[component]
fn OverlayPanel(
    handle: DisclosureHandle,
    anchor_id: String,
    presentation: Presentation,
    class: String,
    open: bool,
    children: Element,
) -> Element {
    let mut floating_ref: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let width_px = presentation.width_px;
    let options = ComputePositionOptions {
        placement: Placement::from(presentation.side),
        main_axis: presentation.side_offset_px,
        alignment_axis: presentation.align_offset_px,
        flip: true,
        shift: true,
    };

    // Show in the top layer once mounted, then position next to the trigger.
    use_effect(move || {
        let Some(floating_mounted) = floating_ref() else {
            return;
        };
        let Some(floating) = floating_mounted.downcast::<web_sys_x::Element>().cloned() else {
            return;
        };
        if is_popover_open(&floating) {
            return;
        }
        call_element_method(&floating, "showPopover");

        let Some(anchor) = element_by_id(&anchor_id) else {
            tracing::warn!("Export trigger {anchor_id} not found, panel left unpositioned");
            return;
        };
        let options = options.clone();
        spawn(async move {
            match floating_ui::compute_position(&anchor, &floating, options).await {
                Ok(result) => {
                    let style = overlay_style(width_px, result.x, result.y);
                    let _ = floating.set_attribute("style", &style);
                }
                Err(e) => tracing::warn!("Failed to position export panel: {e:?}"),
            }
        });
    });

    let initial_style = overlay_style(width_px, 0.0, 0.0);

    rsx! {
        div {
            popover: "manual",
            class: "{class}",
            style: "{initial_style}",
            "data-state": open_state(open),
            onmounted: move |evt: MountedEvent| floating_ref.set(Some(evt.data())),
            onmouseenter: move |_| handle.pointer_enter(),
            onmouseleave: move |_| handle.pointer_leave(),
            {children}
        }
    }
}

fn open_state(open: bool) -> &'static str {
    if open {
        "open"
    } else {
        "closed"
    }
}

fn panel_class(presentation: &Presentation, open: bool) -> String {
    let layout = match presentation.animation {
        PanelAnimation::SlideUp => "grid grid-cols-2 gap-x-1 px-1.5 py-2 bg-gray-900 shadow-md transition-opacity duration-200 animate-slideUp",
        PanelAnimation::FadeIn => "grid grid-cols-2 gap-x-1 px-1.5 py-2 pb-0 m-0 rounded-md bg-gray-900 shadow-md transition-opacity duration-200 animate-fadeIn",
    };
    let visibility = if open {
        "opacity-100"
    } else {
        "opacity-0 pointer-events-none"
    };
    format!("{layout} {visibility}")
}

fn inline_style(presentation: &Presentation) -> String {
    format!(
        "position: fixed; left: 0; bottom: 0; width: {}px; z-index: 1000;",
        presentation.width_px
    )
}

fn overlay_style(width_px: u32, x: f64, y: f64) -> String {
    format!(
        "position: absolute; top: 0; left: 0; margin: 0; width: {width_px}px; transform: translate({x}px, {y}px);"
    )
}
