//! Disclosure state for the export menu
//!
//! Combines the hover-intent `open` flag with the `dialog_open` flag reported
//! by child dialogs. The two are independent; the panel subtree stays mounted
//! while either is set, so a dialog opened from inside the panel survives the
//! panel's own hover-intent close.

use tracing::debug;

use crate::config::MenuConfig;
use crate::hover_intent::{CloseToken, HoverEffect, HoverIntent};
use crate::viewport::{Presentation, ViewportMode};

/// Snapshot of the two owned flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisclosureState {
    pub open: bool,
    pub dialog_open: bool,
}

impl DisclosureState {
    /// Whether the panel subtree must stay mounted.
    pub fn force_mount(&self) -> bool {
        self.open || self.dialog_open
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Disclosure {
    hover: HoverIntent,
    dialog_open: bool,
    presentation: Presentation,
}

impl Disclosure {
    /// Created closed, with no dialog open.
    pub fn new(mode: ViewportMode, config: &MenuConfig) -> Self {
        Self {
            hover: HoverIntent::new(config.close_delay_ms),
            dialog_open: false,
            presentation: Presentation::for_mode(mode, config),
        }
    }

    pub fn mode(&self) -> ViewportMode {
        self.presentation.mode
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn hover(&self) -> &HoverIntent {
        &self.hover
    }

    pub fn state(&self) -> DisclosureState {
        DisclosureState {
            open: self.hover.is_open(),
            dialog_open: self.dialog_open,
        }
    }

    pub fn is_open(&self) -> bool {
        self.hover.is_open()
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn force_mount(&self) -> bool {
        self.state().force_mount()
    }

    /// The tap-to-dismiss backdrop exists only in mobile mode while open.
    pub fn backdrop_visible(&self) -> bool {
        self.presentation.backdrop && self.hover.is_open()
    }

    pub fn activate_trigger(&mut self) -> HoverEffect {
        debug!("Export trigger activated");
        self.hover.activate()
    }

    pub fn pointer_enter(&mut self) -> HoverEffect {
        self.hover.pointer_enter()
    }

    pub fn pointer_leave(&mut self, now_ms: u64) -> HoverEffect {
        self.hover.pointer_leave(now_ms)
    }

    pub fn close_elapsed(&mut self, token: CloseToken) -> bool {
        self.hover.close_elapsed(token)
    }

    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.hover.tick(now_ms)
    }

    /// Backdrop tap closes immediately. Ignored when no backdrop is shown.
    pub fn tap_backdrop(&mut self) -> HoverEffect {
        if !self.backdrop_visible() {
            return HoverEffect::None;
        }
        debug!("Backdrop tapped, closing export menu");
        self.hover.close_now()
    }

    /// Record a child dialog's visibility exactly as reported.
    ///
    /// Never reopens the panel: closing the dialog only lets the subtree
    /// unmount if hover intent has already closed it.
    pub fn set_dialog_open(&mut self, dialog_open: bool) {
        if self.dialog_open != dialog_open {
            debug!(dialog_open, "Child dialog visibility changed");
        }
        self.dialog_open = dialog_open;
    }
}

/// What an export menu instance renders for its whole lifetime
#[derive(Debug, Clone, PartialEq)]
pub enum MenuMount {
    /// Host has the feature disabled; a static entry renders and no state exists
    Unavailable,
    Interactive(Disclosure),
}

impl MenuMount {
    pub fn new(export_disabled: bool, viewport_width_px: f64, config: &MenuConfig) -> Self {
        if export_disabled {
            debug!("Export feature disabled by host, rendering static entry");
            return Self::Unavailable;
        }
        let mode = ViewportMode::from_width(viewport_width_px, config.mobile_breakpoint_px);
        debug!(?mode, viewport_width_px, "Mounting export menu");
        Self::Interactive(Disclosure::new(mode, config))
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Interactive(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hover_intent::HoverPhase;

    fn desktop() -> Disclosure {
        Disclosure::new(ViewportMode::Desktop, &MenuConfig::default())
    }

    fn mobile() -> Disclosure {
        Disclosure::new(ViewportMode::Mobile, &MenuConfig::default())
    }

    fn pending_token(d: &Disclosure) -> CloseToken {
        match d.hover().phase() {
            HoverPhase::PendingClose { token, .. } => token,
            other => panic!("expected pending close, got {other:?}"),
        }
    }

    #[test]
    fn starts_closed_and_unmounted() {
        let d = desktop();
        assert_eq!(d.state(), DisclosureState::default());
        assert!(!d.force_mount());
        assert!(!d.backdrop_visible());
    }

    #[test]
    fn force_mount_truth_table() {
        for (open, dialog_open, expected) in [
            (false, false, false),
            (true, false, true),
            (false, true, true),
            (true, true, true),
        ] {
            let state = DisclosureState { open, dialog_open };
            assert_eq!(state.force_mount(), expected, "{state:?}");
        }
    }

    #[test]
    fn dialog_keeps_subtree_mounted_after_hover_close() {
        let mut d = desktop();
        d.activate_trigger();
        d.set_dialog_open(true);
        d.pointer_leave(0);
        let token = pending_token(&d);

        assert!(d.close_elapsed(token));
        assert!(!d.is_open());
        assert!(d.force_mount());
    }

    #[test]
    fn dialog_close_never_reopens() {
        let mut d = desktop();
        d.activate_trigger();
        d.set_dialog_open(true);
        d.pointer_leave(0);
        d.tick(1_000);

        d.set_dialog_open(false);
        assert!(!d.is_open());
        assert!(!d.force_mount());
    }

    #[test]
    fn dialog_close_while_open_leaves_panel_open() {
        let mut d = desktop();
        d.activate_trigger();
        d.set_dialog_open(true);
        d.set_dialog_open(false);
        assert!(d.is_open());
        assert!(d.force_mount());
    }

    #[test]
    fn dialog_open_does_not_open_panel() {
        let mut d = desktop();
        d.set_dialog_open(true);
        assert!(!d.is_open());
        assert!(d.force_mount());
    }

    #[test]
    fn backdrop_only_on_mobile() {
        let mut d = desktop();
        d.activate_trigger();
        assert!(!d.backdrop_visible());
        assert_eq!(d.tap_backdrop(), HoverEffect::None);
        assert!(d.is_open());

        let mut m = mobile();
        m.activate_trigger();
        assert!(m.backdrop_visible());
    }

    #[test]
    fn backdrop_tap_closes_immediately_and_cancels_timer() {
        let mut m = mobile();
        m.activate_trigger();
        m.pointer_leave(0);
        let token = pending_token(&m);

        assert_eq!(m.tap_backdrop(), HoverEffect::CancelClose { token });
        assert!(!m.is_open());
        assert!(!m.backdrop_visible());
        assert!(!m.close_elapsed(token));
    }

    #[test]
    fn disabled_host_never_creates_state() {
        let mount = MenuMount::new(true, 1024.0, &MenuConfig::default());
        assert_eq!(mount, MenuMount::Unavailable);
        assert!(!mount.is_interactive());
    }

    #[test]
    fn mount_picks_mode_from_width() {
        let config = MenuConfig::default();
        let MenuMount::Interactive(d) = MenuMount::new(false, 400.0, &config) else {
            panic!("expected interactive mount");
        };
        assert_eq!(d.mode(), ViewportMode::Mobile);

        let MenuMount::Interactive(d) = MenuMount::new(false, 1280.0, &config) else {
            panic!("expected interactive mount");
        };
        assert_eq!(d.mode(), ViewportMode::Desktop);
    }
}
