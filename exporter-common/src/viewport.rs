//! Responsive presentation: desktop popover vs. mobile bottom sheet
//!
//! The mode is decided once from the viewport width when the menu mounts and
//! never re-evaluated. Resizing the window afterwards does not move an
//! already-mounted panel between layouts.

use crate::config::MenuConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    Desktop,
    Mobile,
}

impl ViewportMode {
    pub fn from_width(width_px: f64, breakpoint_px: f64) -> Self {
        if width_px < breakpoint_px {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }
}

/// Where the panel subtree is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalTarget {
    /// Inline inside the host container
    HostContainer,
    /// Document-level top layer, escaping local clipping contexts
    OverlayLayer,
}

/// Side of the trigger the panel is placed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSide {
    Bottom,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAnimation {
    SlideUp,
    FadeIn,
}

/// Everything layout-related that follows from the viewport mode
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub mode: ViewportMode,
    pub portal: PortalTarget,
    pub side: PanelSide,
    pub width_px: u32,
    pub side_offset_px: f64,
    pub align_offset_px: f64,
    /// Full-screen tap-to-dismiss layer behind the panel
    pub backdrop: bool,
    /// Panel is fixed to the viewport rather than anchored to the trigger
    pub fixed: bool,
    pub animation: PanelAnimation,
}

impl Presentation {
    pub fn for_mode(mode: ViewportMode, config: &MenuConfig) -> Self {
        match mode {
            ViewportMode::Mobile => Self {
                mode,
                portal: PortalTarget::HostContainer,
                side: PanelSide::Bottom,
                width_px: config.mobile_panel_width_px,
                side_offset_px: config.side_offset_px,
                align_offset_px: 0.0,
                backdrop: true,
                fixed: true,
                animation: PanelAnimation::SlideUp,
            },
            ViewportMode::Desktop => Self {
                mode,
                portal: PortalTarget::OverlayLayer,
                side: PanelSide::Right,
                width_px: config.desktop_panel_width_px,
                side_offset_px: config.side_offset_px,
                align_offset_px: config.desktop_align_offset_px,
                backdrop: false,
                fixed: false,
                animation: PanelAnimation::FadeIn,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive() {
        assert_eq!(ViewportMode::from_width(767.0, 768.0), ViewportMode::Mobile);
        assert_eq!(ViewportMode::from_width(767.9, 768.0), ViewportMode::Mobile);
        assert_eq!(ViewportMode::from_width(768.0, 768.0), ViewportMode::Desktop);
        assert_eq!(ViewportMode::from_width(1440.0, 768.0), ViewportMode::Desktop);
    }

    #[test]
    fn zero_width_is_mobile() {
        assert!(ViewportMode::from_width(0.0, 768.0).is_mobile());
    }

    #[test]
    fn mobile_renders_inline_with_backdrop() {
        let p = Presentation::for_mode(ViewportMode::Mobile, &MenuConfig::default());
        assert_eq!(p.portal, PortalTarget::HostContainer);
        assert_eq!(p.side, PanelSide::Bottom);
        assert!(p.backdrop);
        assert!(p.fixed);
        assert_eq!(p.width_px, 316);
        assert_eq!(p.align_offset_px, 0.0);
        assert_eq!(p.animation, PanelAnimation::SlideUp);
    }

    #[test]
    fn desktop_renders_in_overlay_without_backdrop() {
        let p = Presentation::for_mode(ViewportMode::Desktop, &MenuConfig::default());
        assert_eq!(p.portal, PortalTarget::OverlayLayer);
        assert_eq!(p.side, PanelSide::Right);
        assert!(!p.backdrop);
        assert!(!p.fixed);
        assert_eq!(p.width_px, 268);
        assert_eq!(p.align_offset_px, -64.0);
        assert_eq!(p.side_offset_px, 8.0);
    }
}
