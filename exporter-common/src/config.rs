/// Viewport widths below this are treated as touch-first (mobile)
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Timing and geometry for one export menu instance.
///
/// Opening is always immediate; only the close side of hover intent is delayed.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuConfig {
    /// Delay between the pointer leaving the trigger/panel and the panel closing
    pub close_delay_ms: u64,
    /// Width below which the menu runs in mobile mode
    pub mobile_breakpoint_px: f64,
    /// How long success feedback ("Copied!") stays on an entry
    pub feedback_ms: u64,
    /// Panel width when anchored to the trigger
    pub desktop_panel_width_px: u32,
    /// Panel width when docked to the bottom of the viewport
    pub mobile_panel_width_px: u32,
    /// Gap between trigger and panel along the placement side
    pub side_offset_px: f64,
    /// Shift along the alignment axis on desktop (negative pulls the panel up)
    pub desktop_align_offset_px: f64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            close_delay_ms: 200,
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            feedback_ms: 2000,
            desktop_panel_width_px: 268,
            mobile_panel_width_px: 316,
            side_offset_px: 8.0,
            desktop_align_offset_px: -64.0,
        }
    }
}
