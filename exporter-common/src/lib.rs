mod catalog;
mod config;
mod disclosure;
mod export;
mod feedback;
mod hover_intent;
mod toggle;
mod viewport;

pub use catalog::{
    DialogKind, EntryAction, EntryIcon, EntryWidth, MenuEntry, MENU_ENTRIES, TRIGGER_LABEL,
    UNAVAILABLE_LABEL, UNAVAILABLE_TITLE,
};
pub use config::{MenuConfig, MOBILE_BREAKPOINT_PX};
pub use disclosure::{Disclosure, DisclosureState, MenuMount};
pub use export::{ExportError, ExportRequest, MetaSelection};
pub use feedback::{FeedbackToken, SuccessFeedback};
pub use hover_intent::{CloseToken, HoverEffect, HoverIntent, HoverPhase};
pub use toggle::{ToggleState, ToggleSwitch};
pub use viewport::{PanelAnimation, PanelSide, PortalTarget, Presentation, ViewportMode};
