pub mod dialog;
pub mod export_menu;
pub mod icons;
pub mod menu_item;
pub mod toggle;

pub use dialog::OverlayDialog;
pub use export_menu::{DisclosureHandle, ExportMenu};
pub use menu_item::{MenuDivider, MenuItem};
pub use toggle::Toggle;
