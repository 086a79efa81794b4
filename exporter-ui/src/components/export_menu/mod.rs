mod action_grid;
mod dialogs;
mod handle;
mod panel;
mod view;

pub use action_grid::ActionGrid;
pub use dialogs::{ExportAllDialog, SettingsDialog};
pub use handle::{use_disclosure_handle, DisclosureHandle};
pub use panel::MenuPanel;
pub use view::ExportMenu;
