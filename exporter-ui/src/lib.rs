//! exporter-ui - Export menu and toggle components
//!
//! Props-based Dioxus views over the pure state machines in `exporter-common`.
//! Browser access goes through the [`host::ExportHost`] trait and the
//! floating-ui bindings; nothing here touches the host page directly.

pub mod components;
pub mod floating_ui;
pub mod host;
pub mod stores;
mod timer;
pub mod wasm_utils;

pub use components::*;
pub use host::{ExportHost, HostHandle};
pub use stores::ExportPreferences;
