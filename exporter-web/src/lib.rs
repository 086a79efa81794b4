//! exporter-web - Mounts the export menu into the host page
//!
//! The page loads this as a wasm module alongside @floating-ui/dom. On launch
//! the menu is rendered into the `exporter-menu-root` container, which is
//! created at the end of `<body>` when the page doesn't provide one.

pub mod host;

use dioxus::prelude::*;
use exporter_ui::{ExportMenu, HostHandle};
use host::PageHost;
use tracing::{info, warn};

/// ID of the element the menu is rendered into
pub const ROOT_ID: &str = "exporter-menu-root";

#[component]
pub fn App() -> Element {
    let prefs = use_store(|| PageHost::new().initial_preferences());
    use_context_provider(|| prefs);
    let host = use_hook(|| HostHandle::new(PageHost::new()));

    rsx! {
        ExportMenu { host }
    }
}

/// Start the menu on the current page.
pub fn launch() {
    // Errors only when a subscriber is already installed
    let _ = dioxus::logger::init(tracing::Level::INFO);

    if let Err(e) = ensure_root() {
        warn!("Could not prepare #{ROOT_ID}: {e}");
        return;
    }
    info!("Mounting export menu into #{ROOT_ID}");

    dioxus::LaunchBuilder::web()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

/// Make sure the root container exists, appending it to `<body>` if absent.
fn ensure_root() -> Result<(), host::HostError> {
    let document = web_sys_x::window()
        .and_then(|window| window.document())
        .ok_or(host::HostError::NoWindow)?;
    if document.get_element_by_id(ROOT_ID).is_some() {
        return Ok(());
    }
    let body = document
        .body()
        .ok_or_else(|| host::HostError::Js("document has no body".to_string()))?;
    let root = document
        .create_element("div")
        .map_err(|e| host::HostError::Js(format!("{e:?}")))?;
    root.set_id(ROOT_ID);
    body.append_child(&root)
        .map_err(|e| host::HostError::Js(format!("{e:?}")))?;
    Ok(())
}
