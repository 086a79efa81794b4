//! Boundary between the menu and the page it is embedded in

use std::ops::Deref;
use std::rc::Rc;

use dioxus::prelude::*;
use exporter_common::{ExportError, ExportRequest};
use futures::future::LocalBoxFuture;
use tracing::{debug, error};

/// Everything the menu needs from the host page.
///
/// `is_export_disabled` and `viewport_width` are read once per mount. Export
/// futures are fire-and-forget from the menu's point of view: the menu only
/// awaits them to decide whether to show success feedback.
pub trait ExportHost {
    fn is_export_disabled(&self) -> bool;

    fn viewport_width(&self) -> f64;

    fn export(&self, request: ExportRequest) -> LocalBoxFuture<'static, Result<(), ExportError>>;
}

/// Shared, cheaply cloneable handle to the host, usable as a prop or context
#[derive(Clone)]
pub struct HostHandle(Rc<dyn ExportHost>);

impl HostHandle {
    pub fn new(host: impl ExportHost + 'static) -> Self {
        Self(Rc::new(host))
    }

    /// Run an export in the background.
    ///
    /// The export runs in the root scope, so it outlives the entry that
    /// started it; the panel can close and unmount while an export is still in
    /// flight. Failures are logged and otherwise swallowed. `on_success` runs
    /// only when the collaborator reports success and must tolerate the entry
    /// being gone by then.
    pub fn spawn_export(&self, request: ExportRequest, on_success: impl FnOnce() + 'static) {
        let kind = request.kind();
        debug!(kind, "Starting export");
        let export = self.0.export(request);
        spawn_forever(async move {
            run_export(kind, export, on_success).await;
        });
    }
}

/// Drive one export to completion. Returns whether it succeeded.
pub(crate) async fn run_export(
    kind: &'static str,
    export: LocalBoxFuture<'static, Result<(), ExportError>>,
    on_success: impl FnOnce(),
) -> bool {
    match export.await {
        Ok(()) => {
            debug!(kind, "Export finished");
            on_success();
            true
        }
        Err(e) => {
            error!(kind, "Export failed: {e}");
            false
        }
    }
}

impl Deref for HostHandle {
    type Target = dyn ExportHost;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for HostHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
