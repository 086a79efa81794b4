//! `ExportHost` backed by the live page
//!
//! Exports are delegated to the page's `window.exporterBridge` object, which
//! owns the actual text/image/markdown/html/json/archive exporters. The menu
//! only decides which function to call and with which arguments.

use exporter_common::{ExportError, ExportRequest};
use exporter_ui::{ExportHost, ExportPreferences};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use thiserror::Error;
use tracing::{debug, warn};
use wasm_bindgen_x::prelude::*;
use wasm_bindgen_x::JsCast;

/// Global object the page exposes its exporters on
pub const BRIDGE_GLOBAL: &str = "exporterBridge";

/// localStorage key holding the page's JSON-encoded "history disabled" flag
pub const HISTORY_DISABLED_KEY: &str = "oai/apps/historyDisabled";

/// Width reported when the window can't be measured; lands in desktop mode
const FALLBACK_VIEWPORT_WIDTH_PX: f64 = 1024.0;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("no window object")]
    NoWindow,
    #[error("localStorage unavailable: {0}")]
    Storage(String),
    #[error("malformed history flag: {0}")]
    MalformedFlag(#[from] serde_json::Error),
    #[error("window.exporterBridge is not defined")]
    BridgeMissing,
    #[error("window.exporterBridge.{0} is not a function")]
    MissingFunction(&'static str),
    #[error("{0}")]
    Js(String),
}

impl HostError {
    fn into_export_error(self, kind: &'static str) -> ExportError {
        match self {
            Self::NoWindow | Self::BridgeMissing => ExportError::BridgeUnavailable,
            other => ExportError::Failed {
                kind,
                message: other.to_string(),
            },
        }
    }
}

/// Argument passed to a bridge function, before conversion to JS
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeArg {
    Text(String),
    List(Vec<String>),
}

impl BridgeArg {
    fn to_js(&self) -> JsValue {
        match self {
            Self::Text(text) => JsValue::from_str(text),
            Self::List(items) => {
                let array = js_sys_x::Array::new();
                for item in items {
                    array.push(&JsValue::from_str(item));
                }
                array.into()
            }
        }
    }
}

/// Bridge function that handles a request
pub fn bridge_function(request: &ExportRequest) -> &'static str {
    match request {
        ExportRequest::Text => "exportToText",
        ExportRequest::Image { .. } => "exportToPng",
        ExportRequest::Markdown { .. } => "exportToMarkdown",
        ExportRequest::Html { .. } => "exportToHtml",
        ExportRequest::Json { .. } => "exportToJson",
        ExportRequest::All { .. } => "exportAll",
    }
}

/// Positional arguments for the request's bridge function
pub fn bridge_args(request: &ExportRequest) -> Vec<BridgeArg> {
    match request {
        ExportRequest::Text => Vec::new(),
        ExportRequest::Image { format }
        | ExportRequest::Json { format }
        | ExportRequest::All { format } => vec![BridgeArg::Text(format.clone())],
        ExportRequest::Markdown {
            format,
            meta_fields,
        }
        | ExportRequest::Html {
            format,
            meta_fields,
        } => vec![
            BridgeArg::Text(format.clone()),
            BridgeArg::List(meta_fields.clone()),
        ],
    }
}

/// Interpret the stored flag. Only a JSON `true` disables the exporter.
pub fn parse_history_disabled(raw: Option<&str>) -> Result<bool, HostError> {
    let Some(raw) = raw else {
        return Ok(false);
    };
    let value: serde_json::Value = serde_json::from_str(raw)?;
    Ok(value == serde_json::Value::Bool(true))
}

/// Parse the JSON preferences object the page hands over at startup
pub fn parse_preferences(json: &str) -> Result<ExportPreferences, HostError> {
    Ok(serde_json::from_str(json)?)
}

/// The page the menu is embedded in
#[derive(Debug, Default, Clone)]
pub struct PageHost;

impl PageHost {
    pub fn new() -> Self {
        Self
    }

    /// Preferences from `exporterBridge.getPreferences()`, or defaults when
    /// the page doesn't provide any.
    pub fn initial_preferences(&self) -> ExportPreferences {
        match read_bridge_preferences() {
            Ok(Some(prefs)) => prefs,
            Ok(None) => {
                debug!("Page provides no export preferences, using defaults");
                ExportPreferences::default()
            }
            Err(e) => {
                warn!("Could not read export preferences: {e}");
                ExportPreferences::default()
            }
        }
    }
}

impl ExportHost for PageHost {
    fn is_export_disabled(&self) -> bool {
        match read_history_flag().and_then(|raw| parse_history_disabled(raw.as_deref())) {
            Ok(disabled) => disabled,
            Err(e) => {
                warn!("Treating exporter as enabled: {e}");
                false
            }
        }
    }

    fn viewport_width(&self) -> f64 {
        web_sys_x::window()
            .and_then(|window| window.inner_width().ok())
            .and_then(|width| width.as_f64())
            .unwrap_or(FALLBACK_VIEWPORT_WIDTH_PX)
    }

    fn export(&self, request: ExportRequest) -> LocalBoxFuture<'static, Result<(), ExportError>> {
        let kind = request.kind();
        let promise = call_bridge(&request);
        async move {
            let promise = promise.map_err(|e| e.into_export_error(kind))?;
            wasm_bindgen_futures_x::JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| HostError::Js(js_message(&e)).into_export_error(kind))
        }
        .boxed_local()
    }
}

fn read_history_flag() -> Result<Option<String>, HostError> {
    let window = web_sys_x::window().ok_or(HostError::NoWindow)?;
    let storage = window
        .local_storage()
        .map_err(|e| HostError::Storage(js_message(&e)))?
        .ok_or_else(|| HostError::Storage("not provided".to_string()))?;
    storage
        .get_item(HISTORY_DISABLED_KEY)
        .map_err(|e| HostError::Storage(js_message(&e)))
}

fn bridge() -> Result<JsValue, HostError> {
    let window = web_sys_x::window().ok_or(HostError::NoWindow)?;
    let bridge = js_sys_x::Reflect::get(&window, &BRIDGE_GLOBAL.into())
        .map_err(|e| HostError::Js(js_message(&e)))?;
    if bridge.is_undefined() || bridge.is_null() {
        return Err(HostError::BridgeMissing);
    }
    Ok(bridge)
}

fn bridge_method(bridge: &JsValue, name: &'static str) -> Result<js_sys_x::Function, HostError> {
    js_sys_x::Reflect::get(bridge, &name.into())
        .map_err(|e| HostError::Js(js_message(&e)))?
        .dyn_into::<js_sys_x::Function>()
        .map_err(|_| HostError::MissingFunction(name))
}

/// Start the export and return its completion as a promise. Synchronous
/// bridge functions are wrapped with `Promise.resolve`.
fn call_bridge(request: &ExportRequest) -> Result<js_sys_x::Promise, HostError> {
    let bridge = bridge()?;
    let func = bridge_method(&bridge, bridge_function(request))?;

    let args = js_sys_x::Array::new();
    for arg in bridge_args(request) {
        args.push(&arg.to_js());
    }

    let result = func
        .apply(&bridge, &args)
        .map_err(|e| HostError::Js(js_message(&e)))?;
    Ok(js_sys_x::Promise::resolve(&result))
}

fn read_bridge_preferences() -> Result<Option<ExportPreferences>, HostError> {
    let bridge = match bridge() {
        Ok(bridge) => bridge,
        Err(HostError::BridgeMissing) => return Ok(None),
        Err(e) => return Err(e),
    };
    let func = match bridge_method(&bridge, "getPreferences") {
        Ok(func) => func,
        Err(HostError::MissingFunction(_)) => return Ok(None),
        Err(e) => return Err(e),
    };
    let value = func
        .call0(&bridge)
        .map_err(|e| HostError::Js(js_message(&e)))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    let json: String = js_sys_x::JSON::stringify(&value)
        .map_err(|e| HostError::Js(js_message(&e)))?
        .into();
    parse_preferences(&json).map(Some)
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
