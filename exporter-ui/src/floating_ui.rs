//! Floating UI bindings for the desktop export panel
//!
//! Typed Rust interface to @floating-ui/dom (`window.FloatingUIDOM`), used to
//! anchor the top-layer panel next to its trigger. The host page is expected to
//! load the library before the menu mounts.

use exporter_common::PanelSide;
use wasm_bindgen_x::prelude::*;
use wasm_bindgen_x::JsCast;

/// Placement values the panel uses, aligned to the start edge of the trigger
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Placement {
    #[default]
    RightStart,
    BottomStart,
}

impl Placement {
    fn as_str(&self) -> &'static str {
        match self {
            Self::RightStart => "right-start",
            Self::BottomStart => "bottom-start",
        }
    }
}

impl From<PanelSide> for Placement {
    fn from(side: PanelSide) -> Self {
        match side {
            PanelSide::Right => Self::RightStart,
            PanelSide::Bottom => Self::BottomStart,
        }
    }
}

/// Result of computePosition
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputePositionResult {
    pub x: f64,
    pub y: f64,
}

/// Options for computePosition
#[derive(Debug, Clone, Default)]
pub struct ComputePositionOptions {
    pub placement: Placement,
    /// Distance from the trigger along the placement side
    pub main_axis: f64,
    /// Shift along the alignment edge
    pub alignment_axis: f64,
    pub flip: bool,
    pub shift: bool,
}

/// Compute position of floating element relative to reference element.
///
/// Returns (x, y) coordinates to apply to the floating element's style.
pub async fn compute_position(
    reference: &web_sys_x::Element,
    floating: &web_sys_x::Element,
    options: ComputePositionOptions,
) -> Result<ComputePositionResult, JsValue> {
    let window = web_sys_x::window().ok_or("no window")?;
    let floating_ui = js_sys_x::Reflect::get(&window, &"FloatingUIDOM".into())?;

    let middleware = js_sys_x::Array::new();

    let offset_opts = js_sys_x::Object::new();
    js_sys_x::Reflect::set(
        &offset_opts,
        &"mainAxis".into(),
        &JsValue::from_f64(options.main_axis),
    )?;
    js_sys_x::Reflect::set(
        &offset_opts,
        &"alignmentAxis".into(),
        &JsValue::from_f64(options.alignment_axis),
    )?;
    middleware.push(&call_factory(&floating_ui, "offset", Some(&offset_opts))?);

    if options.flip {
        middleware.push(&call_factory(&floating_ui, "flip", None)?);
    }

    if options.shift {
        middleware.push(&call_factory(&floating_ui, "shift", None)?);
    }

    let opts = js_sys_x::Object::new();
    js_sys_x::Reflect::set(
        &opts,
        &"placement".into(),
        &options.placement.as_str().into(),
    )?;
    js_sys_x::Reflect::set(&opts, &"middleware".into(), &middleware)?;

    let compute_fn = js_sys_x::Reflect::get(&floating_ui, &"computePosition".into())?;
    let func = compute_fn
        .dyn_ref::<js_sys_x::Function>()
        .ok_or("computePosition not a function")?;

    let promise = func
        .call3(&JsValue::NULL, reference, floating, &opts)?
        .dyn_into::<js_sys_x::Promise>()?;

    let result = wasm_bindgen_futures_x::JsFuture::from(promise).await?;

    let x = js_sys_x::Reflect::get(&result, &"x".into())?
        .as_f64()
        .unwrap_or(0.0);
    let y = js_sys_x::Reflect::get(&result, &"y".into())?
        .as_f64()
        .unwrap_or(0.0);

    Ok(ComputePositionResult { x, y })
}

/// Call a middleware factory such as `offset(opts)` or `flip()`.
fn call_factory(
    floating_ui: &JsValue,
    name: &str,
    arg: Option<&JsValue>,
) -> Result<JsValue, JsValue> {
    let factory = js_sys_x::Reflect::get(floating_ui, &name.into())?;
    let func = factory
        .dyn_ref::<js_sys_x::Function>()
        .ok_or_else(|| JsValue::from_str(&format!("{name} not a function")))?;
    match arg {
        Some(arg) => func.call1(&JsValue::NULL, arg),
        None => func.call0(&JsValue::NULL),
    }
}
