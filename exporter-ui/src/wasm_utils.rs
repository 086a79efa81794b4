//! WASM utilities for browser interop
//!
//! The popover and dialog APIs (`showPopover`, `showModal`, ...) are not bound
//! by web-sys for every target we build, so they are looked up and invoked
//! through `Reflect`.

use wasm_bindgen_x::JsCast;

/// Call a zero-argument method on an element.
///
/// Missing methods are ignored, as are exceptions thrown by the call.
pub fn call_element_method(element: &web_sys_x::Element, method: &str) {
    if let Ok(value) = js_sys_x::Reflect::get(element, &method.into()) {
        if let Some(func) = value.dyn_ref::<js_sys_x::Function>() {
            let _ = func.call0(element);
        }
    }
}

/// Whether a popover element is currently shown in the top layer.
pub fn is_popover_open(element: &web_sys_x::Element) -> bool {
    element.matches(":popover-open").unwrap_or(false)
}

/// Look up an element of the current document by id.
pub fn element_by_id(id: &str) -> Option<web_sys_x::Element> {
    web_sys_x::window()?.document()?.get_element_by_id(id)
}
