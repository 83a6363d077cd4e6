//! Shared utilities for the browser shell

use folio_fx::{FolioError, Theme, Viewport};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Console.log binding for WASM
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);
}

/// Convert an engine error for the JS boundary
pub fn to_js(e: FolioError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Current window size and device pixel ratio
pub fn current_viewport(window: &web_sys::Window) -> Viewport {
    let dimension = |value: Result<JsValue, JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(
        dimension(window.inner_width()),
        dimension(window.inner_height()),
        window.device_pixel_ratio() as f32,
    )
}

/// Theme selected by the body's class list
pub fn body_theme(document: &web_sys::Document) -> Theme {
    document
        .body()
        .map(|body| Theme::from_class_list(&body.class_name()))
        .unwrap_or_default()
}
