//! Browser viewport query

use super::{ViewportSource, surface_dimension};
use crate::sim::Viewport;

/// Reads `window.innerWidth` / `window.innerHeight` on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowViewport;

impl ViewportSource for WindowViewport {
    fn viewport(&self) -> Viewport {
        // Ticking without a window means the widget was never attached
        let window = web_sys::window().expect("viewport queried before render surface attached");
        let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            surface_dimension(v.ok().and_then(|v| v.as_f64()))
        };
        Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
    }
}
