use ducttick::diagnostics::{Diagnostic, DiagnosticSink};
use wasm_bindgen::JsValue;

/// Writes recovered degeneracies to the browser console at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn report(&self, diagnostic: Diagnostic) {
        web_sys::console::debug_1(&JsValue::from_str(&format!("ducttick: {diagnostic}")));
    }
}
