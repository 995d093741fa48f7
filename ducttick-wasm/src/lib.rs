use wasm_bindgen::prelude::*;
mod api;
mod console;
mod error;
mod interop;

pub use api::{
    fit_path, fit_path_res, path_length, path_length_res, place_ticks, place_ticks_res, point_at, point_at_res,
    set_panic_hook, tangent_at, tangent_at_res,
};
pub use console::ConsoleSink;
use ducttick::{DuctKernel, KernelConfig};
use ducttick_host::{RenderAdapter, RenderRegistry};

/// One open drawing: its duct registry and the kernel that renders it.
#[wasm_bindgen]
pub struct DuctDocument {
    pub(crate) registry: RenderRegistry,
    pub(crate) adapter: RenderAdapter<DuctKernel<ConsoleSink>>,
}

impl DuctDocument {
    pub fn rs_new() -> DuctDocument { Self::rs_with_config(KernelConfig::default()) }

    pub(crate) fn rs_with_config(config: KernelConfig) -> DuctDocument {
        DuctDocument { registry: RenderRegistry::new(), adapter: Self::rs_adapter(config) }
    }

    pub(crate) fn rs_adapter(config: KernelConfig) -> RenderAdapter<DuctKernel<ConsoleSink>> {
        RenderAdapter::new(DuctKernel::with_sink(config, ConsoleSink))
    }

    pub fn rs_registry(&self) -> &RenderRegistry { &self.registry }
}
