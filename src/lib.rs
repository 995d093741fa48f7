//! Host-side duct rendering without a CAD host: per-document registries,
//! coloured line output, the interactive draft and the width tag.

pub mod draft;
pub mod label;
pub mod registry;
pub mod render;

pub use draft::{CursorUpdate, DuctDraft};
pub use label::{width_text, WidthLabel};
pub use registry::{DocumentId, DocumentRegistries, PathId, RegistryError, RenderRegistry};
pub use render::{AciColor, LinePrimitive, RenderAdapter};
