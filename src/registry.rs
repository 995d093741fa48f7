//! Which host paths are drawn as ducts, and at what width.
//!
//! One [`RenderRegistry`] belongs to one open document. [`DocumentRegistries`]
//! owns them for a session; closing a document drops its registry.

use std::collections::HashMap;

use ducttick::config::DEFAULT_BLUE_WIDTH;
use ducttick::geometry::limits::{in_width_bounds, WIDTH_MAX};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Host object id of a polyline.
pub type PathId = u32;
/// Host id of an open document.
pub type DocumentId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RegistryError {
    /// Width must be finite, positive and at most `WIDTH_MAX`.
    #[error("duct width {got} outside (0, {max}]")]
    InvalidWidth { got: f64, max: f64 },
}

fn check_width(width: f64) -> Result<f64, RegistryError> {
    if in_width_bounds(width) {
        Ok(width)
    } else {
        log::warn!("rejected duct width {width}");
        Err(RegistryError::InvalidWidth { got: width, max: WIDTH_MAX })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRegistry {
    default_width: f64,
    widths: HashMap<PathId, f64>,
}

impl Default for RenderRegistry {
    fn default() -> Self {
        Self { default_width: DEFAULT_BLUE_WIDTH, widths: HashMap::new() }
    }
}

impl RenderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_width(width: f64) -> Result<Self, RegistryError> {
        Ok(Self { default_width: check_width(width)?, widths: HashMap::new() })
    }

    pub fn default_width(&self) -> f64 {
        self.default_width
    }

    /// Enable at the default width; an already enabled path keeps its width.
    pub fn enable(&mut self, id: PathId) {
        let w = self.default_width;
        self.widths.entry(id).or_insert(w);
        log::debug!("duct rendering enabled for path {id}");
    }

    pub fn enable_with_width(&mut self, id: PathId, width: f64) -> Result<(), RegistryError> {
        let w = check_width(width)?;
        self.widths.insert(id, w);
        log::debug!("duct rendering enabled for path {id} at width {w}");
        Ok(())
    }

    /// Returns whether the path was enabled.
    pub fn disable(&mut self, id: PathId) -> bool {
        let was = self.widths.remove(&id).is_some();
        if was {
            log::debug!("duct rendering disabled for path {id}");
        }
        was
    }

    /// Change the width of an enabled path. Returns `Ok(false)` when the path
    /// is not enabled.
    pub fn set_width(&mut self, id: PathId, width: f64) -> Result<bool, RegistryError> {
        let w = check_width(width)?;
        match self.widths.get_mut(&id) {
            Some(slot) => {
                *slot = w;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn width_of(&self, id: PathId) -> Option<f64> {
        self.widths.get(&id).copied()
    }

    pub fn is_enabled(&self, id: PathId) -> bool {
        self.widths.contains_key(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = PathId> + '_ {
        self.widths.keys().copied()
    }

    /// Checks every stored width, e.g. after deserializing.
    pub fn validate(&self) -> Result<(), RegistryError> {
        check_width(self.default_width)?;
        for w in self.widths.values() {
            check_width(*w)?;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.widths.clear();
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct DocumentRegistries {
    docs: HashMap<DocumentId, RenderRegistry>,
}

impl DocumentRegistries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry for `doc`, created empty on first use.
    pub fn open(&mut self, doc: DocumentId) -> &mut RenderRegistry {
        self.docs.entry(doc).or_default()
    }

    pub fn get(&self, doc: DocumentId) -> Option<&RenderRegistry> {
        self.docs.get(&doc)
    }

    pub fn get_mut(&mut self, doc: DocumentId) -> Option<&mut RenderRegistry> {
        self.docs.get_mut(&doc)
    }

    /// Drops the document's registry; returns it for callers that persist state.
    pub fn close(&mut self, doc: DocumentId) -> Option<RenderRegistry> {
        let r = self.docs.remove(&doc);
        if r.is_some() {
            log::debug!("document {doc} closed, registry dropped");
        }
        r
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}
