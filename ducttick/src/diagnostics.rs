//! Reporting hook for recovered degeneracies.
//!
//! Geometry never fails hard on bad corners or bad samples: it falls back or
//! skips. Each recovery is described by a [`Diagnostic`] handed to a
//! [`DiagnosticSink`], so the cause stays visible without changing output.

use std::cell::RefCell;
use std::fmt;

use crate::algorithms::fillet::CornerRejection;

#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// Interior vertex `index` was not rounded.
    CornerFallback { index: usize, reason: CornerRejection },
    /// Tick `index` had no usable tangent at `distance`.
    TickSkipped { index: usize, distance: f64 },
    /// Spacing or stripe lengths unusable; nothing placed.
    InvalidTickParams { spacing: f64, red: f64, blue: f64 },
    /// Placement would exceed the tick cap.
    TickBudgetExceeded { requested: usize, limit: usize },
    /// Vertex `index` has a non-finite or out-of-bounds coordinate.
    InvalidVertex { index: usize },
    /// Path has more vertices than the ingestion cap.
    TooManyVertices { count: usize, limit: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::CornerFallback { index, reason } => {
                write!(f, "corner {index} not rounded: {reason}")
            }
            Diagnostic::TickSkipped { index, distance } => {
                write!(f, "tick {index} skipped at distance {distance}: zero-length tangent")
            }
            Diagnostic::InvalidTickParams { spacing, red, blue } => {
                write!(f, "invalid tick parameters spacing={spacing} red={red} blue={blue}")
            }
            Diagnostic::TickBudgetExceeded { requested, limit } => {
                write!(f, "{requested} ticks requested, limit is {limit}")
            }
            Diagnostic::InvalidVertex { index } => write!(f, "vertex {index} is not a usable coordinate"),
            Diagnostic::TooManyVertices { count, limit } => {
                write!(f, "path has {count} vertices, limit is {limit}")
            }
        }
    }
}

pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

/// Forwards to the `log` facade at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: Diagnostic) {
        log::debug!(target: "ducttick", "{diagnostic}");
    }
}

/// Drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl DiagnosticSink for Silent {
    fn report(&self, _diagnostic: Diagnostic) {}
}

/// Records diagnostics in order; single-threaded.
#[derive(Debug, Default)]
pub struct Collector {
    items: RefCell<Vec<Diagnostic>>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.items.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl DiagnosticSink for Collector {
    fn report(&self, diagnostic: Diagnostic) {
        self.items.borrow_mut().push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic)
    }
}
