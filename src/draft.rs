//! Interactive duct drawing: committed vertices plus a live cursor.

use ducttick::{Vec2, VertexPath};

use crate::label::WidthLabel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorUpdate {
    Changed,
    /// Same point as before, or not a usable coordinate; nothing to redraw.
    NoChange,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DuctDraft {
    committed: Vec<Vec2>,
    cursor: Option<Vec2>,
    width: f64,
}

impl DuctDraft {
    pub fn new(start: Vec2, width: f64) -> Self {
        Self { committed: vec![start], cursor: None, width }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn committed(&self) -> &[Vec2] {
        &self.committed
    }

    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    pub fn move_cursor(&mut self, p: Vec2) -> CursorUpdate {
        if !p.is_finite() || self.cursor == Some(p) {
            return CursorUpdate::NoChange;
        }
        self.cursor = Some(p);
        CursorUpdate::Changed
    }

    /// Commit the cursor as a vertex. The cursor stays where it is, so the
    /// preview keeps following it. Returns false without a cursor.
    pub fn accept(&mut self) -> bool {
        match self.cursor {
            Some(p) => {
                if self.committed.last() != Some(&p) {
                    self.committed.push(p);
                }
                true
            }
            None => false,
        }
    }

    /// Committed vertices followed by the cursor when it has moved off the last one.
    pub fn preview_path(&self) -> VertexPath {
        let mut v = self.committed.clone();
        if let Some(c) = self.cursor {
            if v.last() != Some(&c) {
                v.push(c);
            }
        }
        VertexPath::open(v)
    }

    /// Final path and its width tag, or `None` with fewer than two vertices.
    pub fn finish(self) -> Option<(VertexPath, WidthLabel)> {
        if self.committed.len() < 2 {
            return None;
        }
        let path = VertexPath::open(self.committed);
        let label = WidthLabel::for_path(&path, self.width)?;
        Some((path, label))
    }
}
