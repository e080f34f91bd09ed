//! Line databases: contiguous arenas of world-space lines with a render-time
//! translation offset and a reusable per-frame segment scratch buffer.
//!
//! Lifecycle is "insert now, finalize once": all inserts happen up front, then
//! `finalize()` sizes the scratch buffer to the line count. The scratch buffer
//! is a transient cache — filled, drawn, and reset within a single render
//! pass, never reallocated per frame.

use engine_core::{Line3, Segment2};
use glam::IVec3;

use crate::camera::ViewPose;
use crate::pipeline::Projector;
use crate::target::{Color, DrawTarget};

/// Fatal renderer error: the scratch buffer could not be sized. There is no
/// safe degraded mode for a renderer with an undersized buffer, so startup or
/// world regeneration must abort on this.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("segment scratch buffer allocation failed: {0}")]
    OutOfMemory(#[from] std::collections::TryReserveError),
}

/// Per-pass diagnostics from rendering one database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Segments that survived clipping and were drawn.
    pub drawn: usize,
    /// Near-plane clip intersections that fell inside the viewport.
    pub clip_contacts: usize,
}

/// An unordered collection of world-space lines plus a translation offset
/// applied at render time. Traversal order never affects correctness, only
/// the (unspecified) draw order of overlapping lines.
#[derive(Debug, Default)]
pub struct LineDb {
    lines: Vec<Line3>,
    /// Scratch buffer of projected segments; capacity fixed by `finalize()`.
    segments: Vec<Segment2>,
    finalized: bool,
    /// Render-time translation, set between frames by the flight integrator.
    pub offset: IVec3,
}

impl LineDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and finalize a database from authored line data.
    pub fn from_lines(lines: &[Line3]) -> Result<Self, DbError> {
        let mut db = Self::new();
        for line in lines {
            db.insert(*line);
        }
        db.finalize()?;
        Ok(db)
    }

    /// Add a line. Order is not semantically meaningful.
    pub fn insert(&mut self, line: Line3) {
        debug_assert!(!self.finalized, "insert after finalize");
        self.lines.push(line);
    }

    /// Size the segment scratch buffer to the current line count. Must be
    /// called after the last insert and before the first render.
    pub fn finalize(&mut self) -> Result<(), DbError> {
        self.segments.try_reserve_exact(self.lines.len())?;
        self.finalized = true;
        Ok(())
    }

    /// Drop all lines and scratch capacity, returning to the insert phase.
    /// Used when a new world replaces the old one.
    pub fn reset(&mut self) {
        self.lines = Vec::new();
        self.segments = Vec::new();
        self.finalized = false;
        self.offset = IVec3::ZERO;
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[Line3] {
        &self.lines
    }

    /// Project every line through the pipeline with the database offset
    /// applied, buffer the survivors, draw them, and reset the buffer.
    pub fn render(
        &mut self,
        projector: &Projector<'_>,
        pose: &ViewPose,
        target: &mut dyn DrawTarget,
    ) -> PassStats {
        debug_assert!(self.finalized, "render before finalize");
        let mut stats = PassStats::default();
        let offset = self.offset.as_vec3();

        for line in &self.lines {
            let projected = projector.project(line.translated(offset), pose);
            if projected.contact {
                stats.clip_contacts += 1;
            }
            if let Some(segment) = projected.segment {
                debug_assert!(self.segments.len() < self.segments.capacity());
                self.segments.push(segment);
            }
        }

        for segment in &self.segments {
            target.draw_line(
                segment.x1 as i32,
                segment.y1 as i32,
                segment.x2 as i32,
                segment.y2 as i32,
                1,
                Color::Black,
            );
        }
        stats.drawn = self.segments.len();
        self.segments.clear();
        if stats.clip_contacts > 0 {
            log::trace!(
                "near-plane contacts this pass: {} of {} lines",
                stats.clip_contacts,
                self.lines.len()
            );
        }
        stats
    }
}
