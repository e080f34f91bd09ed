//! Platform collaborator traits for drawing and text.
//!
//! The core issues draw calls; the host owns the framebuffer, buffer swapping,
//! and font loading. [`RecordingTarget`] stands in for the platform in tests
//! and headless runs.

/// Draw color on the 1-bit display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
    /// Inverts whatever is underneath; used by instrument needles and blips.
    Xor,
    /// 50% dither pattern; used for the control panel backing.
    Checker,
}

/// Platform draw surface.
pub trait DrawTarget {
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, width: i32, color: Color);
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);
    /// Filled elliptical arc between two angles in degrees.
    fn fill_ellipse(&mut self, x: i32, y: i32, w: i32, h: i32, start: f32, end: f32, color: Color);
    fn clear(&mut self, color: Color);
    /// Restrict subsequent draws to a rectangle.
    fn set_clip(&mut self, x: i32, y: i32, w: i32, h: i32);
}

/// Platform text service. Used only for score/telemetry overlays.
pub trait TextTarget {
    /// Pixel `(width, height)` of the rendered text.
    fn measure_text(&mut self, text: &str) -> (i32, i32);
    fn draw_text(&mut self, x: i32, y: i32, text: &str);
}

/// A full platform surface: drawing plus text. The host's display service
/// provides both.
pub trait Surface: DrawTarget + TextTarget {}

impl<T: DrawTarget + TextTarget> Surface for T {}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        width: i32,
        color: Color,
    },
    Rect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
    },
    Ellipse {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
    },
    Clear(Color),
    Clip {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
    },
}

/// Records every draw call instead of rasterizing. Glyphs are assumed to be a
/// fixed 6x12 cell for measurement.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    ops: Vec<DrawOp>,
}

impl RecordingTarget {
    pub const GLYPH_WIDTH: i32 = 6;
    pub const GLYPH_HEIGHT: i32 = 12;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn reset(&mut self) {
        self.ops.clear();
    }

    pub fn lines_drawn(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count()
    }

    /// `(x1, y1, x2, y2)` of each recorded line, in draw order.
    pub fn line_ops(&self) -> Vec<(i32, i32, i32, i32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { x1, y1, x2, y2, .. } => Some((*x1, *y1, *x2, *y2)),
                _ => None,
            })
            .collect()
    }

    /// Text of each recorded label, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawTarget for RecordingTarget {
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, width: i32, color: Color) {
        self.ops.push(DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            width,
            color,
        });
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.ops.push(DrawOp::Rect { x, y, w, h, color });
    }

    fn fill_ellipse(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        _start: f32,
        _end: f32,
        color: Color,
    ) {
        self.ops.push(DrawOp::Ellipse { x, y, w, h, color });
    }

    fn clear(&mut self, color: Color) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn set_clip(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.ops.push(DrawOp::Clip { x, y, w, h });
    }
}

impl TextTarget for RecordingTarget {
    fn measure_text(&mut self, text: &str) -> (i32, i32) {
        (text.len() as i32 * Self::GLYPH_WIDTH, Self::GLYPH_HEIGHT)
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_target_captures_in_order() {
        let mut target = RecordingTarget::new();
        target.clear(Color::White);
        target.draw_line(0, 0, 10, 10, 1, Color::Black);
        target.draw_text(5, 5, "Score: 0");
        assert_eq!(target.ops().len(), 3);
        assert_eq!(target.lines_drawn(), 1);
        assert_eq!(target.texts(), vec!["Score: 0"]);
        assert_eq!(target.measure_text("ab"), (12, 12));
    }
}
