//! Drawing port
//!
//! Everything the crate draws goes through [`Canvas`], a minimal vector 2D
//! surface modelled on the HTML canvas API. Two backends ship with the crate:
//! - `recording`: keeps every call as a [`DrawCommand`] for headless tests
//! - `svg`: accumulates an SVG document

pub mod recording;
pub mod svg;
pub mod text;

pub use recording::{DrawCommand, RecordingCanvas};
pub use svg::SvgCanvas;

use crate::angle::FULL_TURN;
use crate::defaults;
use crate::types::{BoundingBox, Point, Segment, Vector};

/// Font used for labels; only the pixel size matters for layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size: f64,
    pub family: &'static str,
}

impl Font {
    pub const fn new(size: f64) -> Self {
        Font {
            size,
            family: defaults::FONT_FAMILY,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Font::new(10.0)
    }
}

/// Horizontal anchoring of `fill_text`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
}

/// Vertical anchoring of `fill_text`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    #[default]
    Alphabetic,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub width: f64,
}

/// The vector drawing surface the crate renders through.
///
/// Style setters affect subsequent calls until the matching `restore`.
/// Coordinates are in millimetres before `translate` is applied.
pub trait Canvas {
    fn save(&mut self);
    fn restore(&mut self);

    fn set_stroke_style(&mut self, color: &str);
    fn set_fill_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_line_dash(&mut self, dash: &[f64]);
    fn set_font(&mut self, font: Font);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);
    fn translate(&mut self, dx: f64, dy: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    /// Circular arc from `start_angle` to `end_angle`; clockwise on screen
    /// unless `counter_clockwise`
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64, counter_clockwise: bool);
    fn close_path(&mut self);
    fn stroke(&mut self);
    fn fill(&mut self);

    fn stroke_rect(&mut self, rect: BoundingBox);
    fn fill_rect(&mut self, rect: BoundingBox);
    fn fill_text(&mut self, text: &str, at: Point);
    fn measure_text(&self, text: &str) -> TextMetrics;
}

/// Graphics state saved and restored by `save`/`restore`
#[derive(Debug, Clone, PartialEq)]
pub struct DrawState {
    pub stroke_style: String,
    pub fill_style: String,
    pub line_width: f64,
    pub line_dash: Vec<f64>,
    pub font: Font,
    pub text_align: TextAlign,
    pub text_baseline: TextBaseline,
    pub translation: Vector,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            stroke_style: "#000".to_string(),
            fill_style: "#000".to_string(),
            line_width: 1.0,
            line_dash: Vec::new(),
            font: Font::default(),
            text_align: TextAlign::Start,
            text_baseline: TextBaseline::Alphabetic,
            translation: Vector::default(),
        }
    }
}

/// Current state plus the saved states beneath it
#[derive(Debug, Clone, Default)]
pub(crate) struct StateStack {
    current: DrawState,
    saved: Vec<DrawState>,
}

impl StateStack {
    pub fn current(&self) -> &DrawState {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut DrawState {
        &mut self.current
    }

    pub fn save(&mut self) {
        self.saved.push(self.current.clone());
    }

    /// Unbalanced restores are ignored, like the HTML canvas
    pub fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.current = state;
        }
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}

/// Signed sweep a canvas `arc` call draws, clamped to one full turn
pub fn arc_sweep(start_angle: f64, end_angle: f64, counter_clockwise: bool) -> f64 {
    if counter_clockwise {
        let d = start_angle - end_angle;
        if d >= FULL_TURN { -FULL_TURN } else { -d.rem_euclid(FULL_TURN) }
    } else {
        let d = end_angle - start_angle;
        if d >= FULL_TURN { FULL_TURN } else { d.rem_euclid(FULL_TURN) }
    }
}

/// Stroke one straight segment as its own path
pub fn stroke_segment(canvas: &mut dyn Canvas, segment: &Segment) {
    canvas.begin_path();
    canvas.move_to(segment.p1);
    canvas.line_to(segment.p2);
    canvas.stroke();
}

/// Stroke an open polyline as one path
pub fn stroke_polyline(canvas: &mut dyn Canvas, points: &[Point]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    canvas.begin_path();
    canvas.move_to(*first);
    for p in rest {
        canvas.line_to(*p);
    }
    canvas.stroke();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_sweep_matches_canvas_semantics() {
        assert!((arc_sweep(0.0, 1.0, false) - 1.0).abs() < 1e-12);
        assert!((arc_sweep(0.0, 1.0, true) + (FULL_TURN - 1.0)).abs() < 1e-12);
        assert_eq!(arc_sweep(0.0, FULL_TURN, false), FULL_TURN);
        assert_eq!(arc_sweep(FULL_TURN, 0.0, true), -FULL_TURN);
    }

    #[test]
    fn state_stack_restores() {
        let mut stack = StateStack::default();
        stack.current_mut().stroke_style = "#f00".into();
        stack.save();
        stack.current_mut().stroke_style = "#0f0".into();
        assert_eq!(stack.depth(), 1);
        stack.restore();
        assert_eq!(stack.current().stroke_style, "#f00");
        stack.restore();
        assert_eq!(stack.current().stroke_style, "#f00");
    }
}
