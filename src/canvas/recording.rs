//! Headless canvas that records drawing commands

use super::text::text_width;
use super::{Canvas, DrawState, Font, StateStack, TextAlign, TextBaseline, TextMetrics};
use crate::types::{BoundingBox, Bounds, Point, Size};

/// One recorded call. Positions are stored after translation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    StrokeStyle(String),
    FillStyle(String),
    LineWidth(f64),
    LineDash(Vec<f64>),
    Font(Font),
    TextAlign(TextAlign),
    TextBaseline(TextBaseline),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counter_clockwise: bool,
    },
    ClosePath,
    Stroke,
    Fill,
    StrokeRect(BoundingBox),
    FillRect(BoundingBox),
    FillText {
        text: String,
        at: Point,
        font: Font,
    },
}

/// Canvas that keeps every call for later inspection
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    state: StateStack,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn state(&self) -> &DrawState {
        self.state.current()
    }

    /// Number of unmatched `save` calls
    pub fn save_depth(&self) -> usize {
        self.state.depth()
    }

    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke))
            .count()
    }

    /// Every `fill_text` call as (text, position)
    pub fn texts(&self) -> Vec<(String, Point)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, at, .. } => Some((text.clone(), *at)),
                _ => None,
            })
            .collect()
    }

    /// Straight-line paths that were stroked, one point list per path.
    /// Paths containing arcs are skipped.
    pub fn stroked_polylines(&self) -> Vec<Vec<Point>> {
        let mut result = Vec::new();
        let mut current: Vec<Point> = Vec::new();
        let mut has_arc = false;
        for command in &self.commands {
            match command {
                DrawCommand::BeginPath => {
                    current.clear();
                    has_arc = false;
                }
                DrawCommand::MoveTo(p) | DrawCommand::LineTo(p) => current.push(*p),
                DrawCommand::Arc { .. } => has_arc = true,
                DrawCommand::Stroke if !has_arc && !current.is_empty() => {
                    result.push(current.clone());
                }
                _ => {}
            }
        }
        result
    }

    /// Extent of every recorded vertex, rectangle and text anchor
    pub fn extent(&self) -> BoundingBox {
        let mut bounds = Bounds::new();
        for command in &self.commands {
            match command {
                DrawCommand::MoveTo(p) | DrawCommand::LineTo(p) => bounds.expand_point(*p),
                DrawCommand::StrokeRect(r) | DrawCommand::FillRect(r) => {
                    bounds.expand_point(Point::new(r.x, r.y));
                    bounds.expand_point(Point::new(r.right(), r.bottom()));
                }
                DrawCommand::FillText { at, .. } => bounds.expand_point(*at),
                DrawCommand::Arc { center, radius, .. } => {
                    bounds.expand_rect(*center, Size::new(radius * 2.0, radius * 2.0));
                }
                _ => {}
            }
        }
        bounds.to_box()
    }

    fn translated(&self, p: Point) -> Point {
        p + self.state.current().translation
    }
}

impl Canvas for RecordingCanvas {
    fn save(&mut self) {
        self.state.save();
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.state.restore();
        self.commands.push(DrawCommand::Restore);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.state.current_mut().stroke_style = color.to_string();
        self.commands.push(DrawCommand::StrokeStyle(color.to_string()));
    }

    fn set_fill_style(&mut self, color: &str) {
        self.state.current_mut().fill_style = color.to_string();
        self.commands.push(DrawCommand::FillStyle(color.to_string()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.current_mut().line_width = width;
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn set_line_dash(&mut self, dash: &[f64]) {
        self.state.current_mut().line_dash = dash.to_vec();
        self.commands.push(DrawCommand::LineDash(dash.to_vec()));
    }

    fn set_font(&mut self, font: Font) {
        self.state.current_mut().font = font;
        self.commands.push(DrawCommand::Font(font));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.current_mut().text_align = align;
        self.commands.push(DrawCommand::TextAlign(align));
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.current_mut().text_baseline = baseline;
        self.commands.push(DrawCommand::TextBaseline(baseline));
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        let t = &mut self.state.current_mut().translation;
        t.dx += dx;
        t.dy += dy;
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        let p = self.translated(p);
        self.commands.push(DrawCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        let p = self.translated(p);
        self.commands.push(DrawCommand::LineTo(p));
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64, counter_clockwise: bool) {
        let center = self.translated(center);
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            counter_clockwise,
        });
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn stroke_rect(&mut self, rect: BoundingBox) {
        let origin = self.translated(Point::new(rect.x, rect.y));
        self.commands.push(DrawCommand::StrokeRect(BoundingBox {
            x: origin.x,
            y: origin.y,
            ..rect
        }));
    }

    fn fill_rect(&mut self, rect: BoundingBox) {
        let origin = self.translated(Point::new(rect.x, rect.y));
        self.commands.push(DrawCommand::FillRect(BoundingBox {
            x: origin.x,
            y: origin.y,
            ..rect
        }));
    }

    fn fill_text(&mut self, text: &str, at: Point) {
        let at = self.translated(at);
        let font = self.state.current().font;
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            at,
            font,
        });
    }

    fn measure_text(&self, text: &str) -> TextMetrics {
        TextMetrics {
            width: text_width(text, self.state.current().font.size),
        }
    }
}
