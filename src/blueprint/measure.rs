//! Dimension annotations: a labelled line parallel to a measured span, with
//! dashed leader lines back to the anchors and open arrowheads at both ends.
//!
//! When the label leaves room for arrows inside the span the line is split
//! around the label. Otherwise the measure is drawn "outer": one unbroken
//! line with arrows turned inward from outside and the label pushed beside it.

use crate::angle::{HALF_TURN, QUARTER_TURN};
use crate::canvas::{Canvas, Font, TextAlign, TextBaseline, stroke_polyline, stroke_segment};
use crate::defaults::{ARROW_ANGLE, ARROW_SIZE, FONT_SIZE, LEADER_DASH, MEASURE_LABEL_MARGIN, MEASURE_OFFSET};
use crate::geometry::{angle, distance};
use crate::types::{BoundingBox, Bounds, Point, Segment, Size, Vector};

/// Stroke color of the leader lines
const LEADER_COLOR: &str = "#bbb";
/// Stroke color of the measure line and arrowheads
const MEASURE_COLOR: &str = "#666";

/// Placement of every part of one dimension annotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureLayout {
    pub p1: Point,
    pub p2: Point,
    /// Direction of `p1 -> p2`
    pub angle: f64,
    /// Measure line ends, offset perpendicular from the anchors
    pub start: Point,
    pub end: Point,
    pub center: Point,
    /// Label box including its margin
    pub label_box: Size,
    /// The label blocks the line along its width rather than its height
    pub width_constrained: bool,
    /// Half the gap the label cuts out of an inner measure line
    pub arrow_start_offset: Vector,
    /// Drawn as one line with the arrows outside
    pub outer: bool,
    pub label_at: Point,
    pub text_width: f64,
    upper_arrow: Vector,
    lower_arrow: Vector,
}

impl MeasureLayout {
    /// Lay out a measure from `p1` to `p2` whose label is `text_width` wide,
    /// with the line `offset` away on the left of the direction of travel.
    pub fn new(text_width: f64, p1: Point, p2: Point, offset: f64) -> Self {
        let angle = angle(p1, p2);
        let negative = angle < 0.0 || angle >= HALF_TURN;
        let sign = if negative { -1.0 } else { 1.0 };

        let offset = Vector::from_polar(offset, angle + QUARTER_TURN);
        let start = p1 + offset;
        let end = p2 + offset;
        let center = start.midpoint(end);

        let label_box = Size::new(
            text_width + MEASURE_LABEL_MARGIN * 2.0,
            FONT_SIZE + MEASURE_LABEL_MARGIN * 2.0,
        );
        let label_angle = (label_box.height / label_box.width).atan();
        // the modulo binds before the subtraction
        let width_constrained = (angle.abs() % HALF_TURN) - label_angle < 0.0;

        let arrow_start_offset = if width_constrained {
            Vector::new(label_box.width / 2.0, label_box.width / 2.0 * angle.tan())
        } else {
            Vector::new(label_box.height / 2.0 / angle.tan(), label_box.height / 2.0)
        } * sign;

        let arrow_length = distance(start, center - arrow_start_offset);
        let outer = arrow_length < ARROW_SIZE * 2.0;

        let label_shift = if !outer {
            Vector::default()
        } else if width_constrained {
            Vector::new(0.0, label_box.height / 2.0 * sign)
        } else {
            Vector::new(label_box.width / 2.0, 0.0)
        };

        MeasureLayout {
            p1,
            p2,
            angle,
            start,
            end,
            center,
            label_box,
            width_constrained,
            arrow_start_offset,
            outer,
            label_at: center + label_shift,
            text_width,
            upper_arrow: Vector::from_polar(ARROW_SIZE, angle - ARROW_ANGLE),
            lower_arrow: Vector::from_polar(ARROW_SIZE, angle + ARROW_ANGLE),
        }
    }

    fn arrow_direction(&self) -> f64 {
        if self.outer { -1.0 } else { 1.0 }
    }

    /// Barb ends of the start and end arrowheads
    pub fn arrow_barbs(&self) -> [[Point; 2]; 2] {
        let dir = self.arrow_direction();
        [
            [self.start + self.upper_arrow * dir, self.start + self.lower_arrow * dir],
            [self.end - self.upper_arrow * dir, self.end - self.lower_arrow * dir],
        ]
    }

    /// Measure line pieces: one line when outer, two stubs around the label
    /// otherwise
    pub fn line_segments(&self) -> Vec<Segment> {
        if self.outer {
            vec![Segment::new(self.start, self.end)]
        } else {
            vec![
                Segment::new(self.start, self.center - self.arrow_start_offset),
                Segment::new(self.end, self.center + self.arrow_start_offset),
            ]
        }
    }

    /// Smallest box holding anchors, line, label text and arrowheads
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bounds = Bounds::new();
        for p in [self.p1, self.p2, self.start, self.end] {
            bounds.expand_point(p);
        }
        bounds.expand_rect(self.label_at, Size::new(self.text_width, FONT_SIZE));
        for p in self.arrow_barbs().into_iter().flatten() {
            bounds.expand_point(p);
        }
        bounds.to_box()
    }
}

/// Draw a dimension annotation with the default offset and return its extent.
pub fn draw_measure(canvas: &mut dyn Canvas, label: &str, p1: Point, p2: Point) -> BoundingBox {
    draw_measure_with_offset(canvas, label, p1, p2, MEASURE_OFFSET)
}

pub fn draw_measure_with_offset(
    canvas: &mut dyn Canvas,
    label: &str,
    p1: Point,
    p2: Point,
    offset: f64,
) -> BoundingBox {
    canvas.save();
    canvas.set_stroke_style("#000");
    canvas.set_fill_style("#000");
    canvas.set_font(Font::new(FONT_SIZE));
    canvas.set_text_align(TextAlign::Center);
    canvas.set_text_baseline(TextBaseline::Middle);

    let text_width = canvas.measure_text(label).width;
    let layout = MeasureLayout::new(text_width, p1, p2, offset);

    canvas.save();
    canvas.set_stroke_style(LEADER_COLOR);
    canvas.set_line_dash(&LEADER_DASH);
    stroke_segment(canvas, &Segment::new(p1, layout.start));
    stroke_segment(canvas, &Segment::new(p2, layout.end));
    canvas.restore();

    canvas.save();
    canvas.set_stroke_style(MEASURE_COLOR);
    for segment in layout.line_segments() {
        stroke_segment(canvas, &segment);
    }
    let [start_barbs, end_barbs] = layout.arrow_barbs();
    stroke_polyline(canvas, &[start_barbs[0], layout.start, start_barbs[1]]);
    stroke_polyline(canvas, &[end_barbs[0], layout.end, end_barbs[1]]);
    canvas.restore();

    canvas.fill_text(label, layout.label_at);
    canvas.restore();

    layout.bounding_box()
}

/// Whether a measure of `length` would be drawn outer at the default font
pub fn is_outer_measurement(canvas: &mut dyn Canvas, length: f64) -> bool {
    canvas.save();
    canvas.set_font(Font::new(FONT_SIZE));
    let text_width = canvas.measure_text(&super::format_mm(length)).width;
    canvas.restore();
    (length - (text_width + MEASURE_LABEL_MARGIN * 2.0)) / 2.0 < ARROW_SIZE * 2.0
}
