//! Arc lintel: a ring sector drawn apex up, with its radii, bounding box and
//! sweep angle dimensioned.

use super::measure::{draw_measure, draw_measure_with_offset, is_outer_measurement};
use super::{Blueprint, LABEL_Y, format_mm};
use crate::angle::{FULL_TURN, HALF_TURN, to_whole_degrees};
use crate::canvas::{Canvas, Font, TextAlign, TextBaseline, stroke_polyline};
use crate::defaults::{
    FONT_SIZE, HORIZONTAL_PADDING, LABEL_OFFSET, LEADER_DASH, MEASURE_OFFSET, VERTICAL_MEASURE_OFFSET,
    VERTICAL_PADDING,
};
use crate::errors::{GeometryError, Result};
use crate::geometry::{arc_chord_length, arc_sagitta};
use crate::types::{BoundingBox, Length, Point, Size};

/// Which face of the lintel sits on the silhouette radius
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadiusFace {
    /// The radius is the inner face; the piece grows outward
    Inner,
    /// The radius is the outer face; the piece grows inward
    Outer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArcLintel {
    label: String,
    radius: f64,
    angle: f64,
    thickness: f64,
    face: RadiusFace,
}

/// Every position the drawing needs, computed once per render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcLintelGeometry {
    pub center: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Box around the whole sector, apex to lowest chord end
    pub bounds: BoundingBox,
    pub inner_left: Point,
    pub inner_right: Point,
    pub outer_right: Point,
}

impl ArcLintel {
    /// `angle` is the unsigned sweep and must be in `(0, 2π)`
    pub fn new(label: impl Into<String>, radius: f64, angle: f64, thickness: f64, face: RadiusFace) -> Result<Self> {
        let radius = Length::try_positive(radius).map_err(|e| GeometryError::numeric("lintel_radius", e))?;
        let thickness =
            Length::try_positive(thickness).map_err(|e| GeometryError::numeric("lintel_thickness", e))?;
        if !(angle > 0.0 && angle < FULL_TURN) {
            return Err(GeometryError::invalid("lintel_angle", format!("{angle} is not inside (0, 2π)")));
        }
        if face == RadiusFace::Outer && thickness.raw() >= radius.raw() {
            return Err(GeometryError::invalid(
                "lintel_thickness",
                format!("{} leaves no inner face on radius {}", thickness, radius),
            ));
        }
        Ok(ArcLintel {
            label: label.into(),
            radius: radius.raw(),
            angle,
            thickness: thickness.raw(),
            face,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn face(&self) -> RadiusFace {
        self.face
    }

    pub fn inner_radius(&self) -> f64 {
        match self.face {
            RadiusFace::Inner => self.radius,
            RadiusFace::Outer => self.radius - self.thickness,
        }
    }

    pub fn outer_radius(&self) -> f64 {
        match self.face {
            RadiusFace::Inner => self.radius + self.thickness,
            RadiusFace::Outer => self.radius,
        }
    }

    /// Horizontal extent of the piece: the outer chord, or the outer
    /// diameter once the sweep passes half a turn
    pub fn span(&self) -> f64 {
        if self.angle > HALF_TURN {
            2.0 * self.outer_radius()
        } else {
            arc_chord_length(self.outer_radius(), self.angle)
        }
    }

    /// Lay the piece out apex up below the label, making room for a width
    /// label that has to sit above its measure line.
    pub fn geometry(&self, outer_width_label: bool) -> ArcLintelGeometry {
        let half_remaining = (HALF_TURN - self.angle) / 2.0;
        let start_angle = HALF_TURN + half_remaining;
        let end_angle = FULL_TURN - half_remaining;

        let inner_radius = self.inner_radius();
        let outer_radius = self.outer_radius();
        let outer_chord = arc_chord_length(outer_radius, self.angle);
        let span = self.span();
        let inner_chord = arc_chord_length(inner_radius, self.angle);

        let label_room = if outer_width_label { FONT_SIZE } else { 0.0 };
        let outer_top = LABEL_Y + MEASURE_OFFSET + label_room + FONT_SIZE / 2.0 + LABEL_OFFSET;
        let inner_top = outer_top + self.thickness;
        let outer_bottom = outer_top + arc_sagitta(outer_radius, self.angle);
        let inner_bottom = inner_top + arc_sagitta(inner_radius, self.angle);

        let center = Point::new(HORIZONTAL_PADDING + span / 2.0, outer_top + outer_radius);

        ArcLintelGeometry {
            center,
            inner_radius,
            outer_radius,
            start_angle,
            end_angle,
            bounds: BoundingBox {
                x: center.x - span / 2.0,
                y: outer_top,
                width: span,
                height: inner_bottom.max(outer_bottom) - outer_top,
            },
            inner_left: Point::new(center.x - inner_chord / 2.0, inner_bottom),
            inner_right: Point::new(center.x + inner_chord / 2.0, inner_bottom),
            outer_right: Point::new(center.x + outer_chord / 2.0, outer_bottom),
        }
    }
}

impl Blueprint for ArcLintel {
    fn label(&self) -> &str {
        &self.label
    }

    fn render(&self, canvas: &mut dyn Canvas) -> Size {
        let outer_label = is_outer_measurement(canvas, self.span());
        let g = self.geometry(outer_label);
        let bounds = g.bounds;

        canvas.save();
        canvas.set_fill_style("#000");
        canvas.set_stroke_style("#000");
        canvas.set_font(Font::new(FONT_SIZE));
        canvas.set_text_baseline(TextBaseline::Middle);

        // sweep guide and bounding box
        canvas.save();
        canvas.set_stroke_style("#aaa");
        canvas.set_line_dash(&LEADER_DASH);
        stroke_polyline(canvas, &[g.inner_left, g.center, g.inner_right]);
        canvas.stroke_rect(bounds);
        canvas.restore();

        canvas.begin_path();
        canvas.arc(g.center, g.inner_radius, g.start_angle, g.end_angle, false);
        canvas.arc(g.center, g.outer_radius, g.end_angle, g.start_angle, true);
        canvas.close_path();
        canvas.stroke();

        let outer_radius_measure = draw_measure(canvas, &format_mm(g.outer_radius), g.center, g.outer_right);
        draw_measure(canvas, &format_mm(g.inner_radius), g.inner_left, g.center);
        draw_measure(
            canvas,
            &format_mm(bounds.width),
            Point::new(bounds.right(), bounds.y),
            Point::new(bounds.x, bounds.y),
        );
        let height_measure = draw_measure_with_offset(
            canvas,
            &format_mm(bounds.height),
            Point::new(bounds.right(), bounds.bottom()),
            Point::new(bounds.right(), bounds.y),
            VERTICAL_MEASURE_OFFSET,
        );

        canvas.fill_text(&self.label, Point::new(bounds.x, LABEL_Y));

        let degrees = to_whole_degrees(self.angle).to_string();
        let degrees_width = canvas.measure_text(&degrees).width;
        canvas.set_text_align(TextAlign::Start);
        canvas.fill_text(
            &format!("{degrees}°"),
            Point::new(g.center.x - degrees_width / 2.0, g.inner_left.y + FONT_SIZE),
        );
        canvas.restore();

        Size::new(
            height_measure.right() + HORIZONTAL_PADDING,
            outer_radius_measure.bottom().max(height_measure.bottom()) + VERTICAL_PADDING,
        )
    }
}
