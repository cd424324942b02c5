//! Construction view: handles, control circles, the silhouette and its laths
//! on the full design surface.

use crate::angle::FULL_TURN;
use crate::canvas::{Canvas, stroke_segment};
use crate::defaults::{CONSTRUCTION_DASH, HANDLE_RADIUS, SURFACE_HEIGHT, SURFACE_SCALE, SURFACE_WIDTH};
use crate::design::DisplayOptions;
use crate::interaction::{CircleRef, Handle};
use crate::layout::LathLayout;
use crate::silhouette::{ArcLink, ControlPrimitives, Silhouette};
use crate::types::{BoundingBox, Circle, Point, Segment, Size};

pub const SURFACE: Size = Size::new(SURFACE_WIDTH, SURFACE_HEIGHT);

const HANDLE_FILL: &str = "#ccc";
const GUIDE_COLOR: &str = "#ccc";
const LATH_COLOR: &str = "#f00";

/// Draw the construction view.
///
/// Without a silhouette (the last recompute failed) only the handles and
/// circles are drawn so the user can move them apart again.
pub fn render_scene(
    canvas: &mut dyn Canvas,
    primitives: &ControlPrimitives,
    silhouette: Option<&Silhouette>,
    layout: Option<&LathLayout>,
    display: &DisplayOptions,
) {
    canvas.save();
    canvas.set_stroke_style(if display.construction_lines { "#000" } else { "#bbb" });
    canvas.set_fill_style("#fff");
    canvas.set_line_width(SURFACE_SCALE);
    canvas.fill_rect(BoundingBox {
        x: 0.0,
        y: 0.0,
        width: SURFACE.width,
        height: SURFACE.height,
    });

    if display.construction_handles {
        canvas.save();
        canvas.set_stroke_style("#000");
        canvas.set_fill_style(HANDLE_FILL);
        for handle in Handle::ALL {
            let center = handle.position(primitives);
            circle_path(canvas, &Circle { center, radius: HANDLE_RADIUS });
            canvas.fill();
            canvas.stroke();
        }
        canvas.restore();
    }

    if display.construction_lines {
        canvas.save();
        canvas.set_stroke_style(GUIDE_COLOR);
        canvas.set_line_dash(&CONSTRUCTION_DASH);
        for circle in CircleRef::ALL {
            circle_path(canvas, &circle.circle(primitives));
            canvas.stroke();
        }
        canvas.restore();
    }

    if let Some(silhouette) = silhouette {
        stroke_segment(canvas, &silhouette.leg_tangent);
        stroke_segment(canvas, &silhouette.middle_tangent);
        stroke_segment(canvas, &silhouette.back_tangent);
        stroke_arc(canvas, &silhouette.leg_arc);
        stroke_arc(canvas, &silhouette.back_arc);

        if display.construction_lines {
            stroke_angle_guide(
                canvas,
                silhouette.leg_arc.circle.center,
                silhouette.leg_tangent.p2,
                silhouette.middle_tangent.p1,
            );
            stroke_angle_guide(
                canvas,
                silhouette.back_arc.circle.center,
                silhouette.middle_tangent.p2,
                silhouette.back_tangent.p1,
            );
        }
    }

    if let Some(layout) = layout.filter(|_| display.laths) {
        canvas.save();
        canvas.set_stroke_style(LATH_COLOR);
        for lath in layout.laths() {
            stroke_segment(canvas, lath);
        }
        canvas.restore();
    }
    canvas.restore();
}

fn circle_path(canvas: &mut dyn Canvas, circle: &Circle) {
    canvas.begin_path();
    canvas.arc(circle.center, circle.radius, 0.0, FULL_TURN, false);
}

fn stroke_arc(canvas: &mut dyn Canvas, arc: &ArcLink) {
    canvas.begin_path();
    canvas.arc(
        arc.circle.center,
        arc.circle.radius,
        arc.start_angle,
        arc.end_angle,
        arc.orientation.is_counter_clockwise(),
    );
    canvas.stroke();
}

/// Dashed radii from a circle center to both ends of its arc
fn stroke_angle_guide(canvas: &mut dyn Canvas, center: Point, p1: Point, p2: Point) {
    canvas.save();
    canvas.set_stroke_style(GUIDE_COLOR);
    canvas.set_line_dash(&CONSTRUCTION_DASH);
    stroke_segment(canvas, &Segment::new(center, p1));
    stroke_segment(canvas, &Segment::new(center, p2));
    canvas.restore();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, RecordingCanvas};
    use crate::layout::LathPattern;

    fn scene(display: DisplayOptions) -> (RecordingCanvas, usize) {
        let primitives = ControlPrimitives::armchair();
        let silhouette = Silhouette::construct(&primitives).unwrap();
        let layout = LathPattern::default().lay_out_silhouette(&silhouette);
        let mut canvas = RecordingCanvas::new();
        render_scene(&mut canvas, &primitives, Some(&silhouette), Some(&layout), &display);
        (canvas, layout.total_count())
    }

    #[test]
    fn full_scene_draws_every_group() {
        let (canvas, laths) = scene(DisplayOptions::default());
        // three tangents, four guide radii, one stroke per lath
        assert_eq!(canvas.stroked_polylines().len(), 7 + laths);
        assert!(canvas.commands().contains(&DrawCommand::StrokeStyle(LATH_COLOR.to_string())));
        assert_eq!(canvas.save_depth(), 0);
    }

    #[test]
    fn hidden_groups_are_skipped() {
        let display = DisplayOptions {
            construction_lines: false,
            construction_handles: false,
            laths: false,
        };
        let (canvas, _) = scene(display);
        assert_eq!(canvas.stroked_polylines().len(), 3);
        // only the two silhouette arcs remain
        let arcs = canvas
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Arc { .. }))
            .count();
        assert_eq!(arcs, 2);
        assert!(canvas.commands().contains(&DrawCommand::StrokeStyle("#bbb".to_string())));
    }

    #[test]
    fn failed_recompute_still_shows_controls() {
        let primitives = ControlPrimitives::armchair();
        let mut canvas = RecordingCanvas::new();
        render_scene(&mut canvas, &primitives, None, None, &DisplayOptions::default());
        assert!(canvas.stroked_polylines().is_empty());
        let arcs = canvas
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Arc { .. }))
            .count();
        assert_eq!(arcs, Handle::ALL.len() + CircleRef::ALL.len());
    }
}
