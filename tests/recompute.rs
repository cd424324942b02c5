//! Whole recompute passes driven the way a host would drive them

use lathwork::geometry::{distance, tangency_error};
use lathwork::interaction::Handle;
use lathwork::{
    ControlPrimitives, Design, DesignConfig, DisplayOptions, GeometryError, Interaction, Link, Point,
    RecordingCanvas, render_scene,
};

fn presets() -> [(&'static str, ControlPrimitives); 3] {
    [
        ("armchair", ControlPrimitives::armchair()),
        ("seat", ControlPrimitives::seat()),
        ("bed", ControlPrimitives::bed()),
    ]
}

#[test]
fn every_preset_recomputes() {
    let design = Design::default();
    for (name, primitives) in presets() {
        let report = design.recompute(&primitives).unwrap_or_else(|e| panic!("{name}: {e}"));
        let s = &report.silhouette;
        assert!(tangency_error(&s.leg_arc.circle, s.leg_tangent.p2, s.leg_tangent.p1).abs() < 1e-9);
        assert!(tangency_error(&s.leg_arc.circle, s.middle_tangent.p1, s.middle_tangent.p2).abs() < 1e-9);
        assert!(tangency_error(&s.back_arc.circle, s.middle_tangent.p2, s.middle_tangent.p1).abs() < 1e-9);
        assert!(tangency_error(&s.back_arc.circle, s.back_tangent.p1, s.back_tangent.p2).abs() < 1e-9);
        assert!(report.lath_count() > 0, "{name}");
        assert!(!report.layout.has_degenerate_link(), "{name}");
    }
}

#[test]
fn path_length_is_accounted_for() {
    // every link's length is laths + gaps + leftover, minus what the previous
    // link already covered
    let design = Design::default();
    let report = design.recompute(&ControlPrimitives::armchair()).unwrap();
    let pitch = design.config().lath.pitch();
    let traversal = report.silhouette.traversal();
    let mut offset = 0.0;
    for (link, layout) in traversal.iter().zip(&report.layout.links) {
        if let lathwork::PathLink::Straight(segment) = link {
            let covered = layout.count as f64 * pitch + layout.leftover + offset;
            assert!((covered - segment.length()).abs() < 1e-9);
        }
        offset = -layout.leftover;
    }
}

#[test]
fn recompute_is_deterministic() {
    let design = Design::new(DesignConfig::default().with_lath(40.0, 10.0).unwrap()).unwrap();
    let primitives = ControlPrimitives::seat();
    assert_eq!(design.recompute(&primitives), design.recompute(&primitives));
}

#[test]
fn dragging_circles_together_fails_then_recovers() {
    let design = Design::default();
    let mut ui = Interaction::new(ControlPrimitives::armchair(), DisplayOptions::default());

    let back_center = Handle::BackCenter.position(ui.primitives());
    assert!(ui.pointer_down(back_center));
    let leg_center = ui.primitives().leg_circle.center;
    let snapshot = ui.pointer_move(Point::new(leg_center.x + 100.0, leg_center.y - 100.0)).unwrap();
    assert!(matches!(
        design.recompute(&snapshot),
        Err(GeometryError::DegenerateTangent { .. })
    ));

    let snapshot = ui.pointer_move(back_center).unwrap();
    ui.pointer_up();
    let report = design.recompute(&snapshot).unwrap();
    assert_eq!(report, design.recompute(&ControlPrimitives::armchair()).unwrap());
}

#[test]
fn laths_follow_the_silhouette_from_head_to_foot() {
    let primitives = ControlPrimitives::armchair();
    let report = Design::default().recompute(&primitives).unwrap();
    let laths: Vec<_> = report.layout.laths().collect();
    let first = laths.first().unwrap();
    let last = laths.last().unwrap();
    assert!(distance(first.p1, primitives.head_point) < 1e-9);
    assert!(distance(last.p2, primitives.foot_point) < distance(first.p1, primitives.foot_point));
    assert!((report.total_length() - report.silhouette.links().iter().map(Link::length).sum::<f64>()).abs() < 1e-9);
}

#[test]
fn scene_after_failed_recompute_keeps_controls() {
    let mut primitives = ControlPrimitives::armchair();
    primitives.foot_point = primitives.leg_circle.center;
    let result = Design::default().recompute(&primitives);
    assert!(result.is_err());

    let mut canvas = RecordingCanvas::new();
    render_scene(&mut canvas, &primitives, None, None, &DisplayOptions::default());
    assert_eq!(canvas.save_depth(), 0);
    assert!(!canvas.commands().is_empty());
}
