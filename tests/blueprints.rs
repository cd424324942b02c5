//! Blueprint sheets rendered through both canvas backends

use lathwork::blueprint::Blueprint;
use lathwork::scene::SURFACE;
use lathwork::{
    ControlPrimitives, Design, DesignConfig, RecordingCanvas, StraightLintel, SvgCanvas, render_scene,
};

#[test]
fn straight_lintel_leaves_room_for_its_measures() {
    let piece = StraightLintel::new("Leg tangent", 800.0, 40.0).unwrap();
    let mut canvas = RecordingCanvas::new();
    let size = piece.render(&mut canvas);
    assert!(size.width > 800.0);
    assert!(size.height > 40.0);
    let extent = canvas.extent();
    assert!(extent.right() <= size.width && extent.bottom() <= size.height);
}

#[test]
fn armchair_sheet_labels() {
    let design = Design::default();
    let report = design.recompute(&ControlPrimitives::armchair()).unwrap();
    let mut canvas = RecordingCanvas::new();
    design.blueprints(&report).unwrap().render(&mut canvas);
    let texts: Vec<String> = canvas.texts().into_iter().map(|(t, _)| t).collect();
    insta::assert_snapshot!(texts.join("\n"), @r"
    Leg tangent
    527mm
    40mm
    Middle tangent
    178mm
    40mm
    Back tangent
    694mm
    40mm
    300mm
    260mm
    244mm
    63mm
    Leg arc
    48°
    360mm
    320mm
    346mm
    79mm
    Back arc
    57°
    ");
}

#[test]
fn thicker_lintels_grow_the_sheet() {
    let primitives = ControlPrimitives::seat();
    let thin = Design::default();
    let thick = Design::new(DesignConfig::default().with_lintel_thickness(80.0).unwrap()).unwrap();

    let height = |design: &Design| {
        let report = design.recompute(&primitives).unwrap();
        let mut canvas = RecordingCanvas::new();
        design.blueprints(&report).unwrap().render(&mut canvas).size.height
    };
    assert!(height(&thick) > height(&thin));
}

#[test]
fn sheet_svg_document() {
    let design = Design::default();
    let report = design.recompute(&ControlPrimitives::bed()).unwrap();
    let mut canvas = SvgCanvas::new();
    let layout = design.blueprints(&report).unwrap().render(&mut canvas);
    let svg = canvas.finish(layout.size);

    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.ends_with("</svg>\n"));
    assert_eq!(svg.matches("<text").count(), 21);
    assert_eq!(svg.matches("Back arc").count(), 1);
    // three straight outlines and the dashed boxes around both arcs
    assert_eq!(svg.matches("<rect").count(), 5);
    assert!(svg.contains("stroke-dasharray:10,8"));
    assert!(!svg.contains("NaN"));
}

#[test]
fn scene_svg_covers_the_surface() {
    let primitives = ControlPrimitives::armchair();
    let report = Design::default().recompute(&primitives).unwrap();
    let mut canvas = SvgCanvas::new();
    render_scene(
        &mut canvas,
        &primitives,
        Some(&report.silhouette),
        Some(&report.layout),
        &Default::default(),
    );
    let svg = canvas.finish(SURFACE);
    assert!(svg.contains(r#"viewBox="0 0 2200 1800""#));
    assert!(svg.contains("stroke:#f00"));
    assert_eq!(svg.matches("stroke:#f00").count(), report.lath_count());
}
