//! Print the blueprint sheet (or the construction view) of a preset as SVG.
//!
//! cargo run --example armchair_svg -- [armchair|seat|bed] [sheet|scene]
//! Set RUST_LOG=debug and build with `--features tracing` to see recompute logs.

use lathwork::scene::SURFACE;
use lathwork::{ControlPrimitives, Design, DesignConfig, SvgCanvas, render_scene};
use miette::{IntoDiagnostic, miette};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let primitives = match args.next().as_deref() {
        None | Some("armchair") => ControlPrimitives::armchair(),
        Some("seat") => ControlPrimitives::seat(),
        Some("bed") => ControlPrimitives::bed(),
        Some(other) => return Err(miette!("unknown preset `{other}`, expected armchair, seat or bed")),
    };

    let config = DesignConfig::default();
    let design = Design::new(config)?;
    let report = design.recompute(&primitives)?;
    tracing::info!(
        laths = report.lath_count(),
        remaining = report.remaining_length(),
        "recomputed"
    );

    let mut canvas = SvgCanvas::new();
    let svg = match args.next().as_deref() {
        None | Some("sheet") => {
            let layout = design.blueprints(&report)?.render(&mut canvas);
            canvas.finish(layout.size)
        }
        Some("scene") => {
            render_scene(
                &mut canvas,
                &primitives,
                Some(&report.silhouette),
                Some(&report.layout),
                &config.display,
            );
            canvas.finish(SURFACE)
        }
        Some(other) => return Err(miette!("unknown output `{other}`, expected sheet or scene")),
    };

    use std::io::Write as _;
    std::io::stdout().write_all(svg.as_bytes()).into_diagnostic()?;
    Ok(())
}
