//! Dimensioned blueprints of the lintel pieces.
//!
//! Each piece is a template for cutting one lintel: the outline at full size,
//! a label, and dimension annotations. Rendering returns the size of the page
//! area the piece occupies, which a [`BlueprintSheet`] uses to stack pieces.

pub mod arc;
pub mod measure;
pub mod sheet;
pub mod straight;

use enum_dispatch::enum_dispatch;

pub use arc::{ArcLintel, RadiusFace};
pub use measure::{MeasureLayout, draw_measure, draw_measure_with_offset, is_outer_measurement};
pub use sheet::{BlueprintSheet, PiecePlacement, SheetLayout};
pub use straight::StraightLintel;

use crate::canvas::Canvas;
use crate::defaults::{FONT_SIZE, VERTICAL_PADDING};
use crate::types::Size;

/// A piece that can draw itself at the canvas origin
#[enum_dispatch]
pub trait Blueprint {
    fn label(&self) -> &str;

    /// Draw the piece and return the area it took
    fn render(&self, canvas: &mut dyn Canvas) -> Size;
}

#[enum_dispatch(Blueprint)]
#[derive(Debug, Clone, PartialEq)]
pub enum BlueprintPiece {
    StraightLintel,
    ArcLintel,
}

/// Millimetre label, rounded to whole millimetres
pub fn format_mm(value: f64) -> String {
    // avoid printing "-0mm"
    let rounded = value.round() + 0.0;
    format!("{rounded}mm")
}

/// Baseline of the piece label at the top of each blueprint
pub(crate) const LABEL_Y: f64 = VERTICAL_PADDING + FONT_SIZE / 2.0;
