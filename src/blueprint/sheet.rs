//! A printable sheet of lintel blueprints stacked top to bottom

use super::{ArcLintel, Blueprint, BlueprintPiece, RadiusFace, StraightLintel};
use crate::canvas::Canvas;
use crate::errors::Result;
use crate::log::debug;
use crate::silhouette::Silhouette;
use crate::types::{Point, Size};

/// Where one piece landed on the sheet
#[derive(Debug, Clone, PartialEq)]
pub struct PiecePlacement {
    pub label: String,
    pub origin: Point,
    pub size: Size,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub placements: Vec<PiecePlacement>,
    /// Widest piece by the summed piece heights
    pub size: Size,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlueprintSheet {
    pieces: Vec<BlueprintPiece>,
}

impl BlueprintSheet {
    pub fn new(pieces: Vec<BlueprintPiece>) -> Self {
        BlueprintSheet { pieces }
    }

    /// The five lintels of a silhouette: three straight, then the leg arc
    /// measured on its outer face and the back arc on its inner face.
    pub fn for_silhouette(silhouette: &Silhouette, thickness: f64) -> Result<Self> {
        let straight = |label: &str, length: f64| -> Result<BlueprintPiece> {
            // a sliver shorter than half a millimetre is still cut as 1 mm
            Ok(StraightLintel::new(label, length.round().max(1.0), thickness)?.into())
        };
        let pieces = vec![
            straight("Leg tangent", silhouette.leg_tangent.length())?,
            straight("Middle tangent", silhouette.middle_tangent.length())?,
            straight("Back tangent", silhouette.back_tangent.length())?,
            ArcLintel::new(
                "Leg arc",
                silhouette.leg_arc.circle.radius,
                silhouette.leg_arc.sweep().abs(),
                thickness,
                RadiusFace::Outer,
            )?
            .into(),
            ArcLintel::new(
                "Back arc",
                silhouette.back_arc.circle.radius,
                silhouette.back_arc.sweep().abs(),
                thickness,
                RadiusFace::Inner,
            )?
            .into(),
        ];
        debug!("blueprint sheet for a silhouette of length {:.1}", silhouette.total_length());
        Ok(BlueprintSheet { pieces })
    }

    pub fn pieces(&self) -> &[BlueprintPiece] {
        &self.pieces
    }

    /// Render every piece below the previous one
    pub fn render(&self, canvas: &mut dyn Canvas) -> SheetLayout {
        let mut placements = Vec::with_capacity(self.pieces.len());
        let mut y = 0.0;
        let mut width: f64 = 0.0;
        for piece in &self.pieces {
            canvas.save();
            canvas.translate(0.0, y);
            let size = piece.render(canvas);
            canvas.restore();

            placements.push(PiecePlacement {
                label: piece.label().to_string(),
                origin: Point::new(0.0, y),
                size,
            });
            y += size.height;
            width = width.max(size.width);
        }
        SheetLayout {
            placements,
            size: Size::new(width, y),
        }
    }
}
