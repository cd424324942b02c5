//! Straight lintel: a rectangle of the tangent's length

use super::measure::draw_measure;
use super::{Blueprint, LABEL_Y, format_mm};
use crate::canvas::{Canvas, Font, TextBaseline};
use crate::defaults::{FONT_SIZE, HORIZONTAL_PADDING, LABEL_OFFSET, VERTICAL_PADDING};
use crate::errors::{GeometryError, Result};
use crate::types::{BoundingBox, Length, Point, Size};

#[derive(Debug, Clone, PartialEq)]
pub struct StraightLintel {
    label: String,
    width: f64,
    thickness: f64,
}

impl StraightLintel {
    pub fn new(label: impl Into<String>, width: f64, thickness: f64) -> Result<Self> {
        let width = Length::try_positive(width).map_err(|e| GeometryError::numeric("lintel_width", e))?;
        let thickness =
            Length::try_positive(thickness).map_err(|e| GeometryError::numeric("lintel_thickness", e))?;
        Ok(StraightLintel {
            label: label.into(),
            width: width.raw(),
            thickness: thickness.raw(),
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Outline of the piece on the page
    pub fn outline(&self) -> BoundingBox {
        BoundingBox {
            x: HORIZONTAL_PADDING,
            y: LABEL_Y + LABEL_OFFSET,
            width: self.width,
            height: self.thickness,
        }
    }
}

impl Blueprint for StraightLintel {
    fn label(&self) -> &str {
        &self.label
    }

    fn render(&self, canvas: &mut dyn Canvas) -> Size {
        let piece = self.outline();
        let (left, top, right, bottom) = (piece.x, piece.y, piece.right(), piece.bottom());

        canvas.save();
        canvas.set_fill_style("#000");
        canvas.set_stroke_style("#000");
        canvas.stroke_rect(piece);
        canvas.set_font(Font::new(FONT_SIZE));
        canvas.set_text_baseline(TextBaseline::Middle);
        canvas.fill_text(&self.label, Point::new(left, LABEL_Y));
        canvas.restore();

        let width_measure = draw_measure(
            canvas,
            &format_mm(self.width),
            Point::new(left, bottom),
            Point::new(right, bottom),
        );
        let thickness_measure = draw_measure(
            canvas,
            &format_mm(self.thickness),
            Point::new(right, bottom),
            Point::new(right, top),
        );

        Size::new(
            right + thickness_measure.width + HORIZONTAL_PADDING,
            bottom + width_measure.height + VERTICAL_PADDING,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, RecordingCanvas};

    #[test]
    fn size_exceeds_the_piece() {
        let lintel = StraightLintel::new("Leg tangent", 800.0, 40.0).unwrap();
        let mut canvas = RecordingCanvas::new();
        let size = lintel.render(&mut canvas);
        assert!(size.width > 800.0 + 2.0 * HORIZONTAL_PADDING);
        assert!(size.height > 40.0);
        assert_eq!(canvas.save_depth(), 0);
    }

    #[test]
    fn draws_outline_label_and_two_measures() {
        let lintel = StraightLintel::new("Middle tangent", 500.0, 40.0).unwrap();
        let mut canvas = RecordingCanvas::new();
        lintel.render(&mut canvas);
        assert!(canvas.commands().contains(&DrawCommand::StrokeRect(BoundingBox {
            x: 80.0,
            y: 115.0,
            width: 500.0,
            height: 40.0,
        })));
        let texts: Vec<String> = canvas.texts().into_iter().map(|(t, _)| t).collect();
        assert_eq!(texts, ["Middle tangent", "500mm", "40mm"]);
        assert_eq!(canvas.texts()[0].1, Point::new(80.0, 55.0));
    }

    #[test]
    fn rendered_extent_fits_the_reported_size() {
        let lintel = StraightLintel::new("Back tangent", 694.0, 40.0).unwrap();
        let mut canvas = RecordingCanvas::new();
        let size = lintel.render(&mut canvas);
        let extent = canvas.extent();
        assert!(extent.right() <= size.width);
        assert!(extent.bottom() <= size.height);
    }

    #[test]
    fn rejects_empty_pieces() {
        assert!(StraightLintel::new("x", 0.0, 40.0).is_err());
        assert!(StraightLintel::new("x", 100.0, -1.0).is_err());
    }
}
