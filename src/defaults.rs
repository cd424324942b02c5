//! Default sizes and settings (all in millimetres)

use crate::angle::EIGHTH_TURN;

// Lath stock
pub const LATH_WIDTH: f64 = 55.0;
pub const LATH_GAP: f64 = 18.0;
pub const LINTEL_THICKNESS: f64 = 40.0;

// Construction surface
pub const SURFACE_WIDTH: f64 = 2200.0;
pub const SURFACE_HEIGHT: f64 = 1800.0;
/// Millimetres per screen pixel
pub const SURFACE_SCALE: f64 = 3.5;
pub const HANDLE_RADIUS: f64 = 40.0;
pub const CIRCLE_HIT_MARGIN: f64 = 10.0 * SURFACE_SCALE;
pub const MIN_CIRCLE_RADIUS: f64 = 100.0;
pub const MAX_CIRCLE_RADIUS: f64 = 1000.0;
pub const CONSTRUCTION_DASH: [f64; 2] = [8.0 * SURFACE_SCALE, 10.0 * SURFACE_SCALE];

// Dimension annotations
pub const MEASURE_OFFSET: f64 = 60.0;
pub const MEASURE_LABEL_MARGIN: f64 = 20.0;
pub const ARROW_SIZE: f64 = 25.0;
pub const ARROW_ANGLE: f64 = EIGHTH_TURN;
pub const FONT_SIZE: f64 = 30.0;
pub const FONT_FAMILY: &str = "Arial";
pub const LEADER_DASH: [f64; 2] = [10.0, 8.0];

// Blueprint page layout
pub const HORIZONTAL_PADDING: f64 = 80.0;
pub const VERTICAL_PADDING: f64 = 40.0;
pub const LABEL_OFFSET: f64 = 60.0;
pub const VERTICAL_MEASURE_OFFSET: f64 = 100.0;
