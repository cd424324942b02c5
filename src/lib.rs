//! Chair silhouettes built from two arcs and three tangents, a continuous lath
//! layout along them, and dimensioned blueprints of the lintels that carry the
//! laths.
//!
//! ```
//! use lathwork::{ControlPrimitives, Design, RecordingCanvas};
//!
//! let design = Design::default();
//! let report = design.recompute(&ControlPrimitives::armchair())?;
//! assert!(report.lath_count() > 0);
//!
//! let mut canvas = RecordingCanvas::new();
//! let sheet = design.blueprints(&report)?.render(&mut canvas);
//! assert_eq!(sheet.placements.len(), 5);
//! # Ok::<(), lathwork::GeometryError>(())
//! ```

pub mod angle;
pub mod blueprint;
pub mod canvas;
pub mod defaults;
pub mod design;
pub mod errors;
pub mod geometry;
pub mod interaction;
pub mod layout;
mod log;
pub mod scene;
pub mod silhouette;
pub mod types;

pub use blueprint::{ArcLintel, Blueprint, BlueprintPiece, BlueprintSheet, RadiusFace, StraightLintel};
pub use canvas::{Canvas, RecordingCanvas, SvgCanvas};
pub use design::{ArcReport, Design, DesignConfig, DesignReport, DisplayOptions};
pub use errors::{GeometryError, Result};
pub use interaction::{Interaction, InteractionState};
pub use layout::{LathLayout, LathPattern, LinkLayout};
pub use scene::render_scene;
pub use silhouette::{ArcLink, ControlPrimitives, Link, PathLink, Silhouette};
pub use types::{BoundingBox, Circle, Point, Segment, Size, Vector};
