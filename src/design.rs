//! Design configuration and the recompute pass.
//!
//! A recompute takes the control primitives, builds the silhouette, lays the
//! laths along it and collects every figure the host displays. It either
//! succeeds as a whole or fails with the first [`GeometryError`]; nothing is
//! kept between passes.

use crate::blueprint::BlueprintSheet;
use crate::defaults;
use crate::errors::{GeometryError, Result};
use crate::layout::{LathLayout, LathPattern};
use crate::log::debug;
use crate::silhouette::{ArcLink, ControlPrimitives, Link, Silhouette};
use crate::types::Length;

/// Which groups of the construction view are drawn (and hit-testable)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub construction_lines: bool,
    pub construction_handles: bool,
    pub laths: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            construction_lines: true,
            construction_handles: true,
            laths: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignConfig {
    pub lath: LathPattern,
    pub lintel_thickness: f64,
    pub display: DisplayOptions,
}

impl Default for DesignConfig {
    fn default() -> Self {
        DesignConfig {
            lath: LathPattern::default(),
            lintel_thickness: defaults::LINTEL_THICKNESS,
            display: DisplayOptions::default(),
        }
    }
}

impl DesignConfig {
    pub fn with_lath(mut self, width: f64, gap: f64) -> Result<Self> {
        self.lath = LathPattern::new(width, gap)?;
        Ok(self)
    }

    pub fn with_lintel_thickness(mut self, thickness: f64) -> Result<Self> {
        self.lintel_thickness = Length::try_positive(thickness)
            .map_err(|e| GeometryError::numeric("lintel_thickness", e))?
            .raw();
        Ok(self)
    }

    pub fn with_display(mut self, display: DisplayOptions) -> Self {
        self.display = display;
        self
    }

    /// Check a config assembled field by field
    pub fn validate(&self) -> Result<()> {
        LathPattern::new(self.lath.width(), self.lath.gap())?;
        Length::try_positive(self.lintel_thickness).map_err(|e| GeometryError::numeric("lintel_thickness", e))?;
        Ok(())
    }
}

/// Figures describing one arc of the silhouette
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcReport {
    pub radius: f64,
    /// Unsigned sweep in radians
    pub angle: f64,
    pub length: f64,
    pub chord_length: f64,
    /// Sagitta: stock thickness needed to cut the arc from a straight board
    pub thickness: f64,
}

impl ArcReport {
    fn new(arc: &ArcLink) -> Self {
        ArcReport {
            radius: arc.circle.radius,
            angle: arc.sweep().abs(),
            length: arc.length(),
            chord_length: arc.chord_length(),
            thickness: arc.sagitta(),
        }
    }
}

/// Everything one recompute produces
#[derive(Debug, Clone, PartialEq)]
pub struct DesignReport {
    pub silhouette: Silhouette,
    pub leg_tangent_length: f64,
    pub middle_tangent_length: f64,
    pub back_tangent_length: f64,
    pub leg_arc: ArcReport,
    pub back_arc: ArcReport,
    pub layout: LathLayout,
}

impl DesignReport {
    pub fn lath_count(&self) -> usize {
        self.layout.total_count()
    }

    /// Lath stock left after the foot
    pub fn remaining_length(&self) -> f64 {
        self.layout.unused_stock_length()
    }

    pub fn total_length(&self) -> f64 {
        self.silhouette.total_length()
    }
}

/// Configured design, recomputed against whatever primitives the host holds
#[derive(Debug, Clone, Default)]
pub struct Design {
    config: DesignConfig,
}

impl Design {
    pub fn new(config: DesignConfig) -> Result<Self> {
        config.validate()?;
        Ok(Design { config })
    }

    pub fn config(&self) -> &DesignConfig {
        &self.config
    }

    pub fn recompute(&self, primitives: &ControlPrimitives) -> Result<DesignReport> {
        let silhouette = Silhouette::construct(primitives)?;
        let layout = self.config.lath.lay_out_silhouette(&silhouette);
        debug!(
            "recompute: {} laths, {:.1} mm of stock left",
            layout.total_count(),
            layout.unused_stock_length()
        );
        Ok(DesignReport {
            leg_tangent_length: silhouette.leg_tangent.length(),
            middle_tangent_length: silhouette.middle_tangent.length(),
            back_tangent_length: silhouette.back_tangent.length(),
            leg_arc: ArcReport::new(&silhouette.leg_arc),
            back_arc: ArcReport::new(&silhouette.back_arc),
            silhouette,
            layout,
        })
    }

    /// Lintel blueprints for a computed report
    pub fn blueprints(&self, report: &DesignReport) -> Result<BlueprintSheet> {
        BlueprintSheet::for_silhouette(&report.silhouette, self.config.lintel_thickness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = DesignConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.lath.width(), 55.0);
        assert_eq!(config.lath.gap(), 18.0);
        assert_eq!(config.lintel_thickness, 40.0);
    }

    #[test]
    fn builders_validate() {
        assert!(DesignConfig::default().with_lath(60.0, 10.0).is_ok());
        assert!(matches!(
            DesignConfig::default().with_lath(55.0, 0.0),
            Err(GeometryError::InvalidConfiguration { field: "lath_gap", .. })
        ));
        assert!(DesignConfig::default().with_lath(-1.0, 10.0).is_err());
        assert!(matches!(
            DesignConfig::default().with_lintel_thickness(0.0),
            Err(GeometryError::InvalidConfiguration { field: "lintel_thickness", .. })
        ));
        let config = DesignConfig {
            lintel_thickness: f64::INFINITY,
            ..DesignConfig::default()
        };
        assert!(Design::new(config).is_err());
    }

    #[test]
    fn armchair_report() {
        let report = Design::default().recompute(&ControlPrimitives::armchair()).unwrap();
        assert_eq!(report.leg_tangent_length.round(), 527.0);
        assert_eq!(report.middle_tangent_length.round(), 178.0);
        assert_eq!(report.back_tangent_length.round(), 694.0);
        assert!((report.leg_arc.length - 300.0 * 0.8393).abs() < 0.5);
        assert!(report.leg_arc.thickness > 0.0 && report.leg_arc.thickness < report.leg_arc.chord_length);
        assert!(report.remaining_length() >= -1e-9);
        assert_eq!(report.lath_count(), 27);
        assert_eq!(report.lath_count(), report.layout.laths().count());
    }

    #[test]
    fn failing_recompute_reports_the_tangent() {
        let mut primitives = ControlPrimitives::armchair();
        primitives.head_point = primitives.back_circle.center;
        let err = Design::default().recompute(&primitives).unwrap_err();
        assert!(matches!(err, GeometryError::DegenerateTangent { .. }));
    }
}
