//! Error types with diagnostics using miette
//!
//! Geometry failures abort a whole recompute pass; the host keeps whatever it
//! displayed last. Pattern layouts that cannot be expressed on an arc are not
//! errors, see [`crate::layout::LinkLayout::degenerate`].

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Errors raised while constructing silhouettes, layouts and blueprints
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The circles overlap, touch or are nested, so the requested tangent
    /// does not exist.
    #[error("no tangent: center distance {center_distance} does not exceed {limit}")]
    #[diagnostic(
        code(lathwork::geometry::degenerate_tangent),
        help("move the control circles apart or shrink their radii")
    )]
    DegenerateTangent { center_distance: f64, limit: f64 },

    /// A caller-supplied value violates the configuration contract.
    #[error("invalid configuration for `{field}`: {reason}")]
    #[diagnostic(code(lathwork::config::invalid))]
    InvalidConfiguration {
        field: &'static str,
        reason: String,
    },
}

impl GeometryError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        GeometryError::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }

    /// Attach a field name to a numeric validation failure
    pub(crate) fn numeric(field: &'static str, err: NumericError) -> Self {
        Self::invalid(field, err.to_string())
    }
}

pub type Result<T, E = GeometryError> = std::result::Result<T, E>;
