//! Error taxonomy for survey planning.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    /// A planning parameter is outside its valid range. Raised before any
    /// waypoint is generated.
    #[error("invalid parameter {name}={value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A no-fly zone was registered with too few vertices to form a polygon.
    #[error("no-fly zone \"{reason}\" has {vertex_count} vertices, need at least 3")]
    EmptyZoneDefinition { reason: String, vertex_count: usize },

    /// Artifact write failure, propagated to the caller without retry.
    #[error("failed to write flight plan artifact")]
    Io(#[from] std::io::Error),

    /// Artifact encoding failure.
    #[error("failed to encode flight plan artifact")]
    Encode(#[from] serde_json::Error),
}

impl PlanError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}
