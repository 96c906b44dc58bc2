//! Flight-plan artifact in the canonical JSON shape consumed by
//! downstream flight-control and documentation tooling.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::models::Waypoint;
use crate::planner::SurveyPlan;

/// Fixed advisory list attached to every exported plan.
pub const SAFETY_GUIDELINES: [&str; 5] = [
    "Maintain visual line of sight",
    "Check weather conditions before flight",
    "Obtain necessary permissions from ASI/local authorities",
    "Respect cultural sensitivities around sacred sites",
    "Have backup landing sites identified",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanMetadata {
    pub site_name: String,
    pub total_waypoints: usize,
    /// Total route time in minutes.
    pub estimated_flight_time: f64,
    pub safety_altitude: f64,
    pub return_to_home: bool,
}

/// The single exported artifact shape. No format negotiation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightPlanDocument {
    pub metadata: PlanMetadata,
    pub waypoints: Vec<Waypoint>,
    pub safety_guidelines: Vec<String>,
}

impl FlightPlanDocument {
    pub fn new(site_name: impl Into<String>, plan: &SurveyPlan, safety_altitude_m: f64) -> Self {
        Self {
            metadata: PlanMetadata {
                site_name: site_name.into(),
                total_waypoints: plan.route.waypoints.len(),
                estimated_flight_time: plan.route.total_time_s / 60.0,
                safety_altitude: safety_altitude_m,
                return_to_home: true,
            },
            waypoints: plan.route.waypoints.clone(),
            safety_guidelines: SAFETY_GUIDELINES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Write the artifact to disk. The file handle is scoped to this
    /// call and closed on both success and failure; I/O errors propagate
    /// without retry.
    pub fn write(&self, path: &Path) -> Result<(), PlanError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        tracing::info!(path = %path.display(), waypoints = self.metadata.total_waypoints, "flight plan exported");
        Ok(())
    }
}
