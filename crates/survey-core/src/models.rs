//! Core data models for survey flight planning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Rectangular survey bound in decimal degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SurveyArea {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl SurveyArea {
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Result<Self, PlanError> {
        let area = Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        };
        area.validate()?;
        Ok(area)
    }

    /// Check the min < max invariant on both axes.
    pub fn validate(&self) -> Result<(), PlanError> {
        if !self.min_lat.is_finite() || !self.max_lat.is_finite() || self.min_lat >= self.max_lat {
            return Err(PlanError::invalid(
                "min_lat",
                self.min_lat,
                "survey area requires min_lat < max_lat",
            ));
        }
        if !self.min_lon.is_finite() || !self.max_lon.is_finite() || self.min_lon >= self.max_lon {
            return Err(PlanError::invalid(
                "min_lon",
                self.min_lon,
                "survey area requires min_lon < max_lon",
            ));
        }
        Ok(())
    }

    /// Reference latitude for the longitude degree scale, fixed once per run.
    pub fn mean_lat(&self) -> f64 {
        (self.min_lat + self.max_lat) / 2.0
    }

    pub fn centroid(&self) -> (f64, f64) {
        (self.mean_lat(), (self.min_lon + self.max_lon) / 2.0)
    }

    /// Inclusive containment check.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }
}

/// Camera intrinsics used for footprint and step sizing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraProfile {
    pub sensor_width_mm: f64,
    pub focal_length_mm: f64,
    pub image_width_px: f64,
}

impl CameraProfile {
    /// DJI Phantom 4 Pro, the default fieldwork camera.
    pub fn phantom_4_pro() -> Self {
        Self {
            sensor_width_mm: 13.2,
            focal_length_mm: 8.8,
            image_width_px: 5472.0,
        }
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        if !(self.sensor_width_mm > 0.0) {
            return Err(PlanError::invalid(
                "sensor_width_mm",
                self.sensor_width_mm,
                "sensor width must be positive",
            ));
        }
        if !(self.focal_length_mm > 0.0) {
            return Err(PlanError::invalid(
                "focal_length_mm",
                self.focal_length_mm,
                "focal length must be positive",
            ));
        }
        if !(self.image_width_px > 0.0) {
            return Err(PlanError::invalid(
                "image_width_px",
                self.image_width_px,
                "image width must be positive",
            ));
        }
        Ok(())
    }

    /// Ground sample distance in cm/pixel at the given altitude.
    ///
    /// The units match the quality thresholds used by downstream
    /// photogrammetry configuration, so the formula is fixed.
    pub fn ground_sample_distance(&self, altitude_m: f64) -> f64 {
        (self.sensor_width_mm * altitude_m * 100.0) / (self.focal_length_mm * self.image_width_px)
    }

    /// Ground footprint width of a single image in meters.
    pub fn ground_coverage_m(&self, altitude_m: f64) -> f64 {
        self.ground_sample_distance(altitude_m) * self.image_width_px / 100.0
    }
}

/// Stable identifier assigned to a no-fly zone at registration time,
/// so callers never have to reference zones by insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneId(pub u32);

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "zone-{}", self.0)
    }
}

/// A polygonal region waypoints must not enter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoFlyZone {
    pub id: ZoneId,
    /// Why the zone exists (cultural sensitivity, safety, permissions).
    pub reason: String,
    /// Polygon vertices as [lat, lon] pairs. The ring is implicitly
    /// closed: the last vertex connects back to the first.
    pub vertices: Vec<[f64; 2]>,
    /// Advisory altitude ceiling in meters above ground. Not part of the
    /// containment test.
    pub ceiling_m: f64,
    pub registered_at: DateTime<Utc>,
}

impl NoFlyZone {
    /// Check if a point is inside this zone's polygon.
    ///
    /// Ray casting (even-odd rule) over the implicitly closed vertex
    /// ring. Behavior on self-intersecting polygons is undefined by
    /// contract; zones must be validated before registration.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let yi = self.vertices[i][0];
            let xi = self.vertices[i][1];
            let yj = self.vertices[j][0];
            let xj = self.vertices[j][1];

            if ((yi > lat) != (yj > lat)) && (lon < (xj - xi) * (lat - yi) / (yj - yi) + xi) {
                inside = !inside;
            }
            j = i;
        }

        inside
    }
}

/// Shot classification carried on each waypoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotType {
    /// Straight-down photogrammetry capture
    #[default]
    Nadir,
    /// Angled orbit shot of a structure facade
    ArchitecturalDetail,
}

impl ShotType {
    /// Nadir is the implied default in the exported artifact.
    pub fn is_nadir(&self) -> bool {
        matches!(self, ShotType::Nadir)
    }
}

/// A single capture position on the route.
///
/// Immutable once appended to a route, except for the segment fields,
/// which the route annotator fills in a second pass. The first waypoint
/// of a route keeps both segment fields at 0.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Waypoint {
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "altitude")]
    pub altitude_m: f64,
    #[serde(rename = "gimbal_angle")]
    pub gimbal_angle_deg: f64,
    pub capture: bool,
    #[serde(default, skip_serializing_if = "ShotType::is_nadir")]
    pub shot_type: ShotType,
    /// Great-circle distance from the previous waypoint in meters.
    #[serde(rename = "segment_distance", default)]
    pub segment_distance_m: f64,
    /// Travel time from the previous waypoint in seconds.
    #[serde(rename = "estimated_flight_time", default)]
    pub segment_time_s: f64,
    /// For orbit shots, the structure center being documented.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<[f64; 2]>,
}

impl Waypoint {
    /// Straight-down grid capture.
    pub fn nadir(lat: f64, lon: f64, altitude_m: f64) -> Self {
        Self {
            lat,
            lon,
            altitude_m,
            gimbal_angle_deg: -90.0,
            capture: true,
            shot_type: ShotType::Nadir,
            segment_distance_m: 0.0,
            segment_time_s: 0.0,
            target: None,
        }
    }

    /// Angled orbit capture around a structure.
    pub fn detail_shot(
        lat: f64,
        lon: f64,
        altitude_m: f64,
        gimbal_angle_deg: f64,
        target: (f64, f64),
    ) -> Self {
        Self {
            lat,
            lon,
            altitude_m,
            gimbal_angle_deg,
            capture: true,
            shot_type: ShotType::ArchitecturalDetail,
            segment_distance_m: 0.0,
            segment_time_s: 0.0,
            target: Some([target.0, target.1]),
        }
    }
}

/// An annotated, ordered waypoint sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightRoute {
    pub waypoints: Vec<Waypoint>,
    pub total_distance_m: f64,
    pub total_time_s: f64,
}

/// Structure of interest within a site, orbit-documented when priority
/// is high.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn square_zone() -> NoFlyZone {
        NoFlyZone {
            id: ZoneId(1),
            reason: "sanctum".to_string(),
            vertices: vec![
                [26.0170, 77.2085],
                [26.0175, 77.2085],
                [26.0175, 77.2090],
                [26.0170, 77.2090],
            ],
            ceiling_m: 50.0,
            registered_at: Utc::now(),
        }
    }

    #[test]
    fn point_in_polygon_inside_and_outside() {
        let zone = square_zone();
        assert!(zone.contains(26.01725, 77.20875));
        assert!(!zone.contains(26.0180, 77.2095));
        assert!(!zone.contains(26.0160, 77.2087));
    }

    #[test]
    fn degenerate_polygon_contains_nothing() {
        let mut zone = square_zone();
        zone.vertices.truncate(2);
        assert!(!zone.contains(26.01725, 77.20875));
    }

    #[test]
    fn gsd_and_coverage_for_phantom_4_pro() {
        let camera = CameraProfile::phantom_4_pro();
        // At 60m: coverage = 13.2 * 60 / 8.8 = 90m exactly.
        let coverage = camera.ground_coverage_m(60.0);
        assert!((coverage - 90.0).abs() < 1e-9);
        let gsd = camera.ground_sample_distance(60.0);
        assert!((gsd - 90.0 * 100.0 / 5472.0).abs() < 1e-9);
    }

    #[test]
    fn survey_area_rejects_inverted_bounds() {
        assert!(SurveyArea::new(26.02, 26.01, 77.20, 77.21).is_err());
        assert!(SurveyArea::new(26.01, 26.02, 77.21, 77.20).is_err());
        assert!(SurveyArea::new(26.01, 26.02, 77.20, 77.21).is_ok());
    }
}
