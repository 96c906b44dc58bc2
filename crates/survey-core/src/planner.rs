//! Boustrophedon coverage planning over a survey area.
//!
//! The planner sweeps a serpentine grid of nadir captures across the
//! site at a target overlap, drops points that fall inside registered
//! no-fly zones, adds detail orbits around high-priority structures,
//! and annotates the resulting sequence with per-segment distance and
//! time. The sequence is visited in the order it was built; there is no
//! reordering pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::models::{
    CameraProfile, FlightRoute, NoFlyZone, PointOfInterest, Priority, SurveyArea, Waypoint, ZoneId,
};
use crate::spatial::{haversine_distance, meters_to_lat_deg, meters_to_lon_deg};

/// Altitude for detail orbits, below the grid altitude so facades fill
/// the frame.
pub const ORBIT_ALTITUDE_M: f64 = 25.0;

/// Gimbal pitch for orbit shots, angled to capture vertical surfaces.
pub const ORBIT_GIMBAL_DEG: f64 = -45.0;

/// Tunable planning parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Grid capture altitude in meters above ground.
    pub grid_altitude_m: f64,
    /// Forward/side image overlap, open interval (0, 100).
    pub overlap_percent: f64,
    /// Orbit radius around high-priority structures in meters.
    pub orbit_radius_m: f64,
    /// Captures per orbit (36 gives 10-degree spacing).
    pub orbit_points: usize,
    /// Cruise speed used for time estimates.
    pub speed_mps: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            grid_altitude_m: 60.0,
            overlap_percent: 80.0,
            orbit_radius_m: 20.0,
            orbit_points: 36,
            speed_mps: 15.0,
        }
    }
}

/// Result of one planning run.
///
/// An empty route is a legitimate outcome (the whole site may be
/// excluded); it is reported through `warnings` for human review rather
/// than as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyPlan {
    pub route: FlightRoute,
    pub warnings: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

/// Coverage planner for one survey run.
///
/// Holds the area, camera, and an append-only no-fly registry. Each call
/// to [`FlightPlanner::plan`] is a pure function of these plus the
/// request parameters.
pub struct FlightPlanner {
    area: SurveyArea,
    camera: CameraProfile,
    zones: Vec<NoFlyZone>,
    next_zone_id: u32,
}

impl FlightPlanner {
    pub fn new(area: SurveyArea, camera: CameraProfile) -> Result<Self, PlanError> {
        area.validate()?;
        camera.validate()?;
        Ok(Self {
            area,
            camera,
            zones: Vec::new(),
            next_zone_id: 1,
        })
    }

    pub fn area(&self) -> &SurveyArea {
        &self.area
    }

    pub fn camera(&self) -> &CameraProfile {
        &self.camera
    }

    pub fn zones(&self) -> &[NoFlyZone] {
        &self.zones
    }

    /// Register a restricted zone and return its stable id.
    ///
    /// The polygon is implicitly closed. Fewer than 3 vertices is a
    /// configuration error; self-intersecting rings are not detected and
    /// leave containment undefined.
    pub fn register_no_fly_zone(
        &mut self,
        vertices: Vec<[f64; 2]>,
        reason: impl Into<String>,
        ceiling_m: f64,
    ) -> Result<ZoneId, PlanError> {
        let reason = reason.into();
        if vertices.len() < 3 {
            return Err(PlanError::EmptyZoneDefinition {
                reason,
                vertex_count: vertices.len(),
            });
        }

        let id = ZoneId(self.next_zone_id);
        self.next_zone_id += 1;
        tracing::debug!(zone = %id, %reason, vertices = vertices.len(), "registered no-fly zone");
        self.zones.push(NoFlyZone {
            id,
            reason,
            vertices,
            ceiling_m,
            registered_at: Utc::now(),
        });
        Ok(id)
    }

    fn is_in_no_fly_zone(&self, lat: f64, lon: f64) -> bool {
        self.zones.iter().any(|zone| zone.contains(lat, lon))
    }

    /// Metric grid step for the requested altitude and overlap.
    fn step_size_m(&self, altitude_m: f64, overlap_percent: f64) -> Result<f64, PlanError> {
        if !(altitude_m > 0.0) || !altitude_m.is_finite() {
            return Err(PlanError::invalid(
                "altitude_m",
                altitude_m,
                "altitude must be positive",
            ));
        }
        if !(overlap_percent > 0.0 && overlap_percent < 100.0) {
            return Err(PlanError::invalid(
                "overlap_percent",
                overlap_percent,
                "overlap must lie in the open interval (0, 100)",
            ));
        }
        let coverage_m = self.camera.ground_coverage_m(altitude_m);
        Ok(coverage_m * (1.0 - overlap_percent / 100.0))
    }

    /// Generate the serpentine photogrammetry grid.
    ///
    /// Rows sweep latitude from min to max; within a row, longitude
    /// sweeps min to max and every odd-indexed row is reversed so the
    /// drone never dead-heads back across the site. Bounds are
    /// inclusive, so even a step larger than the area span emits one
    /// row and one column. Every emitted waypoint lies inside the area
    /// and outside all registered zones.
    pub fn generate_grid(
        &self,
        altitude_m: f64,
        overlap_percent: f64,
    ) -> Result<Vec<Waypoint>, PlanError> {
        let step_m = self.step_size_m(altitude_m, overlap_percent)?;
        let lat_step = meters_to_lat_deg(step_m);
        let lon_step = meters_to_lon_deg(step_m, self.area.mean_lat());

        let mut points = Vec::new();
        let mut row_index = 0usize;
        let mut lat = self.area.min_lat;
        while lat <= self.area.max_lat {
            let mut row = Vec::new();
            let mut lon = self.area.min_lon;
            while lon <= self.area.max_lon {
                if !self.is_in_no_fly_zone(lat, lon) {
                    row.push(Waypoint::nadir(lat, lon, altitude_m));
                }
                lon += lon_step;
            }

            // Serpentine ordering keyed on the row index, not on how
            // many points survived filtering.
            if row_index % 2 == 1 {
                row.reverse();
            }
            points.extend(row);
            row_index += 1;
            lat += lat_step;
        }

        tracing::debug!(
            waypoints = points.len(),
            rows = row_index,
            step_m,
            "generated coverage grid"
        );
        Ok(points)
    }

    /// Generate a circular detail orbit around a structure.
    ///
    /// Exactly `point_count` captures at angle step `2π / point_count`,
    /// starting due north of the center. Each waypoint sits `radius_m`
    /// from the center under the flat-earth degree conversion and
    /// carries a back-reference to the structure.
    pub fn generate_orbit(
        &self,
        center: (f64, f64),
        radius_m: f64,
        point_count: usize,
    ) -> Result<Vec<Waypoint>, PlanError> {
        if !(radius_m > 0.0) || !radius_m.is_finite() {
            return Err(PlanError::invalid(
                "radius_m",
                radius_m,
                "orbit radius must be positive",
            ));
        }
        if point_count == 0 {
            return Err(PlanError::invalid(
                "point_count",
                0.0,
                "an orbit needs at least one capture",
            ));
        }

        let angle_step = std::f64::consts::TAU / point_count as f64;
        let mut points = Vec::with_capacity(point_count);
        for i in 0..point_count {
            let angle = i as f64 * angle_step;
            let lat = center.0 + meters_to_lat_deg(radius_m * angle.cos());
            let lon = center.1 + meters_to_lon_deg(radius_m * angle.sin(), center.0);
            points.push(Waypoint::detail_shot(
                lat,
                lon,
                ORBIT_ALTITUDE_M,
                ORBIT_GIMBAL_DEG,
                center,
            ));
        }
        Ok(points)
    }

    /// Full planning run: grid, detail orbits for high-priority
    /// structures, then sequential annotation.
    pub fn plan(
        &self,
        config: &PlannerConfig,
        structures: &[PointOfInterest],
    ) -> Result<SurveyPlan, PlanError> {
        let mut points = self.generate_grid(config.grid_altitude_m, config.overlap_percent)?;
        let grid_count = points.len();

        for structure in structures {
            if structure.priority != Priority::High {
                continue;
            }
            let orbit = self.generate_orbit(
                (structure.lat, structure.lon),
                config.orbit_radius_m,
                config.orbit_points,
            )?;
            tracing::debug!(structure = %structure.name, captures = orbit.len(), "added detail orbit");
            points.extend(orbit);
        }

        let route = annotate_route(points, config.speed_mps)?;

        let mut warnings = Vec::new();
        if grid_count == 0 {
            warnings.push(
                "coverage grid is empty: the survey area is entirely excluded by no-fly zones"
                    .to_string(),
            );
        }
        if route.waypoints.is_empty() {
            warnings
                .push("plan produced no waypoints; review area bounds and exclusions".to_string());
        }
        for warning in &warnings {
            tracing::warn!("{warning}");
        }

        tracing::info!(
            waypoints = route.waypoints.len(),
            total_distance_m = route.total_distance_m,
            total_time_s = route.total_time_s,
            "survey plan complete"
        );

        Ok(SurveyPlan {
            route,
            warnings,
            generated_at: Utc::now(),
        })
    }
}

/// Annotate a waypoint sequence with per-segment distance and time.
///
/// The sequence is visited in the order given. The first waypoint has no
/// incoming segment and keeps both fields at 0.0; totals are the sums of
/// the per-segment values.
pub fn annotate_route(mut points: Vec<Waypoint>, speed_mps: f64) -> Result<FlightRoute, PlanError> {
    if !(speed_mps > 0.0) || !speed_mps.is_finite() {
        return Err(PlanError::invalid(
            "speed_mps",
            speed_mps,
            "speed must be positive",
        ));
    }

    let mut total_distance_m = 0.0;
    let mut total_time_s = 0.0;
    let mut prev: Option<(f64, f64)> = None;
    for point in &mut points {
        if let Some((prev_lat, prev_lon)) = prev {
            let distance_m = haversine_distance(prev_lat, prev_lon, point.lat, point.lon);
            point.segment_distance_m = distance_m;
            point.segment_time_s = distance_m / speed_mps;
            total_distance_m += distance_m;
            total_time_s += point.segment_time_s;
        }
        prev = Some((point.lat, point.lon));
    }

    Ok(FlightRoute {
        waypoints: points,
        total_distance_m,
        total_time_s,
    })
}
