//! End-to-end planning scenarios over the Bateshwar survey bounds.

use survey_core::{
    CameraProfile, FlightPlanner, PlanError, PlannerConfig, SurveyArea,
};

fn bateshwar_area() -> SurveyArea {
    SurveyArea::new(26.0150, 26.0200, 77.2060, 77.2110).unwrap()
}

fn planner() -> FlightPlanner {
    FlightPlanner::new(bateshwar_area(), CameraProfile::phantom_4_pro()).unwrap()
}

/// Group a serpentine grid back into rows of equal latitude.
fn rows_of(grid: &[survey_core::Waypoint]) -> Vec<Vec<f64>> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut current_lat = f64::NAN;
    for wp in grid {
        if wp.lat != current_lat {
            rows.push(Vec::new());
            current_lat = wp.lat;
        }
        rows.last_mut().unwrap().push(wp.lon);
    }
    rows
}

#[test]
fn grid_covers_area_with_nadir_captures() {
    let area = bateshwar_area();
    let grid = planner().generate_grid(60.0, 80.0).unwrap();

    assert!(!grid.is_empty());
    for wp in &grid {
        assert!(area.contains(wp.lat, wp.lon), "waypoint escaped the area");
        assert_eq!(wp.gimbal_angle_deg, -90.0);
        assert_eq!(wp.altitude_m, 60.0);
        assert!(wp.capture);
    }
}

#[test]
fn odd_rows_are_swept_in_reverse() {
    let grid = planner().generate_grid(60.0, 80.0).unwrap();
    let rows = rows_of(&grid);
    assert!(rows.len() >= 3, "scenario should produce several rows");

    let mut forward = rows[0].clone();
    assert!(
        forward.windows(2).all(|w| w[0] < w[1]),
        "even rows sweep west to east"
    );
    forward.reverse();
    assert_eq!(rows[1], forward, "odd rows must reverse the sweep");
    forward.reverse();
    assert_eq!(rows[2], forward, "even rows resume the forward sweep");
}

#[test]
fn centroid_no_fly_zone_removes_grid_points() {
    let area = bateshwar_area();
    let (c_lat, c_lon) = area.centroid();
    let half = 0.0005;

    let mut restricted = planner();
    restricted
        .register_no_fly_zone(
            vec![
                [c_lat - half, c_lon - half],
                [c_lat + half, c_lon - half],
                [c_lat + half, c_lon + half],
                [c_lat - half, c_lon + half],
            ],
            "sanctum",
            50.0,
        )
        .unwrap();

    let baseline = planner().generate_grid(60.0, 80.0).unwrap();
    let filtered = restricted.generate_grid(60.0, 80.0).unwrap();

    assert!(filtered.len() < baseline.len());

    // Independent axis-aligned containment check for the square zone.
    for wp in &filtered {
        let inside = wp.lat > c_lat - half
            && wp.lat < c_lat + half
            && wp.lon > c_lon - half
            && wp.lon < c_lon + half;
        assert!(!inside, "waypoint emitted inside the no-fly zone");
    }
}

#[test]
fn orbit_count_and_radius_hold() {
    let center = (26.0173, 77.2088);
    let radius_m = 20.0;
    let orbit = planner().generate_orbit(center, radius_m, 36).unwrap();

    assert_eq!(orbit.len(), 36);
    for wp in &orbit {
        let dist = survey_core::spatial::deg_offset_to_meters(
            wp.lat - center.0,
            wp.lon - center.1,
            center.0,
        );
        assert!(
            (dist - radius_m).abs() < 1e-6,
            "orbit point at {dist}m, expected {radius_m}m"
        );
        assert_eq!(wp.shot_type, survey_core::ShotType::ArchitecturalDetail);
        assert_eq!(wp.gimbal_angle_deg, -45.0);
        assert_eq!(wp.target, Some([center.0, center.1]));
        assert!(wp.altitude_m < 60.0, "detail shots fly below the grid");
    }
}

#[test]
fn full_overlap_fails_before_any_waypoint() {
    let config = PlannerConfig {
        overlap_percent: 100.0,
        ..PlannerConfig::default()
    };
    let err = planner().plan(&config, &[]).unwrap_err();
    assert!(matches!(
        err,
        PlanError::InvalidParameter {
            name: "overlap_percent",
            ..
        }
    ));
}

#[test]
fn fully_excluded_area_is_a_warning_not_an_error() {
    let mut restricted = planner();
    // Zone strictly larger than the whole survey area.
    restricted
        .register_no_fly_zone(
            vec![
                [26.0100, 77.2000],
                [26.0250, 77.2000],
                [26.0250, 77.2200],
                [26.0100, 77.2200],
            ],
            "entire site restricted",
            50.0,
        )
        .unwrap();

    let plan = restricted.plan(&PlannerConfig::default(), &[]).unwrap();
    assert!(plan.route.waypoints.is_empty());
    assert!(!plan.warnings.is_empty());
}

#[test]
fn route_totals_match_segment_sums() {
    let plan = planner().plan(&PlannerConfig::default(), &[]).unwrap();
    let route = &plan.route;

    assert!(!route.waypoints.is_empty());
    assert_eq!(route.waypoints[0].segment_distance_m, 0.0);

    let distance_sum: f64 = route.waypoints.iter().map(|w| w.segment_distance_m).sum();
    let time_sum: f64 = route.waypoints.iter().map(|w| w.segment_time_s).sum();
    assert!((route.total_distance_m - distance_sum).abs() < 1e-6);
    assert!((route.total_time_s - time_sum).abs() < 1e-6);
}
