//! Survey plan generator for configured heritage sites.

mod sites;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use survey_core::{CameraProfile, FlightPlanDocument, FlightPlanner, PlannerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a drone survey flight plan for a heritage site")]
struct Args {
    /// Site key (bateshwar, udaygiri_caves, dongla_observatory)
    #[arg(long)]
    site: String,

    /// Output directory for the flight-plan JSON
    #[arg(long, default_value = ".")]
    output: PathBuf,

    /// Override the site's grid altitude in meters
    #[arg(long)]
    altitude: Option<f64>,

    /// Override the site's image overlap percent
    #[arg(long)]
    overlap: Option<f64>,

    /// Cruise speed in m/s used for time estimates
    #[arg(long, default_value_t = 15.0)]
    speed: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("survey_core=debug".parse()?),
        )
        .init();

    let args = Args::parse();

    let Some(profile) = sites::site_profile(&args.site) else {
        bail!(
            "unknown site \"{}\"; configured sites: {}",
            args.site,
            sites::all_site_keys().join(", ")
        );
    };

    tracing::info!(site = profile.name, "planning survey");

    let area = profile.bounds.to_area()?;
    let mut planner = FlightPlanner::new(area, CameraProfile::phantom_4_pro())?;
    for zone in &profile.no_fly_zones {
        let id = planner.register_no_fly_zone(zone.vertices.clone(), zone.reason, zone.ceiling_m)?;
        tracing::info!(zone = %id, reason = zone.reason, "no-fly zone active");
    }

    let config = PlannerConfig {
        grid_altitude_m: args.altitude.unwrap_or(profile.grid_altitude_m),
        overlap_percent: args.overlap.unwrap_or(profile.overlap_percent),
        speed_mps: args.speed,
        ..PlannerConfig::default()
    };

    let plan = planner.plan(&config, &profile.structures)?;
    for warning in &plan.warnings {
        eprintln!("warning: {warning}");
    }

    let document = FlightPlanDocument::new(profile.name, &plan, config.grid_altitude_m);
    let path = args
        .output
        .join(format!("{}_drone_survey_plan.json", profile.key));
    document
        .write(&path)
        .with_context(|| format!("writing {}", path.display()))?;

    println!("Flight plan created for {}", profile.name);
    println!("Total waypoints: {}", plan.route.waypoints.len());
    println!(
        "Estimated flight distance: {:.0} meters",
        plan.route.total_distance_m
    );
    println!(
        "Estimated flight time: {:.1} minutes",
        plan.route.total_time_s / 60.0
    );
    println!("Plan written to {}", path.display());

    Ok(())
}
