pub mod error;
pub mod export;
pub mod models;
pub mod planner;
pub mod spatial;

pub use error::PlanError;
pub use export::{FlightPlanDocument, PlanMetadata, SAFETY_GUIDELINES};
pub use models::{
    CameraProfile, FlightRoute, NoFlyZone, PointOfInterest, Priority, ShotType, SurveyArea,
    Waypoint, ZoneId,
};
pub use planner::{annotate_route, FlightPlanner, PlannerConfig, SurveyPlan};
pub use spatial::haversine_distance;
