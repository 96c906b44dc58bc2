//! Built-in heritage-site survey profiles.
//!
//! Profiles are resolved once at startup and passed into the planner
//! explicitly; nothing here is mutable at runtime.

use survey_core::{PointOfInterest, Priority, SurveyArea};

/// Everything the planner needs for one site.
pub struct SiteProfile {
    pub key: &'static str,
    pub name: &'static str,
    pub bounds: SurveyAreaSpec,
    pub grid_altitude_m: f64,
    pub overlap_percent: f64,
    pub no_fly_zones: Vec<ZoneSpec>,
    pub structures: Vec<PointOfInterest>,
}

/// Raw bounds, validated when handed to the planner.
#[derive(Clone, Copy)]
pub struct SurveyAreaSpec {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl SurveyAreaSpec {
    pub fn to_area(self) -> Result<SurveyArea, survey_core::PlanError> {
        SurveyArea::new(self.min_lat, self.max_lat, self.min_lon, self.max_lon)
    }
}

pub struct ZoneSpec {
    pub vertices: Vec<[f64; 2]>,
    pub reason: &'static str,
    pub ceiling_m: f64,
}

pub fn all_site_keys() -> Vec<&'static str> {
    vec!["bateshwar", "udaygiri_caves", "dongla_observatory"]
}

/// Look up a configured site by key.
pub fn site_profile(key: &str) -> Option<SiteProfile> {
    match key.to_ascii_lowercase().as_str() {
        "bateshwar" => Some(SiteProfile {
            key: "bateshwar",
            name: "Bateshwar Temple Complex",
            bounds: SurveyAreaSpec {
                min_lat: 26.0150,
                max_lat: 26.0200,
                min_lon: 77.2060,
                max_lon: 77.2110,
            },
            grid_altitude_m: 60.0,
            overlap_percent: 80.0,
            no_fly_zones: vec![ZoneSpec {
                vertices: vec![
                    [26.0170, 77.2085],
                    [26.0175, 77.2085],
                    [26.0175, 77.2090],
                    [26.0170, 77.2090],
                ],
                reason: "Main sanctum - cultural sensitivity",
                ceiling_m: 50.0,
            }],
            structures: vec![
                PointOfInterest {
                    name: "Main Temple Complex".to_string(),
                    lat: 26.0173,
                    lon: 77.2088,
                    priority: Priority::High,
                },
                PointOfInterest {
                    name: "Satellite Temples".to_string(),
                    lat: 26.0165,
                    lon: 77.2095,
                    priority: Priority::Medium,
                },
            ],
        }),
        "udaygiri_caves" => Some(SiteProfile {
            key: "udaygiri_caves",
            name: "Udaygiri Caves",
            bounds: SurveyAreaSpec {
                min_lat: 23.5340,
                max_lat: 23.5380,
                min_lon: 77.7700,
                max_lon: 77.7740,
            },
            grid_altitude_m: 30.0,
            overlap_percent: 85.0,
            no_fly_zones: Vec::new(),
            structures: vec![
                PointOfInterest {
                    name: "Cave 5 (Varaha)".to_string(),
                    lat: 23.5360,
                    lon: 77.7720,
                    priority: Priority::High,
                },
                PointOfInterest {
                    name: "Cave 19 (Vishnu)".to_string(),
                    lat: 23.5355,
                    lon: 77.7715,
                    priority: Priority::High,
                },
            ],
        }),
        "dongla_observatory" => Some(SiteProfile {
            key: "dongla_observatory",
            name: "Dongla Space Observatory",
            bounds: SurveyAreaSpec {
                min_lat: 25.2118,
                max_lat: 25.2158,
                min_lon: 78.1808,
                max_lon: 78.1848,
            },
            grid_altitude_m: 80.0,
            overlap_percent: 75.0,
            no_fly_zones: Vec::new(),
            structures: Vec::new(),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_site_resolves_with_valid_bounds() {
        for key in all_site_keys() {
            let profile = site_profile(key).expect("listed site must resolve");
            assert!(profile.bounds.to_area().is_ok(), "bad bounds for {key}");
            assert!(profile.overlap_percent > 0.0 && profile.overlap_percent < 100.0);
        }
    }

    #[test]
    fn unknown_site_is_none() {
        assert!(site_profile("atlantis").is_none());
    }
}
