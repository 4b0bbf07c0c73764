//! Trail record types.
//!
//! A `Trail` is one catalog entry describing a trekking route and its
//! metadata. Records are created at catalog-load time and never mutated;
//! every downstream "feature" is a read-only view over them.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Trail difficulty grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: &'static [Difficulty] = &[
        Difficulty::Easy,
        Difficulty::Moderate,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One sample of a trail's elevation profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationPoint {
    /// Distance from the trailhead in kilometres.
    pub distance_km: f64,
    /// Elevation in metres.
    pub elevation_m: f64,
}

/// A lodging stop along the route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lodge {
    pub name: String,
    pub elevation_m: u32,
    pub amenities: Vec<String>,
}

/// A user review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub user: String,
    /// 1–5 stars.
    pub rating: u8,
    /// ISO date, e.g. "2024-11-15".
    pub date: String,
    pub comment: String,
}

/// Emergency information block for a trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyInfo {
    pub nearest_hospital: String,
    pub helicopter_landing_zones: Vec<String>,
    pub contact: String,
}

/// One trekking route and all of its descriptive metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    /// Unique identity key, also the detail-view link target.
    pub id: String,
    pub name: String,
    /// Free-text grouping label, e.g. "Khumbu / Solukhumbu".
    pub region: String,
    pub difficulty: Difficulty,
    pub distance_km: f64,
    /// Free text, e.g. "14 days". Parsed numerically via `duration_days`.
    pub duration: String,
    pub elevation_gain_m: u32,
    pub max_elevation_m: u32,
    /// Aggregate rating in [0, 5].
    pub rating: f64,
    pub review_count: u32,
    pub description: String,
    pub tags: Vec<String>,
    pub start_point: String,
    pub end_point: String,
    pub best_season: Vec<String>,
    pub permits: Vec<String>,
    pub highlights: Vec<String>,
    /// Representative center point for overview markers.
    pub center: GeoPoint,
    /// Route polyline; first/last points are the start/end markers.
    /// May be empty.
    pub route: Vec<GeoPoint>,
    /// Ascending by distance.
    pub elevation_profile: Vec<ElevationPoint>,
    pub lodges: Vec<Lodge>,
    pub reviews: Vec<Review>,
    pub emergency: EmergencyInfo,
}

impl Trail {
    /// Duration in days, parsed from the leading integer of the free-text
    /// duration field ("14 days" → 14).
    ///
    /// Returns `None` when the field has no leading integer; callers
    /// applying a duration cap treat that as failing the cap.
    pub fn duration_days(&self) -> Option<u32> {
        let digits: String = self
            .duration
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;

    fn trail_with_duration(duration: &str) -> Trail {
        Trail {
            id: "t".into(),
            name: "Test".into(),
            region: "Test / Region".into(),
            difficulty: Difficulty::Easy,
            distance_km: 10.0,
            duration: duration.into(),
            elevation_gain_m: 100,
            max_elevation_m: 1000,
            rating: 4.0,
            review_count: 1,
            description: String::new(),
            tags: vec![],
            start_point: String::new(),
            end_point: String::new(),
            best_season: vec![],
            permits: vec![],
            highlights: vec![],
            center: GeoPoint::new(0.0, 0.0),
            route: vec![],
            elevation_profile: vec![],
            lodges: vec![],
            reviews: vec![],
            emergency: EmergencyInfo {
                nearest_hospital: String::new(),
                helicopter_landing_zones: vec![],
                contact: String::new(),
            },
        }
    }

    #[test]
    fn duration_days_parses_leading_integer() {
        assert_eq!(trail_with_duration("14 days").duration_days(), Some(14));
        assert_eq!(trail_with_duration("5 days").duration_days(), Some(5));
        assert_eq!(trail_with_duration("  7 days").duration_days(), Some(7));
    }

    #[test]
    fn duration_days_without_leading_integer_is_none() {
        assert_eq!(trail_with_duration("about a week").duration_days(), None);
        assert_eq!(trail_with_duration("").duration_days(), None);
    }

    #[test]
    fn difficulty_serde_uses_lowercase() {
        let json = serde_json::to_string(&Difficulty::Moderate).unwrap();
        assert_eq!(json, "\"moderate\"");
        let back: Difficulty = serde_json::from_str("\"expert\"").unwrap();
        assert_eq!(back, Difficulty::Expert);
    }
}
