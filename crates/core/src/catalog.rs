//! The trail catalog: an immutable, load-time-constant collection.

use crate::error::{Error, Result};
use crate::trail::{Difficulty, Trail};

/// The catalog holds all trail records. It is constructed once and never
/// mutated; only derived filtered views are recomputed.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    trails: Vec<Trail>,
}

impl Catalog {
    /// Build a catalog from arbitrary records. An empty collection is valid.
    pub fn new(trails: Vec<Trail>) -> Self {
        Self { trails }
    }

    /// The seeded Nepal catalog.
    pub fn nepal() -> Self {
        Self::new(crate::data::nepal_trails())
    }

    /// Look up a trail by its identity key.
    pub fn get(&self, id: &str) -> Result<&Trail> {
        self.trails
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::TrailNotFound(id.to_string()))
    }

    /// All unique region labels, sorted.
    pub fn regions(&self) -> Vec<&str> {
        let mut regions: Vec<&str> = self.trails.iter().map(|t| t.region.as_str()).collect();
        regions.sort_unstable();
        regions.dedup();
        regions
    }

    /// Trail counts per difficulty grade.
    pub fn difficulty_stats(&self) -> [(Difficulty, usize); 4] {
        let count =
            |d: Difficulty| self.trails.iter().filter(|t| t.difficulty == d).count();
        [
            (Difficulty::Easy, count(Difficulty::Easy)),
            (Difficulty::Moderate, count(Difficulty::Moderate)),
            (Difficulty::Hard, count(Difficulty::Hard)),
            (Difficulty::Expert, count(Difficulty::Expert)),
        ]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trail> {
        self.trails.iter()
    }

    pub fn trails(&self) -> &[Trail] {
        &self.trails
    }

    pub fn len(&self) -> usize {
        self.trails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nepal_catalog_has_unique_ids_and_valid_ratings() {
        let catalog = Catalog::nepal();
        assert!(!catalog.is_empty());

        let mut ids: Vec<&str> = catalog.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(before, ids.len(), "trail ids must be unique");

        for t in catalog.iter() {
            assert!((0.0..=5.0).contains(&t.rating), "{}: rating out of range", t.id);
            for pair in t.elevation_profile.windows(2) {
                assert!(
                    pair[0].distance_km <= pair[1].distance_km,
                    "{}: profile distances must be non-decreasing",
                    t.id
                );
            }
        }
    }

    #[test]
    fn get_by_id() {
        let catalog = Catalog::nepal();
        let trail = catalog.get("everest-base-camp").unwrap();
        assert_eq!(trail.name, "Everest Base Camp Trek");
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let catalog = Catalog::nepal();
        let err = catalog.get("no-such-trail").unwrap_err();
        assert!(matches!(err, Error::TrailNotFound(_)));
    }

    #[test]
    fn regions_are_sorted_and_unique() {
        let catalog = Catalog::nepal();
        let regions = catalog.regions();
        assert!(regions.contains(&"Khumbu / Solukhumbu"));
        let mut sorted = regions.clone();
        sorted.sort_unstable();
        assert_eq!(regions, sorted);
        // Two Khumbu trails share one region entry.
        assert!(regions.len() < catalog.len());
    }

    #[test]
    fn difficulty_stats_count_all_trails() {
        let catalog = Catalog::nepal();
        let total: usize = catalog.difficulty_stats().iter().map(|(_, n)| n).sum();
        assert_eq!(total, catalog.len());
    }

    #[test]
    fn empty_catalog_is_tolerated() {
        let catalog = Catalog::new(vec![]);
        assert!(catalog.is_empty());
        assert!(catalog.regions().is_empty());
        assert!(catalog.get("anything").is_err());
    }
}
