//! Pure filter/sort engine.
//!
//! `filter_and_sort` maps (catalog, filter state) to an ordered sequence of
//! trail references. All predicates are conjunctive; the sort is stable, so
//! trails with equal sort keys keep their catalog order.

use serde::{Deserialize, Serialize};
use trekatlas_core::{Catalog, Trail};

use crate::state::FilterState;

/// Sort key for the explore result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Aggregate rating, descending.
    #[default]
    Rating,
    /// Distance in km, ascending.
    Distance,
    /// Max elevation in m, ascending.
    Elevation,
    /// Review count, descending.
    Reviews,
}

impl SortKey {
    pub const ALL: &'static [SortKey] = &[
        SortKey::Rating,
        SortKey::Distance,
        SortKey::Elevation,
        SortKey::Reviews,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Rating => "Top Rated",
            SortKey::Distance => "Distance: Short → Long",
            SortKey::Elevation => "Elevation: Low → High",
            SortKey::Reviews => "Most Reviewed",
        }
    }
}

/// Derive the filtered, sorted trail list for the given filter state.
///
/// Pure and deterministic: same (catalog, filter) always yields the same
/// ordered output, and the catalog is untouched.
pub fn filter_and_sort<'a>(catalog: &'a Catalog, filter: &FilterState) -> Vec<&'a Trail> {
    let mut result: Vec<&Trail> = catalog
        .iter()
        .filter(|t| matches_query(t, &filter.query))
        .filter(|t| matches_difficulty(t, filter))
        .filter(|t| matches_region(t, filter))
        .filter(|t| within_duration_cap(t, filter.max_days))
        .collect();

    // Vec::sort_by is stable: equal keys keep catalog order.
    match filter.sort {
        SortKey::Rating => result.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Distance => result.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km)),
        SortKey::Elevation => result.sort_by(|a, b| a.max_elevation_m.cmp(&b.max_elevation_m)),
        SortKey::Reviews => result.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
    }

    result
}

/// Case-insensitive substring match against name, region, or any tag.
/// An empty (or whitespace-only) query passes everything.
fn matches_query(trail: &Trail, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    trail.name.to_lowercase().contains(&q)
        || trail.region.to_lowercase().contains(&q)
        || trail.tags.iter().any(|tag| tag.to_lowercase().contains(&q))
}

fn matches_difficulty(trail: &Trail, filter: &FilterState) -> bool {
    match filter.difficulty {
        None => true,
        Some(d) => trail.difficulty == d,
    }
}

/// Region filtering is an exact string match, not a substring match.
/// A trail whose region label differs by formatting from the option list
/// will never match; that limitation is part of the contract.
fn matches_region(trail: &Trail, filter: &FilterState) -> bool {
    match &filter.region {
        None => true,
        Some(region) => trail.region == *region,
    }
}

/// Duration cap. Trails whose duration field has no leading integer are
/// excluded by any cap (the parse failure is swallowed, never reported).
fn within_duration_cap(trail: &Trail, max_days: u32) -> bool {
    match trail.duration_days() {
        Some(days) => days <= max_days,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trekatlas_core::{Catalog, Difficulty};

    fn nepal() -> Catalog {
        Catalog::nepal()
    }

    fn ids(trails: &[&Trail]) -> Vec<String> {
        trails.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn default_filter_returns_whole_catalog_by_rating() {
        let catalog = nepal();
        let result = filter_and_sort(&catalog, &FilterState::default());
        assert_eq!(result.len(), catalog.len());
        for pair in result.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
    }

    #[test]
    fn output_is_a_subsequence_of_the_catalog() {
        let catalog = nepal();
        let mut filter = FilterState::default();
        filter.query = "glacier".into();
        let result = filter_and_sort(&catalog, &filter);

        // Every output record passes every active predicate...
        for t in &result {
            let hay = format!(
                "{} {} {}",
                t.name.to_lowercase(),
                t.region.to_lowercase(),
                t.tags.join(" ").to_lowercase()
            );
            assert!(hay.contains("glacier"), "{} should match query", t.id);
        }
        // ...and no passing record was dropped.
        let matched = catalog
            .iter()
            .filter(|t| {
                t.name.to_lowercase().contains("glacier")
                    || t.region.to_lowercase().contains("glacier")
                    || t.tags.iter().any(|tag| tag.to_lowercase().contains("glacier"))
            })
            .count();
        assert_eq!(result.len(), matched);
    }

    #[test]
    fn engine_is_deterministic() {
        let catalog = nepal();
        let mut filter = FilterState::default();
        filter.difficulty = Some(Difficulty::Moderate);
        filter.sort = SortKey::Distance;

        let first = ids(&filter_and_sort(&catalog, &filter));
        let second = ids(&filter_and_sort(&catalog, &filter));
        assert_eq!(first, second);
    }

    #[test]
    fn query_matches_name_region_and_tags_case_insensitively() {
        let catalog = nepal();
        let mut filter = FilterState::default();

        filter.query = "EVEREST".into();
        assert!(ids(&filter_and_sort(&catalog, &filter)).contains(&"everest-base-camp".to_string()));

        filter.query = "rasuwa".into();
        assert_eq!(ids(&filter_and_sort(&catalog, &filter)), vec!["langtang-valley"]);

        // "Hidden Gem" is a tag on mardi-himal only.
        filter.query = "hidden gem".into();
        assert_eq!(ids(&filter_and_sort(&catalog, &filter)), vec!["mardi-himal"]);
    }

    #[test]
    fn region_filter_is_exact_match_not_substring() {
        let catalog = nepal();
        let mut filter = FilterState::default();
        filter.region = Some("Annapurna / Gandaki".into());

        let result = ids(&filter_and_sort(&catalog, &filter));
        // poon-hill is "Annapurna / Myagdi" and mardi-himal is
        // "Annapurna / Kaski"; sharing the word "Annapurna" is not enough.
        assert_eq!(result, vec!["annapurna-circuit"]);
    }

    #[test]
    fn duration_cap_boundary() {
        let catalog = nepal();
        let mut filter = FilterState::default();

        // everest-base-camp is "14 days".
        filter.max_days = 14;
        assert!(ids(&filter_and_sort(&catalog, &filter)).contains(&"everest-base-camp".to_string()));

        filter.max_days = 13;
        assert!(!ids(&filter_and_sort(&catalog, &filter)).contains(&"everest-base-camp".to_string()));
    }

    #[test]
    fn unparseable_duration_fails_any_cap() {
        let mut trails = trekatlas_core::data::nepal_trails();
        trails[0].duration = "about two weeks".into();
        let catalog = Catalog::new(trails);

        let filter = FilterState::default(); // cap at the maximum
        let result = ids(&filter_and_sort(&catalog, &filter));
        assert!(!result.contains(&"everest-base-camp".to_string()));
        assert_eq!(result.len(), catalog.len() - 1);
    }

    #[test]
    fn hard_trails_sorted_by_rating_descending() {
        let catalog = nepal();
        let mut filter = FilterState::default();
        filter.difficulty = Some(Difficulty::Hard);

        // annapurna-circuit and gokyo-lakes share rating 4.8; the stable
        // sort keeps their catalog order.
        assert_eq!(
            ids(&filter_and_sort(&catalog, &filter)),
            vec!["everest-base-camp", "annapurna-circuit", "gokyo-lakes"]
        );
    }

    #[test]
    fn sort_stability_on_equal_keys() {
        let catalog = nepal();
        let mut filter = FilterState::default();
        filter.sort = SortKey::Rating;
        let result = ids(&filter_and_sort(&catalog, &filter));

        // 4.8-rated trails appear in catalog order.
        let annapurna = result.iter().position(|id| id == "annapurna-circuit").unwrap();
        let manaslu = result.iter().position(|id| id == "manaslu-circuit").unwrap();
        let gokyo = result.iter().position(|id| id == "gokyo-lakes").unwrap();
        assert!(annapurna < manaslu && manaslu < gokyo);
    }

    #[test]
    fn sort_by_distance_ascending() {
        let catalog = nepal();
        let mut filter = FilterState::default();
        filter.sort = SortKey::Distance;
        let result = filter_and_sort(&catalog, &filter);
        for pair in result.windows(2) {
            assert!(pair[0].distance_km <= pair[1].distance_km);
        }
        assert_eq!(result[0].id, "poon-hill");
    }

    #[test]
    fn sort_by_reviews_descending() {
        let catalog = nepal();
        let mut filter = FilterState::default();
        filter.sort = SortKey::Reviews;
        let result = filter_and_sort(&catalog, &filter);
        assert_eq!(result[0].id, "poon-hill"); // 4230 reviews
        for pair in result.windows(2) {
            assert!(pair[0].review_count >= pair[1].review_count);
        }
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        let catalog = Catalog::new(vec![]);
        let result = filter_and_sort(&catalog, &FilterState::default());
        assert!(result.is_empty());
    }
}
