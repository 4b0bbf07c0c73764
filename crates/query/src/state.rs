//! Explore view-state: filter parameters and the memoized result cache.

use serde::{Deserialize, Serialize};
use trekatlas_core::{Catalog, Difficulty, Trail};

use crate::filter::{filter_and_sort, SortKey};

/// Upper bound of the duration-cap slider; the default cap, meaning
/// "no duration restriction" in practice.
pub const MAX_DURATION_DAYS: u32 = 30;
/// Lower bound of the duration-cap slider.
pub const MIN_DURATION_DAYS: u32 = 3;

/// How the explore screen arranges cards and map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Cards only.
    Grid,
    /// Map only.
    Map,
    /// Cards beside map.
    #[default]
    Split,
}

impl ViewMode {
    pub const ALL: &'static [ViewMode] = &[ViewMode::Grid, ViewMode::Split, ViewMode::Map];

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::Map => "Map",
            ViewMode::Split => "Split",
        }
    }

    pub fn shows_cards(&self) -> bool {
        matches!(self, ViewMode::Grid | ViewMode::Split)
    }

    pub fn shows_map(&self) -> bool {
        matches!(self, ViewMode::Map | ViewMode::Split)
    }
}

/// All user-selected explore parameters. Owned by `ExploreState`, mutated
/// in place by UI events, reset by `clear`.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Free-text query matched against name/region/tags.
    pub query: String,
    /// `None` = all difficulties.
    pub difficulty: Option<Difficulty>,
    /// `None` = all regions; `Some` is matched exactly.
    pub region: Option<String>,
    pub sort: SortKey,
    /// Maximum duration in days.
    pub max_days: u32,
    pub view_mode: ViewMode,
    /// Collapsed filter panel visibility (narrow layouts).
    pub show_filters: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            difficulty: None,
            region: None,
            sort: SortKey::Rating,
            max_days: MAX_DURATION_DAYS,
            view_mode: ViewMode::Split,
            show_filters: false,
        }
    }
}

impl FilterState {
    /// Reset the filter parameters to their defaults. The view mode and
    /// filter-panel flag are presentation state and survive a clear.
    pub fn clear(&mut self) {
        self.query.clear();
        self.difficulty = None;
        self.region = None;
        self.sort = SortKey::Rating;
        self.max_days = MAX_DURATION_DAYS;
    }

    /// True when any predicate deviates from the defaults. Drives the
    /// "clear filters" affordance, nothing else.
    pub fn has_active_filters(&self) -> bool {
        !self.query.is_empty()
            || self.difficulty.is_some()
            || self.region.is_some()
            || self.max_days < MAX_DURATION_DAYS
    }
}

/// Owns the `FilterState` and memoizes the derived result list.
///
/// The cache is keyed on the full filter-state value and stores catalog
/// indices, so it holds no borrows and survives unrelated redraws without
/// recomputation.
#[derive(Debug, Default)]
pub struct ExploreState {
    pub filter: FilterState,
    cache: Option<(FilterState, Vec<usize>)>,
}

impl ExploreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The filtered, sorted trail list for the current filter state.
    /// Recomputes only when the state changed since the last call.
    pub fn results<'a>(&mut self, catalog: &'a Catalog) -> Vec<&'a Trail> {
        let stale = match &self.cache {
            Some((key, _)) => *key != self.filter,
            None => true,
        };
        if stale {
            let indices = filter_and_sort(catalog, &self.filter)
                .into_iter()
                .filter_map(|t| index_of(catalog, t))
                .collect();
            self.cache = Some((self.filter.clone(), indices));
        }

        match &self.cache {
            Some((_, indices)) => indices
                .iter()
                .filter_map(|&i| catalog.trails().get(i))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Clear filters and drop the cached derivation.
    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }
}

fn index_of(catalog: &Catalog, trail: &Trail) -> Option<usize> {
    catalog.trails().iter().position(|t| std::ptr::eq(t, trail))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let f = FilterState::default();
        assert!(f.query.is_empty());
        assert_eq!(f.difficulty, None);
        assert_eq!(f.region, None);
        assert_eq!(f.sort, SortKey::Rating);
        assert_eq!(f.max_days, MAX_DURATION_DAYS);
        assert_eq!(f.view_mode, ViewMode::Split);
        assert!(!f.has_active_filters());
    }

    #[test]
    fn has_active_filters_tracks_each_predicate() {
        let mut f = FilterState::default();
        f.query = "everest".into();
        assert!(f.has_active_filters());

        let mut f = FilterState::default();
        f.difficulty = Some(Difficulty::Hard);
        assert!(f.has_active_filters());

        let mut f = FilterState::default();
        f.region = Some("Khumbu / Solukhumbu".into());
        assert!(f.has_active_filters());

        let mut f = FilterState::default();
        f.max_days = 14;
        assert!(f.has_active_filters());

        // View mode alone is presentation, not a filter.
        let mut f = FilterState::default();
        f.view_mode = ViewMode::Map;
        assert!(!f.has_active_filters());
    }

    #[test]
    fn clear_restores_full_catalog_in_default_order() {
        let catalog = Catalog::nepal();
        let mut explore = ExploreState::new();
        explore.filter.query = "lakes".into();
        explore.filter.difficulty = Some(Difficulty::Hard);
        explore.filter.max_days = 10;
        explore.filter.sort = SortKey::Distance;
        assert!(explore.results(&catalog).len() < catalog.len());

        explore.clear_filters();
        let result = explore.results(&catalog);
        assert_eq!(result.len(), catalog.len());
        for pair in result.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
        assert!(!explore.filter.has_active_filters());
    }

    #[test]
    fn clear_preserves_view_mode() {
        let mut explore = ExploreState::new();
        explore.filter.view_mode = ViewMode::Map;
        explore.filter.query = "x".into();
        explore.clear_filters();
        assert_eq!(explore.filter.view_mode, ViewMode::Map);
        assert!(explore.filter.query.is_empty());
    }

    #[test]
    fn results_are_memoized_until_state_changes() {
        let catalog = Catalog::nepal();
        let mut explore = ExploreState::new();

        let first: Vec<String> = explore
            .results(&catalog)
            .iter()
            .map(|t| t.id.clone())
            .collect();
        // Unchanged state: same ordering, from cache.
        let second: Vec<String> = explore
            .results(&catalog)
            .iter()
            .map(|t| t.id.clone())
            .collect();
        assert_eq!(first, second);

        explore.filter.difficulty = Some(Difficulty::Expert);
        let third: Vec<String> = explore
            .results(&catalog)
            .iter()
            .map(|t| t.id.clone())
            .collect();
        assert_eq!(third, vec!["manaslu-circuit"]);
    }

    #[test]
    fn empty_catalog_produces_empty_results() {
        let catalog = Catalog::new(vec![]);
        let mut explore = ExploreState::new();
        assert!(explore.results(&catalog).is_empty());
    }
}
