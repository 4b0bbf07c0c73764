//! # TrekAtlas Query
//!
//! The explore-page core: a pure filter/sort engine over the trail
//! catalog and the view-state controller that owns the filter parameters
//! and memoizes the derived result list.

pub mod filter;
pub mod state;

pub use filter::{filter_and_sort, SortKey};
pub use state::{ExploreState, FilterState, ViewMode, MAX_DURATION_DAYS, MIN_DURATION_DAYS};
