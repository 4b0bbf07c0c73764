//! Rendering: slippy-tile trail maps and the hand-painted elevation chart.

pub mod elevation_chart;
pub mod trail_map;
