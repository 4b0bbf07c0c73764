//! Dock layout using egui_dock.
//!
//! Layout: Explore (center, ~70%) | Detail/Safety tabs (right, ~30%)
//!         ───────────────────────┼──────────────────────────────────
//!         Console (bottom, ~22% of total height)

use egui_dock::{DockState, NodeIndex};

/// Panel identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Explore,
    Detail,
    Safety,
    Console,
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelId::Explore => write!(f, "Explore"),
            PanelId::Detail => write!(f, "Trail"),
            PanelId::Safety => write!(f, "Safety Hub"),
            PanelId::Console => write!(f, "Console"),
        }
    }
}

/// Create the initial dock layout.
pub fn create_dock_state() -> DockState<PanelId> {
    let mut dock_state = DockState::new(vec![PanelId::Explore]);

    // Main area on top, console strip below.
    let [top, _bottom] = dock_state.main_surface_mut().split_below(
        NodeIndex::root(),
        0.78,
        vec![PanelId::Console],
    );

    // Explore on the left, detail/safety tabs on the right.
    let [_explore, _right] = dock_state.main_surface_mut().split_right(
        top,
        0.70,
        vec![PanelId::Detail, PanelId::Safety],
    );

    dock_state
}
