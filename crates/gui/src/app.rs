//! Main application: TrekAtlasApp implements eframe::App.

use egui_dock::{DockArea, DockState, Style, TabViewer};

use trekatlas_core::Catalog;
use trekatlas_query::ExploreState;

use crate::dock::{create_dock_state, PanelId};
use crate::menu::{show_menu_bar, MenuAction};
use crate::panels::console::{show_console, ConsoleAction};
use crate::panels::detail::show_detail;
use crate::panels::explore::{show_explore, ExploreAction};
use crate::panels::safety::show_safety;
use crate::render::trail_map::TrailMapState;
use crate::state::LogEntry;

/// The main application state.
pub struct TrekAtlasApp {
    /// Dock state for panel layout.
    dock_state: DockState<PanelId>,

    /// The immutable trail catalog.
    catalog: Catalog,

    /// Explore filter state and memoized results.
    explore: ExploreState,

    /// Id of the trail shown in the detail panel.
    selected_trail: Option<String>,

    /// Console log entries.
    logs: Vec<LogEntry>,

    /// Show about dialog.
    show_about: bool,

    /// Overview map state (lazy-initialised on first map view).
    overview_map: Option<TrailMapState>,

    /// Route map state for the detail panel (lazy-initialised).
    route_map: Option<TrailMapState>,

    /// Route polyline visibility on the detail map.
    show_route: bool,
}

impl TrekAtlasApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Configure dark theme with custom visuals
        let mut visuals = egui::Visuals::dark();
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        cc.egui_ctx.set_visuals(visuals);

        let catalog = Catalog::nepal();

        let mut app = Self {
            dock_state: create_dock_state(),
            catalog,
            explore: ExploreState::new(),
            selected_trail: None,
            logs: Vec::new(),
            show_about: false,
            overview_map: None,
            route_map: None,
            show_route: true,
        };

        tracing::info!(trails = app.catalog.len(), "catalog loaded");
        app.logs.push(LogEntry::info("TrekAtlas started"));
        app.logs.push(LogEntry::info(format!(
            "{} trails in catalog, {} regions",
            app.catalog.len(),
            app.catalog.regions().len()
        )));

        app
    }

    fn open_trail(&mut self, id: String) {
        match self.catalog.get(&id) {
            Ok(trail) => {
                self.logs
                    .push(LogEntry::info(format!("Opened trail: {}", trail.name)));
                self.selected_trail = Some(id);
                // Bring the detail tab to front.
                if let Some(found) = self.dock_state.find_tab(&PanelId::Detail) {
                    self.dock_state.set_active_tab(found);
                }
            }
            Err(e) => {
                tracing::warn!(id, "trail lookup failed");
                self.logs.push(LogEntry::error(e.to_string()));
            }
        }
    }
}

impl eframe::App for TrekAtlasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            match show_menu_bar(ui, self.explore.filter.view_mode, self.explore.filter.sort) {
                MenuAction::ChangeViewMode(mode) => {
                    self.explore.filter.view_mode = mode;
                }
                MenuAction::ChangeSort(key) => {
                    self.explore.filter.sort = key;
                }
                MenuAction::ClearFilters => {
                    self.explore.clear_filters();
                    self.logs.push(LogEntry::info("Filters cleared"));
                }
                MenuAction::ZoomToFit => {
                    if self.overview_map.is_none() && self.route_map.is_none() {
                        self.logs.push(LogEntry::warning("No map view to fit"));
                    }
                    // Drop the map states; they refit on recreation.
                    self.overview_map = None;
                    self.route_map = None;
                }
                MenuAction::About => {
                    self.show_about = true;
                }
                MenuAction::Exit => {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                MenuAction::None => {}
            }
        });

        // About dialog
        if self.show_about {
            egui::Window::new("About TrekAtlas")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.heading("TrekAtlas Desktop");
                    ui.label("Himalayan trekking route catalog");
                    ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                    ui.separator();
                    ui.label(format!("{} trails", self.catalog.len()));
                    for (difficulty, count) in self.catalog.difficulty_stats() {
                        if count > 0 {
                            ui.label(format!("  {}: {}", difficulty.label(), count));
                        }
                    }
                    ui.label("Basemap tiles © OpenTopoMap (CC-BY-SA)");
                    ui.separator();
                    if ui.button("Close").clicked() {
                        self.show_about = false;
                    }
                });
        }

        // Main dock area
        let mut tab_viewer = TrekAtlasTabViewer {
            catalog: &self.catalog,
            explore: &mut self.explore,
            selected_trail: self.selected_trail.as_deref(),
            logs: &self.logs,
            overview_map: &mut self.overview_map,
            route_map: &mut self.route_map,
            show_route: &mut self.show_route,
            explore_action: ExploreAction::None,
            console_action: ConsoleAction::None,
        };

        DockArea::new(&mut self.dock_state)
            .style(Style::from_egui(ctx.style().as_ref()))
            .show(ctx, &mut tab_viewer);

        // Extract results before dropping the borrow
        let explore_action =
            std::mem::replace(&mut tab_viewer.explore_action, ExploreAction::None);
        let console_action =
            std::mem::replace(&mut tab_viewer.console_action, ConsoleAction::None);
        drop(tab_viewer);

        match explore_action {
            ExploreAction::OpenTrail(id) => self.open_trail(id),
            ExploreAction::None => {}
        }

        match console_action {
            ConsoleAction::Clear => self.logs.clear(),
            ConsoleAction::None => {}
        }
    }
}

/// TabViewer implementation for egui_dock.
struct TrekAtlasTabViewer<'a> {
    catalog: &'a Catalog,
    explore: &'a mut ExploreState,
    selected_trail: Option<&'a str>,
    logs: &'a [LogEntry],
    overview_map: &'a mut Option<TrailMapState>,
    route_map: &'a mut Option<TrailMapState>,
    show_route: &'a mut bool,
    /// Action from the explore panel.
    explore_action: ExploreAction,
    /// Action from the console panel.
    console_action: ConsoleAction,
}

impl<'a> TabViewer for TrekAtlasTabViewer<'a> {
    type Tab = PanelId;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        tab.to_string().into()
    }

    fn ui(&mut self, ui: &mut egui::Ui, tab: &mut Self::Tab) {
        match tab {
            PanelId::Explore => {
                self.explore_action =
                    show_explore(ui, self.catalog, self.explore, self.overview_map);
            }

            PanelId::Detail => {
                let trail = self
                    .selected_trail
                    .and_then(|id| self.catalog.get(id).ok());
                show_detail(ui, trail, self.route_map, self.show_route);
            }

            PanelId::Safety => {
                show_safety(ui);
            }

            PanelId::Console => {
                self.console_action = show_console(ui, self.logs);
            }
        }
    }

    fn closeable(&mut self, _tab: &mut Self::Tab) -> bool {
        false // Panels cannot be closed
    }
}
