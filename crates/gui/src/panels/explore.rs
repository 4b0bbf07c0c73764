//! Explore panel: filter bar, trail cards, overview map.

use egui::{Color32, RichText, ScrollArea, Ui};

use trekatlas_core::{Catalog, Difficulty, Trail};
use trekatlas_query::{ExploreState, SortKey, ViewMode, MAX_DURATION_DAYS, MIN_DURATION_DAYS};

use crate::render::trail_map::{show_overview_map, TrailMapState};

/// Actions returned from the explore panel.
pub enum ExploreAction {
    /// Open the detail view for a trail.
    OpenTrail(String),
    None,
}

pub fn difficulty_color(difficulty: Difficulty) -> Color32 {
    match difficulty {
        Difficulty::Easy => Color32::from_rgb(34, 197, 94),
        Difficulty::Moderate => Color32::from_rgb(234, 179, 8),
        Difficulty::Hard => Color32::from_rgb(235, 130, 50),
        Difficulty::Expert => Color32::from_rgb(220, 60, 60),
    }
}

/// Show the explore panel. The map state is created lazily on the first
/// frame a map view is visible.
pub fn show_explore(
    ui: &mut Ui,
    catalog: &Catalog,
    explore: &mut ExploreState,
    map: &mut Option<TrailMapState>,
) -> ExploreAction {
    let mut action = ExploreAction::None;

    filter_bar(ui, catalog, explore);
    ui.separator();

    let results = explore.results(catalog);
    let view_mode = explore.filter.view_mode;

    ui.label(
        RichText::new(format!("{} trails", results.len()))
            .size(11.0)
            .color(Color32::GRAY),
    );

    if results.is_empty() {
        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            ui.label("No trails match the current filters.");
        });
        return action;
    }

    match view_mode {
        ViewMode::Grid => {
            if let Some(id) = trail_cards(ui, &results) {
                action = ExploreAction::OpenTrail(id);
            }
        }
        ViewMode::Map => {
            let state = map.get_or_insert_with(|| TrailMapState::new(ui.ctx()));
            if let Some(id) = show_overview_map(ui, state, &results) {
                action = ExploreAction::OpenTrail(id);
            }
        }
        ViewMode::Split => {
            ui.columns(2, |cols| {
                if let Some(id) = trail_cards(&mut cols[0], &results) {
                    action = ExploreAction::OpenTrail(id);
                }
                let state = map.get_or_insert_with(|| TrailMapState::new(cols[1].ctx()));
                if let Some(id) = show_overview_map(&mut cols[1], state, &results) {
                    action = ExploreAction::OpenTrail(id);
                }
            });
        }
    }

    action
}

fn filter_bar(ui: &mut Ui, catalog: &Catalog, explore: &mut ExploreState) {
    let filter = &mut explore.filter;

    ui.horizontal(|ui| {
        ui.label("🔍");
        ui.add(
            egui::TextEdit::singleline(&mut filter.query)
                .hint_text("Search trails, regions, tags...")
                .desired_width(220.0),
        );

        ui.toggle_value(&mut filter.show_filters, "Filters");

        ui.separator();
        for &mode in ViewMode::ALL {
            if ui
                .selectable_label(filter.view_mode == mode, mode.label())
                .clicked()
            {
                filter.view_mode = mode;
            }
        }
    });

    if filter.show_filters {
        ui.horizontal(|ui| {
            egui::ComboBox::from_id_salt("difficulty_filter")
                .selected_text(
                    filter
                        .difficulty
                        .map_or("All difficulties", |d| d.label()),
                )
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut filter.difficulty, None, "All difficulties");
                    for &d in Difficulty::ALL {
                        ui.selectable_value(&mut filter.difficulty, Some(d), d.label());
                    }
                });

            let regions = catalog.regions();
            egui::ComboBox::from_id_salt("region_filter")
                .selected_text(filter.region.as_deref().unwrap_or("All regions"))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut filter.region, None, "All regions");
                    for region in &regions {
                        ui.selectable_value(
                            &mut filter.region,
                            Some((*region).to_string()),
                            *region,
                        );
                    }
                });

            egui::ComboBox::from_id_salt("sort_key")
                .selected_text(format!("Sort: {}", filter.sort.label()))
                .show_ui(ui, |ui| {
                    for &key in SortKey::ALL {
                        ui.selectable_value(&mut filter.sort, key, key.label());
                    }
                });

            ui.add(
                egui::Slider::new(
                    &mut filter.max_days,
                    MIN_DURATION_DAYS..=MAX_DURATION_DAYS,
                )
                .text("max days"),
            );

            if filter.has_active_filters() && ui.button("Clear filters").clicked() {
                filter.clear();
            }
        });
    }
}

/// Scrollable card list. Returns the id of a clicked card, if any.
fn trail_cards(ui: &mut Ui, trails: &[&Trail]) -> Option<String> {
    let mut clicked = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .id_salt("trail_cards")
        .show(ui, |ui| {
            for trail in trails {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        if ui
                            .link(RichText::new(&trail.name).strong().size(14.0))
                            .clicked()
                        {
                            clicked = Some(trail.id.clone());
                        }
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(
                                    RichText::new(trail.difficulty.label())
                                        .color(difficulty_color(trail.difficulty))
                                        .size(11.0),
                                );
                            },
                        );
                    });
                    ui.label(
                        RichText::new(&trail.region)
                            .size(11.0)
                            .color(Color32::GRAY),
                    );
                    ui.horizontal(|ui| {
                        ui.label(format!("★ {:.1}", trail.rating));
                        ui.label(
                            RichText::new(format!("({})", trail.review_count))
                                .size(10.0)
                                .color(Color32::GRAY),
                        );
                        ui.separator();
                        ui.label(format!("{} km", trail.distance_km));
                        ui.separator();
                        ui.label(&trail.duration);
                        ui.separator();
                        ui.label(format!("{} m", trail.max_elevation_m));
                    });
                    if !trail.tags.is_empty() {
                        ui.label(
                            RichText::new(trail.tags.join(" · "))
                                .size(10.0)
                                .color(Color32::GRAY),
                        );
                    }
                });
                ui.add_space(4.0);
            }
        });

    clicked
}
