//! Trail detail panel: stats, elevation profile, route map, lodges,
//! reviews, permits, emergency block.

use egui::{Color32, RichText, ScrollArea, Ui};

use trekatlas_core::Trail;

use crate::panels::explore::difficulty_color;
use crate::render::elevation_chart::show_elevation_chart;
use crate::render::trail_map::{show_route_map, TrailMapState};

/// Show the detail panel for the selected trail, or a placeholder when
/// nothing is selected yet.
pub fn show_detail(
    ui: &mut Ui,
    trail: Option<&Trail>,
    map: &mut Option<TrailMapState>,
    show_route: &mut bool,
) {
    let Some(trail) = trail else {
        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            ui.label("Select a trail in Explore to see its details.");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.heading(&trail.name);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(&trail.region)
                        .size(12.0)
                        .color(Color32::GRAY),
                );
                ui.label(
                    RichText::new(trail.difficulty.label())
                        .color(difficulty_color(trail.difficulty))
                        .strong(),
                );
                ui.label(format!(
                    "★ {:.1} ({} reviews)",
                    trail.rating, trail.review_count
                ));
            });
            ui.add_space(4.0);
            ui.label(&trail.description);
            ui.add_space(6.0);

            stats_grid(ui, trail);

            if !trail.highlights.is_empty() {
                ui.add_space(6.0);
                ui.label(RichText::new("Highlights").strong());
                for h in &trail.highlights {
                    ui.label(format!("• {h}"));
                }
            }

            if !trail.permits.is_empty() {
                ui.add_space(6.0);
                ui.label(RichText::new("Required permits").strong());
                for p in &trail.permits {
                    ui.label(format!("• {p}"));
                }
            }

            ui.add_space(8.0);
            egui::CollapsingHeader::new("Elevation profile")
                .default_open(true)
                .show(ui, |ui| {
                    show_elevation_chart(ui, &trail.elevation_profile, 180.0);
                });

            egui::CollapsingHeader::new("Route map")
                .default_open(true)
                .show(ui, |ui| {
                    ui.checkbox(show_route, "Show route");
                    let height = 280.0_f32.min(ui.available_height().max(180.0));
                    ui.allocate_ui(egui::vec2(ui.available_width(), height), |ui| {
                        let state = map.get_or_insert_with(|| TrailMapState::new(ui.ctx()));
                        show_route_map(ui, state, trail, *show_route);
                    });
                    ui.label(
                        RichText::new(format!(
                            "{} → {}",
                            trail.start_point, trail.end_point
                        ))
                        .size(11.0)
                        .color(Color32::GRAY),
                    );
                });

            if !trail.lodges.is_empty() {
                egui::CollapsingHeader::new(format!("Lodges ({})", trail.lodges.len()))
                    .show(ui, |ui| {
                        for lodge in &trail.lodges {
                            ui.label(RichText::new(&lodge.name).strong());
                            ui.label(
                                RichText::new(format!(
                                    "{} m · {}",
                                    lodge.elevation_m,
                                    lodge.amenities.join(", ")
                                ))
                                .size(11.0)
                                .color(Color32::GRAY),
                            );
                            ui.add_space(2.0);
                        }
                    });
            }

            if !trail.reviews.is_empty() {
                egui::CollapsingHeader::new(format!("Reviews ({})", trail.reviews.len()))
                    .show(ui, |ui| {
                        for review in &trail.reviews {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&review.user).strong());
                                ui.label("★".repeat(review.rating as usize));
                                ui.label(
                                    RichText::new(&review.date)
                                        .size(10.0)
                                        .color(Color32::GRAY),
                                );
                            });
                            ui.label(&review.comment);
                            ui.add_space(3.0);
                        }
                    });
            }

            egui::CollapsingHeader::new("Emergency").show(ui, |ui| {
                ui.label(format!(
                    "Nearest hospital: {}",
                    trail.emergency.nearest_hospital
                ));
                ui.label(format!(
                    "Helicopter landing zones: {}",
                    trail.emergency.helicopter_landing_zones.join(", ")
                ));
                ui.label(format!("Contact: {}", trail.emergency.contact));
            });
            ui.add_space(8.0);
        });
}

fn stats_grid(ui: &mut Ui, trail: &Trail) {
    egui::Grid::new("trail_stats")
        .num_columns(2)
        .spacing([24.0, 3.0])
        .show(ui, |ui| {
            ui.label(RichText::new("Distance").color(Color32::GRAY).size(11.0));
            ui.label(format!("{} km", trail.distance_km));
            ui.end_row();

            ui.label(RichText::new("Duration").color(Color32::GRAY).size(11.0));
            ui.label(&trail.duration);
            ui.end_row();

            ui.label(
                RichText::new("Elevation gain")
                    .color(Color32::GRAY)
                    .size(11.0),
            );
            ui.label(format!("{} m", trail.elevation_gain_m));
            ui.end_row();

            ui.label(
                RichText::new("Max elevation")
                    .color(Color32::GRAY)
                    .size(11.0),
            );
            ui.label(format!("{} m", trail.max_elevation_m));
            ui.end_row();

            ui.label(
                RichText::new("Best season")
                    .color(Color32::GRAY)
                    .size(11.0),
            );
            ui.label(trail.best_season.join(", "));
            ui.end_row();
        });
}
