//! Menu bar: File, View, Help.

use egui::Ui;

use trekatlas_query::{SortKey, ViewMode};

/// Actions triggered by menu items.
pub enum MenuAction {
    ChangeViewMode(ViewMode),
    ChangeSort(SortKey),
    ClearFilters,
    ZoomToFit,
    About,
    Exit,
    None,
}

/// Show the main menu bar. Returns the action triggered (if any).
pub fn show_menu_bar(ui: &mut Ui, current_view: ViewMode, current_sort: SortKey) -> MenuAction {
    let mut action = MenuAction::None;

    egui::menu::bar(ui, |ui| {
        ui.menu_button("File", |ui| {
            if ui.button("Exit").clicked() {
                action = MenuAction::Exit;
                ui.close_menu();
            }
        });

        ui.menu_button("View", |ui| {
            for &mode in ViewMode::ALL {
                let is_current = mode == current_view;
                if ui.selectable_label(is_current, mode.label()).clicked() {
                    action = MenuAction::ChangeViewMode(mode);
                    ui.close_menu();
                }
            }
            ui.separator();
            ui.menu_button("Sort by", |ui| {
                for &key in SortKey::ALL {
                    let is_current = key == current_sort;
                    if ui.selectable_label(is_current, key.label()).clicked() {
                        action = MenuAction::ChangeSort(key);
                        ui.close_menu();
                    }
                }
            });
            ui.separator();
            if ui.button("Clear Filters").clicked() {
                action = MenuAction::ClearFilters;
                ui.close_menu();
            }
            if ui.button("Zoom to Fit").clicked() {
                action = MenuAction::ZoomToFit;
                ui.close_menu();
            }
        });

        ui.menu_button("Help", |ui| {
            if ui.button("About TrekAtlas").clicked() {
                action = MenuAction::About;
                ui.close_menu();
            }
        });
    });

    action
}
