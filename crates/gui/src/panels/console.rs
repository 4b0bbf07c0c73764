//! Console panel: log messages with colored levels.

use egui::{Color32, RichText, ScrollArea, Ui};

use crate::state::{LogEntry, LogLevel};

/// Actions returned from the console panel.
pub enum ConsoleAction {
    Clear,
    None,
}

/// Show the console panel with log messages.
pub fn show_console(ui: &mut Ui, logs: &[LogEntry]) -> ConsoleAction {
    let mut action = ConsoleAction::None;

    ui.horizontal(|ui| {
        ui.heading("Console");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Clear").clicked() {
                action = ConsoleAction::Clear;
            }
            ui.label(format!("{} messages", logs.len()));
        });
    });
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for entry in logs {
                let (prefix, color) = match entry.level {
                    LogLevel::Info => ("[INFO]", Color32::from_rgb(150, 180, 220)),
                    LogLevel::Warning => ("[WARN]", Color32::from_rgb(230, 180, 50)),
                    LogLevel::Error => ("[ERROR]", Color32::from_rgb(220, 60, 60)),
                };

                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(entry.time_of_day())
                            .color(Color32::GRAY)
                            .monospace()
                            .size(11.0),
                    );
                    ui.label(RichText::new(prefix).color(color).monospace().size(11.0));
                    ui.label(RichText::new(&entry.message).monospace().size(11.0));
                });
            }
        });

    action
}
