//! TrekAtlas Desktop
//!
//! Catalog browser for Himalayan trekking routes: explore/filter view,
//! per-trail detail with route map and elevation profile, safety hub.

mod app;
mod dock;
mod menu;
mod panels;
mod render;
mod state;

use app::TrekAtlasApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("TrekAtlas — Himalayan Trekking Routes")
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([900.0, 600.0]),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "TrekAtlas",
        native_options,
        Box::new(|cc| Ok(Box::new(TrekAtlasApp::new(cc)))),
    )
}
