//! Hand-painted elevation profile chart.
//!
//! Area chart over the egui painter: filled area under the profile line,
//! axis ticks, and a hover readout of the nearest sample.

use egui::{Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui};

use trekatlas_core::ElevationPoint;

const MARGIN_LEFT: f32 = 48.0;
const MARGIN_BOTTOM: f32 = 22.0;
const MARGIN_TOP: f32 = 8.0;
const MARGIN_RIGHT: f32 = 8.0;

const LINE_COLOR: Color32 = Color32::from_rgb(37, 99, 235);
// Line color at ~25% opacity, premultiplied.
const FILL_COLOR: Color32 = Color32::from_rgba_premultiplied(9, 23, 55, 60);
const GRID_COLOR: Color32 = Color32::from_gray(70);
const TEXT_COLOR: Color32 = Color32::from_gray(160);

/// Draw the elevation profile in the available width at the given height.
/// An empty profile renders a placeholder label instead of axes.
pub fn show_elevation_chart(ui: &mut Ui, profile: &[ElevationPoint], height: f32) {
    let width = ui.available_width();
    let (response, painter) =
        ui.allocate_painter(egui::vec2(width, height), Sense::hover());
    let rect = response.rect;

    if profile.len() < 2 {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "No elevation data",
            FontId::proportional(13.0),
            TEXT_COLOR,
        );
        return;
    }

    let plot = Rect::from_min_max(
        rect.min + egui::vec2(MARGIN_LEFT, MARGIN_TOP),
        rect.max - egui::vec2(MARGIN_RIGHT, MARGIN_BOTTOM),
    );

    let max_dist = profile[profile.len() - 1].distance_km.max(1e-6);
    let (min_elev, max_elev) = profile.iter().fold((f64::MAX, f64::MIN), |(lo, hi), p| {
        (lo.min(p.elevation_m), hi.max(p.elevation_m))
    });
    // Pad the elevation range so the line never hugs the borders.
    let pad = ((max_elev - min_elev) * 0.08).max(50.0);
    let lo = min_elev - pad;
    let hi = max_elev + pad;

    let to_screen = |p: &ElevationPoint| -> Pos2 {
        let x = plot.left() + (p.distance_km / max_dist) as f32 * plot.width();
        let y = plot.bottom() - ((p.elevation_m - lo) / (hi - lo)) as f32 * plot.height();
        Pos2::new(x, y)
    };

    painter.rect_filled(plot, 2.0, Color32::from_gray(24));

    // Horizontal grid with elevation labels.
    let grid_lines = 4;
    for i in 0..=grid_lines {
        let frac = i as f32 / grid_lines as f32;
        let y = plot.bottom() - frac * plot.height();
        painter.line_segment(
            [Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)],
            Stroke::new(0.5, GRID_COLOR),
        );
        let elev = lo + (hi - lo) * frac as f64;
        painter.text(
            Pos2::new(plot.left() - 6.0, y),
            egui::Align2::RIGHT_CENTER,
            format!("{:.0} m", elev),
            FontId::proportional(10.0),
            TEXT_COLOR,
        );
    }

    // Distance ticks along the bottom.
    let dist_ticks = 5;
    for i in 0..=dist_ticks {
        let frac = i as f32 / dist_ticks as f32;
        let x = plot.left() + frac * plot.width();
        let dist = max_dist * frac as f64;
        painter.text(
            Pos2::new(x, plot.bottom() + 4.0),
            egui::Align2::CENTER_TOP,
            format!("{:.0} km", dist),
            FontId::proportional(10.0),
            TEXT_COLOR,
        );
    }

    // Filled area, one convex quad per segment.
    for pair in profile.windows(2) {
        let a = to_screen(&pair[0]);
        let b = to_screen(&pair[1]);
        painter.add(Shape::convex_polygon(
            vec![
                a,
                b,
                Pos2::new(b.x, plot.bottom()),
                Pos2::new(a.x, plot.bottom()),
            ],
            FILL_COLOR,
            Stroke::NONE,
        ));
    }

    // Profile line on top of the fill.
    let line: Vec<Pos2> = profile.iter().map(to_screen).collect();
    painter.add(Shape::line(line, Stroke::new(2.0, LINE_COLOR)));

    // Hover readout: nearest sample by x distance.
    if let Some(hover) = response.hover_pos() {
        if plot.contains(hover) {
            let nearest = profile
                .iter()
                .min_by(|a, b| {
                    let da = (to_screen(a).x - hover.x).abs();
                    let db = (to_screen(b).x - hover.x).abs();
                    da.total_cmp(&db)
                })
                .map(|p| (*p, to_screen(p)));
            if let Some((sample, screen)) = nearest {
                painter.line_segment(
                    [
                        Pos2::new(screen.x, plot.top()),
                        Pos2::new(screen.x, plot.bottom()),
                    ],
                    Stroke::new(1.0, Color32::from_gray(120)),
                );
                painter.circle_filled(screen, 3.5, LINE_COLOR);
                painter.circle_stroke(screen, 3.5, Stroke::new(1.0, Color32::WHITE));

                let label = format!(
                    "{:.1} km · {:.0} m",
                    sample.distance_km, sample.elevation_m
                );
                let galley =
                    painter.layout_no_wrap(label, FontId::proportional(11.0), Color32::WHITE);
                let above = screen.y - 14.0 - galley.size().y > plot.top();
                let anchor_y = if above { screen.y - 10.0 } else { screen.y + 10.0 };
                let align = if above {
                    egui::Align2::CENTER_BOTTOM
                } else {
                    egui::Align2::CENTER_TOP
                };
                let rect = align.anchor_size(
                    Pos2::new(screen.x, anchor_y),
                    galley.size() + egui::vec2(8.0, 4.0),
                );
                painter.rect_filled(rect, 3.0, Color32::from_black_alpha(190));
                painter.galley(rect.min + egui::vec2(4.0, 2.0), galley, Color32::WHITE);
            }
        }
    }
}
