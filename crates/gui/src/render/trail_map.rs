//! Trail maps on walkers slippy tiles (OpenTopoMap).
//!
//! Two modes share one state type: a single-trail route map (polyline,
//! start/end/lodge markers, viewport fitted to the route) and a catalog
//! overview map (one clickable marker per trail, centred on the mean of
//! the trail centres).

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use egui::{Color32, Stroke, Ui};
use walkers::sources::{Attribution, TileSource};
use walkers::{lat_lon, HttpTiles, Map, MapMemory, Plugin, Position, Projector, TileId};

use trekatlas_core::{mean_center, BoundingBox, GeoPoint, Trail};

/// Fallback view over central Nepal when there is nothing to fit.
const NEPAL_CENTER: GeoPoint = GeoPoint::new(28.2, 84.0);
const NEPAL_ZOOM: f64 = 7.0;

/// OpenTopoMap raster tiles. Contour lines and hillshading suit
/// mountain routes better than the default street tiles.
#[derive(Debug, Clone, Copy)]
pub struct OpenTopoMap;

impl TileSource for OpenTopoMap {
    fn tile_url(&self, tile_id: TileId) -> String {
        format!(
            "https://tile.opentopomap.org/{}/{}/{}.png",
            tile_id.zoom, tile_id.x, tile_id.y
        )
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: "© OpenStreetMap contributors, SRTM | © OpenTopoMap (CC-BY-SA)",
            url: "https://opentopomap.org",
            logo_light: None,
            logo_dark: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Start,
    End,
    Lodge,
    /// Overview marker for a whole trail; clicking it navigates to detail.
    Trail,
}

/// A marker ready to project onto the map.
#[derive(Debug, Clone)]
pub struct MapMarker {
    pub kind: MarkerKind,
    pub point: GeoPoint,
    pub label: String,
    pub detail: String,
    /// Navigation target; set only for `MarkerKind::Trail`.
    pub trail_id: Option<String>,
}

/// Markers for a single trail's route map.
///
/// One Start marker at the first route point, one End marker at the last,
/// and one marker per lodge placed a third of the way along the polyline
/// (an approximation; lodge records carry no coordinates). An empty route
/// yields no markers at all.
pub fn route_markers(trail: &Trail) -> Vec<MapMarker> {
    let route = &trail.route;
    let Some(first) = route.first() else {
        return Vec::new();
    };
    let last = route[route.len() - 1];

    let mut markers = vec![
        MapMarker {
            kind: MarkerKind::Start,
            point: *first,
            label: "Start".to_string(),
            detail: trail.start_point.clone(),
            trail_id: None,
        },
        MapMarker {
            kind: MarkerKind::End,
            point: last,
            label: "End".to_string(),
            detail: trail.end_point.clone(),
            trail_id: None,
        },
    ];

    let lodge_idx = ((route.len() as f64 * 0.33) as usize).min(route.len() - 1);
    for lodge in &trail.lodges {
        markers.push(MapMarker {
            kind: MarkerKind::Lodge,
            point: route[lodge_idx],
            label: lodge.name.clone(),
            detail: format!("{} m", lodge.elevation_m),
            trail_id: None,
        });
    }

    markers
}

/// One marker per trail at its centre, for the catalog overview map.
pub fn overview_markers(trails: &[&Trail]) -> Vec<MapMarker> {
    trails
        .iter()
        .map(|t| MapMarker {
            kind: MarkerKind::Trail,
            point: t.center,
            label: t.name.clone(),
            detail: format!(
                "{} · {:.1}★ · {} km · {} m",
                t.region, t.rating, t.distance_km, t.max_elevation_m
            ),
            trail_id: Some(t.id.clone()),
        })
        .collect()
}

/// Zoom level that fits the given extent, padded, clamped to sane tiles.
fn zoom_for_bounds(bounds: &BoundingBox) -> f64 {
    let span = bounds.lat_span().max(bounds.lon_span()).max(1e-4) * 1.3;
    (360.0 / span).log2().clamp(4.0, 14.0)
}

fn position(p: GeoPoint) -> Position {
    lat_lon(p.lat, p.lon)
}

/// Persistent map state (survives between frames). One instance per
/// mounted map; created lazily on the first frame with a live context.
pub struct TrailMapState {
    tiles: HttpTiles,
    memory: MapMemory,
    center: Position,
    /// What the viewport was last fitted to. Refit only on change, so
    /// user panning survives unrelated redraws.
    fit_key: Option<String>,
}

impl TrailMapState {
    pub fn new(ctx: &egui::Context) -> Self {
        Self {
            tiles: HttpTiles::new(OpenTopoMap, ctx.clone()),
            memory: MapMemory::default(),
            center: position(NEPAL_CENTER),
            fit_key: None,
        }
    }

    fn fit(&mut self, key: String, center: GeoPoint, zoom: f64) {
        if self.fit_key.as_deref() == Some(key.as_str()) {
            return;
        }
        self.center = position(center);
        self.memory.center_at(self.center);
        let _ = self.memory.set_zoom(zoom);
        self.fit_key = Some(key);
    }
}

/// Plugin that draws the route polyline.
struct RoutePlugin {
    points: Vec<Position>,
}

impl Plugin for RoutePlugin {
    fn run(
        self: Box<Self>,
        ui: &mut Ui,
        _response: &egui::Response,
        projector: &Projector,
        _memory: &MapMemory,
    ) {
        let stroke = Stroke::new(3.0, Color32::from_rgb(37, 99, 235));
        let painter = ui.painter();
        for pair in self.points.windows(2) {
            let a = projector.project(pair[0]);
            let b = projector.project(pair[1]);
            painter.line_segment([egui::pos2(a.x, a.y), egui::pos2(b.x, b.y)], stroke);
        }
    }
}

/// Plugin that draws markers, hover labels, and reports clicks.
struct MarkersPlugin {
    markers: Vec<MapMarker>,
    /// Index of the clicked marker, -1 when none.
    clicked_idx: Arc<AtomicI32>,
}

fn marker_style(kind: MarkerKind) -> (Color32, f32) {
    match kind {
        MarkerKind::Start => (Color32::from_rgb(34, 197, 94), 7.0),
        MarkerKind::End => (Color32::from_rgb(239, 68, 68), 7.0),
        MarkerKind::Lodge => (Color32::from_rgb(234, 179, 8), 5.0),
        MarkerKind::Trail => (Color32::from_rgb(37, 99, 235), 8.0),
    }
}

impl Plugin for MarkersPlugin {
    fn run(
        self: Box<Self>,
        ui: &mut Ui,
        response: &egui::Response,
        projector: &Projector,
        _memory: &MapMemory,
    ) {
        let painter = ui.painter();
        let hover_pos = response.hover_pos();
        let click_pos = if response.clicked() {
            response.interact_pointer_pos()
        } else {
            None
        };

        let mut closest_click: Option<(usize, f32)> = None;
        let mut hovered: Option<(usize, egui::Pos2)> = None;

        for (idx, marker) in self.markers.iter().enumerate() {
            let screen = projector.project(position(marker.point));
            let screen_pos = egui::pos2(screen.x, screen.y);
            let (color, radius) = marker_style(marker.kind);

            painter.circle_filled(screen_pos, radius, color);
            painter.circle_stroke(screen_pos, radius, Stroke::new(1.5, Color32::WHITE));

            if let Some(h) = hover_pos {
                if screen_pos.distance(h) < radius + 6.0 {
                    hovered = Some((idx, screen_pos));
                }
            }
            if let Some(c) = click_pos {
                let dist = screen_pos.distance(c);
                if closest_click.map_or(true, |(_, d)| dist < d) {
                    closest_click = Some((idx, dist));
                }
            }
        }

        if let Some((idx, screen_pos)) = hovered {
            let marker = &self.markers[idx];
            let text = if marker.detail.is_empty() {
                marker.label.clone()
            } else {
                format!("{}\n{}", marker.label, marker.detail)
            };
            let galley = painter.layout_no_wrap(
                text,
                egui::FontId::proportional(12.0),
                Color32::WHITE,
            );
            let anchor = screen_pos + egui::vec2(0.0, -12.0);
            let rect = egui::Align2::CENTER_BOTTOM
                .anchor_size(anchor, galley.size() + egui::vec2(10.0, 6.0));
            painter.rect_filled(rect, 4.0, Color32::from_black_alpha(190));
            painter.galley(
                rect.min + egui::vec2(5.0, 3.0),
                galley,
                Color32::WHITE,
            );
        }

        // Magnetic click: nearest marker within 30 px wins.
        if let Some((idx, dist)) = closest_click {
            if dist < 30.0 && self.markers[idx].trail_id.is_some() {
                self.clicked_idx.store(idx as i32, Ordering::Relaxed);
            }
        }
    }
}

/// Render the route map for one trail: polyline plus start/end/lodge
/// markers, viewport fitted to the route extent. With `show_route` off
/// only the basemap is drawn.
pub fn show_route_map(ui: &mut Ui, state: &mut TrailMapState, trail: &Trail, show_route: bool) {
    let fit_key = format!("route:{}:{}", trail.id, show_route);
    match BoundingBox::of(&trail.route) {
        Some(bounds) => {
            state.fit(fit_key, bounds.center(), zoom_for_bounds(&bounds));
        }
        None => {
            // No polyline: centre on the catalog centre point instead.
            state.fit(fit_key, trail.center, 10.0);
        }
    }

    let points: Vec<Position> = if show_route {
        trail.route.iter().map(|&p| position(p)).collect()
    } else {
        Vec::new()
    };
    let markers = if show_route {
        route_markers(trail)
    } else {
        Vec::new()
    };
    let clicked = Arc::new(AtomicI32::new(-1));

    let map = Map::new(Some(&mut state.tiles), &mut state.memory, state.center)
        .with_plugin(RoutePlugin { points })
        .with_plugin(MarkersPlugin {
            markers,
            clicked_idx: clicked,
        });
    ui.add(map);
}

/// Render the overview map for the filtered catalog. Returns the id of a
/// clicked trail marker, if any.
pub fn show_overview_map(
    ui: &mut Ui,
    state: &mut TrailMapState,
    trails: &[&Trail],
) -> Option<String> {
    let centers: Vec<GeoPoint> = trails.iter().map(|t| t.center).collect();
    let center = mean_center(&centers).unwrap_or(NEPAL_CENTER);

    let mut key = String::from("overview:");
    for t in trails {
        key.push_str(&t.id);
        key.push(',');
    }
    state.fit(key, center, NEPAL_ZOOM);

    let markers = overview_markers(trails);
    let clicked = Arc::new(AtomicI32::new(-1));

    let map = Map::new(Some(&mut state.tiles), &mut state.memory, state.center)
        .with_plugin(MarkersPlugin {
            markers: markers.clone(),
            clicked_idx: clicked.clone(),
        });
    ui.add(map);

    let idx = clicked.load(Ordering::Relaxed);
    if idx >= 0 {
        markers
            .get(idx as usize)
            .and_then(|m| m.trail_id.clone())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trekatlas_core::Catalog;

    #[test]
    fn route_markers_cover_start_end_and_lodges() {
        let catalog = Catalog::nepal();
        for trail in catalog.iter().filter(|t| t.route.len() >= 2) {
            let markers = route_markers(trail);
            let starts = markers
                .iter()
                .filter(|m| m.kind == MarkerKind::Start)
                .count();
            let ends = markers.iter().filter(|m| m.kind == MarkerKind::End).count();
            let lodges = markers
                .iter()
                .filter(|m| m.kind == MarkerKind::Lodge)
                .count();
            assert_eq!(starts, 1, "{}", trail.id);
            assert_eq!(ends, 1, "{}", trail.id);
            assert_eq!(lodges, trail.lodges.len(), "{}", trail.id);

            let start = markers
                .iter()
                .find(|m| m.kind == MarkerKind::Start)
                .unwrap();
            let end = markers.iter().find(|m| m.kind == MarkerKind::End).unwrap();
            assert_eq!(start.point, trail.route[0]);
            assert_eq!(end.point, trail.route[trail.route.len() - 1]);
        }
    }

    #[test]
    fn empty_route_yields_no_markers() {
        let catalog = Catalog::nepal();
        let mut trail = catalog.trails()[0].clone();
        trail.route.clear();
        assert!(route_markers(&trail).is_empty());
    }

    #[test]
    fn lodge_markers_sit_on_the_route() {
        let catalog = Catalog::nepal();
        for trail in catalog.iter().filter(|t| !t.route.is_empty()) {
            for marker in route_markers(trail)
                .iter()
                .filter(|m| m.kind == MarkerKind::Lodge)
            {
                assert!(trail.route.contains(&marker.point), "{}", trail.id);
            }
        }
    }

    #[test]
    fn overview_markers_one_per_trail_with_navigation_target() {
        let catalog = Catalog::nepal();
        let trails: Vec<&Trail> = catalog.iter().collect();
        let markers = overview_markers(&trails);
        assert_eq!(markers.len(), trails.len());
        for (marker, trail) in markers.iter().zip(&trails) {
            assert_eq!(marker.kind, MarkerKind::Trail);
            assert_eq!(marker.trail_id.as_deref(), Some(trail.id.as_str()));
            assert_eq!(marker.point, trail.center);
        }
    }

    #[test]
    fn zoom_shrinks_as_extent_grows() {
        let small = BoundingBox {
            west: 86.0,
            south: 27.0,
            east: 86.5,
            north: 27.5,
        };
        let large = BoundingBox {
            west: 80.0,
            south: 26.0,
            east: 88.0,
            north: 30.0,
        };
        assert!(zoom_for_bounds(&small) > zoom_for_bounds(&large));
        assert!(zoom_for_bounds(&small) <= 14.0);
        assert!(zoom_for_bounds(&large) >= 4.0);
    }
}
