//! Minimal WGS-84 geometry for trail routes.

use serde::{Deserialize, Serialize};

/// A geographic point (latitude, longitude) in WGS-84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Axis-aligned geographic bounding box (west, south, east, north).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    /// Bounding box of a point sequence. Returns `None` for an empty slice.
    pub fn of(points: &[GeoPoint]) -> Option<Self> {
        let first = points.first()?;
        let mut bbox = Self {
            west: first.lon,
            south: first.lat,
            east: first.lon,
            north: first.lat,
        };
        for p in &points[1..] {
            bbox.west = bbox.west.min(p.lon);
            bbox.south = bbox.south.min(p.lat);
            bbox.east = bbox.east.max(p.lon);
            bbox.north = bbox.north.max(p.lat);
        }
        Some(bbox)
    }

    /// Geometric center of the box.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    /// Latitude span in degrees.
    pub fn lat_span(&self) -> f64 {
        self.north - self.south
    }

    /// Longitude span in degrees.
    pub fn lon_span(&self) -> f64 {
        self.east - self.west
    }
}

/// Arithmetic mean of a point set. Returns `None` for an empty slice.
pub fn mean_center(points: &[GeoPoint]) -> Option<GeoPoint> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (lat, lon) = points
        .iter()
        .fold((0.0, 0.0), |(la, lo), p| (la + p.lat, lo + p.lon));
    Some(GeoPoint::new(lat / n, lon / n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bbox_of_points() {
        let pts = [
            GeoPoint::new(27.68, 86.72),
            GeoPoint::new(27.98, 86.92),
            GeoPoint::new(27.80, 86.71),
        ];
        let bbox = BoundingBox::of(&pts).unwrap();
        assert_eq!(bbox.south, 27.68);
        assert_eq!(bbox.north, 27.98);
        assert_eq!(bbox.west, 86.71);
        assert_eq!(bbox.east, 86.92);
    }

    #[test]
    fn bbox_of_empty_is_none() {
        assert!(BoundingBox::of(&[]).is_none());
    }

    #[test]
    fn mean_center_averages() {
        let pts = [GeoPoint::new(10.0, 20.0), GeoPoint::new(30.0, 40.0)];
        let c = mean_center(&pts).unwrap();
        assert_eq!(c.lat, 20.0);
        assert_eq!(c.lon, 30.0);
    }
}
