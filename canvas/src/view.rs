//! Canvas geometry: conversions between pixel space and the percent
//! coordinates items are stored in, plus the angle/distance helpers the
//! rotate and scale gestures need.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The rendered canvas rectangle, in pixels. Items store positions in
/// percent of this frame, so gesture math converts through it.
#[derive(Debug, Clone, Copy)]
pub struct CanvasFrame {
    pub width: f64,
    pub height: f64,
}

impl CanvasFrame {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Convert a pixel point to percent-of-canvas coordinates.
    #[must_use]
    pub fn to_percent(&self, px: Point) -> Point {
        Point {
            x: px.x / self.width * 100.0,
            y: px.y / self.height * 100.0,
        }
    }

    /// Convert a percent position to pixel coordinates.
    #[must_use]
    pub fn to_px(&self, percent: Point) -> Point {
        Point {
            x: percent.x / 100.0 * self.width,
            y: percent.y / 100.0 * self.height,
        }
    }
}

/// Angle in degrees of `pointer` as seen from `center`, with straight up
/// at 0° and clockwise positive.
#[must_use]
pub fn angle_from(center: Point, pointer: Point) -> f64 {
    (pointer.x - center.x).atan2(center.y - pointer.y).to_degrees()
}

/// Euclidean pixel distance from `center` to `pointer`.
#[must_use]
pub fn distance_from(center: Point, pointer: Point) -> f64 {
    ((pointer.x - center.x).powi(2) + (pointer.y - center.y).powi(2)).sqrt()
}
