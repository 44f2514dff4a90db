//! Plan viewport and coordinate transformation.
//!
//! Converts between canvas pixels and room inches for the top-down plan. The
//! base scale fits the room into the padded canvas; zoom and pan are applied
//! on top. Unlike a CAD canvas the plan keeps screen orientation: the front
//! wall (y = 0) is the top edge, so there is no y flip.

use std::fmt;

use crate::model::{Point, RoomSpec};
use crate::projection::ViewConfig;

const MIN_ZOOM: f64 = 0.1;
const MAX_ZOOM: f64 = 50.0;

/// Represents the plan transformation state (fit scale, zoom and pan).
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    fit_scale: f64,
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    padding: f64,
}

impl Viewport {
    /// Creates a viewport fitted to `room` on the given canvas, with the
    /// view's zoom and pan applied.
    pub fn fit_room(room: &RoomSpec, view: &ViewConfig) -> Self {
        let zoom = if view.zoom > MIN_ZOOM && view.zoom < MAX_ZOOM {
            view.zoom
        } else {
            1.0
        };
        let pan = |v: f64| if v.is_finite() { v } else { 0.0 };
        Self {
            fit_scale: view.fit_scale(room.width_in(), room.length_in()),
            zoom,
            pan_x: pan(view.pan_x),
            pan_y: pan(view.pan_y),
            padding: view.padding,
        }
    }

    /// Pixels per inch including zoom.
    pub fn scale(&self) -> f64 {
        self.fit_scale * self.zoom
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Converts canvas pixels to room inches.
    ///
    /// ```text
    /// room_x = (pixel_x - padding - pan_x) / scale
    /// room_y = (pixel_y - padding - pan_y) / scale
    /// ```
    pub fn pixel_to_room(&self, pixel_x: f64, pixel_y: f64) -> Point {
        let scale = self.scale();
        Point::new(
            (pixel_x - self.padding - self.pan_x) / scale,
            (pixel_y - self.padding - self.pan_y) / scale,
        )
    }

    /// Converts room inches to canvas pixels.
    pub fn room_to_pixel(&self, room_x: f64, room_y: f64) -> Point {
        let scale = self.scale();
        Point::new(
            self.padding + self.pan_x + room_x * scale,
            self.padding + self.pan_y + room_y * scale,
        )
    }

    pub fn room_point_to_pixel(&self, point: &Point) -> Point {
        self.room_to_pixel(point.x, point.y)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scale: {:.3} px/in | Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.scale(),
            self.zoom,
            self.pan_x,
            self.pan_y
        )
    }
}
