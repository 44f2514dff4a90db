use serde::{Deserialize, Serialize};

use super::{Point, Wall};
use crate::catalog::{CatalogItem, OpeningType};

/// A structural opening cut into one of the exterior walls (garage planner).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub id: u64,
    pub opening_type: OpeningType,
    pub wall: Wall,
    /// Distance from the start of the wall (left end for front/back, front end
    /// for left/right), in inches.
    pub offset: f64,
    pub width: f64,
    pub height: f64,
    /// Distance from the floor to the bottom of the opening, in inches.
    #[serde(default)]
    pub sill_height: f64,
    /// Catalog entry the opening was created from, if any.
    #[serde(default)]
    pub catalog_id: Option<String>,
    #[serde(default)]
    pub unit_price: Option<f64>,
}

/// Sill height given to windows created from the catalog.
pub const DEFAULT_WINDOW_SILL_IN: f64 = 42.0;

impl Opening {
    pub fn new(id: u64, opening_type: OpeningType, wall: Wall, offset: f64, width: f64, height: f64) -> Self {
        let sill_height = match opening_type {
            OpeningType::Window => DEFAULT_WINDOW_SILL_IN,
            _ => 0.0,
        };
        Self {
            id,
            opening_type,
            wall,
            offset,
            width,
            height,
            sill_height,
            catalog_id: None,
            unit_price: None,
        }
    }

    /// Builds an opening from a catalog entry. Returns `None` for cabinets and appliances.
    pub fn from_catalog(id: u64, item: &CatalogItem, wall: Wall, offset: f64) -> Option<Self> {
        let opening_type = item.kind.opening_type()?;
        let mut opening = Self::new(id, opening_type, wall, offset, item.width, item.height);
        opening.catalog_id = Some(item.id.clone());
        opening.unit_price = item.unit_price;
        Some(opening)
    }

    /// Area in square feet.
    pub fn area_sq_ft(&self) -> f64 {
        self.width * self.height / structkit_core::SQ_INCHES_PER_SQ_FOOT
    }

    /// Start and end points of the opening along its wall, in plan coordinates.
    pub fn plan_segment(&self, room_width_in: f64, room_length_in: f64) -> (Point, Point) {
        let start = self.offset;
        let end = self.offset + self.width;
        match self.wall {
            Wall::Front => (Point::new(start, 0.0), Point::new(end, 0.0)),
            Wall::Back => (Point::new(start, room_length_in), Point::new(end, room_length_in)),
            Wall::Left => (Point::new(0.0, start), Point::new(0.0, end)),
            Wall::Right => (Point::new(room_width_in, start), Point::new(room_width_in, end)),
        }
    }

    /// Contains test against the opening's strip on the wall, `half_thickness` inches either side.
    pub fn contains_point(&self, p: Point, room_width_in: f64, room_length_in: f64, half_thickness: f64) -> bool {
        let (a, b) = self.plan_segment(room_width_in, room_length_in);
        let (min_x, max_x) = (a.x.min(b.x) - half_thickness, a.x.max(b.x) + half_thickness);
        let (min_y, max_y) = (a.y.min(b.y) - half_thickness, a.y.max(b.y) + half_thickness);
        p.x >= min_x && p.x <= max_x && p.y >= min_y && p.y <= max_y
    }
}
