use serde::{Deserialize, Serialize};
use std::fmt;

use super::Point;
use crate::catalog::{CatalogItem, ItemKind};
use crate::geometry;

/// Exterior wall of the room, as seen in the plan view (front is the top edge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wall {
    Front,
    Back,
    Left,
    Right,
}

impl Wall {
    pub const ALL: [Wall; 4] = [Wall::Front, Wall::Back, Wall::Left, Wall::Right];

    /// Whether the wall runs along the room width (x axis).
    pub fn runs_along_width(&self) -> bool {
        matches!(self, Self::Front | Self::Back)
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Front => write!(f, "Front"),
            Self::Back => write!(f, "Back"),
            Self::Left => write!(f, "Left"),
            Self::Right => write!(f, "Right"),
        }
    }
}

/// A catalog item placed in the room.
///
/// The catalog entry is carried by value so per-instance size overrides never
/// touch the shared catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub id: u64,
    pub item: CatalogItem,
    /// Top-left corner in room inches.
    pub x: f64,
    pub y: f64,
    /// Degrees in [0, 360).
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub wall: Option<Wall>,
    #[serde(default)]
    pub finish: Option<String>,
}

impl PlacedItem {
    pub fn new(id: u64, item: CatalogItem, x: f64, y: f64) -> Self {
        Self {
            id,
            item,
            x,
            y,
            rotation: 0.0,
            wall: None,
            finish: None,
        }
    }

    pub fn width(&self) -> f64 {
        self.item.width
    }

    pub fn depth(&self) -> f64 {
        self.item.depth
    }

    pub fn height(&self) -> f64 {
        self.item.height
    }

    pub fn kind(&self) -> &ItemKind {
        &self.item.kind
    }

    pub fn corner(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Rotation pivot: the center of the unrotated footprint.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width() / 2.0, self.y + self.depth() / 2.0)
    }

    /// Footprint corners after rotation, clockwise from the top-left.
    pub fn footprint(&self) -> [Point; 4] {
        geometry::rotated_corners(self.x, self.y, self.width(), self.depth(), self.rotation)
    }

    /// Position of the rotation handle: the rotated far corner of the footprint.
    pub fn rotation_handle(&self) -> Point {
        geometry::rotation_handle_position(self.center(), self.width(), self.depth(), self.rotation)
    }

    /// Precise, rotation-aware containment test.
    pub fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        let local = geometry::to_local_frame(p, self.center(), self.rotation);
        local.x.abs() <= self.width() / 2.0 + tolerance
            && local.y.abs() <= self.depth() / 2.0 + tolerance
    }
}

/// Partial update of a placed item (`onUpdateItem`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemUpdate {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rotation: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub depth: Option<f64>,
    pub wall: Option<Wall>,
    pub finish: Option<String>,
}

impl ItemUpdate {
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    pub fn rotation(degrees: f64) -> Self {
        Self {
            rotation: Some(degrees),
            ..Default::default()
        }
    }

    pub fn finish(finish: impl Into<String>) -> Self {
        Self {
            finish: Some(finish.into()),
            ..Default::default()
        }
    }
}
