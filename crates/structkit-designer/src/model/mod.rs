//! Configuration model: the single source of truth for every view and for the
//! materials take-off.
//!
//! The model is plain data. It is mutated only through
//! [`Planner`](crate::planner::Planner) and read by the projections and the
//! calculator.

mod item;
mod opening;
mod room;

pub use item::{ItemUpdate, PlacedItem, Wall};
pub use opening::{Opening, DEFAULT_WINDOW_SILL_IN};
pub use room::{
    CabinetStyle, CountertopMaterial, RoofStyle, RoomSpec, RoomUpdate, SidingType, WallFraming,
};

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in room space, in inches. Origin is the front-left corner, +y runs
/// towards the back wall.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        self.to_vec().distance(other.to_vec())
    }

    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Which planner produced the model. Selects the take-off rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlannerKind {
    #[default]
    Garage,
    Kitchen,
}

impl PlannerKind {
    /// Garages are whole structures with a roof; kitchens are interior rooms.
    pub fn has_roof(&self) -> bool {
        matches!(self, Self::Garage)
    }
}

impl fmt::Display for PlannerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Garage => write!(f, "garage"),
            Self::Kitchen => write!(f, "kitchen"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Plan,
    Front,
    Side,
    ThreeD,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayFlags {
    pub show_grid: bool,
    pub view_mode: ViewMode,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            show_grid: true,
            view_mode: ViewMode::Plan,
        }
    }
}

/// The configuration model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub kind: PlannerKind,
    pub room: RoomSpec,
    /// Placed items in insertion (draw) order.
    #[serde(default)]
    pub items: Vec<PlacedItem>,
    #[serde(default)]
    pub openings: Vec<Opening>,
    #[serde(default)]
    pub display: DisplayFlags,
    /// Next instance id handed out by the planner.
    #[serde(default = "first_id")]
    pub next_id: u64,
}

fn first_id() -> u64 {
    1
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new(PlannerKind::default(), RoomSpec::default())
    }
}

impl PlannerConfig {
    pub fn new(kind: PlannerKind, room: RoomSpec) -> Self {
        Self {
            kind,
            room: room.sanitized(),
            items: Vec::new(),
            openings: Vec::new(),
            display: DisplayFlags::default(),
            next_id: first_id(),
        }
    }

    pub fn room_width_in(&self) -> f64 {
        self.room.width_in()
    }

    pub fn room_length_in(&self) -> f64 {
        self.room.length_in()
    }

    pub fn item(&self, id: u64) -> Option<&PlacedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: u64) -> Option<&mut PlacedItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn opening(&self, id: u64) -> Option<&Opening> {
        self.openings.iter().find(|o| o.id == id)
    }

    pub fn opening_mut(&mut self, id: u64) -> Option<&mut Opening> {
        self.openings.iter_mut().find(|o| o.id == id)
    }

    /// Hands out the next unique instance id.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Length of a wall in inches.
    pub fn wall_length_in(&self, wall: Wall) -> f64 {
        if wall.runs_along_width() {
            self.room_width_in()
        } else {
            self.room_length_in()
        }
    }

    /// True when every item satisfies the unrotated bounding-box containment invariant.
    pub fn items_contained(&self) -> bool {
        let (w, l) = (self.room_width_in(), self.room_length_in());
        self.items.iter().all(|item| {
            item.x >= 0.0
                && item.y >= 0.0
                && (item.x + item.width() <= w + 1e-9 || item.x == 0.0)
                && (item.y + item.depth() <= l + 1e-9 || item.y == 0.0)
        })
    }
}
