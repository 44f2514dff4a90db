//! Placement engine.
//!
//! [`Planner`] owns the configuration model for one planner session and is
//! the only thing that mutates it. Every operation keeps the containment
//! invariant: after add, move and snap, each item's unrotated footprint lies
//! inside the room.

mod operations;
mod types;

pub use types::{Axis, HitTarget, PlannerOptions, RotateDirection};

use tracing::debug;

use crate::catalog::CatalogItem;
use crate::geometry;
use crate::interaction::{self, Edit, Gesture, PointerEvent};
use crate::model::{PlacedItem, PlannerConfig, Point};
use crate::selection_manager::SelectionManager;

/// Planner session state.
#[derive(Debug, Clone)]
pub struct Planner {
    config: PlannerConfig,
    pub selection_manager: SelectionManager,
    gesture: Gesture,
    options: PlannerOptions,
}

impl Planner {
    /// Creates a planner over `config`, re-clamping anything out of bounds.
    pub fn new(config: PlannerConfig) -> Self {
        Self::with_options(config, PlannerOptions::default())
    }

    pub fn with_options(config: PlannerConfig, options: PlannerOptions) -> Self {
        let mut planner = Self {
            config,
            selection_manager: SelectionManager::new(),
            gesture: Gesture::Idle,
            options,
        };
        planner.config.room = planner.config.room.clone().sanitized();
        planner.reclamp_all();
        planner
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn into_config(self) -> PlannerConfig {
        self.config
    }

    /// Swaps in a new model (template load, import). Selection and gesture reset.
    pub fn replace_config(&mut self, config: PlannerConfig) {
        self.config = config;
        self.config.room = self.config.room.clone().sanitized();
        self.selection_manager.clear();
        self.gesture = Gesture::Idle;
        self.reclamp_all();
    }

    pub fn options(&self) -> &PlannerOptions {
        &self.options
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.selection_manager.selected_id()
    }

    pub fn selected_item(&self) -> Option<&PlacedItem> {
        self.selected_id().and_then(|id| self.config.item(id))
    }

    /// Selects an item by id. Unknown ids clear the selection.
    pub fn select(&mut self, id: Option<u64>) {
        let id = id.filter(|id| self.config.item(*id).is_some());
        self.selection_manager.set_selected_id(id);
    }

    pub fn item_count(&self) -> usize {
        self.config.items.len()
    }

    /// Inserts `item` with its corner at `(x, y)`. Snaps first when snapping is
    /// on, then clamps. Always succeeds and returns the new instance id.
    pub fn add_item(&mut self, item: CatalogItem, x: f64, y: f64) -> u64 {
        let id = self.config.generate_id();
        let (x, y) = self.place_position(x, y, item.width, item.depth);
        debug!(id, catalog_id = %item.id, x, y, "adding item");
        self.config.items.push(PlacedItem::new(id, item, x, y));
        id
    }

    /// Adds a fully formed placed item (`onAddItem`), assigning a fresh id.
    pub fn insert_item(&mut self, mut item: PlacedItem) -> u64 {
        item.id = self.config.generate_id();
        let (x, y) = self.place_position(item.x, item.y, item.width(), item.depth());
        item.x = x;
        item.y = y;
        item.rotation = geometry::normalize_degrees(item.rotation);
        let id = item.id;
        self.config.items.push(item);
        id
    }

    fn place_position(&self, x: f64, y: f64, width: f64, depth: f64) -> (f64, f64) {
        if self.config.room.snap_enabled {
            (
                self.snap_to_grid(x, Axis::X, width),
                self.snap_to_grid(y, Axis::Y, depth),
            )
        } else {
            (
                geometry::clamp_to_room(x, width, self.config.room_width_in()),
                geometry::clamp_to_room(y, depth, self.config.room_length_in()),
            )
        }
    }

    /// Drag step: `x' = clamp(x + dx, 0, roomW - w)`, likewise for y. No snapping
    /// and no collision checks. Returns false for unknown ids.
    pub fn move_item(&mut self, id: u64, dx: f64, dy: f64) -> bool {
        let (room_w, room_l) = (self.config.room_width_in(), self.config.room_length_in());
        let Some(item) = self.config.item_mut(id) else {
            return false;
        };
        item.x = geometry::clamp_to_room(item.x + dx, item.width(), room_w);
        item.y = geometry::clamp_to_room(item.y + dy, item.depth(), room_l);
        true
    }

    /// Toolbar rotation by one fixed step, wrapped into [0, 360).
    pub fn rotate_step(&mut self, id: u64, direction: RotateDirection) -> Option<f64> {
        let step = direction.signed_step(self.options.rotation_step_deg);
        let item = self.config.item_mut(id)?;
        item.rotation = geometry::normalize_degrees(item.rotation + step);
        debug!(id, rotation = item.rotation, "rotated item");
        Some(item.rotation)
    }

    /// Sets an absolute rotation. Position is left alone; the footprint is not re-clamped.
    pub fn set_rotation(&mut self, id: u64, degrees: f64) -> Option<f64> {
        let item = self.config.item_mut(id)?;
        item.rotation = geometry::normalize_degrees(degrees);
        Some(item.rotation)
    }

    /// Removes an item, clearing the selection if it was selected.
    pub fn delete_item(&mut self, id: u64) -> Option<PlacedItem> {
        let index = self.config.items.iter().position(|item| item.id == id)?;
        let removed = self.config.items.remove(index);
        self.selection_manager.forget(id);
        if self.gesture.target_id() == Some(id) && !matches!(self.gesture, Gesture::SlidingOpening { .. }) {
            self.gesture = Gesture::Idle;
        }
        debug!(id, "deleted item");
        Some(removed)
    }

    /// Deletes the current selection, if any.
    pub fn delete_selected(&mut self) -> Option<PlacedItem> {
        let id = self.selected_id()?;
        self.delete_item(id)
    }

    /// Rotation-aware hit test in room inches.
    pub fn hit_test(&self, point: Point) -> Option<HitTarget> {
        interaction::hit_test(&self.config, self.selected_id(), point, &self.options)
    }

    /// Snaps a coordinate on `axis` to the grid and clamps it for an item of `extent`.
    pub fn snap_to_grid(&self, value: f64, axis: Axis, extent: f64) -> f64 {
        let room_extent = match axis {
            Axis::X => self.config.room_width_in(),
            Axis::Y => self.config.room_length_in(),
        };
        geometry::snap_to_grid(value, self.config.room.grid_size, extent, room_extent)
    }

    /// Snaps an item's position to the grid when snapping is enabled.
    pub fn snap_item(&mut self, id: u64) -> bool {
        if !self.config.room.snap_enabled {
            return self.config.item(id).is_some();
        }
        let Some((x, y, w, d)) = self.config.item(id).map(|i| (i.x, i.y, i.width(), i.depth())) else {
            return false;
        };
        let (sx, sy) = (self.snap_to_grid(x, Axis::X, w), self.snap_to_grid(y, Axis::Y, d));
        if let Some(item) = self.config.item_mut(id) {
            item.x = sx;
            item.y = sy;
        }
        true
    }

    /// Feeds one pointer event through the gesture state machine and applies its edits.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Gesture {
        let (next, edits) = interaction::transition(
            self.gesture,
            event,
            &self.config,
            self.selected_id(),
            &self.options,
        );
        for edit in edits {
            self.apply_edit(edit);
        }
        self.gesture = next;
        next
    }

    fn apply_edit(&mut self, edit: Edit) {
        match edit {
            Edit::Select(id) => self.select(id),
            Edit::MoveItem { id, dx, dy } => {
                self.move_item(id, dx, dy);
            }
            Edit::SetRotation { id, degrees } => {
                self.set_rotation(id, degrees);
            }
            Edit::SnapItem { id } => {
                self.snap_item(id);
            }
            Edit::SlideOpening { id, delta } => {
                self.slide_opening(id, delta);
            }
            Edit::SnapOpening { id } => {
                self.snap_opening(id);
            }
        }
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}
