//! Planner edit operations: item updates, room updates and wall openings.

use tracing::{debug, warn};

use super::Planner;
use crate::catalog::{CatalogItem, OpeningType};
use crate::geometry;
use crate::model::{ItemUpdate, Opening, RoomSpec, RoomUpdate, Wall};

/// Smallest per-instance dimension override accepted, in inches.
const MIN_ITEM_DIMENSION_IN: f64 = 1.0;

fn valid_dimension(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v >= MIN_ITEM_DIMENSION_IN)
}

impl Planner {
    /// Applies a partial update to an item. Position and size changes are
    /// clamped back into the room; rotation is normalized. Unknown ids are
    /// ignored and return false.
    pub fn update_item(&mut self, id: u64, update: ItemUpdate) -> bool {
        let (room_w, room_l) = (self.config.room_width_in(), self.config.room_length_in());
        let Some(item) = self.config.item_mut(id) else {
            return false;
        };

        if let Some(width) = valid_dimension(update.width) {
            item.item.width = width;
        }
        if let Some(height) = valid_dimension(update.height) {
            item.item.height = height;
        }
        if let Some(depth) = valid_dimension(update.depth) {
            item.item.depth = depth;
        }
        if let Some(rotation) = update.rotation {
            item.rotation = geometry::normalize_degrees(rotation);
        }
        if let Some(wall) = update.wall {
            item.wall = Some(wall);
        }
        if let Some(finish) = update.finish {
            item.finish = if finish.is_empty() { None } else { Some(finish) };
        }

        let x = update.x.unwrap_or(item.x);
        let y = update.y.unwrap_or(item.y);
        item.x = geometry::clamp_to_room(x, item.width(), room_w);
        item.y = geometry::clamp_to_room(y, item.depth(), room_l);
        debug!(id, x = item.x, y = item.y, "updated item");
        true
    }

    /// Replaces room parameters and re-clamps every item and opening so the
    /// containment invariant holds in the resized room.
    pub fn update_room(&mut self, update: &RoomUpdate) -> &RoomSpec {
        self.config.room = update.apply_to(&self.config.room);
        debug!(
            width = self.config.room.width,
            length = self.config.room.length,
            "room updated"
        );
        self.reclamp_all();
        &self.config.room
    }

    pub(super) fn reclamp_all(&mut self) {
        let (room_w, room_l) = (self.config.room_width_in(), self.config.room_length_in());
        for item in &mut self.config.items {
            item.x = geometry::clamp_to_room(item.x, item.width(), room_w);
            item.y = geometry::clamp_to_room(item.y, item.depth(), room_l);
            item.rotation = geometry::normalize_degrees(item.rotation);
        }
        for opening in &mut self.config.openings {
            let wall_len = if opening.wall.runs_along_width() { room_w } else { room_l };
            opening.offset = geometry::clamp_to_room(opening.offset, opening.width, wall_len);
        }
        if self.config.next_id == 0 {
            self.config.next_id = 1;
        }
        // Keep ids unique after loading hand-edited files.
        let max_id = self
            .config
            .items
            .iter()
            .map(|i| i.id)
            .chain(self.config.openings.iter().map(|o| o.id))
            .max()
            .unwrap_or(0);
        if self.config.next_id <= max_id {
            self.config.next_id = max_id + 1;
        }
    }

    /// Cuts an opening into a wall. The offset is clamped so the opening fits the wall.
    pub fn add_opening(
        &mut self,
        opening_type: OpeningType,
        wall: Wall,
        offset: f64,
        width: f64,
        height: f64,
    ) -> u64 {
        let id = self.config.generate_id();
        let mut opening = Opening::new(id, opening_type, wall, offset, width, height);
        opening.offset = geometry::clamp_to_room(offset, width, self.config.wall_length_in(wall));
        debug!(id, %wall, offset = opening.offset, "adding opening");
        self.config.openings.push(opening);
        id
    }

    /// Cuts an opening sized from a door or window catalog entry. Returns
    /// `None` for cabinets and appliances.
    pub fn add_opening_from_catalog(&mut self, item: &CatalogItem, wall: Wall, offset: f64) -> Option<u64> {
        if item.kind.opening_type().is_none() {
            warn!(catalog_id = %item.id, "catalog entry is not a door or window");
            return None;
        }
        let id = self.config.generate_id();
        let wall_len = self.config.wall_length_in(wall);
        let mut opening = Opening::from_catalog(id, item, wall, offset)?;
        opening.offset = geometry::clamp_to_room(offset, opening.width, wall_len);
        debug!(id, catalog_id = %item.id, %wall, offset = opening.offset, "adding opening");
        self.config.openings.push(opening);
        Some(id)
    }

    /// Slides an opening along its wall by `delta` inches.
    pub fn slide_opening(&mut self, id: u64, delta: f64) -> bool {
        let Some(wall) = self.config.opening(id).map(|o| o.wall) else {
            return false;
        };
        let wall_len = self.config.wall_length_in(wall);
        if let Some(opening) = self.config.opening_mut(id) {
            opening.offset = geometry::clamp_to_room(opening.offset + delta, opening.width, wall_len);
        }
        true
    }

    /// Moves an opening to another wall, keeping the offset where it fits.
    pub fn move_opening(&mut self, id: u64, wall: Wall, offset: f64) -> bool {
        let wall_len = self.config.wall_length_in(wall);
        let Some(opening) = self.config.opening_mut(id) else {
            return false;
        };
        opening.wall = wall;
        opening.offset = geometry::clamp_to_room(offset, opening.width, wall_len);
        true
    }

    /// Snaps an opening's offset to the grid when snapping is enabled.
    pub fn snap_opening(&mut self, id: u64) -> bool {
        let grid = self.config.room.grid_size;
        let snap = self.config.room.snap_enabled;
        let Some(wall) = self.config.opening(id).map(|o| o.wall) else {
            return false;
        };
        let wall_len = self.config.wall_length_in(wall);
        if let Some(opening) = self.config.opening_mut(id) {
            if snap {
                opening.offset = geometry::snap_to_grid(opening.offset, grid, opening.width, wall_len);
            }
        }
        true
    }

    pub fn delete_opening(&mut self, id: u64) -> Option<Opening> {
        let index = self.config.openings.iter().position(|o| o.id == id)?;
        if self.gesture.target_id() == Some(id) {
            self.gesture = crate::interaction::Gesture::Idle;
        }
        Some(self.config.openings.remove(index))
    }

    /// Removes every item and opening. Room parameters are kept.
    pub fn clear(&mut self) {
        self.config.items.clear();
        self.config.openings.clear();
        self.selection_manager.clear();
        self.gesture = crate::interaction::Gesture::Idle;
    }
}
