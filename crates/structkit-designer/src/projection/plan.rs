use super::{rect, DisplayList, Primitive, Role, ViewConfig};
use crate::model::{PlannerConfig, Point, Wall};
use crate::viewport::Viewport;
use structkit_core::format_feet_inches;
use tracing::trace;

/// Upper bound on grid lines per axis; finer grids are not drawn.
const MAX_GRID_LINES: usize = 2000;

/// Top-down plan: walls, grid, openings, rotated item footprints, selection.
pub fn project_plan(config: &PlannerConfig, view: &ViewConfig) -> DisplayList {
    let viewport = Viewport::fit_room(&config.room, view);
    trace!(%viewport, "plan viewport");
    let scale = viewport.scale();
    let (room_w, room_l) = (config.room_width_in(), config.room_length_in());
    let mut list = DisplayList::new(view.canvas_width, view.canvas_height, scale);

    let origin = viewport.room_to_pixel(0.0, 0.0);
    list.push(rect(origin.x, origin.y, room_w * scale, room_l * scale, Role::Floor, None));

    if config.display.show_grid {
        push_grid(&mut list, &viewport, room_w, room_l, config.room.grid_size);
    }

    let thickness = config.room.wall_framing.wall_thickness_in() * scale;
    let (w_px, l_px) = (room_w * scale, room_l * scale);
    list.push(rect(origin.x - thickness, origin.y - thickness, w_px + 2.0 * thickness, thickness, Role::Wall, None));
    list.push(rect(origin.x - thickness, origin.y + l_px, w_px + 2.0 * thickness, thickness, Role::Wall, None));
    list.push(rect(origin.x - thickness, origin.y, thickness, l_px, Role::Wall, None));
    list.push(rect(origin.x + w_px, origin.y, thickness, l_px, Role::Wall, None));

    for opening in &config.openings {
        let start = opening.offset * scale;
        let len = opening.width * scale;
        let primitive = match opening.wall {
            Wall::Front => rect(origin.x + start, origin.y - thickness, len, thickness, Role::Opening, Some(opening.id)),
            Wall::Back => rect(origin.x + start, origin.y + l_px, len, thickness, Role::Opening, Some(opening.id)),
            Wall::Left => rect(origin.x - thickness, origin.y + start, thickness, len, Role::Opening, Some(opening.id)),
            Wall::Right => rect(origin.x + w_px, origin.y + start, thickness, len, Role::Opening, Some(opening.id)),
        };
        list.push(primitive);
    }

    for item in &config.items {
        let points = item
            .footprint()
            .iter()
            .map(|p| viewport.room_point_to_pixel(p))
            .collect();
        list.push(Primitive::Polygon {
            points,
            role: Role::for_kind(item.kind()),
            id: Some(item.id),
        });
        if view.show_labels {
            list.push(Primitive::Label {
                at: viewport.room_point_to_pixel(&item.center()),
                text: item.item.name.clone(),
                role: Role::Label,
            });
        }
    }

    if let Some(item) = view.selected.and_then(|id| config.item(id)) {
        let points = item
            .footprint()
            .iter()
            .map(|p| viewport.room_point_to_pixel(p))
            .collect();
        list.push(Primitive::Polygon {
            points,
            role: Role::Selection,
            id: Some(item.id),
        });
        list.push(Primitive::Circle {
            center: viewport.room_point_to_pixel(&item.rotation_handle()),
            radius: view.handle_radius * scale,
            role: Role::RotationHandle,
            id: Some(item.id),
        });
    }

    if view.show_labels {
        list.push(Primitive::Label {
            at: Point::new(origin.x + w_px / 2.0, (origin.y - thickness) / 2.0),
            text: format!("{} x {}", format_feet_inches(room_w), format_feet_inches(room_l)),
            role: Role::Dimension,
        });
    }

    list
}

fn push_grid(list: &mut DisplayList, viewport: &Viewport, room_w: f64, room_l: f64, grid: f64) {
    if grid <= 0.0 {
        return;
    }
    let columns = (room_w / grid).floor() as usize;
    let rows = (room_l / grid).floor() as usize;
    if columns > MAX_GRID_LINES || rows > MAX_GRID_LINES {
        return;
    }
    // Interior lines only; the walls cover the edges.
    for i in 1..=columns {
        let x = i as f64 * grid;
        if x >= room_w {
            break;
        }
        list.push(Primitive::Line {
            from: viewport.room_to_pixel(x, 0.0),
            to: viewport.room_to_pixel(x, room_l),
            role: Role::Grid,
        });
    }
    for j in 1..=rows {
        let y = j as f64 * grid;
        if y >= room_l {
            break;
        }
        list.push(Primitive::Line {
            from: viewport.room_to_pixel(0.0, y),
            to: viewport.room_to_pixel(room_w, y),
            role: Role::Grid,
        });
    }
}
