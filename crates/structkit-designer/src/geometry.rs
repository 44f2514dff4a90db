//! Shared geometry used by the placement engine and every projection.
//!
//! The vertical anchor rule, roof geometry, rotation helpers and snapping math
//! live here and nowhere else. The plan, elevation and 3D views all call into
//! this module so a cabinet can never sit at one height in the elevation and
//! another in the 3D scene.

use glam::{DMat2, DVec2};

use crate::catalog::{ApplianceType, CabinetType, ItemKind};
use crate::model::{Opening, Point, RoofStyle, RoomSpec};
use structkit_core::constants::{FLAT_ROOF_BAND_FT, GAMBREL_BREAK_RATIO, WALL_CABINET_MOUNT_HEIGHT_IN};
use structkit_core::feet_to_inches;

/// Clamps a corner coordinate so `[value, value + extent]` stays inside `[0, room_extent]`.
///
/// An item longer than the room is pinned to 0.
pub fn clamp_to_room(value: f64, extent: f64, room_extent: f64) -> f64 {
    let max = (room_extent - extent).max(0.0);
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max)
}

/// Rounds to the nearest multiple of `grid_size`, then clamps into the room.
///
/// The upper clamp is the last grid line that still fits, so the result is
/// always on the grid and snapping twice gives the same value.
pub fn snap_to_grid(value: f64, grid_size: f64, extent: f64, room_extent: f64) -> f64 {
    if grid_size <= 0.0 || !grid_size.is_finite() {
        return clamp_to_room(value, extent, room_extent);
    }
    let max = (room_extent - extent).max(0.0);
    let last_line = (max / grid_size).floor() * grid_size;
    let snapped = (value / grid_size).round() * grid_size;
    if snapped.is_nan() {
        return 0.0;
    }
    snapped.clamp(0.0, last_line)
}

/// Wraps an angle into [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Snaps an angle to the nearest `increment` and normalizes it.
pub fn snap_angle(degrees: f64, increment: f64) -> f64 {
    if increment <= 0.0 {
        return normalize_degrees(degrees);
    }
    normalize_degrees((degrees / increment).round() * increment)
}

/// Angle in degrees of the vector from `center` to `p`.
pub fn angle_from(center: Point, p: Point) -> f64 {
    (p.y - center.y).atan2(p.x - center.x).to_degrees()
}

fn rotation_matrix(degrees: f64) -> DMat2 {
    DMat2::from_angle(degrees.to_radians())
}

/// Moves `p` into the item frame: subtract the pivot, apply the inverse rotation.
pub fn to_local_frame(p: Point, center: Point, rotation_deg: f64) -> DVec2 {
    rotation_matrix(-rotation_deg) * (p.to_vec() - center.to_vec())
}

/// Footprint corners of a `width x depth` box at corner `(x, y)` rotated about
/// its center. Order: top-left, top-right, bottom-right, bottom-left (unrotated).
pub fn rotated_corners(x: f64, y: f64, width: f64, depth: f64, rotation_deg: f64) -> [Point; 4] {
    let center = DVec2::new(x + width / 2.0, y + depth / 2.0);
    let (hw, hd) = (width / 2.0, depth / 2.0);
    let m = rotation_matrix(rotation_deg);
    [
        DVec2::new(-hw, -hd),
        DVec2::new(hw, -hd),
        DVec2::new(hw, hd),
        DVec2::new(-hw, hd),
    ]
    .map(|v| Point::from(center + m * v))
}

/// The rotated far corner of the footprint, where the rotation handle sits.
pub fn rotation_handle_position(center: Point, width: f64, depth: f64, rotation_deg: f64) -> Point {
    let offset = rotation_matrix(rotation_deg) * DVec2::new(width / 2.0, depth / 2.0);
    Point::from(center.to_vec() + offset)
}

/// Vertical placement of an item: distance from the floor to its center (inches).
///
/// Wall-mounted pieces (wall cabinets, over-range microwaves) hang from the
/// mount height; everything else stands on the floor.
pub fn anchor_center_height(kind: &ItemKind, height: f64) -> f64 {
    match kind {
        ItemKind::Cabinet {
            cabinet_type: CabinetType::Wall,
            ..
        }
        | ItemKind::Appliance {
            appliance_type: ApplianceType::Microwave,
        } => WALL_CABINET_MOUNT_HEIGHT_IN + height / 2.0,
        ItemKind::Appliance {
            appliance_type: ApplianceType::Sink,
        } => BASE_COUNTER_HEIGHT_IN - height / 2.0,
        _ => height / 2.0,
    }
}

/// Top of a standard base cabinet with countertop (inches).
pub const BASE_COUNTER_HEIGHT_IN: f64 = 36.0;

/// (bottom, top) of an item above the floor, in inches.
pub fn vertical_span(kind: &ItemKind, height: f64) -> (f64, f64) {
    let center = anchor_center_height(kind, height);
    (center - height / 2.0, center + height / 2.0)
}

/// (bottom, top) of a wall opening above the floor, in inches.
pub fn opening_vertical_span(opening: &Opening) -> (f64, f64) {
    (opening.sill_height, opening.sill_height + opening.height)
}

/// Roof rise for a span: `(span / 2) * (pitch / 12)`. Flat roofs have no rise.
pub fn roof_rise(style: RoofStyle, span: f64, pitch: f64) -> f64 {
    if style.is_pitched() {
        (span / 2.0) * (pitch / 12.0)
    } else {
        0.0
    }
}

/// Rafter length from eave to ridge: `sqrt((span/2)^2 + rise^2)`.
pub fn slope_length(span: f64, rise: f64) -> f64 {
    ((span / 2.0).powi(2) + rise.powi(2)).sqrt()
}

/// Roof rise for the room in inches. The ridge runs along the room length.
pub fn room_roof_rise_in(room: &RoomSpec) -> f64 {
    roof_rise(room.roof_style, room.width_in(), room.roof_pitch)
}

/// A roof outline vertex: horizontal position, height, and how far the vertex is
/// pulled in from the gable ends along the ridge direction (hip roofs).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoofVertex {
    pub across: f64,
    pub height: f64,
    pub inset: f64,
}

/// Roof cross-section across the width, eave to eave, in inches.
///
/// Heights are measured from the floor. The returned outline starts at the
/// left eave and ends at the right eave.
pub fn roof_cross_section(room: &RoomSpec) -> Vec<RoofVertex> {
    let span = room.width_in();
    let length = room.length_in();
    let eave = room.height_in();
    let rise = room_roof_rise_in(room);
    let v = |across: f64, height: f64, inset: f64| RoofVertex { across, height, inset };

    match room.roof_style {
        RoofStyle::Gable => vec![v(0.0, eave, 0.0), v(span / 2.0, eave + rise, 0.0), v(span, eave, 0.0)],
        RoofStyle::Hip => {
            // Equal-pitch hips meet the ridge half a span in from each end.
            let inset = (span / 2.0).min(length / 2.0);
            vec![v(0.0, eave, 0.0), v(span / 2.0, eave + rise, inset), v(span, eave, 0.0)]
        }
        RoofStyle::Gambrel => {
            let break_height = eave + GAMBREL_BREAK_RATIO * rise;
            let break_in = span * 0.2;
            vec![
                v(0.0, eave, 0.0),
                v(break_in, break_height, 0.0),
                v(span / 2.0, eave + rise, 0.0),
                v(span - break_in, break_height, 0.0),
                v(span, eave, 0.0),
            ]
        }
        RoofStyle::Flat => {
            let band = feet_to_inches(FLAT_ROOF_BAND_FT);
            vec![
                v(0.0, eave, 0.0),
                v(0.0, eave + band, 0.0),
                v(span, eave + band, 0.0),
                v(span, eave, 0.0),
            ]
        }
    }
}

/// Roof outline seen from the side (along the length), eave line first.
pub fn roof_side_profile(room: &RoomSpec) -> Vec<Point> {
    let length = room.length_in();
    let eave = room.height_in();
    let section = roof_cross_section(room);
    let top = section.iter().map(|v| v.height).fold(eave, f64::max);

    match room.roof_style {
        RoofStyle::Hip => {
            let inset = section.iter().map(|v| v.inset).fold(0.0, f64::max);
            vec![
                Point::new(0.0, eave),
                Point::new(inset, top),
                Point::new(length - inset, top),
                Point::new(length, eave),
            ]
        }
        _ => vec![
            Point::new(0.0, eave),
            Point::new(0.0, top),
            Point::new(length, top),
            Point::new(length, eave),
        ],
    }
}

/// Area of the triangular (or gambrel) gable ends above the eave line, both ends, in sq ft.
pub fn gable_end_area_sq_ft(room: &RoomSpec) -> f64 {
    match room.roof_style {
        RoofStyle::Gable | RoofStyle::Gambrel => {
            let rise_ft = roof_rise(room.roof_style, room.width, room.roof_pitch);
            room.width * rise_ft
        }
        RoofStyle::Hip | RoofStyle::Flat => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_clamp_to_room() {
        assert_eq!(clamp_to_room(210.0, 24.0, 144.0), 120.0);
        assert_eq!(clamp_to_room(-5.0, 24.0, 144.0), 0.0);
        assert_eq!(clamp_to_room(50.0, 200.0, 144.0), 0.0);
        assert_eq!(clamp_to_room(f64::NAN, 24.0, 144.0), 0.0);
    }

    #[test]
    fn test_snap_to_grid_examples() {
        assert_eq!(snap_to_grid(13.0, 6.0, 24.0, 144.0), 12.0);
        assert_eq!(snap_to_grid(12.0, 6.0, 24.0, 144.0), 12.0);
        assert_eq!(snap_to_grid(125.0, 6.0, 24.0, 144.0), 120.0);
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        let tiny = normalize_degrees(-1e-15);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn test_snap_angle() {
        assert_eq!(snap_angle(7.0, 15.0), 0.0);
        assert_eq!(snap_angle(8.0, 15.0), 15.0);
        assert_eq!(snap_angle(-8.0, 15.0), 345.0);
    }

    #[test]
    fn test_rotated_corners_quarter_turn() {
        let corners = rotated_corners(0.0, 0.0, 20.0, 10.0, 90.0);
        // Center (10, 5); a quarter turn maps the top-left (-10, -5) to (5, -10).
        assert!((corners[0].x - 15.0).abs() < 1e-9);
        assert!((corners[0].y - -5.0).abs() < 1e-9);
    }

    #[test]
    fn test_anchor_rule() {
        let wall = catalog::find("wall-30").unwrap();
        let base = catalog::find("base-24").unwrap();
        assert_eq!(anchor_center_height(&wall.kind, wall.height), 69.0);
        assert_eq!(anchor_center_height(&base.kind, base.height), 17.25);
        assert_eq!(vertical_span(&wall.kind, wall.height), (54.0, 84.0));
    }

    #[test]
    fn test_roof_geometry_two_bay_garage() {
        let room = RoomSpec::new(20.0, 20.0, 9.0);
        assert_eq!(roof_rise(room.roof_style, room.width, room.roof_pitch), 5.0);
        assert!((slope_length(20.0, 5.0) - 11.1803).abs() < 1e-3);
        let section = roof_cross_section(&room);
        assert_eq!(section.len(), 3);
        assert_eq!(section[1].height, 108.0 + 60.0);
    }

    #[test]
    fn test_flat_roof_has_no_rise() {
        let room = RoomSpec {
            roof_style: RoofStyle::Flat,
            ..RoomSpec::new(20.0, 20.0, 9.0)
        };
        assert_eq!(room_roof_rise_in(&room), 0.0);
        assert_eq!(gable_end_area_sq_ft(&room), 0.0);
        assert_eq!(roof_cross_section(&room).len(), 4);
    }

    #[test]
    fn test_hip_side_profile_is_trapezoid() {
        let room = RoomSpec {
            roof_style: RoofStyle::Hip,
            ..RoomSpec::new(20.0, 30.0, 9.0)
        };
        let profile = roof_side_profile(&room);
        assert_eq!(profile[1].x, 120.0);
        assert_eq!(profile[2].x, 360.0 - 120.0);
    }
}
