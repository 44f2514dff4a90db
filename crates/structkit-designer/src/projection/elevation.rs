//! Front and side elevations.
//!
//! The front view looks at the front wall: horizontal is the room width. The
//! side view looks at the left wall: horizontal is the room length. Vertical
//! placement of every item goes through [`geometry::vertical_span`].

use super::{rect, DisplayList, Primitive, Role, ViewConfig};
use crate::geometry;
use crate::model::{PlacedItem, PlannerConfig, Point, RoofStyle, Wall};
use structkit_core::constants::GAMBREL_BREAK_RATIO;
use structkit_core::format_feet_inches;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Facing {
    Front,
    Side,
}

impl Facing {
    fn wall(self) -> Wall {
        match self {
            Self::Front => Wall::Front,
            Self::Side => Wall::Left,
        }
    }
}

/// Maps elevation inches (horizontal, height above floor) to canvas pixels.
struct Frame {
    scale: f64,
    left: f64,
    ground: f64,
}

impl Frame {
    fn point(&self, along: f64, height: f64) -> Point {
        Point::new(self.left + along * self.scale, self.ground - height * self.scale)
    }
}

pub fn project_front(config: &PlannerConfig, view: &ViewConfig) -> DisplayList {
    project_elevation(config, view, Facing::Front)
}

pub fn project_side(config: &PlannerConfig, view: &ViewConfig) -> DisplayList {
    project_elevation(config, view, Facing::Side)
}

fn project_elevation(config: &PlannerConfig, view: &ViewConfig, facing: Facing) -> DisplayList {
    let room = &config.room;
    let span = match facing {
        Facing::Front => config.room_width_in(),
        Facing::Side => config.room_length_in(),
    };
    let wall_height = room.height_in();
    let roof_top = if config.kind.has_roof() {
        wall_height + geometry::room_roof_rise_in(room).max(flat_band(room.roof_style))
    } else {
        wall_height
    };

    let scale = view.fit_scale(span, roof_top);
    let frame = Frame {
        scale,
        left: view.padding,
        ground: view.canvas_height - view.padding,
    };
    let mut list = DisplayList::new(view.canvas_width, view.canvas_height, scale);

    list.push(Primitive::Line {
        from: Point::new(0.0, frame.ground),
        to: Point::new(view.canvas_width, frame.ground),
        role: Role::Ground,
    });

    let top_left = frame.point(0.0, wall_height);
    list.push(rect(top_left.x, top_left.y, span * scale, wall_height * scale, Role::Wall, None));

    if config.kind.has_roof() {
        push_roof(&mut list, config, &frame, facing);
    }

    let wall = facing.wall();
    for opening in config.openings.iter().filter(|o| o.wall == wall) {
        let (bottom, top) = geometry::opening_vertical_span(opening);
        let corner = frame.point(opening.offset, top);
        list.push(rect(
            corner.x,
            corner.y,
            opening.width * scale,
            (top - bottom) * scale,
            Role::Opening,
            Some(opening.id),
        ));
    }

    // Far items first so nearer ones draw over them.
    let mut items: Vec<&PlacedItem> = config.items.iter().collect();
    match facing {
        Facing::Front => items.sort_by(|a, b| b.y.total_cmp(&a.y)),
        Facing::Side => items.sort_by(|a, b| b.x.total_cmp(&a.x)),
    }
    for item in items {
        let (start, end) = horizontal_extent(item, facing);
        let (bottom, top) = geometry::vertical_span(item.kind(), item.height());
        let corner = frame.point(start, top);
        list.push(rect(
            corner.x,
            corner.y,
            (end - start) * scale,
            (top - bottom) * scale,
            Role::for_kind(item.kind()),
            Some(item.id),
        ));
    }

    if view.show_labels {
        let at = frame.point(span / 2.0, 0.0);
        list.push(Primitive::Label {
            at: Point::new(at.x, at.y + view.padding / 2.0),
            text: format_feet_inches(span),
            role: Role::Dimension,
        });
    }

    list
}

fn flat_band(style: RoofStyle) -> f64 {
    if style == RoofStyle::Flat {
        structkit_core::feet_to_inches(structkit_core::constants::FLAT_ROOF_BAND_FT)
    } else {
        0.0
    }
}

fn push_roof(list: &mut DisplayList, config: &PlannerConfig, frame: &Frame, facing: Facing) {
    let room = &config.room;
    let outline: Vec<Point> = match facing {
        Facing::Front => geometry::roof_cross_section(room)
            .iter()
            .map(|v| frame.point(v.across, v.height))
            .collect(),
        Facing::Side => geometry::roof_side_profile(room)
            .iter()
            .map(|p| frame.point(p.x, p.y))
            .collect(),
    };
    list.push(Primitive::Polygon {
        points: outline,
        role: Role::Roof,
        id: None,
    });

    // The gambrel slope break reads as a horizontal crease from the side.
    if facing == Facing::Side && room.roof_style == RoofStyle::Gambrel {
        let height = room.height_in() + GAMBREL_BREAK_RATIO * geometry::room_roof_rise_in(room);
        list.push(Primitive::Line {
            from: frame.point(0.0, height),
            to: frame.point(config.room_length_in(), height),
            role: Role::Roof,
        });
    }
}

/// Horizontal extent of an item's rotated footprint along the view axis.
fn horizontal_extent(item: &PlacedItem, facing: Facing) -> (f64, f64) {
    let coords = item.footprint().map(|p| match facing {
        Facing::Front => p.x,
        Facing::Side => p.y,
    });
    let min = coords.iter().copied().fold(f64::INFINITY, f64::min);
    let max = coords.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::catalog::OpeningType;
    use crate::model::{Opening, PlannerKind, RoomSpec};

    fn config_with(style: RoofStyle) -> PlannerConfig {
        let room = RoomSpec {
            roof_style: style,
            ..RoomSpec::new(20.0, 20.0, 9.0)
        };
        PlannerConfig::new(PlannerKind::Garage, room)
    }

    fn roof_points(list: &DisplayList) -> Vec<Point> {
        match list.with_role(Role::Roof).next() {
            Some(Primitive::Polygon { points, .. }) => points.clone(),
            _ => panic!("no roof polygon"),
        }
    }

    #[test]
    fn test_front_roof_vertex_counts() {
        let view = ViewConfig::new(800.0, 600.0);
        assert_eq!(roof_points(&project_front(&config_with(RoofStyle::Gable), &view)).len(), 3);
        assert_eq!(roof_points(&project_front(&config_with(RoofStyle::Gambrel), &view)).len(), 5);
        assert_eq!(roof_points(&project_front(&config_with(RoofStyle::Flat), &view)).len(), 4);
    }

    #[test]
    fn test_gable_apex_height() {
        let view = ViewConfig::new(800.0, 600.0);
        let list = project_front(&config_with(RoofStyle::Gable), &view);
        // Wall 108" plus a 60" rise; min(720 / 240, 520 / 168) = 3.
        let scale = list.scale;
        assert_eq!(scale, 3.0);
        let apex = roof_points(&list)[1];
        assert!((apex.y - (560.0 - 168.0 * scale)).abs() < 1e-9);
    }

    #[test]
    fn test_hip_side_view_has_truncated_ridge() {
        let room = RoomSpec {
            roof_style: RoofStyle::Hip,
            ..RoomSpec::new(20.0, 30.0, 9.0)
        };
        let config = PlannerConfig::new(PlannerKind::Garage, room);
        let view = ViewConfig::new(800.0, 600.0);
        let points = roof_points(&project_side(&config, &view));
        assert_eq!(points.len(), 4);
        assert!(points[1].x > points[0].x);
        assert!(points[2].x > points[1].x);
        assert!(points[2].x < points[3].x);
    }

    #[test]
    fn test_wall_cabinet_anchor_matches_elevation() {
        let mut config = PlannerConfig::new(PlannerKind::Kitchen, RoomSpec::new(12.0, 10.0, 8.0));
        let id = config.generate_id();
        config
            .items
            .push(PlacedItem::new(id, catalog::find("wall-30").unwrap().clone(), 0.0, 0.0));
        let view = ViewConfig::new(800.0, 600.0);
        let list = project_front(&config, &view);
        let Some(Primitive::Rect { y, height, .. }) = list.find(id, Role::Cabinet) else {
            panic!("wall cabinet missing");
        };
        let bottom_in = (560.0 - (y + height)) / list.scale;
        assert!((bottom_in - 54.0).abs() < 1e-9);
        assert_eq!(list.count(Role::Roof), 0);
    }

    #[test]
    fn test_openings_only_on_facing_wall() {
        let mut config = config_with(RoofStyle::Gable);
        config.openings.push(Opening::new(1, OpeningType::OverheadDoor, Wall::Front, 12.0, 108.0, 84.0));
        config.openings.push(Opening::new(2, OpeningType::Window, Wall::Left, 12.0, 36.0, 36.0));
        let view = ViewConfig::new(800.0, 600.0);
        assert!(project_front(&config, &view).find(1, Role::Opening).is_some());
        assert!(project_front(&config, &view).find(2, Role::Opening).is_none());
        assert!(project_side(&config, &view).find(2, Role::Opening).is_some());
    }
}
