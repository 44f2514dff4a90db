use proptest::prelude::*;
use structkit_designer::geometry::{normalize_degrees, snap_to_grid};
use structkit_designer::{catalog, HitTarget, Planner, PlannerConfig, PlannerKind, Point, RoomSpec};

fn planner(width_ft: f64, length_ft: f64, snap: bool) -> Planner {
    let mut room = RoomSpec::new(width_ft, length_ft, 8.0);
    room.snap_enabled = snap;
    Planner::new(PlannerConfig::new(PlannerKind::Kitchen, room))
}

#[test]
fn test_cabinet_dragged_past_far_wall_stops_at_wall() {
    // 24" cabinet at x=10 in a 144" room, dragged +200.
    let mut planner = planner(12.0, 10.0, false);
    let id = planner.add_item(catalog::find("base-24").unwrap().clone(), 10.0, 0.0);
    planner.move_item(id, 200.0, 0.0);
    assert_eq!(planner.config().item(id).unwrap().x, 120.0);
}

#[test]
fn test_item_larger_than_room_is_pinned_to_origin() {
    let mut planner = planner(3.0, 10.0, true);
    let id = planner.add_item(catalog::find("island-72").unwrap().clone(), 30.0, 0.0);
    assert_eq!(planner.config().item(id).unwrap().x, 0.0);
    planner.move_item(id, 15.0, 0.0);
    assert_eq!(planner.config().item(id).unwrap().x, 0.0);
}

#[test]
fn test_rotated_hit_test() {
    let mut planner = planner(12.0, 10.0, false);
    let id = planner.add_item(catalog::find("base-36").unwrap().clone(), 48.0, 48.0);
    planner.set_rotation(id, 45.0);
    let item = planner.config().item(id).unwrap().clone();

    assert_eq!(planner.hit_test(item.center()), Some(HitTarget::Item(id)));
    // The unrotated corner sits outside the rotated footprint.
    assert_eq!(planner.hit_test(Point::new(48.5, 48.5)), None);
}

proptest! {
    #[test]
    fn add_and_move_keep_items_inside(
        width_ft in 4.0f64..40.0,
        length_ft in 4.0f64..40.0,
        snap in any::<bool>(),
        x in -500.0f64..1000.0,
        y in -500.0f64..1000.0,
        moves in prop::collection::vec((-400.0f64..400.0, -400.0f64..400.0), 0..12),
    ) {
        let mut planner = planner(width_ft, length_ft, snap);
        let id = planner.add_item(catalog::find("base-36").unwrap().clone(), x, y);
        prop_assert!(planner.config().items_contained());
        for (dx, dy) in moves {
            planner.move_item(id, dx, dy);
            prop_assert!(planner.config().items_contained());
        }
        planner.snap_item(id);
        prop_assert!(planner.config().items_contained());
    }

    #[test]
    fn rotated_hit_test_center_hits_and_far_points_miss(
        rotation in 0.0f64..360.0,
        direction in 0.0f64..std::f64::consts::TAU,
        margin in 0.01f64..200.0,
    ) {
        let mut planner = planner(12.0, 12.0, false);
        let id = planner.add_item(catalog::find("base-36").unwrap().clone(), 54.0, 60.0);
        planner.set_rotation(id, rotation);
        planner.select(None);
        let item = planner.config().item(id).unwrap().clone();
        let center = item.center();
        prop_assert_eq!(planner.hit_test(center), Some(HitTarget::Item(id)));

        let reach = 0.5 * item.width().hypot(item.depth()) + margin;
        let far = Point::new(center.x + reach * direction.cos(), center.y + reach * direction.sin());
        prop_assert_eq!(planner.hit_test(far), None);
    }

    #[test]
    fn snapping_is_idempotent(
        value in -200.0f64..600.0,
        grid in 0.5f64..48.0,
        extent in 1.0f64..100.0,
        room in 50.0f64..500.0,
    ) {
        let once = snap_to_grid(value, grid, extent, room);
        let twice = snap_to_grid(once, grid, extent, room);
        prop_assert!((once - twice).abs() < 1e-9);
    }

    #[test]
    fn rotation_stays_normalized(steps in prop::collection::vec(-1000.0f64..1000.0, 1..20)) {
        let mut planner = planner(12.0, 12.0, true);
        let id = planner.add_item(catalog::find("base-24").unwrap().clone(), 24.0, 24.0);
        for degrees in steps {
            let rotation = planner.set_rotation(id, degrees).unwrap();
            prop_assert!((0.0..360.0).contains(&rotation));
            prop_assert!((0.0..360.0).contains(&normalize_degrees(degrees)));
        }
    }
}
