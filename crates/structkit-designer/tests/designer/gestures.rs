//! Pointer gesture scenarios driven through the planner.

use structkit_designer::{catalog, Gesture, Planner, PlannerConfig, PlannerKind, Point, PointerEvent, RoomSpec};

fn kitchen() -> Planner {
    Planner::new(PlannerConfig::new(PlannerKind::Kitchen, RoomSpec::new(12.0, 10.0, 8.0)))
}

#[test]
fn test_drag_past_wall_then_release() {
    let mut planner = kitchen();
    let id = planner.add_item(catalog::find("base-24").unwrap().clone(), 12.0, 0.0);

    planner.handle_pointer(PointerEvent::Down(Point::new(20.0, 10.0)));
    assert!(matches!(planner.gesture(), Gesture::Dragging { .. }));
    planner.handle_pointer(PointerEvent::Move(Point::new(220.0, 10.0)));
    assert_eq!(planner.config().item(id).unwrap().x, 120.0);

    // Moving back is tracked from the last pointer position, not the clamped one.
    planner.handle_pointer(PointerEvent::Move(Point::new(200.0, 10.0)));
    assert_eq!(planner.config().item(id).unwrap().x, 100.0);

    planner.handle_pointer(PointerEvent::Up);
    assert_eq!(planner.config().item(id).unwrap().x, 102.0);
    assert!(planner.gesture().is_idle());
}

#[test]
fn test_handle_rotation_snaps_to_fifteen_degrees() {
    let mut planner = kitchen();
    let id = planner.add_item(catalog::find("base-24").unwrap().clone(), 48.0, 48.0);
    planner.select(Some(id));

    // Center (60, 60); the handle sits on the far corner at (72, 72), 45 degrees.
    planner.handle_pointer(PointerEvent::Down(Point::new(72.0, 72.0)));
    assert!(matches!(planner.gesture(), Gesture::Rotating { .. }));

    // Swing the pointer to 100 degrees around the center: +55 snaps to 60.
    let angle = 100f64.to_radians();
    planner.handle_pointer(PointerEvent::Move(Point::new(60.0 + 20.0 * angle.cos(), 60.0 + 20.0 * angle.sin())));
    let item = planner.config().item(id).unwrap();
    assert_eq!(item.rotation, 60.0);
    assert_eq!((item.x, item.y), (48.0, 48.0));

    planner.handle_pointer(PointerEvent::Cancel);
    assert!(planner.gesture().is_idle());
    assert_eq!(planner.selected_id(), Some(id));
}

#[test]
fn test_click_on_empty_floor_clears_selection() {
    let mut planner = kitchen();
    let id = planner.add_item(catalog::find("wall-30").unwrap().clone(), 0.0, 0.0);
    planner.handle_pointer(PointerEvent::Down(Point::new(5.0, 5.0)));
    planner.handle_pointer(PointerEvent::Up);
    assert_eq!(planner.selected_id(), Some(id));

    planner.handle_pointer(PointerEvent::Down(Point::new(120.0, 100.0)));
    assert_eq!(planner.selected_id(), None);
    assert!(planner.gesture().is_idle());
}

#[test]
fn test_delete_during_drag_ends_gesture() {
    let mut planner = kitchen();
    let id = planner.add_item(catalog::find("base-24").unwrap().clone(), 0.0, 0.0);
    planner.handle_pointer(PointerEvent::Down(Point::new(5.0, 5.0)));
    planner.delete_item(id);
    assert!(planner.gesture().is_idle());
    planner.handle_pointer(PointerEvent::Move(Point::new(50.0, 5.0)));
    assert_eq!(planner.item_count(), 0);
}
