use structkit_designer::geometry;
use structkit_designer::projection::Primitive;
use structkit_designer::{
    find_template, project, project_front, project_plan, project_scene, Camera, Projection, Role, ViewConfig,
    ViewMode,
};

#[test]
fn test_views_share_vertical_anchor() {
    let config = find_template("kitchen-l-shaped").unwrap().instantiate();
    let view = ViewConfig::new(1000.0, 700.0);
    let front = project_front(&config, &view);
    let scene = project_scene(&config);

    for item in &config.items {
        let (bottom, top) = geometry::vertical_span(item.kind(), item.height());

        let Some(Primitive::Rect { y, height, .. }) = front.find(item.id, Role::for_kind(item.kind())) else {
            panic!("item {} missing from front view", item.id);
        };
        let ground = view.canvas_height - view.padding;
        let elevation_bottom = (ground - (y + height)) / front.scale;
        let elevation_top = (ground - y) / front.scale;
        assert!((elevation_bottom - bottom).abs() < 1e-6, "{}", item.item.id);
        assert!((elevation_top - top).abs() < 1e-6, "{}", item.item.id);

        let solid = scene.solid(item.id).unwrap();
        let center_in = f64::from(solid.center.z) / structkit_core::METERS_PER_INCH;
        assert!((center_in - (bottom + top) / 2.0).abs() < 1e-3, "{}", item.item.id);
    }
}

#[test]
fn test_every_view_is_idempotent() {
    let config = find_template("garage-three-car").unwrap().instantiate();
    let view = ViewConfig::new(900.0, 600.0);
    for mode in [ViewMode::Plan, ViewMode::Front, ViewMode::Side, ViewMode::ThreeD] {
        assert_eq!(project(&config, &view, mode), project(&config, &view, mode));
    }
    assert!(matches!(project(&config, &view, ViewMode::ThreeD), Projection::Scene(_)));
}

#[test]
fn test_plan_shows_every_item_and_opening() {
    let config = find_template("garage-two-car").unwrap().instantiate();
    let plan = project_plan(&config, &ViewConfig::default());
    assert_eq!(plan.count(Role::Opening), config.openings.len());
    assert_eq!(plan.count(Role::Wall), 4);
    assert_eq!(plan.count(Role::Dimension), 1);
}

#[test]
fn test_camera_frames_scene() {
    let config = find_template("garage-two-car").unwrap().instantiate();
    let scene = project_scene(&config);
    let mut camera = Camera::default();
    camera.fit_to_bounds(&scene.bounds);
    assert_eq!(camera.target, scene.bounds.center());
    let eye = camera.eye_position();
    assert!(eye.z > camera.target.z);
}
