use proptest::prelude::*;
use structkit_designer::serialization::{load_from_file, save_to_file};
use structkit_designer::{
    catalog, export_design, find_template, import_design, Planner, PlannerConfig, PlannerKind, RoomSpec,
    SavedDesign,
};
use tempfile::tempdir;

fn round_trip(config: PlannerConfig) -> (SavedDesign, SavedDesign) {
    let design = SavedDesign::new("Layout", config);
    let imported = import_design(&export_design(&design).unwrap()).unwrap();
    (design, imported)
}

#[test]
fn test_design_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("garage.json");

    let design = SavedDesign::new("Two bay", find_template("garage-two-car").unwrap().instantiate());
    save_to_file(&design, &path).unwrap();
    let loaded = load_from_file(&path).unwrap();

    assert_eq!(loaded, design);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = load_from_file(dir.path().join("nope.json")).unwrap_err();
    assert!(err.is_io_error());
}

#[test]
fn test_failed_import_leaves_design_untouched() {
    let design = SavedDesign::new("Galley", find_template("kitchen-galley").unwrap().instantiate());
    let before = design.clone();
    assert!(import_design("{\"version\": \"1.0\"}").is_err());
    assert_eq!(design, before);
}

#[test]
fn test_fractional_position_survives_round_trip() {
    let length_ft = 20.652717212127232;
    let mut room = RoomSpec::new(4.0, length_ft, 8.0);
    room.snap_enabled = false;
    let mut planner = Planner::new(PlannerConfig::new(PlannerKind::Kitchen, room));
    let y = 0.830448993798741 * (length_ft * 12.0 - 24.0);
    let id = planner.add_item(catalog::find("base-24").unwrap().clone(), 0.0, y);
    assert_eq!(planner.config().item(id).unwrap().y, y);

    let (design, imported) = round_trip(planner.into_config());
    assert_eq!(imported.config, design.config);
}

#[test]
fn test_fine_grid_survives_round_trip() {
    let mut room = RoomSpec::new(12.0, 10.0, 8.0);
    room.grid_size = 0.25;
    let (_, imported) = round_trip(PlannerConfig::new(PlannerKind::Kitchen, room));
    assert_eq!(imported.config.room.grid_size, 0.25);
}

proptest! {
    #[test]
    fn export_import_preserves_any_layout(
        width_ft in 4.0f64..60.0,
        length_ft in 4.0f64..60.0,
        height_ft in 7.0f64..16.0,
        grid in 0.01f64..96.0,
        placements in prop::collection::vec((0.0f64..=1.0, 0.0f64..=1.0, -720.0f64..720.0), 0..8),
    ) {
        let mut room = RoomSpec::new(width_ft, length_ft, height_ft);
        room.snap_enabled = false;
        room.grid_size = grid;
        let mut planner = Planner::new(PlannerConfig::new(PlannerKind::Kitchen, room));
        let cabinet = catalog::find("base-24").unwrap().clone();
        for (fx, fy, degrees) in placements {
            let x = fx * (planner.config().room_width_in() - cabinet.width);
            let y = fy * (planner.config().room_length_in() - cabinet.depth);
            let id = planner.add_item(cabinet.clone(), x, y);
            planner.set_rotation(id, degrees);
        }

        let (design, imported) = round_trip(planner.into_config());
        prop_assert_eq!(imported, design);
    }
}
