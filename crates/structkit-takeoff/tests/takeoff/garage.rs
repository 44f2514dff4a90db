use structkit_designer::{catalog, Planner, PlannerConfig, PlannerKind, RoomSpec, Wall};
use structkit_takeoff::{calculate, Category, PriceBook, RoofGeometry};

fn quantity(bill: &structkit_takeoff::BillOfMaterials, sku: &str) -> Option<u32> {
    bill.find(sku).map(|l| l.quantity)
}

#[test]
fn test_twenty_by_twenty_gable() {
    let config = PlannerConfig::new(PlannerKind::Garage, RoomSpec::new(20.0, 20.0, 9.0));
    let roof = RoofGeometry::for_room(&config.room);
    assert!((roof.slope - 11.18).abs() < 0.01);
    assert!((roof.area - 491.9).abs() < 0.05);

    let bill = calculate(&config, &PriceBook::default());
    assert_eq!(quantity(&bill, "concrete-yd"), Some(5));
    assert_eq!(quantity(&bill, "rebar-20"), Some(8));
    assert_eq!(quantity(&bill, "anchor-bolt"), Some(18));
    assert_eq!(quantity(&bill, "vapor-barrier-roll"), Some(1));
    assert_eq!(quantity(&bill, "stud-2x4"), Some(72));
    assert_eq!(quantity(&bill, "truss"), Some(11));
    assert_eq!(quantity(&bill, "shingle-square"), Some(5));
    assert_eq!(quantity(&bill, "roof-sheathing"), Some(16));
    assert_eq!(quantity(&bill, "ridge-cap-bundle"), Some(1));
    // 80' x 9' walls plus 100 sq ft of gable ends
    assert_eq!(quantity(&bill, "wall-sheathing"), Some(26));
    assert_eq!(quantity(&bill, "siding-vinyl-square"), Some(10));
    assert_eq!(quantity(&bill, "sheathing-screws-box"), Some(3));
    assert_eq!(quantity(&bill, "hurricane-tie"), Some(22));
    // No openings: no headers, no door or window lines.
    assert_eq!(quantity(&bill, "header"), None);
    assert_eq!(bill.items_in(Category::Doors).count(), 0);
}

#[test]
fn test_categories_in_report_order() {
    let mut config = PlannerConfig::new(PlannerKind::Garage, RoomSpec::new(24.0, 24.0, 9.0));
    config.room.include_electrical = true;
    config.room.include_insulation = true;
    let mut planner = Planner::new(config);
    planner.add_opening_from_catalog(catalog::find("overhead-16x7").unwrap(), Wall::Front, 48.0);
    planner.add_opening_from_catalog(catalog::find("window-36x36").unwrap(), Wall::Back, 48.0);

    let bill = calculate(planner.config(), &PriceBook::default());
    assert_eq!(
        bill.categories(),
        vec![
            Category::Foundation,
            Category::Framing,
            Category::Roofing,
            Category::Siding,
            Category::Doors,
            Category::Windows,
            Category::Hardware,
            Category::Electrical,
            Category::Insulation,
        ]
    );
}

#[test]
fn test_openings_drive_framing_and_siding() {
    let mut config = PlannerConfig::new(PlannerKind::Garage, RoomSpec::new(20.0, 20.0, 9.0));
    config.room.include_electrical = true;
    let mut planner = Planner::new(config);
    let door = catalog::find("overhead-9x7").unwrap();
    planner.add_opening_from_catalog(door, Wall::Front, 12.0);
    planner.add_opening_from_catalog(door, Wall::Front, 120.0);
    planner.add_opening_from_catalog(catalog::find("walk-door-36").unwrap(), Wall::Right, 24.0);

    let bill = calculate(planner.config(), &PriceBook::default());
    assert_eq!(quantity(&bill, "stud-2x4"), Some(84));
    assert_eq!(quantity(&bill, "header"), Some(3));
    // 820 - 63 - 63 - 20 = 674 sq ft net
    assert_eq!(quantity(&bill, "wall-sheathing"), Some(22));
    assert_eq!(quantity(&bill, "siding-vinyl-square"), Some(8));
    assert_eq!(quantity(&bill, "overhead-9x7"), Some(2));
    assert_eq!(quantity(&bill, "walk-door-36"), Some(1));
    assert_eq!(quantity(&bill, "overhead-door-track"), Some(2));
    assert_eq!(quantity(&bill, "door-opener"), Some(2));
    assert_eq!(quantity(&bill, "switch"), Some(2));
    assert_eq!(quantity(&bill, "gfci-outlet"), Some(7));

    let doors = bill.find("overhead-9x7").unwrap();
    assert_eq!(doors.unit_price, Some(1150.0));
    assert_eq!(doors.total_price, Some(2300.0));
}

#[test]
fn test_opening_items_count_like_openings() {
    let mut planner = Planner::new(PlannerConfig::new(PlannerKind::Garage, RoomSpec::new(20.0, 20.0, 9.0)));
    planner.add_item(catalog::find("window-30x24").unwrap().clone(), 60.0, 0.0);
    let bill = calculate(planner.config(), &PriceBook::default());
    assert_eq!(quantity(&bill, "window-30x24"), Some(1));
    assert_eq!(quantity(&bill, "header"), Some(1));
}

#[test]
fn test_flat_roof_uses_membrane_without_ridge() {
    let mut config = PlannerConfig::new(PlannerKind::Garage, RoomSpec::new(20.0, 30.0, 10.0));
    config.room.roof_style = structkit_designer::RoofStyle::Flat;
    let bill = calculate(&config, &PriceBook::default());
    // 20 x 30 x 1.05 = 630 sq ft
    assert_eq!(quantity(&bill, "membrane-square"), Some(7));
    assert_eq!(quantity(&bill, "shingle-square"), None);
    assert_eq!(quantity(&bill, "ridge-cap-bundle"), None);
    assert_eq!(quantity(&bill, "flat-joist"), Some(16));
    assert_eq!(quantity(&bill, "truss"), None);
}

#[test]
fn test_two_by_six_framing_switches_lumber_and_batts() {
    let mut config = PlannerConfig::new(PlannerKind::Garage, RoomSpec::new(20.0, 20.0, 9.0));
    config.room.wall_framing = structkit_designer::WallFraming::TwoBySix;
    config.room.include_insulation = true;
    let bill = calculate(&config, &PriceBook::default());
    assert!(bill.find("stud-2x6").is_some());
    assert!(bill.find("stud-2x4").is_none());
    assert_eq!(quantity(&bill, "batt-r19-bag"), Some(21));
}

#[test]
fn test_empty_price_book_leaves_lines_unpriced() {
    let config = PlannerConfig::new(PlannerKind::Garage, RoomSpec::new(20.0, 20.0, 9.0));
    let bill = calculate(&config, &PriceBook::empty());
    assert!(!bill.is_empty());
    assert_eq!(bill.unpriced().count(), bill.len());
    assert_eq!(bill.total(), 0.0);
}
