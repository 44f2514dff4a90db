//! Garage take-off: foundation through insulation.
//!
//! Room dimensions are in feet. Every quantity is rounded up to whole units.

use structkit_core::{format_feet_inches, SQ_INCHES_PER_SQ_FOOT};
use structkit_designer::catalog::{self, OpeningType};
use structkit_designer::geometry::{gable_end_area_sq_ft, roof_rise, slope_length};
use structkit_designer::{PlannerConfig, PlannerKind, RoofStyle, RoomSpec};

use crate::line_item::{whole_units, BillOfMaterials, Category, LineBuilder};
use crate::price_book::{
    opening_sku, siding_sku, stud_sku, top_plate_sku, wall_batt_sku, PriceBook,
};

/// Truss / joist spacing along the ridge, inches.
const TRUSS_SPACING_IN: f64 = 24.0;
/// Stud spacing along the walls, inches.
const STUD_SPACING_IN: f64 = 16.0;
/// Extra studs for corners and jack studs at the ends of each wall.
const CORNER_STUDS: u32 = 12;
/// Extra studs per opening (king and jack on each side).
const STUDS_PER_OPENING: u32 = 4;

/// Roof quantities derived from the room, in feet and square feet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoofGeometry {
    pub rise: f64,
    pub slope: f64,
    pub area: f64,
    pub ridge: f64,
}

impl RoofGeometry {
    pub fn for_room(room: &RoomSpec) -> Self {
        let half_span = room.width / 2.0;
        let rise = roof_rise(room.roof_style, room.width, room.roof_pitch);
        let slope = match room.roof_style {
            RoofStyle::Flat => half_span,
            _ => slope_length(room.width, rise),
        };
        let area = slope * 2.0 * room.length * room.roof_style.waste_factor();
        let ridge = match room.roof_style {
            RoofStyle::Gable | RoofStyle::Gambrel => room.length,
            RoofStyle::Hip => {
                // Ridge plus the four hips running down to the corners.
                let inset = half_span.min(room.length / 2.0);
                let hip = (inset.powi(2) + half_span.powi(2) + rise.powi(2)).sqrt();
                (room.length - 2.0 * inset).max(0.0) + 4.0 * hip
            }
            RoofStyle::Flat => 0.0,
        };
        Self {
            rise,
            slope,
            area,
            ridge,
        }
    }

    pub fn squares(&self) -> u32 {
        whole_units(self.area / 100.0)
    }
}

/// One structural opening, whether it came from the opening list or was
/// placed as an item.
#[derive(Debug, Clone)]
struct OpeningTally {
    opening_type: OpeningType,
    width: f64,
    height: f64,
    sku: String,
    description: String,
    unit_price: Option<f64>,
    count: u32,
}

impl OpeningTally {
    fn same_size(&self, opening_type: OpeningType, width: f64, height: f64) -> bool {
        self.opening_type == opening_type
            && (self.width - width).abs() < 1e-6
            && (self.height - height).abs() < 1e-6
    }

    fn area_sq_ft(&self) -> f64 {
        self.width * self.height / SQ_INCHES_PER_SQ_FOOT * f64::from(self.count)
    }
}

fn sized_description(opening_type: OpeningType, width: f64, height: f64) -> String {
    format!(
        "{} {} x {}",
        opening_type,
        format_feet_inches(width),
        format_feet_inches(height)
    )
}

/// Distinct (type, size) groups in first-seen order.
fn tally_openings(config: &PlannerConfig) -> Vec<OpeningTally> {
    let mut groups: Vec<OpeningTally> = Vec::new();
    let mut record = |opening_type: OpeningType,
                      width: f64,
                      height: f64,
                      catalog_id: Option<&str>,
                      name: Option<&str>,
                      unit_price: Option<f64>| {
        if let Some(group) = groups
            .iter_mut()
            .find(|g| g.same_size(opening_type, width, height))
        {
            group.count += 1;
            return;
        }
        let sku = catalog_id.map(str::to_string).unwrap_or_else(|| {
            format!(
                "{}-{}x{}",
                opening_sku(opening_type),
                width.round(),
                height.round()
            )
        });
        groups.push(OpeningTally {
            opening_type,
            width,
            height,
            sku,
            description: name
                .map(str::to_string)
                .unwrap_or_else(|| sized_description(opening_type, width, height)),
            unit_price,
            count: 1,
        });
    };

    for opening in &config.openings {
        let name = opening
            .catalog_id
            .as_deref()
            .and_then(catalog::find)
            .filter(|c| (c.width - opening.width).abs() < 1e-6 && (c.height - opening.height).abs() < 1e-6)
            .map(|c| c.name.as_str());
        record(
            opening.opening_type,
            opening.width,
            opening.height,
            opening.catalog_id.as_deref(),
            name,
            opening.unit_price,
        );
    }
    for item in &config.items {
        if let Some(opening_type) = item.kind().opening_type() {
            record(
                opening_type,
                item.width(),
                item.height(),
                Some(item.item.id.as_str()),
                Some(item.item.name.as_str()),
                item.item.unit_price,
            );
        }
    }
    groups
}

pub(crate) fn garage_takeoff(config: &PlannerConfig, book: &PriceBook) -> BillOfMaterials {
    let room = &config.room;
    let mut lines = LineBuilder::new(PlannerKind::Garage, book);

    let area = room.floor_area();
    let perimeter = room.perimeter();
    let openings = tally_openings(config);
    let opening_count: u32 = openings.iter().map(|o| o.count).sum();
    let count_of = |t: OpeningType| -> u32 {
        openings
            .iter()
            .filter(|o| o.opening_type == t)
            .map(|o| o.count)
            .sum()
    };
    let overhead_doors = count_of(OpeningType::OverheadDoor);
    let walk_doors = count_of(OpeningType::WalkDoor);
    let opening_area: f64 = openings.iter().map(OpeningTally::area_sq_ft).sum();

    // Foundation
    lines.add(Category::Foundation, "concrete-yd", "Concrete slab, 4\" (3000 psi)", whole_units(area / 80.0), "cu yd");
    lines.add(Category::Foundation, "rebar-20", "#4 rebar, 20'", whole_units(2.0 * perimeter / 20.0), "ea");
    lines.add(Category::Foundation, "anchor-bolt", "Anchor bolt 1/2\" x 10\"", whole_units(perimeter / 6.0) + 4, "ea");
    lines.add(Category::Foundation, "vapor-barrier-roll", "Vapor barrier 6 mil, 10'x100'", whole_units(area / 900.0), "roll");

    // Framing
    let lumber = room.wall_framing.lumber();
    let studs = whole_units(perimeter * 12.0 / STUD_SPACING_IN) + CORNER_STUDS + STUDS_PER_OPENING * opening_count;
    lines.add(
        Category::Framing,
        stud_sku(room.wall_framing),
        format!("{} stud, {}", lumber, format_feet_inches(room.height_in())),
        studs,
        "ea",
    );
    lines.add(Category::Framing, "plate-pt-16", format!("{} pressure-treated bottom plate, 16'", lumber), whole_units(perimeter / 16.0), "ea");
    lines.add(
        Category::Framing,
        top_plate_sku(room.wall_framing),
        format!("{} double top plate, 16'", lumber),
        whole_units(2.0 * perimeter / 16.0),
        "ea",
    );
    lines.add(Category::Framing, "header", "Opening header, built-up", opening_count, "ea");
    let trusses = whole_units(room.length * 12.0 / TRUSS_SPACING_IN) + 1;
    match room.roof_style {
        RoofStyle::Flat => lines.add(Category::Framing, "flat-joist", "Roof joist, 24\" o.c.", trusses, "ea"),
        style => lines.add(
            Category::Framing,
            "truss",
            format!("{} roof truss, {} span, {}/12", style, format_feet_inches(room.width_in()), room.roof_pitch),
            trusses,
            "ea",
        ),
    }

    // Roofing
    let roof = RoofGeometry::for_room(room);
    let squares = roof.squares();
    let roof_sheets = whole_units(roof.area / 32.0);
    match room.roof_style {
        RoofStyle::Flat => lines.add(Category::Roofing, "membrane-square", "TPO roofing membrane", squares, "sq"),
        _ => lines.add(Category::Roofing, "shingle-square", "Architectural shingles", squares, "sq"),
    }
    lines.add(Category::Roofing, "roof-sheathing", "7/16\" OSB roof sheathing, 4'x8'", roof_sheets, "sheet");
    lines.add(Category::Roofing, "underlayment-roll", "Synthetic underlayment, 400 sq ft", whole_units(roof.area / 400.0), "roll");
    lines.add(Category::Roofing, "drip-edge-10", "Drip edge, 10'", whole_units(perimeter / 10.0), "ea");
    if room.roof_style.is_pitched() {
        lines.add(Category::Roofing, "ridge-cap-bundle", "Ridge cap shingles", whole_units(roof.ridge / 20.0), "bundle");
    }
    lines.add(Category::Roofing, "roofing-nails-box", "Roofing nails, coil", whole_units(f64::from(squares) / 4.0), "box");

    // Siding
    let gross_wall = perimeter * room.height + gable_end_area_sq_ft(room);
    let net_wall = (gross_wall - opening_area).max(0.0);
    let wall_sheets = whole_units(net_wall / 32.0);
    lines.add(Category::Siding, "wall-sheathing", "7/16\" OSB wall sheathing, 4'x8'", wall_sheets, "sheet");
    lines.add(Category::Siding, siding_sku(room.siding), format!("{} siding", room.siding), whole_units(net_wall / 90.0), "sq");
    lines.add(Category::Siding, "house-wrap-roll", "House wrap, 9'x100'", whole_units(net_wall / 900.0), "roll");
    lines.add(Category::Siding, "corner-trim", "Outside corner trim", 4, "ea");

    // Doors then windows, one line per distinct size
    for category in [Category::Doors, Category::Windows] {
        for group in openings.iter().filter(|o| opening_category(o.opening_type) == category) {
            lines.add_with_price(
                category,
                &group.sku,
                opening_sku(group.opening_type),
                group.description.clone(),
                group.count,
                "ea",
                group.unit_price,
            );
        }
    }

    // Hardware
    lines.add(Category::Hardware, "hurricane-tie", "Hurricane tie", 2 * trusses, "ea");
    lines.add(Category::Hardware, "framing-nails-box", "Framing nails 16d, 50 lb", whole_units(perimeter / 40.0), "box");
    lines.add(
        Category::Hardware,
        "sheathing-screws-box",
        "Sheathing screws",
        whole_units(f64::from(wall_sheets + roof_sheets) / 20.0),
        "box",
    );
    lines.add(Category::Hardware, "overhead-door-track", "Overhead door track and spring kit", overhead_doors, "set");

    if room.include_electrical {
        lines.add(Category::Electrical, "gfci-outlet", "GFCI outlet, 20A", whole_units(perimeter / 12.0), "ea");
        lines.add(Category::Electrical, "led-fixture", "LED shop fixture, 4'", whole_units(area / 150.0), "ea");
        lines.add(Category::Electrical, "switch", "Single-pole switch", walk_doors + 1, "ea");
        lines.add(
            Category::Electrical,
            "wire-12-2-250",
            "12/2 NM-B wire, 250'",
            whole_units((1.5 * perimeter + area / 10.0) / 250.0),
            "roll",
        );
        lines.add(Category::Electrical, "sub-panel", "Sub-panel, 60A", 1, "ea");
        lines.add(Category::Electrical, "door-opener", "Overhead door opener", overhead_doors, "ea");
    }

    if room.include_insulation {
        let (batt_sku, r_value) = wall_batt_sku(room.wall_framing);
        lines.add(
            Category::Insulation,
            batt_sku,
            format!("{} wall batts, {}", r_value, room.wall_framing.lumber()),
            whole_units(net_wall / 40.0),
            "bag",
        );
        lines.add(Category::Insulation, "batt-r30-bag", "R30 ceiling batts", whole_units(area / 50.0), "bag");
    }

    lines.finish()
}

fn opening_category(opening_type: OpeningType) -> Category {
    if opening_type.is_door() {
        Category::Doors
    } else {
        Category::Windows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use structkit_designer::{Planner, RoomSpec, Wall};

    fn garage(width: f64, length: f64) -> PlannerConfig {
        PlannerConfig::new(PlannerKind::Garage, RoomSpec::new(width, length, 9.0))
    }

    #[test]
    fn test_roof_geometry_gable() {
        let roof = RoofGeometry::for_room(&garage(20.0, 20.0).room);
        assert_eq!(roof.rise, 5.0);
        assert!((roof.slope - 11.1803).abs() < 1e-3);
        assert!((roof.area - 491.935).abs() < 1e-2);
        assert_eq!(roof.squares(), 5);
        assert_eq!(roof.ridge, 20.0);
    }

    #[test]
    fn test_roof_geometry_flat_uses_half_span() {
        let mut config = garage(20.0, 30.0);
        config.room.roof_style = RoofStyle::Flat;
        let roof = RoofGeometry::for_room(&config.room);
        assert_eq!(roof.rise, 0.0);
        assert_eq!(roof.slope, 10.0);
        assert!((roof.area - 630.0).abs() < 1e-9);
        assert_eq!(roof.ridge, 0.0);
    }

    #[test]
    fn test_roof_geometry_hip_ridge_includes_hips() {
        let mut config = garage(20.0, 30.0);
        config.room.roof_style = RoofStyle::Hip;
        let roof = RoofGeometry::for_room(&config.room);
        let hip = (100.0f64 + 100.0 + 25.0).sqrt();
        assert!((roof.ridge - (10.0 + 4.0 * hip)).abs() < 1e-9);
    }

    #[test]
    fn test_openings_grouped_by_size() {
        let mut planner = Planner::new(garage(24.0, 24.0));
        let door = catalog::find("overhead-9x7").unwrap();
        planner.add_opening_from_catalog(door, Wall::Front, 12.0);
        planner.add_opening_from_catalog(door, Wall::Front, 144.0);
        planner.add_opening(OpeningType::Window, Wall::Left, 60.0, 36.0, 48.0);
        let tallies = tally_openings(planner.config());

        assert_eq!(tallies.len(), 2);
        assert_eq!(tallies[0].count, 2);
        assert_eq!(tallies[0].sku, "overhead-9x7");
        assert_eq!(tallies[0].unit_price, Some(1150.0));
        assert_eq!(tallies[1].sku, "window-36x48");
        assert_eq!(tallies[1].description, "Window 3' x 4'");
    }

    #[test]
    fn test_flags_gate_categories() {
        let mut config = garage(20.0, 20.0);
        let bill = garage_takeoff(&config, &PriceBook::default());
        assert_eq!(bill.items_in(Category::Electrical).count(), 0);
        assert_eq!(bill.items_in(Category::Insulation).count(), 0);

        config.room.include_electrical = true;
        config.room.include_insulation = true;
        let bill = garage_takeoff(&config, &PriceBook::default());
        assert_eq!(bill.find("sub-panel").map(|l| l.quantity), Some(1));
        assert_eq!(bill.find("batt-r30-bag").map(|l| l.quantity), Some(8));
        // No overhead doors, so no openers.
        assert!(bill.find("door-opener").is_none());
    }
}
