//! Kitchen take-off: cabinets, counters, appliances, hardware and labor.

use structkit_core::{inches_to_feet, SQ_INCHES_PER_SQ_FOOT};
use structkit_designer::{ApplianceType, CabinetType, ItemKind, PlacedItem, PlannerConfig, PlannerKind};

use crate::line_item::{whole_units, BillOfMaterials, Category, LineBuilder};
use crate::price_book::{countertop_sku, PriceBook};

/// Front overhang added to every countertop run, inches.
const COUNTER_OVERHANG_IN: f64 = 1.0;
const COUNTER_WASTE: f64 = 1.10;
/// Backsplash height, feet.
const BACKSPLASH_HEIGHT_FT: f64 = 1.5;
const CABINET_INSTALL_HOURS: f64 = 1.5;
/// Square feet of countertop installed per labor hour.
const COUNTER_SQ_FT_PER_HOUR: f64 = 10.0;

/// Placed items sharing one catalog id.
struct ItemGroup<'a> {
    first: &'a PlacedItem,
    count: u32,
}

fn group_by_catalog_id<'a>(items: impl Iterator<Item = &'a PlacedItem>) -> Vec<ItemGroup<'a>> {
    let mut groups: Vec<ItemGroup<'a>> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|g| g.first.item.id == item.item.id) {
            Some(group) => group.count += 1,
            None => groups.push(ItemGroup { first: item, count: 1 }),
        }
    }
    groups
}

fn carries_countertop(kind: &ItemKind) -> bool {
    match kind {
        ItemKind::Cabinet { cabinet_type, .. } => cabinet_type.has_countertop(),
        ItemKind::Appliance { appliance_type } => *appliance_type == ApplianceType::Sink,
        ItemKind::Opening { .. } => false,
    }
}

/// Countertop area in square feet, waste included.
pub fn countertop_sq_ft(config: &PlannerConfig) -> u32 {
    let raw: f64 = config
        .items
        .iter()
        .filter(|item| carries_countertop(item.kind()))
        .map(|item| item.width() * (item.depth() + COUNTER_OVERHANG_IN))
        .sum();
    whole_units(raw / SQ_INCHES_PER_SQ_FOOT * COUNTER_WASTE)
}

/// Backsplash area in square feet. Islands stand free and get none.
pub fn backsplash_sq_ft(config: &PlannerConfig) -> u32 {
    let run_in: f64 = config
        .items
        .iter()
        .filter(|item| carries_countertop(item.kind()))
        .filter(|item| item.kind().cabinet_type() != Some(CabinetType::Island))
        .map(PlacedItem::width)
        .sum();
    whole_units(inches_to_feet(run_in) * BACKSPLASH_HEIGHT_FT)
}

pub(crate) fn kitchen_takeoff(config: &PlannerConfig, book: &PriceBook) -> BillOfMaterials {
    let room = &config.room;
    let mut lines = LineBuilder::new(PlannerKind::Kitchen, book);

    let cabinets: Vec<&PlacedItem> = config
        .items
        .iter()
        .filter(|i| matches!(i.kind(), ItemKind::Cabinet { .. }))
        .collect();
    let appliances: Vec<&PlacedItem> = config
        .items
        .iter()
        .filter(|i| matches!(i.kind(), ItemKind::Appliance { .. }))
        .collect();

    for group in group_by_catalog_id(cabinets.iter().copied()) {
        let item = &group.first.item;
        lines.add_with_price(
            Category::Cabinets,
            &item.id,
            &item.id,
            format!("{} ({})", item.name, room.cabinet_style),
            group.count,
            "ea",
            item.unit_price,
        );
    }

    let counter = countertop_sq_ft(config);
    lines.add(
        Category::Countertops,
        countertop_sku(room.countertop),
        format!("{} countertop", room.countertop),
        counter,
        "sq ft",
    );
    lines.add(Category::Countertops, "backsplash-sqft", "Tile backsplash", backsplash_sq_ft(config), "sq ft");

    for group in group_by_catalog_id(appliances.iter().copied()) {
        let item = &group.first.item;
        lines.add_with_price(
            Category::Appliances,
            &item.id,
            &item.id,
            item.name.clone(),
            group.count,
            "ea",
            item.unit_price,
        );
    }

    let (doors, drawers) = cabinets
        .iter()
        .map(|c| c.kind().door_drawer_counts())
        .fold((0u32, 0u32), |(d, w), (cd, cw)| (d + cd, w + cw));
    lines.add(Category::Hardware, "hinge", "Soft-close hinge", 2 * doors, "ea");
    lines.add(Category::Hardware, "pull", "Cabinet pull", doors + drawers, "ea");
    lines.add(Category::Hardware, "drawer-slide", "Full-extension drawer slide pair", drawers, "pair");

    let cabinet_count = cabinets.len() as f64;
    lines.add(
        Category::Installation,
        "install-cabinet-hour",
        "Cabinet installation",
        whole_units(CABINET_INSTALL_HOURS * cabinet_count),
        "hr",
    );
    lines.add(
        Category::Installation,
        "install-countertop-hour",
        "Countertop installation",
        whole_units(f64::from(counter) / COUNTER_SQ_FT_PER_HOUR),
        "hr",
    );
    lines.add(
        Category::Installation,
        "appliance-hookup",
        "Appliance hook-up",
        appliances.len() as u32,
        "ea",
    );

    lines.finish()
}
