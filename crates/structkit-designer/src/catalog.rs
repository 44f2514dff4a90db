//! Catalog of placeable items.
//!
//! The catalog is static reference data: cabinets, appliances, doors, windows
//! and garage bay doors with their nominal dimensions. Adding an entry to
//! [`BUILTIN_CATALOG`] needs no change anywhere else in the engine.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CabinetType {
    Base,
    Wall,
    Tall,
    Corner,
    Island,
}

impl CabinetType {
    /// Cabinets that carry a countertop.
    pub fn has_countertop(&self) -> bool {
        matches!(self, Self::Base | Self::Corner | Self::Island)
    }
}

impl fmt::Display for CabinetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "Base"),
            Self::Wall => write!(f, "Wall"),
            Self::Tall => write!(f, "Tall"),
            Self::Corner => write!(f, "Corner"),
            Self::Island => write!(f, "Island"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplianceType {
    Refrigerator,
    Stove,
    Dishwasher,
    Sink,
    Microwave,
}

impl fmt::Display for ApplianceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Refrigerator => write!(f, "Refrigerator"),
            Self::Stove => write!(f, "Stove"),
            Self::Dishwasher => write!(f, "Dishwasher"),
            Self::Sink => write!(f, "Sink"),
            Self::Microwave => write!(f, "Microwave"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningType {
    OverheadDoor,
    WalkDoor,
    Window,
}

impl OpeningType {
    pub fn is_door(&self) -> bool {
        matches!(self, Self::OverheadDoor | Self::WalkDoor)
    }
}

impl fmt::Display for OpeningType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OverheadDoor => write!(f, "Overhead Door"),
            Self::WalkDoor => write!(f, "Walk Door"),
            Self::Window => write!(f, "Window"),
        }
    }
}

/// What an item is, with the fields that only make sense for that kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemKind {
    Cabinet {
        cabinet_type: CabinetType,
        doors: u32,
        drawers: u32,
    },
    Appliance {
        appliance_type: ApplianceType,
    },
    Opening {
        opening_type: OpeningType,
    },
}

impl ItemKind {
    pub fn cabinet_type(&self) -> Option<CabinetType> {
        match self {
            Self::Cabinet { cabinet_type, .. } => Some(*cabinet_type),
            _ => None,
        }
    }

    pub fn appliance_type(&self) -> Option<ApplianceType> {
        match self {
            Self::Appliance { appliance_type } => Some(*appliance_type),
            _ => None,
        }
    }

    pub fn opening_type(&self) -> Option<OpeningType> {
        match self {
            Self::Opening { opening_type } => Some(*opening_type),
            _ => None,
        }
    }

    /// (door count, drawer count); zero for anything that is not a cabinet.
    pub fn door_drawer_counts(&self) -> (u32, u32) {
        match self {
            Self::Cabinet { doors, drawers, .. } => (*doors, *drawers),
            _ => (0, 0),
        }
    }
}

/// Immutable catalog entry. Dimensions are nominal, in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub kind: ItemKind,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    #[serde(default)]
    pub unit_price: Option<f64>,
}

impl CatalogItem {
    fn entry(
        id: &str,
        name: &str,
        kind: ItemKind,
        (width, height, depth): (f64, f64, f64),
        unit_price: Option<f64>,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            width,
            height,
            depth,
            unit_price,
        }
    }
}

fn cabinet(cabinet_type: CabinetType, doors: u32, drawers: u32) -> ItemKind {
    ItemKind::Cabinet {
        cabinet_type,
        doors,
        drawers,
    }
}

fn appliance(appliance_type: ApplianceType) -> ItemKind {
    ItemKind::Appliance { appliance_type }
}

fn opening(opening_type: OpeningType) -> ItemKind {
    ItemKind::Opening { opening_type }
}

/// Built-in catalog, in display order.
pub static BUILTIN_CATALOG: Lazy<Vec<CatalogItem>> = Lazy::new(|| {
    use ApplianceType as A;
    use CabinetType as C;
    use OpeningType as O;

    vec![
        CatalogItem::entry("base-12", "Base Cabinet 12\"", cabinet(C::Base, 1, 1), (12.0, 34.5, 24.0), Some(185.0)),
        CatalogItem::entry("base-18", "Base Cabinet 18\"", cabinet(C::Base, 1, 1), (18.0, 34.5, 24.0), Some(225.0)),
        CatalogItem::entry("base-24", "Base Cabinet 24\"", cabinet(C::Base, 1, 1), (24.0, 34.5, 24.0), Some(265.0)),
        CatalogItem::entry("base-30", "Base Cabinet 30\"", cabinet(C::Base, 2, 1), (30.0, 34.5, 24.0), Some(310.0)),
        CatalogItem::entry("base-36", "Base Cabinet 36\"", cabinet(C::Base, 2, 1), (36.0, 34.5, 24.0), Some(345.0)),
        CatalogItem::entry("drawer-base-18", "Drawer Base 18\"", cabinet(C::Base, 0, 3), (18.0, 34.5, 24.0), Some(295.0)),
        CatalogItem::entry("sink-base-36", "Sink Base 36\"", cabinet(C::Base, 2, 0), (36.0, 34.5, 24.0), Some(290.0)),
        CatalogItem::entry("wall-15", "Wall Cabinet 15\"", cabinet(C::Wall, 1, 0), (15.0, 30.0, 12.0), Some(135.0)),
        CatalogItem::entry("wall-24", "Wall Cabinet 24\"", cabinet(C::Wall, 2, 0), (24.0, 30.0, 12.0), Some(175.0)),
        CatalogItem::entry("wall-30", "Wall Cabinet 30\"", cabinet(C::Wall, 2, 0), (30.0, 30.0, 12.0), Some(195.0)),
        CatalogItem::entry("wall-36", "Wall Cabinet 36\"", cabinet(C::Wall, 2, 0), (36.0, 30.0, 12.0), Some(220.0)),
        CatalogItem::entry("tall-pantry-24", "Pantry Cabinet 24\"", cabinet(C::Tall, 4, 0), (24.0, 84.0, 24.0), Some(540.0)),
        CatalogItem::entry("tall-oven-30", "Oven Cabinet 30\"", cabinet(C::Tall, 2, 1), (30.0, 84.0, 24.0), Some(610.0)),
        CatalogItem::entry("corner-base-36", "Corner Base 36\"", cabinet(C::Corner, 1, 0), (36.0, 34.5, 36.0), Some(395.0)),
        CatalogItem::entry("corner-wall-24", "Corner Wall 24\"", cabinet(C::Corner, 1, 0), (24.0, 30.0, 24.0), Some(240.0)),
        CatalogItem::entry("island-48", "Island 48\"", cabinet(C::Island, 2, 2), (48.0, 34.5, 36.0), Some(890.0)),
        CatalogItem::entry("island-72", "Island 72\"", cabinet(C::Island, 4, 3), (72.0, 34.5, 36.0), Some(1290.0)),
        CatalogItem::entry("fridge-36", "Refrigerator 36\"", appliance(A::Refrigerator), (36.0, 70.0, 30.0), Some(1899.0)),
        CatalogItem::entry("range-30", "Range 30\"", appliance(A::Stove), (30.0, 36.0, 26.0), Some(1099.0)),
        CatalogItem::entry("dishwasher-24", "Dishwasher 24\"", appliance(A::Dishwasher), (24.0, 34.5, 24.0), Some(649.0)),
        CatalogItem::entry("sink-33", "Undermount Sink 33\"", appliance(A::Sink), (33.0, 9.0, 22.0), Some(329.0)),
        CatalogItem::entry("microwave-30", "Over-Range Microwave 30\"", appliance(A::Microwave), (30.0, 17.0, 16.0), Some(389.0)),
        CatalogItem::entry("overhead-9x7", "Overhead Door 9'x7'", opening(O::OverheadDoor), (108.0, 84.0, 2.0), Some(1150.0)),
        CatalogItem::entry("overhead-16x7", "Overhead Door 16'x7'", opening(O::OverheadDoor), (192.0, 84.0, 2.0), Some(1850.0)),
        CatalogItem::entry("walk-door-36", "Walk Door 36\"", opening(O::WalkDoor), (36.0, 80.0, 2.0), Some(425.0)),
        CatalogItem::entry("walk-door-32", "Walk Door 32\"", opening(O::WalkDoor), (32.0, 80.0, 2.0), Some(395.0)),
        CatalogItem::entry("window-36x36", "Window 36\"x36\"", opening(O::Window), (36.0, 36.0, 4.0), Some(310.0)),
        CatalogItem::entry("window-30x24", "Window 30\"x24\"", opening(O::Window), (30.0, 24.0, 4.0), Some(245.0)),
    ]
});

/// Returns the built-in catalog.
pub fn catalog() -> &'static [CatalogItem] {
    &BUILTIN_CATALOG
}

/// Looks up a catalog entry by id.
pub fn find(id: &str) -> Option<&'static CatalogItem> {
    BUILTIN_CATALOG.iter().find(|item| item.id == id)
}

/// Catalog entries matching a predicate on their kind.
pub fn filter_by<F>(predicate: F) -> impl Iterator<Item = &'static CatalogItem>
where
    F: Fn(&ItemKind) -> bool,
{
    BUILTIN_CATALOG.iter().filter(move |item| predicate(&item.kind))
}
