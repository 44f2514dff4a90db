//! Unit prices keyed by SKU.
//!
//! Catalog items and catalog-built openings carry their own price. Everything
//! else (lumber, concrete, fasteners, labor) is looked up here. A missing key
//! leaves the line unpriced; it never fails the take-off.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use structkit_designer::{CountertopMaterial, OpeningType, SidingType, WallFraming};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBook {
    #[serde(default)]
    pub prices: BTreeMap<String, f64>,
}

impl Default for PriceBook {
    fn default() -> Self {
        let prices = DEFAULT_PRICES
            .iter()
            .map(|(sku, price)| (sku.to_string(), *price))
            .collect();
        Self { prices }
    }
}

const DEFAULT_PRICES: &[(&str, f64)] = &[
    // Foundation
    ("concrete-yd", 165.0),
    ("rebar-20", 14.50),
    ("anchor-bolt", 2.25),
    ("vapor-barrier-roll", 89.0),
    // Framing
    ("stud-2x4", 5.25),
    ("stud-2x6", 8.75),
    ("plate-pt-16", 18.0),
    ("top-plate-2x4-16", 11.50),
    ("top-plate-2x6-16", 17.25),
    ("header", 45.0),
    ("truss", 135.0),
    ("flat-joist", 62.0),
    // Roofing
    ("shingle-square", 115.0),
    ("membrane-square", 190.0),
    ("roof-sheathing", 32.0),
    ("underlayment-roll", 75.0),
    ("drip-edge-10", 9.0),
    ("ridge-cap-bundle", 62.0),
    ("roofing-nails-box", 48.0),
    // Siding
    ("wall-sheathing", 28.0),
    ("siding-vinyl-square", 140.0),
    ("siding-wood-square", 320.0),
    ("siding-metal-square", 210.0),
    ("siding-fiber-cement-square", 265.0),
    ("house-wrap-roll", 165.0),
    ("corner-trim", 22.0),
    // Doors / windows without a catalog price
    ("overhead-door", 1150.0),
    ("walk-door", 425.0),
    ("window", 275.0),
    // Hardware
    ("hurricane-tie", 1.35),
    ("framing-nails-box", 55.0),
    ("sheathing-screws-box", 38.0),
    ("overhead-door-track", 210.0),
    ("hinge", 4.50),
    ("pull", 6.0),
    ("drawer-slide", 22.0),
    // Electrical
    ("gfci-outlet", 28.0),
    ("led-fixture", 45.0),
    ("switch", 6.0),
    ("wire-12-2-250", 115.0),
    ("sub-panel", 185.0),
    ("door-opener", 320.0),
    // Insulation
    ("batt-r13-bag", 65.0),
    ("batt-r19-bag", 78.0),
    ("batt-r30-bag", 72.0),
    // Kitchen surfaces
    ("countertop-laminate-sqft", 28.0),
    ("countertop-quartz-sqft", 75.0),
    ("countertop-granite-sqft", 65.0),
    ("countertop-butcher-block-sqft", 48.0),
    ("backsplash-sqft", 18.0),
    // Labor
    ("install-cabinet-hour", 65.0),
    ("install-countertop-hour", 75.0),
    ("appliance-hookup", 150.0),
];

impl PriceBook {
    /// Price book with no entries; every non-catalog line comes out unpriced.
    pub fn empty() -> Self {
        Self {
            prices: BTreeMap::new(),
        }
    }

    pub fn price(&self, sku: &str) -> Option<f64> {
        self.prices.get(sku).copied().filter(|p| p.is_finite() && *p >= 0.0)
    }

    pub fn set_price(&mut self, sku: impl Into<String>, price: f64) {
        self.prices.insert(sku.into(), price);
    }

    /// Overlays `other` on top of this book.
    pub fn merge(&mut self, other: &PriceBook) {
        for (sku, price) in &other.prices {
            self.prices.insert(sku.clone(), *price);
        }
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

pub(crate) fn stud_sku(framing: WallFraming) -> &'static str {
    match framing {
        WallFraming::TwoByFour => "stud-2x4",
        WallFraming::TwoBySix => "stud-2x6",
    }
}

pub(crate) fn top_plate_sku(framing: WallFraming) -> &'static str {
    match framing {
        WallFraming::TwoByFour => "top-plate-2x4-16",
        WallFraming::TwoBySix => "top-plate-2x6-16",
    }
}

pub(crate) fn wall_batt_sku(framing: WallFraming) -> (&'static str, &'static str) {
    match framing {
        WallFraming::TwoByFour => ("batt-r13-bag", "R13"),
        WallFraming::TwoBySix => ("batt-r19-bag", "R19"),
    }
}

pub(crate) fn siding_sku(siding: SidingType) -> &'static str {
    match siding {
        SidingType::Vinyl => "siding-vinyl-square",
        SidingType::Wood => "siding-wood-square",
        SidingType::Metal => "siding-metal-square",
        SidingType::FiberCement => "siding-fiber-cement-square",
    }
}

pub(crate) fn countertop_sku(material: CountertopMaterial) -> &'static str {
    match material {
        CountertopMaterial::Laminate => "countertop-laminate-sqft",
        CountertopMaterial::Quartz => "countertop-quartz-sqft",
        CountertopMaterial::Granite => "countertop-granite-sqft",
        CountertopMaterial::ButcherBlock => "countertop-butcher-block-sqft",
    }
}

pub(crate) fn opening_sku(opening_type: OpeningType) -> &'static str {
    match opening_type {
        OpeningType::OverheadDoor => "overhead-door",
        OpeningType::WalkDoor => "walk-door",
        OpeningType::Window => "window",
    }
}
