//! # StructKit Take-off
//!
//! Materials take-off for garage and kitchen designs. [`calculate`] reads a
//! [`PlannerConfig`] and returns a [`BillOfMaterials`]: categorized line items
//! with whole-unit quantities, unit prices and totals.
//!
//! The calculation is pure. The same model and price book always give the same
//! bill, line for line. [`TakeoffCache`] skips the work when neither changed.
//!
//! ```rust
//! use structkit_designer::{PlannerConfig, PlannerKind, RoomSpec};
//! use structkit_takeoff::{calculate, Category, PriceBook};
//!
//! let config = PlannerConfig::new(PlannerKind::Garage, RoomSpec::new(20.0, 20.0, 9.0));
//! let bill = calculate(&config, &PriceBook::default());
//! assert_eq!(bill.find("concrete-yd").map(|l| l.quantity), Some(5));
//! assert_eq!(bill.categories()[0], Category::Foundation);
//! ```

pub mod cache;
pub mod garage;
pub mod kitchen;
pub mod line_item;
pub mod price_book;
pub mod quote;

pub use cache::{content_hash, TakeoffCache};
pub use garage::RoofGeometry;
pub use kitchen::{backsplash_sq_ft, countertop_sq_ft};
pub use line_item::{whole_units, BillOfMaterials, Category, CategorySubtotal, MaterialLineItem};
pub use price_book::PriceBook;
pub use quote::{MaterialsOutput, QuoteGenerator};

use structkit_designer::{PlannerConfig, PlannerKind};
use tracing::{debug, warn};

/// Derives the bill of materials for a model.
///
/// Rooms without a positive, finite footprint produce an empty bill.
pub fn calculate(config: &PlannerConfig, book: &PriceBook) -> BillOfMaterials {
    let room = &config.room;
    let usable = [room.width, room.length]
        .iter()
        .all(|d| d.is_finite() && *d > 0.0);
    if !usable {
        warn!(width = room.width, length = room.length, "Room has no footprint; empty bill of materials");
        return BillOfMaterials::new(config.kind);
    }

    let bill = match config.kind {
        PlannerKind::Garage => garage::garage_takeoff(config, book),
        PlannerKind::Kitchen => kitchen::kitchen_takeoff(config, book),
    };
    debug!(
        kind = %config.kind,
        lines = bill.len(),
        total = bill.total(),
        "Calculated bill of materials"
    );
    bill
}
