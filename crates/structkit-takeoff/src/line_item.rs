//! Bill of materials types.

use serde::{Deserialize, Serialize};
use std::fmt;

use structkit_designer::PlannerKind;

use crate::price_book::PriceBook;

/// Line item category. Garage bills list categories in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Foundation,
    Framing,
    Roofing,
    Siding,
    Doors,
    Windows,
    Hardware,
    Electrical,
    Insulation,
    Cabinets,
    Countertops,
    Appliances,
    Installation,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Foundation => "Foundation",
            Self::Framing => "Framing",
            Self::Roofing => "Roofing",
            Self::Siding => "Siding",
            Self::Doors => "Doors",
            Self::Windows => "Windows",
            Self::Hardware => "Hardware",
            Self::Electrical => "Electrical",
            Self::Insulation => "Insulation",
            Self::Cabinets => "Cabinets",
            Self::Countertops => "Countertops",
            Self::Appliances => "Appliances",
            Self::Installation => "Installation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the bill of materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialLineItem {
    pub category: Category,
    /// Price book key the unit price was looked up under.
    pub sku: String,
    pub description: String,
    pub quantity: u32,
    pub unit: String,
    pub unit_price: Option<f64>,
    pub total_price: Option<f64>,
}

impl MaterialLineItem {
    pub fn new(
        category: Category,
        sku: impl Into<String>,
        description: impl Into<String>,
        quantity: u32,
        unit: impl Into<String>,
        unit_price: Option<f64>,
    ) -> Self {
        let unit_price = unit_price.filter(|p| p.is_finite() && *p >= 0.0);
        Self {
            category,
            sku: sku.into(),
            description: description.into(),
            quantity,
            unit: unit.into(),
            unit_price,
            total_price: unit_price.map(|p| round_cents(p * f64::from(quantity))),
        }
    }
}

pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Subtotal row for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySubtotal {
    pub category: Category,
    pub line_count: usize,
    pub subtotal: f64,
}

/// Derived bill of materials for one configuration model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BillOfMaterials {
    pub kind: PlannerKind,
    pub line_items: Vec<MaterialLineItem>,
}

impl BillOfMaterials {
    pub fn new(kind: PlannerKind) -> Self {
        Self {
            kind,
            line_items: Vec::new(),
        }
    }

    /// Adds a line. Zero-quantity lines are dropped so empty categories never appear.
    pub fn push(&mut self, item: MaterialLineItem) {
        if item.quantity > 0 {
            self.line_items.push(item);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.line_items.len()
    }

    /// Categories present, in first-seen order.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for item in &self.line_items {
            if !seen.contains(&item.category) {
                seen.push(item.category);
            }
        }
        seen
    }

    pub fn items_in(&self, category: Category) -> impl Iterator<Item = &MaterialLineItem> {
        self.line_items.iter().filter(move |i| i.category == category)
    }

    pub fn find(&self, sku: &str) -> Option<&MaterialLineItem> {
        self.line_items.iter().find(|i| i.sku == sku)
    }

    /// Sum of priced totals in a category. Unpriced lines count as zero.
    pub fn subtotal(&self, category: Category) -> f64 {
        round_cents(self.items_in(category).filter_map(|i| i.total_price).sum())
    }

    pub fn subtotals(&self) -> Vec<CategorySubtotal> {
        self.categories()
            .into_iter()
            .map(|category| CategorySubtotal {
                category,
                line_count: self.items_in(category).count(),
                subtotal: self.subtotal(category),
            })
            .collect()
    }

    /// Grand total: the sum of category subtotals.
    pub fn total(&self) -> f64 {
        round_cents(self.categories().into_iter().map(|c| self.subtotal(c)).sum())
    }

    /// Lines with no price from the catalog or the price book.
    pub fn unpriced(&self) -> impl Iterator<Item = &MaterialLineItem> {
        self.line_items.iter().filter(|i| i.unit_price.is_none())
    }

    /// Comma-separated export with a header row.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("category,sku,description,quantity,unit,unit_price,total_price\n");
        for item in &self.line_items {
            let price = |p: Option<f64>| p.map(|v| format!("{v:.2}")).unwrap_or_default();
            out.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                item.category,
                csv_field(&item.sku),
                csv_field(&item.description),
                item.quantity,
                csv_field(&item.unit),
                price(item.unit_price),
                price(item.total_price),
            ));
        }
        out
    }
}

/// Accumulates lines for one bill, resolving unit prices from the price book.
pub(crate) struct LineBuilder<'a> {
    bill: BillOfMaterials,
    book: &'a PriceBook,
}

impl<'a> LineBuilder<'a> {
    pub(crate) fn new(kind: PlannerKind, book: &'a PriceBook) -> Self {
        Self {
            bill: BillOfMaterials::new(kind),
            book,
        }
    }

    /// Adds a line priced from the book under `sku`.
    pub(crate) fn add(&mut self, category: Category, sku: &str, description: impl Into<String>, quantity: u32, unit: &str) {
        let price = self.book.price(sku);
        self.bill.push(MaterialLineItem::new(category, sku, description, quantity, unit, price));
    }

    /// Adds a line with its own price, falling back to the book when it has none.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn add_with_price(
        &mut self,
        category: Category,
        sku: &str,
        fallback_sku: &str,
        description: impl Into<String>,
        quantity: u32,
        unit: &str,
        own_price: Option<f64>,
    ) {
        let price = own_price
            .filter(|p| p.is_finite() && *p >= 0.0)
            .or_else(|| self.book.price(fallback_sku));
        self.bill.push(MaterialLineItem::new(category, sku, description, quantity, unit, price));
    }

    pub(crate) fn finish(self) -> BillOfMaterials {
        self.bill
    }
}

/// Whole units needed to cover `value`: the ceiling, with a small tolerance so
/// exact multiples are not bumped up by float noise. Negative and non-finite
/// values need nothing.
pub fn whole_units(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let units = (value - 1e-9).ceil();
    if units >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        units.max(0.0) as u32
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
