//! Command-line input resolution and bill rendering.

use anyhow::Context;
use clap::ValueEnum;
use std::fmt::Write;
use std::path::Path;
use tracing::info;

use structkit_designer::serialization::load_from_file;
use structkit_designer::{find_template, PlannerConfig};
use structkit_takeoff::{BillOfMaterials, MaterialsOutput};

/// Output format for a bill of materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Table,
    Csv,
    Json,
}

/// Resolves a built-in template id or a saved design file into a model.
///
/// Returns the display name alongside the model.
pub fn load_source(source: &str) -> anyhow::Result<(String, PlannerConfig)> {
    if let Some(template) = find_template(source) {
        return Ok((template.name.clone(), template.instantiate()));
    }
    let path = Path::new(source);
    let design = load_from_file(path)
        .with_context(|| format!("'{}' is neither a template id nor a readable design file", source))?;
    info!(name = %design.name, "Design loaded");
    Ok((design.name, design.config))
}

pub fn render_bill(
    bill: &BillOfMaterials,
    config: &PlannerConfig,
    format: ReportFormat,
    currency: &str,
) -> anyhow::Result<String> {
    match format {
        ReportFormat::Csv => Ok(bill.to_csv()),
        ReportFormat::Json => {
            let output = MaterialsOutput::new(config, bill.clone());
            Ok(serde_json::to_string_pretty(&output)?)
        }
        ReportFormat::Table => Ok(render_table(bill, currency)),
    }
}

fn money(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_string())
}

fn render_table(bill: &BillOfMaterials, currency: &str) -> String {
    let mut out = String::new();
    if bill.is_empty() {
        out.push_str("No materials.\n");
        return out;
    }

    for subtotal in bill.subtotals() {
        let _ = writeln!(out, "{}", subtotal.category);
        for item in bill.items_in(subtotal.category) {
            let _ = writeln!(
                out,
                "  {:<44} {:>6} {:<6} {:>10} {:>11}",
                item.description,
                item.quantity,
                item.unit,
                money(item.unit_price),
                money(item.total_price),
            );
        }
        let _ = writeln!(out, "  {:<70} {:>11.2}", "Subtotal", subtotal.subtotal);
    }
    let _ = writeln!(out, "{:<72} {:>11.2} {}", "Total", bill.total(), currency);

    let unpriced = bill.unpriced().count();
    if unpriced > 0 {
        let _ = writeln!(out, "{} line(s) have no price", unpriced);
    }
    out
}
