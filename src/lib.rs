//! # StructKit
//!
//! Parametric garage and kitchen layout planner with a deterministic
//! materials take-off.
//!
//! ## Architecture
//!
//! StructKit is organized as a workspace with multiple crates:
//!
//! 1. **structkit-core** - Units, shared constants and error types
//! 2. **structkit-designer** - Catalog, configuration model, placement engine, projections, templates
//! 3. **structkit-takeoff** - Bill of materials, price book, quote hand-off
//! 4. **structkit-settings** - Planner defaults and pricing overrides (JSON/TOML)
//! 5. **structkit** - Command-line host that ties the crates together
//!
//! ## Features
//!
//! - **Placement**: drag, rotate, snap and bounds-clamp cabinets, appliances and openings
//! - **Views**: plan, front and side elevations and a 3D scene from one model
//! - **Take-off**: categorized line items with whole-unit quantities and subtotals

pub mod report;

pub use structkit_designer as designer;
pub use structkit_settings as settings;
pub use structkit_takeoff as takeoff;

pub use structkit_core::{DesignError, Error, Result};
pub use structkit_designer::{
    find_template, Planner, PlannerConfig, PlannerKind, RoomSpec, SavedDesign, ViewConfig, ViewMode,
};
pub use structkit_settings::Config;
pub use structkit_takeoff::{calculate, BillOfMaterials, MaterialsOutput, PriceBook};

pub use report::{load_source, render_bill, ReportFormat};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr so command output on stdout stays machine-readable
/// - RUST_LOG environment variable support
/// - `default_level` as the floor when RUST_LOG is unset
pub fn init_logging(default_level: tracing::Level) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(default_level.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
