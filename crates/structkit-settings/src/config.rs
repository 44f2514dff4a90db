//! Configuration and settings management for StructKit
//!
//! Supports JSON and TOML files stored in the platform config directory.
//!
//! Configuration is organized into two sections:
//! - Planner defaults (grid, snapping, canvas, rotation handle)
//! - Take-off pricing (price overrides layered on the built-in price book)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use structkit_core::constants::{DEFAULT_CANVAS_PADDING_PX, DEFAULT_GRID_SIZE_IN, DEFAULT_HANDLE_RADIUS_IN};
use structkit_core::LengthUnit;
use structkit_designer::{PlannerConfig, PlannerKind, PlannerOptions, RoomSpec, ViewConfig, ViewMode};
use structkit_takeoff::PriceBook;

use crate::error::{ConfigError, SettingsError, SettingsResult};

const CONFIG_DIR_NAME: &str = "structkit";
const CONFIG_FILE_NAME: &str = "config.toml";
const MAX_RECENT_DESIGNS: usize = 10;

/// Defaults applied to new designs and planner sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerSettings {
    /// Planner opened when none is chosen
    #[serde(default)]
    pub default_kind: PlannerKind,
    /// Grid spacing for new rooms, in inches
    pub grid_size_in: f64,
    pub snap_enabled: bool,
    pub show_grid: bool,
    #[serde(default)]
    pub default_view: ViewMode,
    /// Unit used when reporting lengths
    #[serde(default)]
    pub length_unit: LengthUnit,
    /// Rotation handle hit radius, in inches
    pub handle_radius_in: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub canvas_padding: f64,
    #[serde(default = "default_true")]
    pub show_labels: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            default_kind: PlannerKind::default(),
            grid_size_in: DEFAULT_GRID_SIZE_IN,
            snap_enabled: true,
            show_grid: true,
            default_view: ViewMode::default(),
            length_unit: LengthUnit::Feet,
            handle_radius_in: DEFAULT_HANDLE_RADIUS_IN,
            canvas_width: 800.0,
            canvas_height: 600.0,
            canvas_padding: DEFAULT_CANVAS_PADDING_PX,
            show_labels: true,
        }
    }
}

impl PlannerSettings {
    pub fn planner_options(&self) -> PlannerOptions {
        PlannerOptions {
            handle_radius: self.handle_radius_in,
            ..PlannerOptions::default()
        }
    }

    pub fn view_config(&self) -> ViewConfig {
        let mut view = ViewConfig::new(self.canvas_width, self.canvas_height);
        view.padding = self.canvas_padding;
        view.show_labels = self.show_labels;
        view.handle_radius = self.handle_radius_in;
        view
    }

    /// Empty design of the given kind with these defaults applied.
    pub fn new_design(&self, kind: PlannerKind, width_ft: f64, length_ft: f64, height_ft: f64) -> PlannerConfig {
        let room = RoomSpec {
            grid_size: self.grid_size_in,
            snap_enabled: self.snap_enabled,
            ..RoomSpec::new(width_ft, length_ft, height_ft)
        };
        let mut config = PlannerConfig::new(kind, room);
        config.display.show_grid = self.show_grid;
        config.display.view_mode = self.default_view;
        config
    }
}

/// Pricing used by the materials take-off
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TakeoffSettings {
    /// ISO currency code shown next to prices
    pub currency: String,
    /// Start from the built-in price book; when false only `prices` is used
    #[serde(default = "default_true")]
    pub use_builtin_prices: bool,
    /// Unit price overrides keyed by SKU
    #[serde(default)]
    pub prices: BTreeMap<String, f64>,
}

impl Default for TakeoffSettings {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            use_builtin_prices: true,
            prices: BTreeMap::new(),
        }
    }
}

impl TakeoffSettings {
    pub fn price_book(&self) -> PriceBook {
        let mut book = if self.use_builtin_prices {
            PriceBook::default()
        } else {
            PriceBook::empty()
        };
        book.merge(&PriceBook {
            prices: self.prices.clone(),
        });
        book
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Recently opened design files, newest first
    #[serde(default)]
    pub recent_designs: Vec<PathBuf>,
    #[serde(default)]
    pub planner: PlannerSettings,
    #[serde(default)]
    pub takeoff: TakeoffSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_for(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("<none>").to_string()).into()),
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config directory, e.g. `~/.config/structkit` on Linux
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME))
            .ok_or_else(|| SettingsError::ConfigDirectory("no config directory on this platform".to_string()))
    }

    pub fn default_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_for(path)?;
        let content = std::fs::read_to_string(path)?;
        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };
        config.validate()?;
        debug!(path = %path.display(), "Loaded settings");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!(path = %path.display(), "No settings file; using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating the parent directory
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let content = match format_for(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        info!(path = %path.display(), "Saved settings");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let planner = &self.planner;
        if !(planner.grid_size_in > 0.0 && planner.grid_size_in.is_finite()) {
            return Err(SettingsError::invalid("planner.grid_size_in", "must be > 0"));
        }
        if !(planner.handle_radius_in > 0.0 && planner.handle_radius_in.is_finite()) {
            return Err(SettingsError::invalid("planner.handle_radius_in", "must be > 0"));
        }
        if planner.canvas_width <= 0.0 || planner.canvas_height <= 0.0 {
            return Err(SettingsError::invalid("planner.canvas", "canvas dimensions must be > 0"));
        }
        if planner.canvas_padding < 0.0
            || 2.0 * planner.canvas_padding >= planner.canvas_width.min(planner.canvas_height)
        {
            return Err(SettingsError::invalid(
                "planner.canvas_padding",
                "padding must leave room to draw",
            ));
        }

        if self.takeoff.currency.trim().is_empty() {
            return Err(SettingsError::invalid("takeoff.currency", "must not be empty"));
        }
        for (sku, price) in &self.takeoff.prices {
            if !price.is_finite() || *price < 0.0 {
                return Err(ConfigError::ValueOutOfRange {
                    key: format!("takeoff.prices.{}", sku),
                    value: price.to_string(),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Add a design file to the recent list
    pub fn add_recent_design(&mut self, path: PathBuf) {
        self.recent_designs.retain(|p| p != &path);
        self.recent_designs.insert(0, path);
        self.recent_designs.truncate(MAX_RECENT_DESIGNS);
    }
}
