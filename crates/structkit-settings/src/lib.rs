//! StructKit Settings Crate
//!
//! Planner defaults and take-off pricing, persisted as JSON or TOML in the
//! platform config directory.

pub mod config;
pub mod error;

pub use config::{Config, PlannerSettings, TakeoffSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
