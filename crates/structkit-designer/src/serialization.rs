//! Saved designs and the export/import codec.
//!
//! A [`SavedDesign`] wraps one configuration model with an id, a name and
//! timestamps. Export writes a versioned JSON envelope; import validates the
//! version and re-clamps the model before handing it out, so a bad file can
//! never put an out-of-bounds layout in front of the planner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;
use uuid::Uuid;

use crate::model::PlannerConfig;
use crate::planner::Planner;
use structkit_core::{DesignError, Result};

/// Design file format version
pub const DESIGN_FORMAT_VERSION: &str = "1.0";

/// A named, timestamped configuration model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedDesign {
    pub id: Uuid,
    pub name: String,
    pub config: PlannerConfig,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SavedDesign {
    pub fn new(name: impl Into<String>, config: PlannerConfig) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            config,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the model and bumps `updated_at`.
    pub fn update(&mut self, config: PlannerConfig) {
        self.config = config;
        self.updated_at = Utc::now();
    }

    pub fn summary(&self) -> DesignSummary {
        DesignSummary {
            id: self.id,
            name: self.name.clone(),
            kind: self.config.kind,
            updated_at: self.updated_at,
        }
    }
}

/// Listing entry for a stored design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSummary {
    pub id: Uuid,
    pub name: String,
    pub kind: crate::model::PlannerKind,
    pub updated_at: DateTime<Utc>,
}

/// On-disk envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DesignFile {
    version: String,
    exported_at: DateTime<Utc>,
    design: SavedDesign,
}

/// Serializes a design as pretty JSON.
pub fn export_design(design: &SavedDesign) -> Result<String> {
    let file = DesignFile {
        version: DESIGN_FORMAT_VERSION.to_string(),
        exported_at: Utc::now(),
        design: design.clone(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

/// Parses a design exported by [`export_design`].
///
/// Files from a newer major format version are rejected. The model is
/// re-clamped, which is a no-op for anything this crate exported.
pub fn import_design(json: &str) -> Result<SavedDesign> {
    let file: DesignFile = serde_json::from_str(json).map_err(|e| DesignError::InvalidData {
        reason: e.to_string(),
    })?;

    if major(&file.version) != major(DESIGN_FORMAT_VERSION) {
        return Err(DesignError::UnsupportedVersion {
            found: file.version,
            expected: DESIGN_FORMAT_VERSION.to_string(),
        }
        .into());
    }

    let mut design = file.design;
    design.config = Planner::new(design.config).into_config();
    Ok(design)
}

fn major(version: &str) -> &str {
    version.split('.').next().unwrap_or(version)
}

/// Writes a design to a file.
pub fn save_to_file<P: AsRef<Path>>(design: &SavedDesign, path: P) -> Result<()> {
    let json = export_design(design)?;
    std::fs::write(path.as_ref(), json)?;
    info!(path = %path.as_ref().display(), id = %design.id, "design exported");
    Ok(())
}

/// Reads a design from a file.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<SavedDesign> {
    let json = std::fs::read_to_string(path.as_ref())?;
    let design = import_design(&json)?;
    info!(path = %path.as_ref().display(), id = %design.id, "design imported");
    Ok(design)
}

/// Persistence boundary for saved designs. The engine ships no store; hosts
/// plug in their own backend.
pub trait DesignStore {
    fn save(&mut self, design: &SavedDesign) -> Result<()>;
    fn load(&self, id: Uuid) -> Result<SavedDesign>;
    fn list(&self) -> Result<Vec<DesignSummary>>;
    /// Returns false when no design had that id.
    fn delete(&mut self, id: Uuid) -> Result<bool>;
}
