//! # Planner Templates
//!
//! Built-in starting layouts for the garage and kitchen planners. A template
//! is plain data: room parameters plus catalog references with positions.
//! Instantiating one runs every placement through a [`Planner`], so templates
//! obey the same clamping and snapping as interactive edits.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog;
use crate::model::{ItemUpdate, PlannerConfig, PlannerKind, RoofStyle, RoomSpec, Wall};
use crate::planner::Planner;

/// Template categories, one per planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    Garage,
    Kitchen,
}

impl TemplateCategory {
    /// Get category as string
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::Garage => "garage",
            TemplateCategory::Kitchen => "kitchen",
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "garage" => Some(TemplateCategory::Garage),
            "kitchen" => Some(TemplateCategory::Kitchen),
            _ => None,
        }
    }

    pub fn planner_kind(&self) -> PlannerKind {
        match self {
            TemplateCategory::Garage => PlannerKind::Garage,
            TemplateCategory::Kitchen => PlannerKind::Kitchen,
        }
    }
}

/// A catalog item placement inside a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateItem {
    pub catalog_id: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub wall: Option<Wall>,
}

/// A door or window cut into a template wall
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateOpening {
    pub catalog_id: String,
    pub wall: Wall,
    pub offset: f64,
}

/// A named starting layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: TemplateCategory,
    pub room: RoomSpec,
    #[serde(default)]
    pub items: Vec<TemplateItem>,
    #[serde(default)]
    pub openings: Vec<TemplateOpening>,
}

impl PlannerTemplate {
    /// Builds a configuration model from the template.
    ///
    /// Entries naming unknown catalog ids are skipped with a warning.
    pub fn instantiate(&self) -> PlannerConfig {
        let mut planner = Planner::new(PlannerConfig::new(self.category.planner_kind(), self.room.clone()));

        for entry in &self.items {
            let Some(item) = catalog::find(&entry.catalog_id) else {
                warn!(template = %self.id, catalog_id = %entry.catalog_id, "unknown catalog item in template");
                continue;
            };
            let id = planner.add_item(item.clone(), entry.x, entry.y);
            if entry.rotation != 0.0 {
                planner.set_rotation(id, entry.rotation);
            }
            if let Some(wall) = entry.wall {
                planner.update_item(
                    id,
                    ItemUpdate {
                        wall: Some(wall),
                        ..Default::default()
                    },
                );
            }
        }

        for entry in &self.openings {
            let added = catalog::find(&entry.catalog_id)
                .and_then(|item| planner.add_opening_from_catalog(item, entry.wall, entry.offset));
            if added.is_none() {
                warn!(template = %self.id, catalog_id = %entry.catalog_id, "skipping template opening");
            }
        }

        info!(template = %self.id, items = planner.item_count(), "template loaded");
        planner.into_config()
    }
}

fn item(catalog_id: &str, x: f64, y: f64) -> TemplateItem {
    TemplateItem {
        catalog_id: catalog_id.to_string(),
        x,
        y,
        rotation: 0.0,
        wall: None,
    }
}

fn on_wall(catalog_id: &str, x: f64, y: f64, rotation: f64, wall: Wall) -> TemplateItem {
    TemplateItem {
        rotation,
        wall: Some(wall),
        ..item(catalog_id, x, y)
    }
}

fn door(catalog_id: &str, wall: Wall, offset: f64) -> TemplateOpening {
    TemplateOpening {
        catalog_id: catalog_id.to_string(),
        wall,
        offset,
    }
}

fn template(
    id: &str,
    name: &str,
    description: &str,
    category: TemplateCategory,
    room: RoomSpec,
) -> PlannerTemplate {
    PlannerTemplate {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        room,
        items: Vec::new(),
        openings: Vec::new(),
    }
}

static BUILTIN_TEMPLATES: Lazy<Vec<PlannerTemplate>> = Lazy::new(|| {
    use TemplateCategory::{Garage, Kitchen};
    use Wall::{Back, Front, Left, Right};

    vec![
        PlannerTemplate {
            openings: vec![
                door("overhead-9x7", Front, 18.0),
                door("walk-door-36", Left, 60.0),
                door("window-30x24", Right, 120.0),
            ],
            ..template(
                "garage-single",
                "Single-Car Garage",
                "12' x 22' gable garage with one 9' overhead door",
                Garage,
                RoomSpec::new(12.0, 22.0, 9.0),
            )
        },
        PlannerTemplate {
            openings: vec![
                door("overhead-9x7", Front, 12.0),
                door("overhead-9x7", Front, 120.0),
                door("walk-door-36", Right, 24.0),
                door("window-36x36", Back, 102.0),
            ],
            ..template(
                "garage-two-car",
                "Two-Car Garage",
                "20' x 20' gable garage, 6/12 pitch, two 9' overhead doors",
                Garage,
                RoomSpec::new(20.0, 20.0, 9.0),
            )
        },
        PlannerTemplate {
            openings: vec![
                door("overhead-16x7", Front, 24.0),
                door("overhead-9x7", Front, 252.0),
                door("walk-door-36", Left, 36.0),
                door("window-36x36", Back, 72.0),
                door("window-36x36", Back, 276.0),
            ],
            ..template(
                "garage-three-car",
                "Three-Car Garage",
                "32' x 24' hip-roof garage with a double and a single overhead door",
                Garage,
                RoomSpec {
                    roof_style: RoofStyle::Hip,
                    roof_pitch: 5.0,
                    include_electrical: true,
                    ..RoomSpec::new(32.0, 24.0, 10.0)
                },
            )
        },
        PlannerTemplate {
            items: vec![
                item("corner-base-36", 0.0, 0.0),
                item("base-24", 36.0, 0.0),
                item("sink-base-36", 60.0, 0.0),
                item("sink-33", 60.0, 0.0),
                item("dishwasher-24", 96.0, 0.0),
                item("base-24", 120.0, 0.0),
                item("wall-36", 60.0, 0.0),
                item("wall-24", 120.0, 0.0),
                on_wall("range-30", 0.0, 48.0, 90.0, Left),
                on_wall("fridge-36", 0.0, 84.0, 90.0, Left),
            ],
            ..template(
                "kitchen-l-shaped",
                "L-Shaped Kitchen",
                "12' x 10' kitchen with a sink run on the front wall and cooking on the left",
                Kitchen,
                RoomSpec::new(12.0, 10.0, 8.0),
            )
        },
        PlannerTemplate {
            items: vec![
                item("fridge-36", 0.0, 0.0),
                item("base-24", 36.0, 0.0),
                item("range-30", 60.0, 0.0),
                item("microwave-30", 60.0, 0.0),
                item("base-24", 90.0, 0.0),
                item("base-36", 114.0, 0.0),
                item("base-18", 150.0, 0.0),
                item("base-30", 0.0, 72.0),
                item("sink-base-36", 30.0, 72.0),
                item("sink-33", 30.0, 72.0),
                item("dishwasher-24", 66.0, 72.0),
                item("base-36", 90.0, 72.0),
                item("drawer-base-18", 126.0, 72.0),
                item("base-24", 144.0, 72.0),
            ],
            ..template(
                "kitchen-galley",
                "Galley Kitchen",
                "14' x 8' galley with two parallel runs",
                Kitchen,
                RoomSpec::new(14.0, 8.0, 8.0),
            )
        },
        PlannerTemplate {
            items: vec![
                item("fridge-36", 0.0, 0.0),
                item("tall-pantry-24", 36.0, 0.0),
                item("base-36", 60.0, 0.0),
                item("range-30", 96.0, 0.0),
                item("microwave-30", 96.0, 0.0),
                item("base-36", 126.0, 0.0),
                item("base-30", 162.0, 0.0),
                item("wall-36", 60.0, 0.0),
                item("wall-36", 126.0, 0.0),
                item("island-72", 60.0, 84.0),
                item("sink-33", 78.0, 90.0),
            ],
            ..template(
                "kitchen-island",
                "Island Kitchen",
                "16' x 14' kitchen with a full wall run and a 6' island",
                Kitchen,
                RoomSpec::new(16.0, 14.0, 9.0),
            )
        },
    ]
});

/// All built-in templates in display order.
pub fn builtin_templates() -> &'static [PlannerTemplate] {
    &BUILTIN_TEMPLATES
}

/// Templates for one planner.
pub fn templates_for(category: TemplateCategory) -> impl Iterator<Item = &'static PlannerTemplate> {
    BUILTIN_TEMPLATES.iter().filter(move |t| t.category == category)
}

pub fn find_template(id: &str) -> Option<&'static PlannerTemplate> {
    BUILTIN_TEMPLATES.iter().find(|t| t.id == id)
}
