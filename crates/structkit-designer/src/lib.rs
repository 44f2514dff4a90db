//! # StructKit Designer
//!
//! Room layout model, placement engine and view projections for the garage
//! and kitchen planners.
//!
//! ## Core Components
//!
//! - **Catalog**: static table of cabinets, appliances, doors and windows
//! - **Model**: room parameters, placed items and wall openings
//! - **Planner**: the only writer of the model (add, drag, rotate, snap, hit-test)
//! - **Interaction**: pointer gesture state machine with a pure transition function
//! - **Projection**: plan, front, side and 3D views derived from the model
//! - **Templates**: built-in starting layouts
//! - **Serialization**: saved-design record and JSON export/import
//!
//! ## Architecture
//!
//! ```text
//! Catalog ──► PlannerConfig ◄── Planner ◄── PointerEvent (interaction)
//!                  │
//!                  ├── project_plan / project_front / project_side ──► DisplayList
//!                  ├── project_scene ──► Scene ◄── Camera
//!                  └── (structkit-takeoff) ──► BillOfMaterials
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use structkit_designer::{catalog, PlannerConfig, PlannerKind, Planner, RoomSpec, ViewConfig};
//!
//! let config = PlannerConfig::new(PlannerKind::Kitchen, RoomSpec::new(12.0, 10.0, 8.0));
//! let mut planner = Planner::new(config);
//! let base = catalog::find("base-24").expect("catalog entry");
//! let id = planner.add_item(base.clone(), 10.0, 0.0);
//! planner.move_item(id, 500.0, 0.0);
//! assert_eq!(planner.config().item(id).map(|i| i.x), Some(120.0));
//!
//! let plan = structkit_designer::project_plan(planner.config(), &ViewConfig::default());
//! assert!(!plan.primitives.is_empty());
//! ```

pub mod camera;
pub mod catalog;
pub mod geometry;
pub mod interaction;
pub mod model;
pub mod planner;
pub mod projection;
pub mod selection_manager;
pub mod serialization;
pub mod templates;
pub mod viewport;

pub use camera::Camera;
pub use catalog::{ApplianceType, CabinetType, CatalogItem, ItemKind, OpeningType};
pub use interaction::{Edit, Gesture, PointerEvent};
pub use model::{
    CabinetStyle, CountertopMaterial, DisplayFlags, ItemUpdate, Opening, PlacedItem, PlannerConfig,
    PlannerKind, Point, RoofStyle, RoomSpec, RoomUpdate, SidingType, ViewMode, Wall, WallFraming,
};
pub use planner::{Axis, HitTarget, Planner, PlannerOptions, RotateDirection};
pub use projection::{
    project, project_front, project_plan, project_scene, project_side, DisplayList, Primitive,
    Projection, Role, Scene, ViewConfig,
};
pub use selection_manager::SelectionManager;
pub use serialization::{export_design, import_design, DesignStore, DesignSummary, SavedDesign};
pub use templates::{builtin_templates, find_template, PlannerTemplate, TemplateCategory};
pub use viewport::Viewport;
