//! # Projection Layer
//!
//! Pure functions from the configuration model to view-space geometry. The
//! 2D views produce a [`DisplayList`] of tagged primitives in canvas pixels;
//! the 3D view produces a [`Scene`] in meters. Projections never write back
//! into the model, so projecting an unchanged model twice yields equal output.

mod elevation;
mod plan;
mod scene3d;

pub use elevation::{project_front, project_side};
pub use plan::project_plan;
pub use scene3d::{project_scene, RoofMesh, Scene, SceneBounds, Solid};

use serde::{Deserialize, Serialize};

use crate::catalog::ItemKind;
use crate::model::{PlannerConfig, Point, ViewMode};
use structkit_core::constants::DEFAULT_CANVAS_PADDING_PX;

/// What a primitive depicts. Hosts pick colors and strokes from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Floor,
    Grid,
    Wall,
    Roof,
    Ground,
    Cabinet,
    Appliance,
    Opening,
    Selection,
    RotationHandle,
    Dimension,
    Label,
}

impl Role {
    /// Role for a placed item, by catalog kind.
    pub fn for_kind(kind: &ItemKind) -> Self {
        match kind {
            ItemKind::Cabinet { .. } => Self::Cabinet,
            ItemKind::Appliance { .. } => Self::Appliance,
            ItemKind::Opening { .. } => Self::Opening,
        }
    }
}

/// A single drawable element in canvas pixels (origin top-left, y down).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    Polygon {
        points: Vec<Point>,
        role: Role,
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<u64>,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        role: Role,
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<u64>,
    },
    Line {
        from: Point,
        to: Point,
        role: Role,
    },
    Circle {
        center: Point,
        radius: f64,
        role: Role,
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<u64>,
    },
    Label {
        at: Point,
        text: String,
        role: Role,
    },
}

impl Primitive {
    pub fn role(&self) -> Role {
        match self {
            Self::Polygon { role, .. }
            | Self::Rect { role, .. }
            | Self::Line { role, .. }
            | Self::Circle { role, .. }
            | Self::Label { role, .. } => *role,
        }
    }

    /// Model id of the item or opening this primitive belongs to, if any.
    pub fn id(&self) -> Option<u64> {
        match self {
            Self::Polygon { id, .. } | Self::Rect { id, .. } | Self::Circle { id, .. } => *id,
            Self::Line { .. } | Self::Label { .. } => None,
        }
    }
}

/// Output of a 2D projection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplayList {
    pub width: f64,
    pub height: f64,
    /// Pixels per inch used for this list.
    pub scale: f64,
    pub primitives: Vec<Primitive>,
}

impl DisplayList {
    pub fn new(width: f64, height: f64, scale: f64) -> Self {
        Self {
            width,
            height,
            scale,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(move |p| p.role() == role)
    }

    pub fn count(&self, role: Role) -> usize {
        self.with_role(role).count()
    }

    /// First primitive drawn for the given model id and role.
    pub fn find(&self, id: u64, role: Role) -> Option<&Primitive> {
        self.primitives
            .iter()
            .find(|p| p.id() == Some(id) && p.role() == role)
    }
}

/// Canvas parameters for a 2D projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub padding: f64,
    /// Selected item, drawn with an outline and rotation handle in the plan.
    #[serde(default)]
    pub selected: Option<u64>,
    /// Draw item names and the room dimension label.
    #[serde(default = "default_labels")]
    pub show_labels: bool,
    /// Rotation handle radius in room inches.
    #[serde(default = "default_handle_radius")]
    pub handle_radius: f64,
    /// Plan zoom on top of the fitted scale. Values outside (0.1, 50) fall back to 1.
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    /// Plan pan offset in pixels.
    #[serde(default)]
    pub pan_x: f64,
    #[serde(default)]
    pub pan_y: f64,
}

fn default_labels() -> bool {
    true
}

fn default_zoom() -> f64 {
    1.0
}

fn default_handle_radius() -> f64 {
    structkit_core::constants::DEFAULT_HANDLE_RADIUS_IN
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl ViewConfig {
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            canvas_width,
            canvas_height,
            padding: DEFAULT_CANVAS_PADDING_PX,
            selected: None,
            show_labels: true,
            handle_radius: default_handle_radius(),
            zoom: default_zoom(),
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }

    pub fn with_zoom(mut self, zoom: f64, pan_x: f64, pan_y: f64) -> Self {
        self.zoom = zoom;
        self.pan_x = pan_x;
        self.pan_y = pan_y;
        self
    }

    pub fn with_selected(mut self, selected: Option<u64>) -> Self {
        self.selected = selected;
        self
    }

    /// Largest scale that fits `extent_w x extent_h` inches inside the padded canvas.
    pub fn fit_scale(&self, extent_w: f64, extent_h: f64) -> f64 {
        let avail_w = (self.canvas_width - 2.0 * self.padding).max(1.0);
        let avail_h = (self.canvas_height - 2.0 * self.padding).max(1.0);
        if extent_w <= 0.0 || extent_h <= 0.0 {
            return 1.0;
        }
        (avail_w / extent_w).min(avail_h / extent_h)
    }
}

/// Output of any view, selected by [`ViewMode`].
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    Flat(DisplayList),
    Scene(Scene),
}

/// Projects the model for the given view mode.
pub fn project(config: &PlannerConfig, view: &ViewConfig, mode: ViewMode) -> Projection {
    match mode {
        ViewMode::Plan => Projection::Flat(project_plan(config, view)),
        ViewMode::Front => Projection::Flat(project_front(config, view)),
        ViewMode::Side => Projection::Flat(project_side(config, view)),
        ViewMode::ThreeD => Projection::Scene(project_scene(config)),
    }
}

pub(crate) fn rect(x: f64, y: f64, width: f64, height: f64, role: Role, id: Option<u64>) -> Primitive {
    Primitive::Rect {
        x,
        y,
        width,
        height,
        role,
        id,
    }
}
