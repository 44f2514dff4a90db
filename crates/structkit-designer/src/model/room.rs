use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use structkit_core::constants::{
    DEFAULT_GRID_SIZE_IN, MAX_ROOF_PITCH, MAX_ROOM_DIMENSION_FT, MIN_ROOM_DIMENSION_FT,
};
use structkit_core::feet_to_inches;

/// Stud size used for the exterior walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WallFraming {
    #[default]
    TwoByFour,
    TwoBySix,
}

impl WallFraming {
    /// Nominal lumber label ("2x4" / "2x6").
    pub fn lumber(&self) -> &'static str {
        match self {
            Self::TwoByFour => "2x4",
            Self::TwoBySix => "2x6",
        }
    }

    /// Finished wall thickness: stud depth plus sheathing and interior finish.
    pub fn wall_thickness_in(&self) -> f64 {
        match self {
            Self::TwoByFour => 3.5 + 1.0,
            Self::TwoBySix => 5.5 + 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoofStyle {
    #[default]
    Gable,
    Hip,
    Gambrel,
    Flat,
}

impl RoofStyle {
    /// Waste/overlap multiplier applied to the geometric roof area.
    pub fn waste_factor(&self) -> f64 {
        match self {
            Self::Gable => 1.10,
            Self::Hip => 1.15,
            Self::Gambrel => 1.12,
            Self::Flat => 1.05,
        }
    }

    pub fn is_pitched(&self) -> bool {
        !matches!(self, Self::Flat)
    }
}

impl fmt::Display for RoofStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gable => write!(f, "Gable"),
            Self::Hip => write!(f, "Hip"),
            Self::Gambrel => write!(f, "Gambrel"),
            Self::Flat => write!(f, "Flat"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SidingType {
    #[default]
    Vinyl,
    Wood,
    Metal,
    FiberCement,
}

impl fmt::Display for SidingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vinyl => write!(f, "Vinyl"),
            Self::Wood => write!(f, "Wood"),
            Self::Metal => write!(f, "Metal"),
            Self::FiberCement => write!(f, "Fiber Cement"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CabinetStyle {
    #[default]
    Shaker,
    FlatPanel,
    RaisedPanel,
}

impl fmt::Display for CabinetStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shaker => write!(f, "Shaker"),
            Self::FlatPanel => write!(f, "Flat Panel"),
            Self::RaisedPanel => write!(f, "Raised Panel"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CountertopMaterial {
    #[default]
    Laminate,
    Quartz,
    Granite,
    ButcherBlock,
}

impl fmt::Display for CountertopMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Laminate => write!(f, "Laminate"),
            Self::Quartz => write!(f, "Quartz"),
            Self::Granite => write!(f, "Granite"),
            Self::ButcherBlock => write!(f, "Butcher Block"),
        }
    }
}

/// Room / structure parameters.
///
/// Dimensions are in feet; `grid_size` is in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSpec {
    pub width: f64,
    pub length: f64,
    pub height: f64,
    #[serde(default)]
    pub wall_framing: WallFraming,
    #[serde(default)]
    pub roof_style: RoofStyle,
    /// Rise in inches per 12" of horizontal run.
    #[serde(default = "default_roof_pitch")]
    pub roof_pitch: f64,
    #[serde(default)]
    pub siding: SidingType,
    #[serde(default)]
    pub cabinet_style: CabinetStyle,
    #[serde(default)]
    pub countertop: CountertopMaterial,
    #[serde(default = "default_grid_size")]
    pub grid_size: f64,
    #[serde(default = "default_true")]
    pub snap_enabled: bool,
    #[serde(default)]
    pub include_electrical: bool,
    #[serde(default)]
    pub include_insulation: bool,
}

fn default_roof_pitch() -> f64 {
    6.0
}

fn default_grid_size() -> f64 {
    DEFAULT_GRID_SIZE_IN
}

fn default_true() -> bool {
    true
}

impl Default for RoomSpec {
    fn default() -> Self {
        Self {
            width: 20.0,
            length: 20.0,
            height: 9.0,
            wall_framing: WallFraming::default(),
            roof_style: RoofStyle::default(),
            roof_pitch: default_roof_pitch(),
            siding: SidingType::default(),
            cabinet_style: CabinetStyle::default(),
            countertop: CountertopMaterial::default(),
            grid_size: default_grid_size(),
            snap_enabled: true,
            include_electrical: false,
            include_insulation: false,
        }
    }
}

impl RoomSpec {
    pub fn new(width: f64, length: f64, height: f64) -> Self {
        Self {
            width,
            length,
            height,
            ..Default::default()
        }
        .sanitized()
    }

    pub fn width_in(&self) -> f64 {
        feet_to_inches(self.width)
    }

    pub fn length_in(&self) -> f64 {
        feet_to_inches(self.length)
    }

    pub fn height_in(&self) -> f64 {
        feet_to_inches(self.height)
    }

    pub fn floor_area(&self) -> f64 {
        self.width * self.length
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.length)
    }

    /// Returns a copy with every numeric field pulled into its valid range.
    ///
    /// Non-finite values fall back to the defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = RoomSpec::default();
        self.width = clamp_input("width", self.width, defaults.width, MIN_ROOM_DIMENSION_FT, MAX_ROOM_DIMENSION_FT);
        self.length = clamp_input("length", self.length, defaults.length, MIN_ROOM_DIMENSION_FT, MAX_ROOM_DIMENSION_FT);
        self.height = clamp_input("height", self.height, defaults.height, MIN_ROOM_DIMENSION_FT, MAX_ROOM_DIMENSION_FT);
        self.roof_pitch = clamp_input("roof_pitch", self.roof_pitch, defaults.roof_pitch, 0.0, MAX_ROOF_PITCH);
        if !(self.grid_size.is_finite() && self.grid_size > 0.0) {
            warn!(value = self.grid_size, "grid size must be positive; using default");
            self.grid_size = defaults.grid_size;
        }
        self
    }
}

fn clamp_input(field: &str, value: f64, fallback: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        warn!(field, value, "non-finite room value replaced with default");
        return fallback;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!(field, value, clamped, "room value clamped into range");
    }
    clamped
}

/// Partial update of the room parameters (`onUpdateRoomSpec`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomUpdate {
    pub width: Option<f64>,
    pub length: Option<f64>,
    pub height: Option<f64>,
    pub wall_framing: Option<WallFraming>,
    pub roof_style: Option<RoofStyle>,
    pub roof_pitch: Option<f64>,
    pub siding: Option<SidingType>,
    pub cabinet_style: Option<CabinetStyle>,
    pub countertop: Option<CountertopMaterial>,
    pub grid_size: Option<f64>,
    pub snap_enabled: Option<bool>,
    pub include_electrical: Option<bool>,
    pub include_insulation: Option<bool>,
}

impl RoomUpdate {
    /// Applies the set fields to `room` and re-sanitizes it.
    pub fn apply_to(&self, room: &RoomSpec) -> RoomSpec {
        let mut next = room.clone();
        if let Some(v) = self.width {
            next.width = v;
        }
        if let Some(v) = self.length {
            next.length = v;
        }
        if let Some(v) = self.height {
            next.height = v;
        }
        if let Some(v) = self.wall_framing {
            next.wall_framing = v;
        }
        if let Some(v) = self.roof_style {
            next.roof_style = v;
        }
        if let Some(v) = self.roof_pitch {
            next.roof_pitch = v;
        }
        if let Some(v) = self.siding {
            next.siding = v;
        }
        if let Some(v) = self.cabinet_style {
            next.cabinet_style = v;
        }
        if let Some(v) = self.countertop {
            next.countertop = v;
        }
        if let Some(v) = self.grid_size {
            next.grid_size = v;
        }
        if let Some(v) = self.snap_enabled {
            next.snap_enabled = v;
        }
        if let Some(v) = self.include_electrical {
            next.include_electrical = v;
        }
        if let Some(v) = self.include_insulation {
            next.include_insulation = v;
        }
        next.sanitized()
    }
}
