//! Planner-wide constants.
//!
//! Values that more than one projection or calculator depends on live here so
//! the plan, elevation and 3D views can never drift apart.

/// Default canvas padding in pixels for the plan and elevation projections.
pub const DEFAULT_CANVAS_PADDING_PX: f64 = 40.0;

/// Height of the underside of wall cabinets above the finished floor (inches).
pub const WALL_CABINET_MOUNT_HEIGHT_IN: f64 = 54.0;

/// Rotation increment used when dragging a rotation handle (degrees).
pub const ROTATION_SNAP_DEG: f64 = 15.0;

/// Rotation applied by the toolbar rotate actions (degrees).
pub const ROTATION_STEP_DEG: f64 = 90.0;

/// Default hit radius around a rotation handle (inches, in model space).
pub const DEFAULT_HANDLE_RADIUS_IN: f64 = 4.0;

/// Default grid spacing (inches).
pub const DEFAULT_GRID_SIZE_IN: f64 = 6.0;

/// Gambrel roofs break from the steep lower slope to the shallow upper slope at
/// this fraction of the total rise.
pub const GAMBREL_BREAK_RATIO: f64 = 0.55;

/// Visible height of a flat roof band (parapet and fascia), in feet.
pub const FLAT_ROOF_BAND_FT: f64 = 1.0;

/// Maximum roof pitch accepted (rise per 12" of run).
pub const MAX_ROOF_PITCH: f64 = 24.0;

/// Upper bound for room dimensions typed by a user (feet).
pub const MAX_ROOM_DIMENSION_FT: f64 = 200.0;

/// Lower bound for room dimensions typed by a user (feet).
pub const MIN_ROOM_DIMENSION_FT: f64 = 1.0;
