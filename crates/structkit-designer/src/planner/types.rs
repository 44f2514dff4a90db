//! Planner type definitions: HitTarget, Axis, RotateDirection, PlannerOptions.

use serde::{Deserialize, Serialize};

use structkit_core::constants::{DEFAULT_HANDLE_RADIUS_IN, ROTATION_SNAP_DEG, ROTATION_STEP_DEG};

/// What a pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The rotation handle of the selected item.
    RotationHandle(u64),
    /// A placed item (cabinet, appliance or placed opening).
    Item(u64),
    /// A structural wall opening.
    Opening(u64),
}

impl HitTarget {
    pub fn id(&self) -> u64 {
        match self {
            Self::RotationHandle(id) | Self::Item(id) | Self::Opening(id) => *id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Direction of a toolbar rotate action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDirection {
    Clockwise,
    CounterClockwise,
}

impl RotateDirection {
    pub fn signed_step(&self, step: f64) -> f64 {
        match self {
            Self::Clockwise => step,
            Self::CounterClockwise => -step,
        }
    }
}

/// Interaction tuning for a planner session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerOptions {
    /// Increment a dragged rotation handle snaps to, in degrees.
    pub rotation_snap_deg: f64,
    /// Toolbar rotate step, in degrees.
    pub rotation_step_deg: f64,
    /// Hit radius around the rotation handle, in inches.
    pub handle_radius: f64,
    /// Extra tolerance applied to item hit tests, in inches.
    pub hit_tolerance: f64,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            rotation_snap_deg: ROTATION_SNAP_DEG,
            rotation_step_deg: ROTATION_STEP_DEG,
            handle_radius: DEFAULT_HANDLE_RADIUS_IN,
            hit_tolerance: 0.0,
        }
    }
}
