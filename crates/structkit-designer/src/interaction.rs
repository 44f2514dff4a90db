//! Pointer gesture state machine.
//!
//! Gestures are modelled as an explicit finite-state machine with a pure
//! transition function. The host feeds [`PointerEvent`]s in room coordinates
//! (inches); [`transition`] returns the next [`Gesture`] plus the [`Edit`]s to
//! apply to the model. Nothing here depends on a UI toolkit.
//!
//! ```text
//! Idle --down on handle--> Rotating --up/cancel--> Idle (+ snap)
//! Idle --down on item----> Dragging --up/cancel--> Idle (+ snap)
//! Idle --down on opening-> SlidingOpening --up/cancel--> Idle (+ snap)
//! ```

use crate::geometry;
use crate::model::{PlannerConfig, Point};
use crate::planner::{HitTarget, PlannerOptions};

/// Current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging {
        id: u64,
        last: Point,
    },
    Rotating {
        id: u64,
        /// Pointer angle around the item center when the handle was grabbed.
        grab_angle: f64,
        /// Item rotation when the handle was grabbed.
        base_rotation: f64,
    },
    SlidingOpening {
        id: u64,
        last: Point,
    },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Id of the item or opening the gesture is acting on.
    pub fn target_id(&self) -> Option<u64> {
        match self {
            Self::Idle => None,
            Self::Dragging { id, .. } | Self::Rotating { id, .. } | Self::SlidingOpening { id, .. } => {
                Some(*id)
            }
        }
    }
}

/// Pointer input in room coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up,
    /// Pointer released outside any tracked target, or the gesture was abandoned.
    Cancel,
}

/// A model mutation requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edit {
    Select(Option<u64>),
    MoveItem { id: u64, dx: f64, dy: f64 },
    SetRotation { id: u64, degrees: f64 },
    SnapItem { id: u64 },
    SlideOpening { id: u64, delta: f64 },
    SnapOpening { id: u64 },
}

/// Rotation-aware hit test over the model.
///
/// The selected item's rotation handle wins first, then items from the top of
/// the draw order down, then wall openings.
pub fn hit_test(
    config: &PlannerConfig,
    selected: Option<u64>,
    point: Point,
    options: &PlannerOptions,
) -> Option<HitTarget> {
    if let Some(item) = selected.and_then(|id| config.item(id)) {
        if item.rotation_handle().distance_to(&point) <= options.handle_radius {
            return Some(HitTarget::RotationHandle(item.id));
        }
    }

    if let Some(item) = config
        .items
        .iter()
        .rev()
        .find(|item| item.contains_point(point, options.hit_tolerance))
    {
        return Some(HitTarget::Item(item.id));
    }

    let half_thickness = config.room.wall_framing.wall_thickness_in() / 2.0 + options.hit_tolerance;
    let (w, l) = (config.room_width_in(), config.room_length_in());
    config
        .openings
        .iter()
        .rev()
        .find(|o| o.contains_point(point, w, l, half_thickness))
        .map(|o| HitTarget::Opening(o.id))
}

/// Pure transition function.
pub fn transition(
    state: Gesture,
    event: PointerEvent,
    config: &PlannerConfig,
    selected: Option<u64>,
    options: &PlannerOptions,
) -> (Gesture, Vec<Edit>) {
    match event {
        PointerEvent::Down(p) => {
            // A down without a preceding up finalizes whatever was in progress.
            let mut edits = finish(state);
            let (next, mut more) = begin(p, config, selected, options);
            edits.append(&mut more);
            (next, edits)
        }
        PointerEvent::Move(p) => match state {
            Gesture::Idle => (Gesture::Idle, Vec::new()),
            Gesture::Dragging { id, last } => (
                Gesture::Dragging { id, last: p },
                vec![Edit::MoveItem {
                    id,
                    dx: p.x - last.x,
                    dy: p.y - last.y,
                }],
            ),
            Gesture::Rotating {
                id,
                grab_angle,
                base_rotation,
            } => {
                let Some(item) = config.item(id) else {
                    return (Gesture::Idle, Vec::new());
                };
                let angle = geometry::angle_from(item.center(), p);
                let degrees = geometry::snap_angle(
                    base_rotation + (angle - grab_angle),
                    options.rotation_snap_deg,
                );
                (state, vec![Edit::SetRotation { id, degrees }])
            }
            Gesture::SlidingOpening { id, last } => {
                let Some(opening) = config.opening(id) else {
                    return (Gesture::Idle, Vec::new());
                };
                let delta = if opening.wall.runs_along_width() {
                    p.x - last.x
                } else {
                    p.y - last.y
                };
                (
                    Gesture::SlidingOpening { id, last: p },
                    vec![Edit::SlideOpening { id, delta }],
                )
            }
        },
        PointerEvent::Up | PointerEvent::Cancel => (Gesture::Idle, finish(state)),
    }
}

fn begin(
    p: Point,
    config: &PlannerConfig,
    selected: Option<u64>,
    options: &PlannerOptions,
) -> (Gesture, Vec<Edit>) {
    match hit_test(config, selected, p, options) {
        Some(HitTarget::RotationHandle(id)) => {
            let Some(item) = config.item(id) else {
                return (Gesture::Idle, Vec::new());
            };
            (
                Gesture::Rotating {
                    id,
                    grab_angle: geometry::angle_from(item.center(), p),
                    base_rotation: item.rotation,
                },
                Vec::new(),
            )
        }
        Some(HitTarget::Item(id)) => {
            let edits = if selected == Some(id) {
                Vec::new()
            } else {
                vec![Edit::Select(Some(id))]
            };
            (Gesture::Dragging { id, last: p }, edits)
        }
        Some(HitTarget::Opening(id)) => (
            Gesture::SlidingOpening { id, last: p },
            vec![Edit::Select(None)],
        ),
        None => (Gesture::Idle, vec![Edit::Select(None)]),
    }
}

fn finish(state: Gesture) -> Vec<Edit> {
    match state {
        Gesture::Idle => Vec::new(),
        Gesture::Dragging { id, .. } | Gesture::Rotating { id, .. } => vec![Edit::SnapItem { id }],
        Gesture::SlidingOpening { id, .. } => vec![Edit::SnapOpening { id }],
    }
}
