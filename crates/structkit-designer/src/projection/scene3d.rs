//! # 3D Scene
//!
//! Re-derives the room, roof, items and openings as solids in meters with a
//! room-centered origin and Z up. Plan x maps to X, plan y (towards the back
//! wall) maps to Y. Item heights come from the same anchor rule the
//! elevations use.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::Role;
use crate::geometry;
use crate::model::{PlannerConfig, Wall};
use structkit_core::METERS_PER_INCH;

/// Floor slab thickness in inches.
const SLAB_THICKNESS_IN: f64 = 4.0;

fn m(inches: f64) -> f32 {
    (inches * METERS_PER_INCH) as f32
}

/// An axis-aligned box, optionally yawed about its vertical axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solid {
    pub id: Option<u64>,
    pub role: Role,
    pub center: Vec3,
    pub size: Vec3,
    /// Rotation about +Z in degrees.
    pub rotation_deg: f32,
}

/// Triangle mesh for the roof.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoofMesh {
    pub vertices: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl RoofMesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl SceneBounds {
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

/// Output of the 3D projection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    pub solids: Vec<Solid>,
    pub roof: RoofMesh,
    pub bounds: SceneBounds,
}

impl Scene {
    pub fn solid(&self, id: u64) -> Option<&Solid> {
        self.solids.iter().find(|s| s.id == Some(id))
    }

    pub fn count(&self, role: Role) -> usize {
        self.solids.iter().filter(|s| s.role == role).count()
    }
}

/// Builds the 3D scene for the model.
pub fn project_scene(config: &PlannerConfig) -> Scene {
    let room = &config.room;
    let (w, l, h) = (config.room_width_in(), config.room_length_in(), room.height_in());
    let t = room.wall_framing.wall_thickness_in();
    let mut solids = Vec::with_capacity(5 + config.items.len() + config.openings.len());

    let boxed = |id: Option<u64>, role: Role, center: [f64; 3], size: [f64; 3], rotation_deg: f64| Solid {
        id,
        role,
        center: Vec3::new(m(center[0]), m(center[1]), m(center[2])),
        size: Vec3::new(m(size[0]), m(size[1]), m(size[2])),
        rotation_deg: rotation_deg as f32,
    };

    solids.push(boxed(
        None,
        Role::Floor,
        [0.0, 0.0, -SLAB_THICKNESS_IN / 2.0],
        [w, l, SLAB_THICKNESS_IN],
        0.0,
    ));
    solids.push(boxed(None, Role::Wall, [0.0, -(l + t) / 2.0, h / 2.0], [w + 2.0 * t, t, h], 0.0));
    solids.push(boxed(None, Role::Wall, [0.0, (l + t) / 2.0, h / 2.0], [w + 2.0 * t, t, h], 0.0));
    solids.push(boxed(None, Role::Wall, [-(w + t) / 2.0, 0.0, h / 2.0], [t, l, h], 0.0));
    solids.push(boxed(None, Role::Wall, [(w + t) / 2.0, 0.0, h / 2.0], [t, l, h], 0.0));

    // Openings sit slightly proud of the wall so they render over it.
    let proud = t * 1.1;
    for opening in &config.openings {
        let (bottom, top) = geometry::opening_vertical_span(opening);
        let along = opening.offset + opening.width / 2.0;
        let z = (bottom + top) / 2.0;
        let (center, size) = match opening.wall {
            Wall::Front => ([-w / 2.0 + along, -(l + t) / 2.0, z], [opening.width, proud, opening.height]),
            Wall::Back => ([-w / 2.0 + along, (l + t) / 2.0, z], [opening.width, proud, opening.height]),
            Wall::Left => ([-(w + t) / 2.0, -l / 2.0 + along, z], [proud, opening.width, opening.height]),
            Wall::Right => ([(w + t) / 2.0, -l / 2.0 + along, z], [proud, opening.width, opening.height]),
        };
        solids.push(boxed(Some(opening.id), Role::Opening, center, size, 0.0));
    }

    for item in &config.items {
        let center_x = -w / 2.0 + item.x + item.width() / 2.0;
        let center_y = -l / 2.0 + item.y + item.depth() / 2.0;
        let center_z = geometry::anchor_center_height(item.kind(), item.height());
        solids.push(boxed(
            Some(item.id),
            Role::for_kind(item.kind()),
            [center_x, center_y, center_z],
            [item.width(), item.depth(), item.height()],
            item.rotation,
        ));
    }

    let roof = if config.kind.has_roof() {
        roof_mesh(config)
    } else {
        RoofMesh::default()
    };

    let top = if roof.is_empty() {
        h
    } else {
        h + geometry::room_roof_rise_in(room)
    };
    let bounds = SceneBounds {
        min: Vec3::new(m(-w / 2.0 - t), m(-l / 2.0 - t), m(-SLAB_THICKNESS_IN)),
        max: Vec3::new(m(w / 2.0 + t), m(l / 2.0 + t), m(top.max(h))),
    };

    trace!(solids = solids.len(), roof_triangles = roof.triangle_count(), "scene projected");
    Scene { solids, roof, bounds }
}

/// Extrudes the roof cross-section along the room length. Hip vertices are
/// pulled in from both ends by their inset, which turns the end caps into
/// hip triangles.
fn roof_mesh(config: &PlannerConfig) -> RoofMesh {
    let (w, l) = (config.room_width_in(), config.room_length_in());
    let section = geometry::roof_cross_section(&config.room);
    let n = section.len() as u32;
    let mut mesh = RoofMesh::default();

    for v in &section {
        let x = m(-w / 2.0 + v.across);
        let z = m(v.height);
        mesh.vertices.push(Vec3::new(x, m(-l / 2.0 + v.inset), z));
        mesh.vertices.push(Vec3::new(x, m(l / 2.0 - v.inset), z));
    }

    // Slope faces between consecutive profile vertices.
    for i in 0..n - 1 {
        let (a_front, a_back) = (2 * i, 2 * i + 1);
        let (b_front, b_back) = (2 * (i + 1), 2 * (i + 1) + 1);
        mesh.indices.extend_from_slice(&[a_front, b_front, b_back, a_front, b_back, a_back]);
    }

    // End caps as triangle fans from the first profile vertex.
    for i in 1..n - 1 {
        mesh.indices.extend_from_slice(&[0, 2 * (i + 1), 2 * i]);
        mesh.indices.extend_from_slice(&[1, 2 * i + 1, 2 * (i + 1) + 1]);
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::model::{PlacedItem, PlannerKind, RoofStyle, RoomSpec};

    #[test]
    fn test_item_center_formula() {
        let mut config = PlannerConfig::new(PlannerKind::Kitchen, RoomSpec::new(12.0, 10.0, 8.0));
        let id = config.generate_id();
        config
            .items
            .push(PlacedItem::new(id, catalog::find("wall-30").unwrap().clone(), 24.0, 0.0));
        let scene = project_scene(&config);
        let solid = scene.solid(id).unwrap();
        // x: -72 + 24 + 15 = -33"; y: -60 + 0 + 6 = -54"; z: 54 + 15 = 69".
        assert!((solid.center.x - m(-33.0)).abs() < 1e-6);
        assert!((solid.center.y - m(-54.0)).abs() < 1e-6);
        assert!((solid.center.z - m(69.0)).abs() < 1e-6);
        assert!(scene.roof.is_empty());
    }

    #[test]
    fn test_gable_roof_mesh() {
        let config = PlannerConfig::new(PlannerKind::Garage, RoomSpec::new(20.0, 20.0, 9.0));
        let scene = project_scene(&config);
        // Three profile vertices: two slopes (4 triangles) and two end caps.
        assert_eq!(scene.roof.vertices.len(), 6);
        assert_eq!(scene.roof.triangle_count(), 6);
        let ridge_z = scene.roof.vertices.iter().map(|v| v.z).fold(f32::MIN, f32::max);
        assert!((ridge_z - m(168.0)).abs() < 1e-6);
    }

    #[test]
    fn test_hip_ridge_inset() {
        let room = RoomSpec {
            roof_style: RoofStyle::Hip,
            ..RoomSpec::new(20.0, 30.0, 9.0)
        };
        let scene = project_scene(&PlannerConfig::new(PlannerKind::Garage, room));
        // Ridge vertices are pulled 120" in from each end of the 360" length.
        let ridge_front = scene.roof.vertices[2];
        assert!((ridge_front.y - m(-180.0 + 120.0)).abs() < 1e-6);
    }

    #[test]
    fn test_walls_and_floor() {
        let config = PlannerConfig::new(PlannerKind::Garage, RoomSpec::new(20.0, 20.0, 9.0));
        let scene = project_scene(&config);
        assert_eq!(scene.count(Role::Wall), 4);
        assert_eq!(scene.count(Role::Floor), 1);
        assert_eq!(project_scene(&config), scene);
    }
}
