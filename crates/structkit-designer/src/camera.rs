//! Orbit camera for the 3D scene (Z up, meters).

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::projection::SceneBounds;

const PITCH_LIMIT_DEG: f32 = 89.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub target: Vec3,
    pub distance: f32,
    pub yaw: f32,   // radians
    pub pitch: f32, // radians
    pub fov: f32,   // degrees
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            distance: 15.0,
            // Looking from the front-left corner, above the eaves.
            yaw: -120.0f32.to_radians(),
            pitch: 30.0f32.to_radians(),
            fov: 45.0,
            aspect_ratio: 1.0,
            near: 0.05,
            far: 500.0,
            min_distance: 1.0,
            max_distance: 200.0,
        }
    }
}

impl Camera {
    pub fn new(target: Vec3, distance: f32) -> Self {
        Self {
            target,
            distance,
            ..Default::default()
        }
    }

    pub fn update_aspect_ratio(&mut self, width: f32, height: f32) {
        if height > 0.0 {
            self.aspect_ratio = width / height;
        }
    }

    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch += delta_pitch;

        // Keep away from the poles so the view never flips.
        let limit = PITCH_LIMIT_DEG.to_radians();
        self.pitch = self.pitch.clamp(-limit, limit);
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance -= delta;
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
    }

    fn offset_dir(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(cos_pitch * cos_yaw, cos_pitch * sin_yaw, sin_pitch)
    }

    fn up_for(forward: Vec3) -> Vec3 {
        if forward.cross(Vec3::Z).length_squared() < 0.001 {
            Vec3::Y
        } else {
            Vec3::Z
        }
    }

    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let forward = -self.offset_dir().normalize();
        let cam_right = forward.cross(Self::up_for(forward)).normalize();
        let cam_up = cam_right.cross(forward).normalize();

        let scale = self.distance * 0.001;
        self.target -= cam_right * delta_x * scale;
        self.target += cam_up * delta_y * scale;
    }

    pub fn eye_position(&self) -> Vec3 {
        self.target + self.offset_dir() * self.distance
    }

    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.eye_position();
        let forward = (self.target - eye).normalize();
        Mat4::look_at_rh(eye, self.target, Self::up_for(forward))
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), self.aspect_ratio, self.near, self.far)
    }

    pub fn set_view(&mut self, yaw_deg: f32, pitch_deg: f32) {
        self.yaw = yaw_deg.to_radians();
        let limit = PITCH_LIMIT_DEG;
        self.pitch = pitch_deg.clamp(-limit, limit).to_radians();
    }

    pub fn set_isometric(&mut self) {
        self.yaw = -45.0f32.to_radians();
        self.pitch = 35.264f32.to_radians();
    }

    /// Centers on the scene and backs off until its largest dimension fits the field of view.
    pub fn fit_to_bounds(&mut self, bounds: &SceneBounds) {
        let size = bounds.max - bounds.min;
        let max_dim = size.max_element();
        self.target = bounds.center();

        let fov_rad = self.fov.to_radians();
        let distance = (max_dim * 1.2) / (fov_rad / 2.0).tan();
        self.distance = distance.clamp(self.min_distance, self.max_distance);
    }
}
