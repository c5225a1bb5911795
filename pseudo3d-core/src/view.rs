/// Viewer state owned by the input side and passed by value to each frame
use std::f32::consts::TAU;

use crate::config::{DistanceRange, SceneConfig};
use crate::transform::RotationState;

/// Degrees of rotation per unit of drag
const DRAG_SENSITIVITY: f32 = 1.0 / 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub rotation: RotationState,
    pub distance: f32,
    pub limits: DistanceRange,
}

impl ViewState {
    /// Non-finite inputs fall back to the near limit and no rotation
    pub fn new(rotation: RotationState, distance: f32, limits: DistanceRange) -> Self {
        let mut view = Self {
            rotation: RotationState::zero(),
            distance: limits.min,
            limits,
        };
        view.set_rotation(rotation.z);
        view.set_distance(distance);
        if rotation.x.is_finite() && rotation.y.is_finite() {
            view.rotation.x = rotation.x;
            view.rotation.y = rotation.y;
        }
        view
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(config.initial_rotation, config.initial_distance, config.distance_range)
    }

    /// Rotate about the vertical axis, keeping the angle in `[0, 2π)`
    pub fn rotate_by(&mut self, dz: f32) {
        self.set_rotation(self.rotation.z + dz);
    }

    /// Non-finite angles are ignored
    pub fn set_rotation(&mut self, z: f32) {
        if !z.is_finite() {
            return;
        }
        let wrapped = z.rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        self.rotation.z = if wrapped >= TAU { 0.0 } else { wrapped };
    }

    /// Drag gesture in screen units: horizontal turns about Y, vertical about X
    pub fn drag(&mut self, dx: f32, dy: f32) {
        if !(dx.is_finite() && dy.is_finite()) {
            return;
        }
        let x = (self.rotation.x.to_degrees() + dy * DRAG_SENSITIVITY) % 360.0;
        let y = (self.rotation.y.to_degrees() + dx * DRAG_SENSITIVITY) % 360.0;
        self.rotation.x = x.to_radians();
        self.rotation.y = y.to_radians();
    }

    /// Clamp into the limits; non-finite distances are ignored
    pub fn set_distance(&mut self, distance: f32) {
        if !distance.is_finite() {
            return;
        }
        self.distance = self.limits.clamp(distance);
    }

    pub fn zoom_by(&mut self, delta: f32) {
        self.set_distance(self.distance + delta);
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from_config(&SceneConfig::default())
    }
}
