/// Rotation state and the fixed-order axis rotations
use serde::{Deserialize, Serialize};

use crate::geometry::Point3D;

/// Rotation state around three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Rotation about the vertical axis only
    pub fn about_z(z: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z,
        }
    }

    /// Build from angles in degrees
    pub fn from_degrees(x: f32, y: f32, z: f32) -> Self {
        Self::new(x.to_radians(), y.to_radians(), z.to_radians())
    }
}

/// Subset of axes the engine rotates about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationAxes {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl RotationAxes {
    pub const NONE: RotationAxes = RotationAxes {
        x: false,
        y: false,
        z: false,
    };
    pub const Z_ONLY: RotationAxes = RotationAxes {
        x: false,
        y: false,
        z: true,
    };
    pub const ALL: RotationAxes = RotationAxes {
        x: true,
        y: true,
        z: true,
    };
}

impl Default for RotationAxes {
    fn default() -> Self {
        Self::Z_ONLY
    }
}

/// Apply the enabled rotations in the order X, Y, Z.
///
/// The depth produced by the Y rotation is dropped, so Z keeps the value it
/// had after the X rotation.
pub fn rotate_point(point: Point3D, rotation: &RotationState, axes: RotationAxes) -> Point3D {
    let (mut x, mut y, mut z) = (point.x, point.y, point.z);

    if axes.x {
        let (sin, cos) = rotation.x.sin_cos();
        let y1 = y * cos - z * sin;
        let z1 = y * sin + z * cos;
        y = y1;
        z = z1;
    }

    if axes.y {
        let (sin, cos) = rotation.y.sin_cos();
        x = x * cos + z * sin;
    }

    if axes.z {
        let (sin, cos) = rotation.z.sin_cos();
        let x3 = x * cos - y * sin;
        let y3 = x * sin + y * cos;
        x = x3;
        y = y3;
    }

    Point3D::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn close(a: Point3D, b: Point3D) -> bool {
        (a - b).norm() < 1e-5
    }

    #[test]
    fn test_about_z_leaves_historical_fields_zero() {
        let state = RotationState::about_z(0.3);
        assert_eq!(state, RotationState::new(0.0, 0.0, 0.3));
        assert_eq!(RotationState::zero(), RotationState::about_z(0.0));
    }

    #[test]
    fn test_from_degrees() {
        let state = RotationState::from_degrees(180.0, 90.0, 0.0);
        assert!((state.x - PI).abs() < 1e-6);
        assert!((state.y - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_identity_rotation() {
        let p = Point3D::new(1.0, 2.0, 3.0);
        assert_eq!(rotate_point(p, &RotationState::zero(), RotationAxes::ALL), p);
        assert_eq!(rotate_point(p, &RotationState::new(1.0, 2.0, 3.0), RotationAxes::NONE), p);
    }

    #[test]
    fn test_z_rotation_quarter_turn() {
        let p = Point3D::new(0.0, 5.0, 1.0);
        let rotated = rotate_point(p, &RotationState::about_z(FRAC_PI_2), RotationAxes::Z_ONLY);
        assert!(close(rotated, Point3D::new(-5.0, 0.0, 1.0)));
    }

    #[test]
    fn test_z_only_ignores_historical_fields() {
        let p = Point3D::new(1.0, 2.0, 3.0);
        let a = rotate_point(p, &RotationState::new(0.7, -1.3, 0.4), RotationAxes::Z_ONLY);
        let b = rotate_point(p, &RotationState::about_z(0.4), RotationAxes::Z_ONLY);
        assert_eq!(a, b);
    }

    #[test]
    fn test_x_then_y_rotation() {
        // X by 90 degrees sends +y to +z, then Y by 90 degrees folds z into x
        let p = Point3D::new(0.0, 1.0, 0.0);
        let axes = RotationAxes {
            x: true,
            y: true,
            z: false,
        };
        let rotated = rotate_point(p, &RotationState::new(FRAC_PI_2, FRAC_PI_2, 0.0), axes);
        assert!((rotated.x - 1.0).abs() < 1e-5);
        assert!(rotated.y.abs() < 1e-5);
        assert!((rotated.z - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_full_chain_matches_front_view_formula() {
        let config = SceneConfig::flat();
        let projector = config.projector();
        let rotation = RotationState::from_degrees(30.0, 45.0, 20.0);
        let (x, y, z) = (1.0_f32, 2.0_f32, 3.0_f32);

        // X, then Y on the post-X depth, then Z mixing post-Y x with post-X y
        let y1 = y * rotation.x.cos() - z * rotation.x.sin();
        let z1 = y * rotation.x.sin() + z * rotation.x.cos();
        let x2 = x * rotation.y.cos() + z1 * rotation.y.sin();
        let x3 = x2 * rotation.z.cos() - y1 * rotation.z.sin();
        let y3 = x2 * rotation.z.sin() + y1 * rotation.z.cos();

        let offset = projector.project(Point3D::new(x, y, z), &rotation, 50.0);
        assert!((offset.x - x3 * 40.0).abs() < 1e-4);
        assert!((offset.y + y3 * 40.0).abs() < 1e-4);
        assert!((offset.x - 119.035).abs() < 1e-2);
        assert!((offset.y + 53.203).abs() < 1e-2);

        // The depth after the Y rotation is dropped
        let rotated = rotate_point(Point3D::new(x, y, z), &rotation, RotationAxes::ALL);
        assert!((rotated.z - z1).abs() < 1e-5);
    }
}
