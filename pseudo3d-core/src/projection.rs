/// Isometric projection with distance-based perspective correction
use std::f32::consts::FRAC_PI_6;

use serde::{Deserialize, Serialize};

use crate::geometry::Point3D;
use crate::transform::{rotate_point, RotationAxes, RotationState};

/// Half-angle of the isometric projection, kept in radians
pub const ISOMETRIC_ANGLE: f32 = FRAC_PI_6;

/// World units to screen units
pub const DEFAULT_SCALE: f32 = 32.0;

/// A screen-space offset relative to the canvas center
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Move the offset onto a surface whose center is `(cx, cy)`
    pub fn translate(self, cx: f32, cy: f32) -> Self {
        Self::new(self.x + cx, self.y + cy)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// How rotated points are flattened onto the plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    /// Fixed 30 degree isometric view
    #[default]
    Isometric,
    /// Front view: keep x and y, drop z
    Orthographic,
}

/// What to do when the viewer distance equals a point's projected depth
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SingularityPolicy {
    /// Let the division produce infinity or NaN
    #[default]
    Propagate,
    /// Bound the ratio to `[-max_ratio, max_ratio]`; NaN becomes 1
    Clamp { max_ratio: f32 },
}

impl SingularityPolicy {
    fn apply(self, ratio: f32) -> f32 {
        match self {
            SingularityPolicy::Propagate => ratio,
            SingularityPolicy::Clamp { max_ratio } => {
                if ratio.is_nan() {
                    1.0
                } else {
                    ratio.clamp(-max_ratio, max_ratio)
                }
            }
        }
    }
}

/// Configurable projection engine.
///
/// The default is the Z-rotating isometric projection with perspective
/// enabled, which is what [`project`] uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    pub axes: RotationAxes,
    pub mode: ProjectionMode,
    pub perspective: bool,
    pub scale: f32,
    pub singularity: SingularityPolicy,
}

impl Projector {
    /// Isometric projection without perspective
    pub fn isometric() -> Self {
        Self {
            perspective: false,
            ..Self::default()
        }
    }

    /// Perspective ratio for a projected depth
    pub fn ratio(&self, distance: f32, depth: f32) -> f32 {
        if !self.perspective || distance == 0.0 {
            return 1.0;
        }
        self.singularity.apply(distance / (distance - depth))
    }

    /// Project a world point to a screen offset
    pub fn project(&self, point: Point3D, rotation: &RotationState, distance: f32) -> Offset {
        let rotated = rotate_point(point, rotation, self.axes);

        let (x_proj, y_proj) = match self.mode {
            ProjectionMode::Isometric => {
                let (sin, cos) = ISOMETRIC_ANGLE.sin_cos();
                (
                    (rotated.x - rotated.y) * cos,
                    (rotated.x + rotated.y) * sin - rotated.z,
                )
            }
            ProjectionMode::Orthographic => (rotated.x, rotated.y),
        };

        let radio = self.ratio(distance, y_proj);

        Offset::new(x_proj * self.scale * radio, -(y_proj * self.scale * radio))
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self {
            axes: RotationAxes::Z_ONLY,
            mode: ProjectionMode::Isometric,
            perspective: true,
            scale: DEFAULT_SCALE,
            singularity: SingularityPolicy::Propagate,
        }
    }
}

/// Rotate about Z, project isometrically and apply perspective
pub fn project(point: Point3D, rotation_z: f32, distance: f32) -> Offset {
    Projector::default().project(point, &RotationState::about_z(rotation_z), distance)
}
