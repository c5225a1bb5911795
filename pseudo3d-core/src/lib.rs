/// Pseudo3D Core Library - projection math and scene geometry
///
/// This library provides the stateless core for drawing a rotating set of
/// coordinate axes and a ground grid on a 2D surface: the geometry
/// generators, the rotation and isometric projection with perspective
/// correction, and the scene configuration that ties them together.

pub mod config;
pub mod error;
pub mod geometry;
pub mod projection;
pub mod scene;
pub mod transform;
pub mod view;

// Re-export commonly used types
pub use config::{DistanceRange, SceneConfig};
pub use error::{Error, Result};
pub use geometry::{
    axis_segments, grid_segments, grid_segments_on, Axis, AxisConfig, AxisSegment, GridPlane,
    Point3D, Rgb, Segment, ZAxisSign,
};
pub use projection::{project, Offset, ProjectionMode, Projector, SingularityPolicy};
pub use scene::{LineStyle, Scene, ScreenLine};
pub use transform::{RotationAxes, RotationState};
pub use view::ViewState;
