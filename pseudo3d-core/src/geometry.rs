/// Geometry primitives and the generators for axes and grid lines
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A point in world space
pub type Point3D = Point3<f32>;

/// The shared start point of every axis segment
pub fn zero() -> Point3D {
    Point3D::origin()
}

/// An ordered pair of points describing one line to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point3D,
    pub end: Point3D,
}

impl Segment {
    pub fn new(start: Point3D, end: Point3D) -> Self {
        Self { start, end }
    }

    pub fn from_origin(end: Point3D) -> Self {
        Self::new(zero(), end)
    }
}

/// One of the three world axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            Axis::X => Rgb::RED,
            Axis::Y => Rgb::GREEN,
            Axis::Z => Rgb::BLUE,
        }
    }

    pub fn unit(self) -> Vector3<f32> {
        match self {
            Axis::X => Vector3::x(),
            Axis::Y => Vector3::y(),
            Axis::Z => Vector3::z(),
        }
    }
}

/// Display color handed to the renderer, unused by the math
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const GRAY: Rgb = Rgb::new(136, 136, 136);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS color string, e.g. `#ff0000`
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Direction of the Z axis end point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZAxisSign {
    #[default]
    Up,
    Down,
}

impl ZAxisSign {
    fn factor(self) -> f32 {
        match self {
            ZAxisSign::Up => 1.0,
            ZAxisSign::Down => -1.0,
        }
    }
}

/// Length and orientation of the drawn axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub length: f32,
    pub z_sign: ZAxisSign,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            length: 5.0,
            z_sign: ZAxisSign::Up,
        }
    }
}

/// An axis segment together with the style the renderer needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSegment {
    pub axis: Axis,
    pub segment: Segment,
    pub color: Rgb,
    pub label: &'static str,
}

/// The X, Y and Z axis segments, in that order
pub fn axis_segments(config: &AxisConfig) -> [AxisSegment; 3] {
    Axis::ALL.map(|axis| {
        let mut length = config.length;
        if axis == Axis::Z {
            length *= config.z_sign.factor();
        }
        AxisSegment {
            axis,
            segment: Segment::from_origin(Point3D::from(axis.unit() * length)),
            color: axis.color(),
            label: axis.label(),
        }
    })
}

/// Plane a grid is laid out on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridPlane {
    XY,
    XZ,
    YZ,
}

/// Ground grid on the XY plane with unit spacing
pub fn grid_segments(half_extent: u32) -> Vec<Segment> {
    grid_segments_on(GridPlane::XY, half_extent, 1.0)
}

/// Grid of `2 * (2n + 1)` segments spanning `[-n * step, n * step]` on `plane`,
/// two segments per `i` in `-n..=n`.
pub fn grid_segments_on(plane: GridPlane, half_extent: u32, step: f32) -> Vec<Segment> {
    let n = half_extent as i64;
    let edge = n as f32 * step;
    let mut segments = Vec::with_capacity(2 * (2 * half_extent as usize + 1));

    for i in -n..=n {
        let at = i as f32 * step;
        let (a, b) = match plane {
            // X-parallel at y = i, then Y-parallel at x = i
            GridPlane::XY => (
                Segment::new(Point3D::new(-edge, at, 0.0), Point3D::new(edge, at, 0.0)),
                Segment::new(Point3D::new(at, -edge, 0.0), Point3D::new(at, edge, 0.0)),
            ),
            GridPlane::XZ => (
                Segment::new(Point3D::new(at, 0.0, -edge), Point3D::new(at, 0.0, edge)),
                Segment::new(Point3D::new(-edge, 0.0, at), Point3D::new(edge, 0.0, at)),
            ),
            GridPlane::YZ => (
                Segment::new(Point3D::new(0.0, at, -edge), Point3D::new(0.0, at, edge)),
                Segment::new(Point3D::new(0.0, -edge, at), Point3D::new(0.0, edge, at)),
            ),
        };
        segments.push(a);
        segments.push(b);
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_segments_default() {
        let axes = axis_segments(&AxisConfig::default());
        assert_eq!(axes.len(), 3);

        let labels: Vec<_> = axes.iter().map(|a| a.label).collect();
        assert_eq!(labels, ["X", "Y", "Z"]);
        assert_ne!(axes[0].color, axes[1].color);
        assert_ne!(axes[1].color, axes[2].color);
        assert_ne!(axes[0].color, axes[2].color);

        for axis in &axes {
            assert_eq!(axis.segment.start, zero());
            let end = axis.segment.end;
            let non_zero = [end.x, end.y, end.z].iter().filter(|c| **c != 0.0).count();
            assert_eq!(non_zero, 1);
        }
        assert_eq!(axes[0].segment.end, Point3D::new(5.0, 0.0, 0.0));
        assert_eq!(axes[1].segment.end, Point3D::new(0.0, 5.0, 0.0));
        assert_eq!(axes[2].segment.end, Point3D::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn test_axis_segments_z_down() {
        let config = AxisConfig {
            length: 5.0,
            z_sign: ZAxisSign::Down,
        };
        let axes = axis_segments(&config);
        assert_eq!(axes[2].segment.end, Point3D::new(0.0, 0.0, -5.0));
        assert_eq!(axes[0].segment.end, Point3D::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_grid_segment_count() {
        for n in [0, 1, 5, 32] {
            let grid = grid_segments(n);
            assert_eq!(grid.len(), 2 * (2 * n as usize + 1));
            assert!(grid.iter().all(|s| s.start.z == 0.0 && s.end.z == 0.0));
        }
    }

    #[test]
    fn test_grid_bounds() {
        let grid = grid_segments(5);
        let x_axis_line = Segment::new(Point3D::new(-5.0, 0.0, 0.0), Point3D::new(5.0, 0.0, 0.0));
        assert_eq!(grid.iter().filter(|s| **s == x_axis_line).count(), 1);

        for s in &grid {
            for p in [s.start, s.end] {
                assert!(p.x.abs() <= 5.0);
                assert!(p.y.abs() <= 5.0);
            }
        }
    }

    #[test]
    fn test_grid_order() {
        let grid = grid_segments(1);
        let corner = Point3D::new(-1.0, -1.0, 0.0);
        assert_eq!(grid[0], Segment::new(corner, Point3D::new(1.0, -1.0, 0.0)));
        assert_eq!(grid[1], Segment::new(corner, Point3D::new(-1.0, 1.0, 0.0)));
    }

    #[test]
    fn test_grid_zero_extent() {
        let grid = grid_segments(0);
        assert_eq!(grid.len(), 2);
        assert!(grid.iter().all(|s| s.start == zero() && s.end == zero()));
    }

    #[test]
    fn test_grid_planes_with_step() {
        let xz = grid_segments_on(GridPlane::XZ, 2, 0.5);
        assert_eq!(xz.len(), 10);
        assert!(xz.iter().all(|s| s.start.y == 0.0 && s.end.y == 0.0));
        assert!(xz.iter().all(|s| s.end.x.abs() <= 1.0 && s.end.z.abs() <= 1.0));

        let yz = grid_segments_on(GridPlane::YZ, 2, 1.0);
        assert!(yz.iter().all(|s| s.start.x == 0.0 && s.end.x == 0.0));
    }

    #[test]
    fn test_rgb_css() {
        assert_eq!(Rgb::RED.to_css(), "#ff0000");
        assert_eq!(Rgb::GRAY.to_css(), "#888888");
    }
}
