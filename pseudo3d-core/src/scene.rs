/// Cached scene geometry and its per-frame projection
use crate::config::SceneConfig;
use crate::geometry::{axis_segments, grid_segments_on, Axis, AxisSegment, Rgb, Segment};
use crate::projection::{Offset, Projector};
use crate::view::ViewState;

/// How a projected line should be stroked
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineStyle {
    Grid,
    Axis { axis: Axis, color: Rgb, label: &'static str },
}

impl LineStyle {
    pub fn color(&self) -> Rgb {
        match self {
            LineStyle::Grid => Rgb::GRAY,
            LineStyle::Axis { color, .. } => *color,
        }
    }
}

/// A line in screen offsets, ready to translate and stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenLine {
    pub start: Offset,
    pub end: Offset,
    pub style: LineStyle,
}

/// The axes and grid for one configuration, built once and reused every frame
#[derive(Debug, Clone)]
pub struct Scene {
    pub grid: Vec<Segment>,
    pub axes: [AxisSegment; 3],
}

impl Scene {
    pub fn new(config: &SceneConfig) -> Self {
        let grid: Vec<Segment> = config
            .grid_planes
            .iter()
            .flat_map(|plane| grid_segments_on(*plane, config.grid_half_extent, config.grid_step))
            .collect();
        log::debug!(
            "Built scene with {} grid segments on {:?}",
            grid.len(),
            config.grid_planes
        );

        Self {
            grid,
            axes: axis_segments(&config.axis),
        }
    }

    pub fn line_count(&self) -> usize {
        self.grid.len() + self.axes.len()
    }

    /// Project every segment, grid first so axes are drawn on top
    pub fn project(&self, projector: &Projector, view: &ViewState) -> Vec<ScreenLine> {
        let mut lines = Vec::with_capacity(self.line_count());
        let project = |segment: &Segment| {
            (
                projector.project(segment.start, &view.rotation, view.distance),
                projector.project(segment.end, &view.rotation, view.distance),
            )
        };

        for segment in &self.grid {
            let (start, end) = project(segment);
            lines.push(ScreenLine {
                start,
                end,
                style: LineStyle::Grid,
            });
        }

        for axis in &self.axes {
            let (start, end) = project(&axis.segment);
            lines.push(ScreenLine {
                start,
                end,
                style: LineStyle::Axis {
                    axis: axis.axis,
                    color: axis.color,
                    label: axis.label,
                },
            });
        }

        lines
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(&SceneConfig::default())
    }
}
