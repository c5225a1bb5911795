/// Scene configuration, loadable from JSON
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::{AxisConfig, GridPlane, ZAxisSign};
use crate::projection::{ProjectionMode, Projector, SingularityPolicy, DEFAULT_SCALE};
use crate::transform::{RotationAxes, RotationState};

/// Upper bound on the grid segments a configuration may request
pub const MAX_GRID_SEGMENTS: u64 = 1 << 20;

/// Inclusive range the viewer distance is kept in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceRange {
    pub min: f32,
    pub max: f32,
}

impl DistanceRange {
    pub fn clamp(&self, distance: f32) -> f32 {
        distance.clamp(self.min, self.max)
    }
}

impl Default for DistanceRange {
    fn default() -> Self {
        Self {
            min: 18.0,
            max: 100.0,
        }
    }
}

/// Everything that differs between renderings of the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub scale: f32,
    pub mode: ProjectionMode,
    pub perspective: bool,
    pub rotation_axes: RotationAxes,
    pub singularity: SingularityPolicy,
    pub axis: AxisConfig,
    pub grid_half_extent: u32,
    pub grid_step: f32,
    /// Planes to draw a grid on; empty disables the grid
    pub grid_planes: Vec<GridPlane>,
    pub distance_range: DistanceRange,
    pub initial_distance: f32,
    pub initial_rotation: RotationState,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            mode: ProjectionMode::Isometric,
            perspective: true,
            rotation_axes: RotationAxes::Z_ONLY,
            singularity: SingularityPolicy::Propagate,
            axis: AxisConfig::default(),
            grid_half_extent: 5,
            grid_step: 1.0,
            grid_planes: vec![GridPlane::XY],
            distance_range: DistanceRange::default(),
            initial_distance: 50.0,
            initial_rotation: RotationState::zero(),
        }
    }
}

impl SceneConfig {
    /// Front-view preset: three rotation axes, no isometric tilt, no perspective
    pub fn flat() -> Self {
        Self {
            scale: 40.0,
            mode: ProjectionMode::Orthographic,
            perspective: false,
            rotation_axes: RotationAxes::ALL,
            axis: AxisConfig {
                length: 5.0,
                z_sign: ZAxisSign::Down,
            },
            grid_planes: vec![GridPlane::XY, GridPlane::XZ, GridPlane::YZ],
            initial_rotation: RotationState::from_degrees(30.0, 45.0, 0.0),
            ..Self::default()
        }
    }

    /// The larger ground grid variant
    pub fn wide_grid() -> Self {
        Self {
            grid_half_extent: 32,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading scene config from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale == 0.0 {
            return Err(Error::InvalidConfig(format!(
                "scale must be finite and non-zero, got {}",
                self.scale
            )));
        }
        if !self.grid_step.is_finite() || self.grid_step <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "grid_step must be positive, got {}",
                self.grid_step
            )));
        }
        let planes = self.grid_planes.len() as u64;
        let segments = 2 * (2 * u64::from(self.grid_half_extent) + 1) * planes;
        if segments > MAX_GRID_SEGMENTS {
            return Err(Error::InvalidConfig(format!(
                "grid of half extent {} on {} planes needs {} segments, limit is {}",
                self.grid_half_extent, planes, segments, MAX_GRID_SEGMENTS
            )));
        }
        if !self.axis.length.is_finite() {
            return Err(Error::InvalidConfig("axis length must be finite".to_string()));
        }
        let range = self.distance_range;
        if !range.min.is_finite() || !range.max.is_finite() || range.min > range.max {
            return Err(Error::InvalidConfig(format!(
                "distance range [{}, {}] is not a valid interval",
                range.min, range.max
            )));
        }
        if !self.initial_distance.is_finite() {
            return Err(Error::InvalidConfig("initial_distance must be finite".to_string()));
        }
        let rotation = self.initial_rotation;
        if !(rotation.x.is_finite() && rotation.y.is_finite() && rotation.z.is_finite()) {
            return Err(Error::InvalidConfig("initial_rotation must be finite".to_string()));
        }
        if let SingularityPolicy::Clamp { max_ratio } = self.singularity {
            if max_ratio.is_nan() || max_ratio <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "max_ratio must be positive, got {}",
                    max_ratio
                )));
            }
        }
        Ok(())
    }

    /// Projection engine described by this configuration
    pub fn projector(&self) -> Projector {
        Projector {
            axes: self.rotation_axes,
            mode: self.mode,
            perspective: self.perspective,
            scale: self.scale,
            singularity: self.singularity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SceneConfig::default().validate().is_ok());
        assert!(SceneConfig::flat().validate().is_ok());
        assert!(SceneConfig::wide_grid().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "grid_half_extent": 32, "axis": { "z_sign": "down" } }"#;
        let config = SceneConfig::from_json_str(json).unwrap();
        assert_eq!(config.grid_half_extent, 32);
        assert_eq!(config.axis.z_sign, ZAxisSign::Down);
        assert_eq!(config.axis.length, 5.0);
        assert_eq!(config.scale, DEFAULT_SCALE);
    }

    #[test]
    fn test_partial_distance_range() {
        let json = r#"{ "distance_range": { "max": 80.0 } }"#;
        let config = SceneConfig::from_json_str(json).unwrap();
        assert_eq!(config.distance_range.min, 18.0);
        assert_eq!(config.distance_range.max, 80.0);
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let result = SceneConfig::from_json_str(r#"{ "grid_half_extent": 4000000000 }"#);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));

        let three_planes = SceneConfig {
            grid_half_extent: 100_000,
            ..SceneConfig::flat()
        };
        assert!(three_planes.validate().is_err());

        let no_grid = SceneConfig {
            grid_half_extent: u32::MAX,
            grid_planes: Vec::new(),
            ..SceneConfig::default()
        };
        assert!(no_grid.validate().is_ok());
        let large = SceneConfig {
            grid_half_extent: 1000,
            ..SceneConfig::default()
        };
        assert!(large.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_finite_initial_view() {
        let config = SceneConfig {
            initial_distance: f32::INFINITY,
            ..SceneConfig::default()
        };
        assert!(config.validate().is_err());

        let config = SceneConfig {
            initial_rotation: RotationState::new(f32::NAN, 0.0, 0.0),
            ..SceneConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = SceneConfig {
            singularity: SingularityPolicy::Clamp { max_ratio: 8.0 },
            ..SceneConfig::flat()
        };
        let json = config.to_json().unwrap();
        assert_eq!(SceneConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let bad_range = r#"{ "distance_range": { "min": 100.0, "max": 18.0 } }"#;
        let result = SceneConfig::from_json_str(bad_range);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));

        let result = SceneConfig::from_json_str(r#"{ "grid_step": 0.0 }"#);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));

        let bad_scale = SceneConfig {
            scale: f32::NAN,
            ..SceneConfig::default()
        };
        assert!(bad_scale.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(SceneConfig::from_json_str("{ scale: "), Err(Error::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = SceneConfig::load("/nonexistent/pseudo3d.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_projector_from_config() {
        let projector = SceneConfig::flat().projector();
        assert_eq!(projector.mode, ProjectionMode::Orthographic);
        assert!(!projector.perspective);
        assert_eq!(projector.scale, 40.0);
        assert_eq!(SceneConfig::default().projector(), Projector::default());
    }
}
