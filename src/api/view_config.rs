use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::expr::{DEFAULT_SAMPLE_COUNT, MIN_SAMPLE_COUNT};
use crate::render::CameraEye;

/// Presentation defaults and cache sizing for a `GraphView`.
///
/// This type is serializable so host applications can persist/load view setup
/// next to their own settings. Every field has a default, so `{}` is a valid
/// config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
    #[serde(default = "default_circle_segments")]
    pub circle_segments: usize,
    #[serde(default = "default_color")]
    pub default_color: String,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default = "default_point_marker_size")]
    pub point_marker_size: f64,
    #[serde(default = "default_scatter_marker_size")]
    pub scatter_marker_size: f64,
    #[serde(default = "default_polygon_fill_color")]
    pub polygon_fill_color: String,
    #[serde(default = "default_area_fill_color")]
    pub area_fill_color: String,
    #[serde(default = "default_surface_colorscale")]
    pub surface_colorscale: String,
    #[serde(default = "default_camera_eye")]
    pub camera_eye: CameraEye,
    #[serde(default = "default_placeholder_text")]
    pub placeholder_text: String,
    #[serde(default = "default_scene_cache_capacity")]
    pub scene_cache_capacity: usize,
    #[serde(default = "default_sample_cache_capacity")]
    pub sample_cache_capacity: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            sample_count: default_sample_count(),
            circle_segments: default_circle_segments(),
            default_color: default_color(),
            line_width: default_line_width(),
            point_marker_size: default_point_marker_size(),
            scatter_marker_size: default_scatter_marker_size(),
            polygon_fill_color: default_polygon_fill_color(),
            area_fill_color: default_area_fill_color(),
            surface_colorscale: default_surface_colorscale(),
            camera_eye: default_camera_eye(),
            placeholder_text: default_placeholder_text(),
            scene_cache_capacity: default_scene_cache_capacity(),
            sample_cache_capacity: default_sample_cache_capacity(),
        }
    }
}

impl ViewConfig {
    /// Sets the number of samples taken per function in a static graph.
    #[must_use]
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Sets the number of vertices used to approximate a circle.
    #[must_use]
    pub fn with_circle_segments(mut self, circle_segments: usize) -> Self {
        self.circle_segments = circle_segments;
        self
    }

    #[must_use]
    pub fn with_default_color(mut self, color: impl Into<String>) -> Self {
        self.default_color = color.into();
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    /// Sets marker sizes for `point`/`points` and `scatter` elements.
    #[must_use]
    pub fn with_marker_sizes(mut self, point: f64, scatter: f64) -> Self {
        self.point_marker_size = point;
        self.scatter_marker_size = scatter;
        self
    }

    #[must_use]
    pub fn with_surface_colorscale(mut self, colorscale: impl Into<String>) -> Self {
        self.surface_colorscale = colorscale.into();
        self
    }

    #[must_use]
    pub fn with_camera_eye(mut self, eye: CameraEye) -> Self {
        self.camera_eye = eye;
        self
    }

    #[must_use]
    pub fn with_placeholder_text(mut self, text: impl Into<String>) -> Self {
        self.placeholder_text = text.into();
        self
    }

    /// Sets the bounds of the scene cache and the sampled-series cache.
    #[must_use]
    pub fn with_cache_capacities(mut self, scenes: usize, samples: usize) -> Self {
        self.scene_cache_capacity = scenes;
        self.sample_cache_capacity = samples;
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.sample_count < MIN_SAMPLE_COUNT {
            return Err(PlotError::InvalidConfig(format!(
                "sample_count must be >= {MIN_SAMPLE_COUNT}, got {}",
                self.sample_count
            )));
        }
        if self.circle_segments < 2 {
            return Err(PlotError::InvalidConfig(format!(
                "circle_segments must be >= 2, got {}",
                self.circle_segments
            )));
        }
        for (name, value) in [
            ("line_width", self.line_width),
            ("point_marker_size", self.point_marker_size),
            ("scatter_marker_size", self.scatter_marker_size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlotError::InvalidConfig(format!(
                    "{name} must be finite and > 0, got {value}"
                )));
            }
        }
        if !self.camera_eye.is_finite() {
            return Err(PlotError::InvalidConfig(
                "camera_eye components must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize view config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse view config: {e}")))
    }
}

fn default_sample_count() -> usize {
    DEFAULT_SAMPLE_COUNT
}

fn default_circle_segments() -> usize {
    100
}

fn default_color() -> String {
    "#3b82f6".to_owned()
}

fn default_line_width() -> f64 {
    2.0
}

fn default_point_marker_size() -> f64 {
    10.0
}

fn default_scatter_marker_size() -> f64 {
    6.0
}

fn default_polygon_fill_color() -> String {
    "rgba(59, 130, 246, 0.2)".to_owned()
}

fn default_area_fill_color() -> String {
    "rgba(59, 130, 246, 0.3)".to_owned()
}

fn default_surface_colorscale() -> String {
    "Viridis".to_owned()
}

fn default_camera_eye() -> CameraEye {
    CameraEye::new(1.5, 1.5, 1.5)
}

fn default_placeholder_text() -> String {
    "No data to display".to_owned()
}

fn default_scene_cache_capacity() -> usize {
    64
}

fn default_sample_cache_capacity() -> usize {
    256
}
