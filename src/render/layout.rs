use serde::{Deserialize, Serialize};

use crate::core::AxisRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendOrientation {
    #[serde(rename = "h")]
    Horizontal,
    #[serde(rename = "v")]
    Vertical,
}

/// Legend placement in paper coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub orientation: LegendOrientation,
    pub x: f64,
    pub xanchor: String,
    pub y: f64,
    pub yanchor: String,
}

impl Legend {
    /// Horizontal strip sitting just above the plot area.
    #[must_use]
    pub fn horizontal_top() -> Self {
        Self {
            orientation: LegendOrientation::Horizontal,
            x: 0.0,
            xanchor: "left".to_owned(),
            y: 1.02,
            yanchor: "bottom".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            l: 48,
            r: 24,
            t: 48,
            b: 40,
        }
    }
}

/// Planar axis descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis2d {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub visible: bool,
    pub zeroline: bool,
    pub zerolinecolor: String,
    pub zerolinewidth: f64,
    pub showgrid: bool,
    pub gridcolor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<AxisRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaleanchor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaleratio: Option<f64>,
}

impl Axis2d {
    /// Visible axis with emphasized zero line and light grid.
    #[must_use]
    pub fn cartesian(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            visible: true,
            zeroline: true,
            zerolinecolor: "#64748b".to_owned(),
            zerolinewidth: 1.5,
            showgrid: true,
            gridcolor: "#e5e7eb".to_owned(),
            range: None,
            scaleanchor: None,
            scaleratio: None,
        }
    }

    /// Axis with no ticks, grid or zero line.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            title: None,
            visible: false,
            zeroline: false,
            showgrid: false,
            ..Self::cartesian("")
        }
    }

    #[must_use]
    pub fn with_range(mut self, range: AxisRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Locks this axis' unit length to `ratio` times the anchor axis' unit.
    #[must_use]
    pub fn anchored_to(mut self, anchor: impl Into<String>, ratio: f64) -> Self {
        self.scaleanchor = Some(anchor.into());
        self.scaleratio = Some(ratio);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis3d {
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectMode {
    Auto,
    Cube,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraEye {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CameraEye {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub eye: CameraEye,
}

/// Spatial scene descriptor used in place of the planar axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene3d {
    pub xaxis: Axis3d,
    pub yaxis: Axis3d,
    pub zaxis: Axis3d,
    pub aspectmode: AspectMode,
    pub camera: Camera,
}

/// Free text pinned in paper coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub text: String,
    pub xref: String,
    pub yref: String,
    pub x: f64,
    pub y: f64,
    pub showarrow: bool,
}

impl Annotation {
    #[must_use]
    pub fn centered(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            xref: "paper".to_owned(),
            yref: "paper".to_owned(),
            x: 0.5,
            y: 0.5,
            showarrow: false,
        }
    }
}

/// Axis, legend and camera configuration for one scene.
///
/// Exactly one of the planar pair (`xaxis`, `yaxis`) or `scene` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub showlegend: bool,
    pub legend: Legend,
    #[serde(default)]
    pub margin: Margin,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis2d>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis2d>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<Scene3d>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

impl Layout {
    #[must_use]
    pub fn is_3d(&self) -> bool {
        self.scene.is_some()
    }

    /// `true` when the layout carries an empty-state placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        !self.annotations.is_empty()
    }
}
