use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Drawing mode of a scatter-like trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceMode {
    #[serde(rename = "lines")]
    Lines,
    #[serde(rename = "markers")]
    Markers,
    #[serde(rename = "markers+text")]
    MarkersText,
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

impl TraceMode {
    #[must_use]
    pub fn has_markers(self) -> bool {
        !matches!(self, Self::Lines)
    }
}

/// How the area under or inside a trace is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    #[default]
    None,
    /// Down (or up) to `y = 0`.
    ToZeroY,
    /// Down (or up) to the previous trace.
    ToNextY,
    /// Inside the trace's own closed path.
    ToSelf,
}

impl FillMode {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
}

impl LineStyle {
    #[must_use]
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
            dash: None,
        }
    }

    #[must_use]
    pub fn with_dash(mut self, dash: Option<String>) -> Self {
        self.dash = dash;
        self
    }

    fn validate(&self) -> PlotResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(PlotError::InvalidData(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub color: String,
    pub size: f64,
}

impl MarkerStyle {
    #[must_use]
    pub fn new(color: impl Into<String>, size: f64) -> Self {
        Self {
            color: color.into(),
            size,
        }
    }

    fn validate(&self) -> PlotResult<()> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(PlotError::InvalidData(
                "marker size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Planar trace: polyline, marker set, or filled region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterTrace {
    pub name: String,
    pub mode: TraceMode,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub textposition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerStyle>,
    #[serde(default, skip_serializing_if = "FillMode::is_none")]
    pub fill: FillMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fillcolor: Option<String>,
    #[serde(default = "default_show_legend")]
    pub showlegend: bool,
}

impl ScatterTrace {
    #[must_use]
    pub fn new(name: impl Into<String>, mode: TraceMode) -> Self {
        Self {
            name: name.into(),
            mode,
            x: Vec::new(),
            y: Vec::new(),
            text: Vec::new(),
            textposition: None,
            line: None,
            marker: None,
            fill: FillMode::None,
            fillcolor: None,
            showlegend: true,
        }
    }

    #[must_use]
    pub fn with_coords(mut self, x: Vec<f64>, y: Vec<f64>) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: Vec<String>, position: impl Into<String>) -> Self {
        self.text = text;
        self.textposition = Some(position.into());
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LineStyle) -> Self {
        self.line = Some(line);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: MarkerStyle) -> Self {
        self.marker = Some(marker);
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: FillMode, fillcolor: impl Into<String>) -> Self {
        self.fill = fill;
        self.fillcolor = Some(fillcolor.into());
        self
    }

    #[must_use]
    pub fn hidden_from_legend(mut self) -> Self {
        self.showlegend = false;
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.x.len() != self.y.len() {
            return Err(PlotError::InvalidData(format!(
                "scatter trace `{}` has {} x values but {} y values",
                self.name,
                self.x.len(),
                self.y.len()
            )));
        }
        validate_text_len(&self.name, self.text.len(), self.x.len())?;
        validate_finite(&self.name, &[&self.x, &self.y])?;
        if let Some(line) = &self.line {
            line.validate()?;
        }
        if let Some(marker) = &self.marker {
            marker.validate()?;
        }
        Ok(())
    }
}

/// Spatial polyline or marker set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scatter3dTrace {
    pub name: String,
    pub mode: TraceMode,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerStyle>,
}

impl Scatter3dTrace {
    pub fn validate(&self) -> PlotResult<()> {
        if self.x.len() != self.y.len() || self.x.len() != self.z.len() {
            return Err(PlotError::InvalidData(format!(
                "scatter3d trace `{}` coordinate arrays differ in length ({}, {}, {})",
                self.name,
                self.x.len(),
                self.y.len(),
                self.z.len()
            )));
        }
        validate_text_len(&self.name, self.text.len(), self.x.len())?;
        validate_finite(&self.name, &[&self.x, &self.y, &self.z])?;
        if let Some(line) = &self.line {
            line.validate()?;
        }
        if let Some(marker) = &self.marker {
            marker.validate()?;
        }
        Ok(())
    }
}

/// Gridded surface. Non-finite grid cells are left to the renderer as holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceTrace {
    pub name: String,
    pub x: Vec<Vec<f64>>,
    pub y: Vec<Vec<f64>>,
    pub z: Vec<Vec<f64>>,
    pub colorscale: String,
    pub opacity: f64,
    #[serde(default)]
    pub showscale: bool,
}

impl SurfaceTrace {
    /// `(rows, columns)` of the `z` grid.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.z.len(), self.z.first().map_or(0, Vec::len))
    }

    pub fn validate(&self) -> PlotResult<()> {
        let (rows, columns) = self.shape();
        for (axis, grid) in [("x", &self.x), ("y", &self.y), ("z", &self.z)] {
            if grid.len() != rows || grid.iter().any(|row| row.len() != columns) {
                return Err(PlotError::InvalidData(format!(
                    "surface `{}` grid `{axis}` does not match the {rows}x{columns} z grid",
                    self.name
                )));
            }
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(PlotError::InvalidData(format!(
                "surface `{}` opacity must be finite and in [0, 1]",
                self.name
            )));
        }
        Ok(())
    }
}

/// Renderer-native trace produced by the element mapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Primitive {
    Scatter(ScatterTrace),
    Scatter3d(Scatter3dTrace),
    Surface(SurfaceTrace),
}

impl Primitive {
    #[must_use]
    pub fn is_3d(&self) -> bool {
        matches!(self, Self::Scatter3d(_) | Self::Surface(_))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scatter(trace) => &trace.name,
            Self::Scatter3d(trace) => &trace.name,
            Self::Surface(trace) => &trace.name,
        }
    }

    pub fn validate(&self) -> PlotResult<()> {
        match self {
            Self::Scatter(trace) => trace.validate(),
            Self::Scatter3d(trace) => trace.validate(),
            Self::Surface(trace) => trace.validate(),
        }
    }
}

impl From<ScatterTrace> for Primitive {
    fn from(trace: ScatterTrace) -> Self {
        Self::Scatter(trace)
    }
}

impl From<Scatter3dTrace> for Primitive {
    fn from(trace: Scatter3dTrace) -> Self {
        Self::Scatter3d(trace)
    }
}

impl From<SurfaceTrace> for Primitive {
    fn from(trace: SurfaceTrace) -> Self {
        Self::Surface(trace)
    }
}

fn default_show_legend() -> bool {
    true
}

fn validate_text_len(name: &str, text_len: usize, point_len: usize) -> PlotResult<()> {
    if text_len != 0 && text_len != point_len {
        return Err(PlotError::InvalidData(format!(
            "trace `{name}` has {text_len} labels for {point_len} points"
        )));
    }
    Ok(())
}

fn validate_finite(name: &str, arrays: &[&Vec<f64>]) -> PlotResult<()> {
    if arrays.iter().any(|values| values.iter().any(|v| !v.is_finite())) {
        return Err(PlotError::InvalidData(format!(
            "trace `{name}` coordinates must be finite"
        )));
    }
    Ok(())
}
