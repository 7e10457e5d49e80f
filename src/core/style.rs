use serde::{Deserialize, Serialize};

/// Nested stroke block emitted by the backend as `style.line`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeHint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
}

/// Kind-agnostic presentation hints attached to a plot element.
///
/// Every field is optional; the mapper resolves missing values against
/// `ViewConfig` defaults. Flat fields win over the nested `line` block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fillcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<StrokeHint>,
}

impl ElementStyle {
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn with_dash(mut self, dash: impl Into<String>) -> Self {
        self.dash = Some(dash.into());
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn with_fill_color(mut self, fill_color: impl Into<String>) -> Self {
        self.fillcolor = Some(fill_color.into());
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn stroke_color(&self) -> Option<&str> {
        self.color
            .as_deref()
            .or_else(|| self.line.as_ref().and_then(|line| line.color.as_deref()))
    }

    /// Stroke width, ignoring non-finite or non-positive hints.
    #[must_use]
    pub fn stroke_width(&self) -> Option<f64> {
        self.width
            .or_else(|| self.line.as_ref().and_then(|line| line.width))
            .filter(|width| width.is_finite() && *width > 0.0)
    }

    #[must_use]
    pub fn stroke_dash(&self) -> Option<&str> {
        self.dash
            .as_deref()
            .or_else(|| self.line.as_ref().and_then(|line| line.dash.as_deref()))
    }

    #[must_use]
    pub fn marker_size(&self) -> Option<f64> {
        self.size.filter(|size| size.is_finite() && *size > 0.0)
    }

    /// Opacity clamped to `[0, 1]`; non-finite hints are ignored.
    #[must_use]
    pub fn opacity(&self) -> Option<f64> {
        self.opacity
            .filter(|opacity| opacity.is_finite())
            .map(|opacity| opacity.clamp(0.0, 1.0))
    }
}
