use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::core::{
    AreaData, CircleData, ElementKind, ElementStyle, Geometry, PathData, Point2, Point3,
    PointData, PointsData, PolygonData, SegmentData, SurfaceData, VectorData,
};
use crate::error::{PlotError, PlotResult};

/// One backend-agnostic geometric object to visualize.
///
/// On the wire this is `{ "kind": ..., "data": {...}, "style": {...} }`
/// (`type` is accepted in place of `kind`). Deserialization is lenient: the
/// payload is decoded against the kind and degrades to an empty geometry
/// when malformed, so one bad element never rejects its siblings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPlotElement", into = "RawPlotElement")]
pub struct PlotElement {
    pub geometry: Geometry,
    pub style: ElementStyle,
}

#[derive(Serialize, Deserialize)]
struct RawPlotElement {
    #[serde(default, alias = "type")]
    kind: ElementKind,
    #[serde(default)]
    data: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    style: Value,
}

impl From<RawPlotElement> for PlotElement {
    fn from(raw: RawPlotElement) -> Self {
        let style = if raw.style.is_null() {
            ElementStyle::default()
        } else {
            serde_json::from_value(raw.style).unwrap_or_else(|err| {
                warn!(kind = %raw.kind, error = %err, "malformed plot element style; using defaults");
                ElementStyle::default()
            })
        };
        Self {
            geometry: Geometry::decode(&raw.kind, raw.data),
            style,
        }
    }
}

impl From<PlotElement> for RawPlotElement {
    fn from(element: PlotElement) -> Self {
        let style = if element.style == ElementStyle::default() {
            Value::Null
        } else {
            serde_json::to_value(&element.style).unwrap_or(Value::Null)
        };
        Self {
            kind: element.geometry.kind(),
            data: element.geometry.to_value(),
            style,
        }
    }
}

impl PlotElement {
    #[must_use]
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            style: ElementStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: ElementStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn kind(&self) -> ElementKind {
        self.geometry.kind()
    }

    #[must_use]
    pub fn curve(points: Vec<Point2>, label: impl Into<String>) -> Self {
        Self::new(Geometry::Curve(PathData {
            points,
            label: Some(label.into()),
        }))
    }

    #[must_use]
    pub fn scatter(points: Vec<Point2>, label: impl Into<String>) -> Self {
        Self::new(Geometry::Scatter(PathData {
            points,
            label: Some(label.into()),
        }))
    }

    #[must_use]
    pub fn point(coords: Point2, label: impl Into<String>) -> Self {
        Self::new(Geometry::Point(PointData {
            coords: Some(coords),
            label: Some(label.into()),
        }))
    }

    #[must_use]
    pub fn points(coords: Vec<Point2>, labels: Vec<String>) -> Self {
        Self::new(Geometry::Points(PointsData { coords, labels }))
    }

    #[must_use]
    pub fn line(from: Point2, to: Point2, label: impl Into<String>) -> Self {
        Self::new(Geometry::Line(SegmentData {
            from: Some(from),
            to: Some(to),
            label: Some(label.into()),
        }))
    }

    #[must_use]
    pub fn segment(from: Point2, to: Point2, label: impl Into<String>) -> Self {
        Self::new(Geometry::Segment(SegmentData {
            from: Some(from),
            to: Some(to),
            label: Some(label.into()),
        }))
    }

    #[must_use]
    pub fn circle(center: Point2, radius: f64, label: impl Into<String>) -> Self {
        Self::new(Geometry::Circle(CircleData {
            center,
            radius: Some(radius),
            label: Some(label.into()),
        }))
    }

    #[must_use]
    pub fn area(points: Vec<Point2>, baseline: f64) -> Self {
        Self::new(Geometry::Area(AreaData {
            points,
            baseline,
            label: None,
        }))
    }

    #[must_use]
    pub fn polygon(vertices: Vec<Point2>, label: impl Into<String>) -> Self {
        Self::new(Geometry::Polygon(PolygonData {
            vertices,
            label: Some(label.into()),
        }))
    }

    #[must_use]
    pub fn surface(x: Vec<Vec<f64>>, y: Vec<Vec<f64>>, z: Vec<Vec<f64>>) -> Self {
        Self::new(Geometry::Surface(SurfaceData {
            x,
            y,
            z,
            ..SurfaceData::default()
        }))
    }

    #[must_use]
    pub fn vector3d(start: Point3, end: Point3, label: impl Into<String>) -> Self {
        Self::new(Geometry::Vector3d(VectorData {
            start: Some(start),
            end: Some(end),
            label: Some(label.into()),
        }))
    }

    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse plot element: {e}")))
    }

    pub fn list_from_json_str(input: &str) -> PlotResult<Vec<Self>> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse plot elements: {e}")))
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize plot element: {e}")))
    }
}
