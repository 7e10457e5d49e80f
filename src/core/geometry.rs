use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::core::{Point2, Point3};

/// Discriminator of a plot element.
///
/// The known set is closed. Anything else arriving from the wire is kept as
/// `Unknown` so it can be reported and skipped instead of rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ElementKind {
    Curve,
    Scatter,
    Point,
    Points,
    Line,
    Segment,
    Circle,
    Area,
    Polygon,
    Surface,
    Vector3d,
    Unknown(String),
}

impl ElementKind {
    pub const KNOWN: &'static [ElementKind] = &[
        ElementKind::Curve,
        ElementKind::Scatter,
        ElementKind::Point,
        ElementKind::Points,
        ElementKind::Line,
        ElementKind::Segment,
        ElementKind::Circle,
        ElementKind::Area,
        ElementKind::Polygon,
        ElementKind::Surface,
        ElementKind::Vector3d,
    ];

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "curve" => Self::Curve,
            "scatter" => Self::Scatter,
            "point" => Self::Point,
            "points" => Self::Points,
            "line" => Self::Line,
            "segment" => Self::Segment,
            "circle" => Self::Circle,
            "area" => Self::Area,
            "polygon" => Self::Polygon,
            "surface" => Self::Surface,
            "vector3d" | "vector_3d" => Self::Vector3d,
            other => Self::Unknown(other.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Curve => "curve",
            Self::Scatter => "scatter",
            Self::Point => "point",
            Self::Points => "points",
            Self::Line => "line",
            Self::Segment => "segment",
            Self::Circle => "circle",
            Self::Area => "area",
            Self::Polygon => "polygon",
            Self::Surface => "surface",
            Self::Vector3d => "vector3d",
            Self::Unknown(raw) => raw,
        }
    }

    #[must_use]
    pub fn is_3d(&self) -> bool {
        matches!(self, Self::Surface | Self::Vector3d)
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl Default for ElementKind {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl From<String> for ElementKind {
    fn from(raw: String) -> Self {
        match Self::parse(&raw) {
            Self::Unknown(_) => Self::Unknown(raw),
            known => known,
        }
    }
}

impl From<ElementKind> for String {
    fn from(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Unknown(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered 2-D path used by `curve` and `scatter`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathData {
    pub points: Vec<Point2>,
    #[serde(
        deserialize_with = "deserialize_optional_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PointData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coords: Option<Point2>,
    #[serde(
        deserialize_with = "deserialize_optional_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<String>,
}

/// Marker set with an optional parallel label array.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PointsData {
    pub coords: Vec<Point2>,
    #[serde(
        deserialize_with = "deserialize_optional_field",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub labels: Vec<String>,
}

/// Two-point geometry shared by `line` and `segment`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Point2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Point2>,
    #[serde(
        deserialize_with = "deserialize_optional_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<String>,
}

/// Circle geometry. A missing center means the origin.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleData {
    pub center: Point2,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(
        deserialize_with = "deserialize_optional_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<String>,
}

/// Region between a path and a horizontal baseline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaData {
    pub points: Vec<Point2>,
    #[serde(deserialize_with = "deserialize_optional_field")]
    pub baseline: f64,
    #[serde(
        deserialize_with = "deserialize_optional_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PolygonData {
    pub vertices: Vec<Point2>,
    #[serde(
        deserialize_with = "deserialize_optional_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<String>,
}

/// Parametric surface sampled on a grid: `x[i][j], y[i][j], z[i][j]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceData {
    pub x: Vec<Vec<f64>>,
    pub y: Vec<Vec<f64>>,
    pub z: Vec<Vec<f64>>,
    #[serde(
        deserialize_with = "deserialize_optional_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub colorscale: Option<String>,
    #[serde(
        deserialize_with = "deserialize_optional_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub opacity: Option<f64>,
    #[serde(
        deserialize_with = "deserialize_optional_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<Point3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<Point3>,
    #[serde(
        deserialize_with = "deserialize_optional_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<String>,
}

/// Typed geometry payload, one variant per element kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Curve(PathData),
    Scatter(PathData),
    Point(PointData),
    Points(PointsData),
    Line(SegmentData),
    Segment(SegmentData),
    Circle(CircleData),
    Area(AreaData),
    Polygon(PolygonData),
    Surface(SurfaceData),
    Vector3d(VectorData),
    Unknown { kind: String, data: Value },
}

impl Geometry {
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Curve(_) => ElementKind::Curve,
            Self::Scatter(_) => ElementKind::Scatter,
            Self::Point(_) => ElementKind::Point,
            Self::Points(_) => ElementKind::Points,
            Self::Line(_) => ElementKind::Line,
            Self::Segment(_) => ElementKind::Segment,
            Self::Circle(_) => ElementKind::Circle,
            Self::Area(_) => ElementKind::Area,
            Self::Polygon(_) => ElementKind::Polygon,
            Self::Surface(_) => ElementKind::Surface,
            Self::Vector3d(_) => ElementKind::Vector3d,
            Self::Unknown { kind, .. } => ElementKind::Unknown(kind.clone()),
        }
    }

    /// Decodes a raw wire payload for `kind`.
    ///
    /// Never fails: a missing or malformed payload degrades to the kind's
    /// empty geometry and is reported through `tracing`.
    #[must_use]
    pub fn decode(kind: &ElementKind, data: Value) -> Self {
        match kind {
            ElementKind::Curve => Self::Curve(decode_payload(kind, data)),
            ElementKind::Scatter => Self::Scatter(decode_payload(kind, data)),
            ElementKind::Point => Self::Point(decode_payload(kind, data)),
            ElementKind::Points => Self::Points(decode_payload(kind, data)),
            ElementKind::Line => Self::Line(decode_payload(kind, data)),
            ElementKind::Segment => Self::Segment(decode_payload(kind, data)),
            ElementKind::Circle => Self::Circle(decode_payload(kind, data)),
            ElementKind::Area => Self::Area(decode_payload(kind, data)),
            ElementKind::Polygon => Self::Polygon(decode_payload(kind, data)),
            ElementKind::Surface => Self::Surface(decode_payload(kind, data)),
            ElementKind::Vector3d => Self::Vector3d(decode_payload(kind, data)),
            ElementKind::Unknown(raw) => Self::Unknown {
                kind: raw.clone(),
                data,
            },
        }
    }

    /// Encodes the payload back into its wire shape.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let encoded = match self {
            Self::Curve(data) | Self::Scatter(data) => serde_json::to_value(data),
            Self::Point(data) => serde_json::to_value(data),
            Self::Points(data) => serde_json::to_value(data),
            Self::Line(data) | Self::Segment(data) => serde_json::to_value(data),
            Self::Circle(data) => serde_json::to_value(data),
            Self::Area(data) => serde_json::to_value(data),
            Self::Polygon(data) => serde_json::to_value(data),
            Self::Surface(data) => serde_json::to_value(data),
            Self::Vector3d(data) => serde_json::to_value(data),
            Self::Unknown { data, .. } => return data.clone(),
        };
        encoded.unwrap_or(Value::Null)
    }
}

fn decode_payload<T>(kind: &ElementKind, data: Value) -> T
where
    T: DeserializeOwned + Default,
{
    if data.is_null() {
        warn!(%kind, "plot element has no data payload; using empty geometry");
        return T::default();
    }
    serde_json::from_value(data).unwrap_or_else(|err| {
        warn!(%kind, error = %err, "malformed plot element data; using empty geometry");
        T::default()
    })
}

/// Decodes an optional sub-field on its own, so `null` or a value of the
/// wrong type falls back to the field default without touching the rest of
/// the geometry.
fn deserialize_optional_field<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let raw = Value::deserialize(deserializer)?;
    if raw.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(raw).unwrap_or_else(|err| {
        warn!(error = %err, "ignoring malformed optional plot element field");
        T::default()
    }))
}
