pub mod computation;
pub mod element;
pub mod geometry;
pub mod graph_config;
pub mod style;
pub mod types;

pub use computation::{ComputationResult, ComputationStatus};
pub use element::PlotElement;
pub use geometry::{
    AreaData, CircleData, ElementKind, Geometry, PathData, PointData, PointsData, PolygonData,
    SegmentData, SurfaceData, VectorData,
};
pub use graph_config::{FunctionSpec, GraphConfig};
pub use style::{ElementStyle, StrokeHint};
pub use types::{AxisRange, Point2, Point3};
