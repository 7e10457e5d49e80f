use std::f64::consts::TAU;

use smallvec::{SmallVec, smallvec};
use tracing::{trace, warn};

use crate::core::{
    AreaData, CircleData, ElementStyle, Geometry, PathData, PlotElement, Point2, PointData,
    PointsData, PolygonData, SegmentData, SurfaceData, VectorData,
};
use crate::render::{
    FillMode, LineStyle, MarkerStyle, Primitive, Scatter3dTrace, ScatterTrace, SurfaceTrace,
    TraceMode,
};

use super::ViewConfig;

/// Output of mapping one element. Almost always a single trace; shaded
/// areas over a non-zero baseline need two.
pub type Primitives = SmallVec<[Primitive; 2]>;

const POINT_TEXT_POSITION: &str = "top center";

/// Maps one plot element to the primitives that draw it.
///
/// Returns `None` for an element of unknown kind; that miss is logged and
/// never fatal. Non-finite coordinates are dropped from the output.
#[must_use]
pub fn map_element(element: &PlotElement, config: &ViewConfig) -> Option<Primitives> {
    trace!(kind = %element.kind(), "map plot element");
    let style = &element.style;
    let primitives = match &element.geometry {
        Geometry::Curve(data) => smallvec![map_curve(data, style, config)],
        Geometry::Scatter(data) => smallvec![map_scatter(data, style, config)],
        Geometry::Point(data) => smallvec![map_point(data, style, config)],
        Geometry::Points(data) => smallvec![map_points(data, style, config)],
        Geometry::Line(data) | Geometry::Segment(data) => {
            smallvec![map_segment(data, style, config)]
        }
        Geometry::Circle(data) => smallvec![map_circle(data, style, config)],
        Geometry::Area(data) => map_area(data, style, config),
        Geometry::Polygon(data) => smallvec![map_polygon(data, style, config)],
        Geometry::Surface(data) => smallvec![map_surface(data, style, config)],
        Geometry::Vector3d(data) => smallvec![map_vector(data, style, config)],
        Geometry::Unknown { kind, .. } => {
            warn!(kind = %kind, "unknown plot element kind; element skipped");
            return None;
        }
    };
    Some(primitives)
}

/// Maps a whole element list in order, skipping elements of unknown kind.
#[must_use]
pub fn map_elements(elements: &[PlotElement], config: &ViewConfig) -> Vec<Primitive> {
    let mut primitives = Vec::with_capacity(elements.len());
    for element in elements {
        if let Some(mapped) = map_element(element, config) {
            primitives.extend(mapped);
        }
    }
    primitives
}

fn label_or_empty(label: Option<&String>) -> String {
    label.cloned().unwrap_or_default()
}

fn color(style: &ElementStyle, config: &ViewConfig) -> String {
    style
        .stroke_color()
        .unwrap_or(config.default_color.as_str())
        .to_owned()
}

fn line_style(style: &ElementStyle, config: &ViewConfig) -> LineStyle {
    LineStyle::new(
        color(style, config),
        style.stroke_width().unwrap_or(config.line_width),
    )
    .with_dash(style.stroke_dash().map(str::to_owned))
}

fn split_finite(points: impl IntoIterator<Item = Point2>) -> (Vec<f64>, Vec<f64>) {
    points
        .into_iter()
        .filter(|point| point.is_finite())
        .map(|point| (point.x, point.y))
        .unzip()
}

fn map_curve(data: &PathData, style: &ElementStyle, config: &ViewConfig) -> Primitive {
    let (x, y) = split_finite(data.points.iter().copied());
    ScatterTrace::new(label_or_empty(data.label.as_ref()), TraceMode::Lines)
        .with_coords(x, y)
        .with_line(line_style(style, config))
        .into()
}

fn map_scatter(data: &PathData, style: &ElementStyle, config: &ViewConfig) -> Primitive {
    let (x, y) = split_finite(data.points.iter().copied());
    let size = style.marker_size().unwrap_or(config.scatter_marker_size);
    ScatterTrace::new(label_or_empty(data.label.as_ref()), TraceMode::Markers)
        .with_coords(x, y)
        .with_marker(MarkerStyle::new(color(style, config), size))
        .into()
}

fn map_point(data: &PointData, style: &ElementStyle, config: &ViewConfig) -> Primitive {
    let label = label_or_empty(data.label.as_ref());
    let size = style.marker_size().unwrap_or(config.point_marker_size);
    let trace = ScatterTrace::new(label.clone(), TraceMode::MarkersText)
        .with_marker(MarkerStyle::new(color(style, config), size));
    match data.coords.filter(|coords| coords.is_finite()) {
        Some(coords) => trace
            .with_coords(vec![coords.x], vec![coords.y])
            .with_text(vec![label], POINT_TEXT_POSITION)
            .into(),
        None => trace.into(),
    }
}

fn map_points(data: &PointsData, style: &ElementStyle, config: &ViewConfig) -> Primitive {
    if !data.labels.is_empty() && data.labels.len() != data.coords.len() {
        warn!(
            points = data.coords.len(),
            labels = data.labels.len(),
            "points label count does not match coordinate count; padding or truncating"
        );
    }

    let with_labels = !data.labels.is_empty();
    let mut x = Vec::with_capacity(data.coords.len());
    let mut y = Vec::with_capacity(data.coords.len());
    let mut text = Vec::new();
    for (index, coords) in data.coords.iter().enumerate() {
        if !coords.is_finite() {
            continue;
        }
        x.push(coords.x);
        y.push(coords.y);
        if with_labels {
            text.push(data.labels.get(index).cloned().unwrap_or_default());
        }
    }

    let size = style.marker_size().unwrap_or(config.point_marker_size);
    let trace = ScatterTrace::new(style.title.clone().unwrap_or_default(), TraceMode::MarkersText)
        .with_coords(x, y)
        .with_marker(MarkerStyle::new(color(style, config), size));
    if with_labels {
        trace.with_text(text, POINT_TEXT_POSITION).into()
    } else {
        trace.into()
    }
}

fn map_segment(data: &SegmentData, style: &ElementStyle, config: &ViewConfig) -> Primitive {
    // A segment with one usable endpoint draws nothing.
    let (x, y) = match (data.from, data.to) {
        (Some(from), Some(to)) if from.is_finite() && to.is_finite() => {
            (vec![from.x, to.x], vec![from.y, to.y])
        }
        _ => (Vec::new(), Vec::new()),
    };
    ScatterTrace::new(label_or_empty(data.label.as_ref()), TraceMode::Lines)
        .with_coords(x, y)
        .with_line(line_style(style, config))
        .into()
}

/// Vertices of a closed circle: `segments` angles spread over `[0, 2pi]`
/// inclusive, so the first and last vertex coincide.
#[must_use]
pub fn circle_vertices(center: Point2, radius: f64, segments: usize) -> Vec<Point2> {
    if !center.is_finite() || !radius.is_finite() || radius < 0.0 {
        return Vec::new();
    }
    let segments = segments.max(2);
    let last = (segments - 1) as f64;
    (0..segments)
        .map(|index| {
            let theta = TAU * index as f64 / last;
            Point2::new(
                center.x + radius * theta.cos(),
                center.y + radius * theta.sin(),
            )
        })
        .collect()
}

fn map_circle(data: &CircleData, style: &ElementStyle, config: &ViewConfig) -> Primitive {
    let vertices = match data.radius {
        Some(radius) => circle_vertices(data.center, radius, config.circle_segments),
        None => {
            warn!("circle element without radius; drawing nothing");
            Vec::new()
        }
    };
    let (x, y) = split_finite(vertices);
    ScatterTrace::new(label_or_empty(data.label.as_ref()), TraceMode::Lines)
        .with_coords(x, y)
        .with_line(line_style(style, config))
        .into()
}

fn map_area(data: &AreaData, style: &ElementStyle, config: &ViewConfig) -> Primitives {
    let label = label_or_empty(data.label.as_ref());
    let fill_color = style
        .fillcolor
        .clone()
        .unwrap_or_else(|| config.area_fill_color.clone());
    let (x, y) = split_finite(data.points.iter().copied());
    let baseline = if data.baseline.is_finite() {
        data.baseline
    } else {
        0.0
    };

    if baseline == 0.0 || x.is_empty() {
        let trace = ScatterTrace::new(label, TraceMode::Lines)
            .with_coords(x, y)
            .with_line(line_style(style, config))
            .with_fill(FillMode::ToZeroY, fill_color);
        return smallvec![trace.into()];
    }

    // `tonexty` fills down to the previous trace, so the baseline goes first.
    let baseline_name = if label.is_empty() {
        "baseline".to_owned()
    } else {
        format!("{label} baseline")
    };
    let baseline_trace = ScatterTrace::new(baseline_name, TraceMode::Lines)
        .with_coords(x.clone(), vec![baseline; x.len()])
        .with_line(LineStyle::new("rgba(0, 0, 0, 0)", 1.0))
        .hidden_from_legend();
    let fill_trace = ScatterTrace::new(label, TraceMode::Lines)
        .with_coords(x, y)
        .with_line(line_style(style, config))
        .with_fill(FillMode::ToNextY, fill_color);
    smallvec![baseline_trace.into(), fill_trace.into()]
}

fn map_polygon(data: &PolygonData, style: &ElementStyle, config: &ViewConfig) -> Primitive {
    let (mut x, mut y) = split_finite(data.vertices.iter().copied());
    if let (Some(&first_x), Some(&first_y)) = (x.first(), y.first()) {
        x.push(first_x);
        y.push(first_y);
    }
    let fill_color = style
        .fillcolor
        .clone()
        .unwrap_or_else(|| config.polygon_fill_color.clone());
    ScatterTrace::new(label_or_empty(data.label.as_ref()), TraceMode::Lines)
        .with_coords(x, y)
        .with_line(line_style(style, config))
        .with_fill(FillMode::ToSelf, fill_color)
        .into()
}

fn grid_shape(grid: &[Vec<f64>]) -> Option<(usize, usize)> {
    let columns = grid.first().map_or(0, Vec::len);
    grid.iter()
        .all(|row| row.len() == columns)
        .then_some((grid.len(), columns))
}

fn map_surface(data: &SurfaceData, style: &ElementStyle, config: &ViewConfig) -> Primitive {
    let name = data
        .label
        .clone()
        .or_else(|| style.title.clone())
        .unwrap_or_default();
    let shape = grid_shape(&data.z);
    let consistent =
        shape.is_some() && grid_shape(&data.x) == shape && grid_shape(&data.y) == shape;
    let (x, y, z) = if consistent {
        (data.x.clone(), data.y.clone(), data.z.clone())
    } else {
        warn!(surface = %name, "surface grids differ in shape; drawing nothing");
        (Vec::new(), Vec::new(), Vec::new())
    };
    let opacity = data
        .opacity
        .filter(|opacity| opacity.is_finite())
        .map(|opacity| opacity.clamp(0.0, 1.0))
        .or_else(|| style.opacity())
        .unwrap_or(1.0);

    SurfaceTrace {
        name,
        x,
        y,
        z,
        colorscale: data
            .colorscale
            .clone()
            .unwrap_or_else(|| config.surface_colorscale.clone()),
        opacity,
        showscale: false,
    }
    .into()
}

fn map_vector(data: &VectorData, style: &ElementStyle, config: &ViewConfig) -> Primitive {
    let endpoints = match (data.start, data.end) {
        (Some(start), Some(end))
            if [start.x, start.y, start.z, end.x, end.y, end.z]
                .iter()
                .all(|v| v.is_finite()) =>
        {
            Some((start, end))
        }
        _ => None,
    };
    let (x, y, z) = match endpoints {
        Some((start, end)) => (
            vec![start.x, end.x],
            vec![start.y, end.y],
            vec![start.z, end.z],
        ),
        None => (Vec::new(), Vec::new(), Vec::new()),
    };
    let size = style.marker_size().unwrap_or(config.scatter_marker_size);
    Scatter3dTrace {
        name: label_or_empty(data.label.as_ref()),
        mode: TraceMode::LinesMarkers,
        x,
        y,
        z,
        text: Vec::new(),
        line: Some(line_style(style, config)),
        marker: Some(MarkerStyle::new(color(style, config), size)),
    }
    .into()
}
