use crate::core::GraphConfig;
use crate::render::{
    Annotation, AspectMode, Axis2d, Axis3d, Camera, Layout, Legend, Margin, Primitive, Scene3d,
};

use super::ViewConfig;

/// Builds the layout for a mapped primitive list.
///
/// A single 3-D primitive turns the whole scene 3-D. An empty list yields
/// the placeholder layout instead of an error.
#[must_use]
pub fn assemble_layout(
    primitives: &[Primitive],
    title: Option<&str>,
    config: &ViewConfig,
) -> Layout {
    if primitives.is_empty() {
        return placeholder_layout(title, config);
    }
    if primitives.iter().any(Primitive::is_3d) {
        return spatial_layout(title, config);
    }
    Layout {
        xaxis: Some(Axis2d::cartesian("x")),
        yaxis: Some(Axis2d::cartesian("y").anchored_to("x", 1.0)),
        ..base_layout(title, true)
    }
}

/// Fixed 2-D layout for a static graph: explicit ranges, free aspect ratio.
#[must_use]
pub fn fixed_graph_layout(graph: &GraphConfig, has_traces: bool, config: &ViewConfig) -> Layout {
    let mut layout = Layout {
        xaxis: Some(Axis2d::cartesian("x").with_range(graph.x_range)),
        yaxis: Some(Axis2d::cartesian("y").with_range(graph.y_range)),
        ..base_layout(graph.title.as_deref(), has_traces)
    };
    if !has_traces {
        layout
            .annotations
            .push(Annotation::centered(config.placeholder_text.clone()));
    }
    layout
}

fn base_layout(title: Option<&str>, showlegend: bool) -> Layout {
    Layout {
        title: title.map(str::to_owned),
        showlegend,
        legend: Legend::horizontal_top(),
        margin: Margin::default(),
        xaxis: None,
        yaxis: None,
        scene: None,
        annotations: Vec::new(),
    }
}

fn spatial_layout(title: Option<&str>, config: &ViewConfig) -> Layout {
    let axis = |title: &str| Axis3d {
        title: title.to_owned(),
    };
    Layout {
        scene: Some(Scene3d {
            xaxis: axis("X"),
            yaxis: axis("Y"),
            zaxis: axis("Z"),
            aspectmode: AspectMode::Cube,
            camera: Camera {
                eye: config.camera_eye,
            },
        }),
        ..base_layout(title, true)
    }
}

fn placeholder_layout(title: Option<&str>, config: &ViewConfig) -> Layout {
    Layout {
        xaxis: Some(Axis2d::hidden()),
        yaxis: Some(Axis2d::hidden()),
        annotations: vec![Annotation::centered(config.placeholder_text.clone())],
        ..base_layout(title, false)
    }
}
