use approx::assert_relative_eq;
use mathplot::api::{ViewConfig, assemble_layout, fixed_graph_layout, map_elements};
use mathplot::core::{AxisRange, GraphConfig, PlotElement, Point2, Point3};
use mathplot::render::{AspectMode, CameraEye, LegendOrientation, Primitive};

fn planar_primitives(config: &ViewConfig) -> Vec<Primitive> {
    map_elements(
        &[
            PlotElement::point(Point2::new(1.0, 1.0), "A"),
            PlotElement::segment(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0), "AB"),
        ],
        config,
    )
}

fn mixed_primitives(config: &ViewConfig) -> Vec<Primitive> {
    map_elements(
        &[
            PlotElement::point(Point2::new(1.0, 1.0), "A"),
            PlotElement::vector3d(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0), "v"),
        ],
        config,
    )
}

#[test]
fn planar_layout_has_equal_aspect_axes_and_top_legend() {
    let config = ViewConfig::default();

    let layout = assemble_layout(&planar_primitives(&config), Some("Triangle"), &config);

    assert!(!layout.is_3d());
    assert_eq!(layout.title.as_deref(), Some("Triangle"));
    let xaxis = layout.xaxis.as_ref().expect("x axis");
    let yaxis = layout.yaxis.as_ref().expect("y axis");
    assert!(xaxis.visible && xaxis.zeroline && xaxis.showgrid);
    assert_eq!(yaxis.scaleanchor.as_deref(), Some("x"));
    assert_eq!(yaxis.scaleratio, Some(1.0));
    assert!(xaxis.range.is_none());
    assert_eq!(layout.legend.orientation, LegendOrientation::Horizontal);
    assert_relative_eq!(layout.legend.y, 1.02);
    assert_eq!(layout.legend.yanchor, "bottom");
    assert!(layout.annotations.is_empty());
}

#[test]
fn any_spatial_primitive_makes_the_whole_layout_spatial() {
    let config = ViewConfig::default();

    let layout = assemble_layout(&mixed_primitives(&config), None, &config);

    assert!(layout.is_3d());
    assert!(layout.xaxis.is_none());
    assert!(layout.yaxis.is_none());
    let scene = layout.scene.as_ref().expect("scene");
    assert_eq!(scene.xaxis.title, "X");
    assert_eq!(scene.yaxis.title, "Y");
    assert_eq!(scene.zaxis.title, "Z");
    assert_eq!(scene.aspectmode, AspectMode::Cube);
    assert_eq!(scene.camera.eye, CameraEye::new(1.5, 1.5, 1.5));
}

#[test]
fn spatial_layout_json_has_no_planar_axis_keys() {
    let config = ViewConfig::default();
    let layout = assemble_layout(&mixed_primitives(&config), None, &config);

    let value = serde_json::to_value(&layout).expect("serialize layout");

    assert!(value.get("xaxis").is_none());
    assert!(value.get("yaxis").is_none());
    assert_eq!(value["scene"]["aspectmode"], "cube");
    assert_eq!(value["legend"]["orientation"], "h");
}

#[test]
fn camera_eye_follows_config() {
    let config = ViewConfig::default().with_camera_eye(CameraEye::new(2.0, 0.5, 1.0));

    let layout = assemble_layout(&mixed_primitives(&config), None, &config);

    assert_eq!(
        layout.scene.expect("scene").camera.eye,
        CameraEye::new(2.0, 0.5, 1.0)
    );
}

#[test]
fn empty_input_yields_placeholder_layout() {
    let config = ViewConfig::default();

    let layout = assemble_layout(&[], Some("Nothing"), &config);

    assert!(!layout.is_3d());
    assert!(layout.is_placeholder());
    assert!(!layout.showlegend);
    assert_eq!(layout.annotations[0].text, "No data to display");
    assert!(!layout.annotations[0].showarrow);
    assert!(!layout.xaxis.as_ref().expect("x axis").visible);
    assert!(!layout.yaxis.as_ref().expect("y axis").visible);
}

#[test]
fn placeholder_text_follows_config() {
    let config = ViewConfig::default().with_placeholder_text("Nada");

    let layout = assemble_layout(&[], None, &config);

    assert_eq!(layout.annotations[0].text, "Nada");
}

#[test]
fn fixed_graph_layout_pins_ranges_without_scale_anchor() {
    let config = ViewConfig::default();
    let graph = GraphConfig::new(AxisRange::new(-5.0, 5.0), AxisRange::new(-2.0, 10.0))
        .with_title("Parabola");

    let layout = fixed_graph_layout(&graph, true, &config);

    assert_eq!(layout.title.as_deref(), Some("Parabola"));
    let xaxis = layout.xaxis.expect("x axis");
    let yaxis = layout.yaxis.expect("y axis");
    assert_eq!(xaxis.range, Some(AxisRange::new(-5.0, 5.0)));
    assert_eq!(yaxis.range, Some(AxisRange::new(-2.0, 10.0)));
    assert!(yaxis.scaleanchor.is_none());
    assert!(layout.annotations.is_empty());
}

#[test]
fn fixed_graph_layout_without_traces_adds_placeholder() {
    let config = ViewConfig::default();
    let graph = GraphConfig::new(AxisRange::new(0.0, 1.0), AxisRange::new(0.0, 1.0));

    let layout = fixed_graph_layout(&graph, false, &config);

    assert!(layout.is_placeholder());
    assert!(layout.xaxis.expect("x axis").visible);
}
