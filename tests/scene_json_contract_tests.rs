use std::sync::Arc;

use mathplot::api::{GraphView, SCENE_JSON_SCHEMA_V1, ViewConfig, build_scene};
use mathplot::core::{PlotElement, Point2, Point3};
use mathplot::render::{NullRenderer, RenderedScene};

fn planar_scene() -> RenderedScene {
    let elements = vec![
        PlotElement::curve(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(0.5, 0.25),
                Point2::new(1.0, 1.0),
            ],
            "f",
        ),
        PlotElement::point(Point2::new(1.0, 1.0), "P"),
        PlotElement::area(vec![Point2::new(0.0, 2.0), Point2::new(1.0, 3.0)], 1.0),
    ];
    build_scene(&elements, Some("Contract"), &ViewConfig::default())
}

#[test]
fn scene_contract_v1_roundtrip() {
    let scene = planar_scene();

    let json = scene.to_json_contract_v1_pretty().expect("serialize");
    let restored = RenderedScene::from_json_compat_str(&json).expect("parse");

    assert_eq!(restored, scene);
}

#[test]
fn bare_scene_json_is_accepted() {
    let scene = planar_scene();

    let json = scene.to_json_pretty().expect("serialize");
    let restored = RenderedScene::from_json_compat_str(&json).expect("parse");

    assert_eq!(restored, scene);
}

#[test]
fn contract_uses_plotly_trace_vocabulary() {
    let json = planar_scene()
        .to_json_contract_v1_pretty()
        .expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["schema_version"], SCENE_JSON_SCHEMA_V1);
    let traces = value["scene"]["traces"].as_array().expect("trace array");
    assert_eq!(traces[0]["type"], "scatter");
    assert_eq!(traces[0]["mode"], "lines");
    assert_eq!(traces[1]["mode"], "markers+text");
    assert_eq!(traces[1]["textposition"], "top center");
    assert_eq!(traces[3]["fill"], "tonexty");
    assert!(traces[0].get("fill").is_none());
    assert_eq!(value["scene"]["layout"]["yaxis"]["scaleanchor"], "x");
}

#[test]
fn spatial_traces_serialize_with_their_own_type_tags() {
    let elements = vec![
        PlotElement::surface(vec![vec![0.0]], vec![vec![0.0]], vec![vec![1.0]]),
        PlotElement::vector3d(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 1.0), "k"),
    ];
    let scene = build_scene(&elements, None, &ViewConfig::default());

    let value = serde_json::to_value(&scene).expect("serialize");

    assert_eq!(value["is_3d"], true);
    assert_eq!(value["traces"][0]["type"], "surface");
    assert_eq!(value["traces"][0]["colorscale"], "Viridis");
    assert_eq!(value["traces"][1]["type"], "scatter3d");
    assert_eq!(value["traces"][1]["mode"], "lines+markers");
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let scene = planar_scene();
    let json = format!(
        r#"{{"schema_version": 9, "scene": {}}}"#,
        scene.to_json_pretty().expect("serialize")
    );

    assert!(RenderedScene::from_json_compat_str(&json).is_err());
}

#[test]
fn view_exports_last_scene_contract() {
    let mut view = GraphView::new(NullRenderer::default(), ViewConfig::default()).expect("view");
    assert!(view.scene_json_contract_v1_pretty().is_err());

    let elements: Arc<[PlotElement]> = Arc::from(vec![PlotElement::point(Point2::new(0.0, 0.0), "O")]);
    let scene = view.render_elements(elements, None).expect("render");

    let json = view.scene_json_contract_v1_pretty().expect("contract");
    assert_eq!(
        RenderedScene::from_json_compat_str(&json).expect("parse"),
        *scene
    );
}
