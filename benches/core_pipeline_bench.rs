use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use mathplot::api::{GraphView, ViewConfig, build_scene};
use mathplot::core::{AxisRange, FunctionSpec, GraphConfig, PlotElement, Point2};
use mathplot::expr::{CompiledExpression, sample_expression};
use mathplot::render::NullRenderer;

fn bench_sample_expression_2k(c: &mut Criterion) {
    c.bench_function("sample_expression_2k", |b| {
        b.iter(|| {
            let _ = sample_expression(
                black_box("sin(x) * exp(-x/4) + x^2 / 10"),
                black_box(-10.0),
                black_box(10.0),
                black_box(2_000),
            );
        })
    });
}

fn bench_compiled_eval(c: &mut Criterion) {
    let compiled =
        CompiledExpression::compile("pow(x, 3) - 2*x + sqrt(abs(x))").expect("valid expression");

    c.bench_function("compiled_eval", |b| {
        b.iter(|| {
            let _ = compiled.eval(black_box(1.234_5));
        })
    });
}

fn bench_build_scene_1k_elements(c: &mut Criterion) {
    let config = ViewConfig::default();
    let elements: Vec<PlotElement> = (0..1_000)
        .map(|i| {
            let t = i as f64;
            match i % 4 {
                0 => PlotElement::circle(Point2::new(t, -t), 1.0 + t * 0.01, "c"),
                1 => PlotElement::polygon(
                    vec![
                        Point2::new(t, 0.0),
                        Point2::new(t + 1.0, 0.0),
                        Point2::new(t, 1.0),
                    ],
                    "p",
                ),
                2 => PlotElement::point(Point2::new(t, t), "pt"),
                _ => PlotElement::area(
                    vec![Point2::new(t, 1.0), Point2::new(t + 1.0, 2.0)],
                    0.5,
                ),
            }
        })
        .collect();

    c.bench_function("build_scene_1k_elements", |b| {
        b.iter(|| {
            let _ = build_scene(black_box(&elements), None, &config);
        })
    });
}

fn bench_graph_view_cached_pass(c: &mut Criterion) {
    let mut view =
        GraphView::new(NullRenderer::default(), ViewConfig::default()).expect("view init");
    let graph = Arc::new(
        GraphConfig::new(AxisRange::new(-5.0, 5.0), AxisRange::new(-5.0, 5.0))
            .with_function(FunctionSpec::new("x^3 - x"))
            .with_function(FunctionSpec::new("cos(x)")),
    );

    c.bench_function("graph_view_cached_pass", |b| {
        b.iter(|| {
            let _ = view
                .render_graph(Arc::clone(&graph))
                .expect("render should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_sample_expression_2k,
    bench_compiled_eval,
    bench_build_scene_1k_elements,
    bench_graph_view_cached_pass
);
criterion_main!(benches);
