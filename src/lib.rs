//! mathplot: backend-agnostic scenes for mathematical plot elements.
//!
//! Two pipelines share one scene model. Plot elements produced by a math
//! backend (curves, points, polygons, surfaces, vectors) are mapped to
//! renderer-native traces and given a 2-D or 3-D layout. Static graphs are
//! sampled client-side from explicit `y = f(x)` expressions through a small
//! allow-listed evaluator. Either way the result is a `RenderedScene` handed
//! to a `Renderer`.

pub mod api;
pub mod core;
pub mod error;
pub mod expr;
pub mod render;
pub mod telemetry;

pub use api::{GraphView, ViewConfig, build_graph_scene, build_scene};
pub use error::{PlotError, PlotResult};
