use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::{ComputationResult, GraphConfig, PlotElement};
use crate::error::PlotResult;
use crate::expr::{Sample, sample_expression};
use crate::render::{LineStyle, Primitive, RenderedScene, Renderer, ScatterTrace, TraceMode};

use super::element_mapper::map_elements;
use super::layout_assembler::{assemble_layout, fixed_graph_layout};
use super::scene_cache::{SampleCache, SceneCache, SceneKey};
use super::{SampleCacheStats, SceneCacheStats, ViewConfig};

/// Lifecycle of one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Computing,
    Rendered,
}

/// Builds the scene for a plot element list without any caching.
#[must_use]
pub fn build_scene(
    elements: &[PlotElement],
    title: Option<&str>,
    config: &ViewConfig,
) -> RenderedScene {
    let traces = map_elements(elements, config);
    let layout = assemble_layout(&traces, title, config);
    let is_3d = layout.is_3d();
    debug!(
        elements = elements.len(),
        traces = traces.len(),
        is_3d,
        "built element scene"
    );
    RenderedScene {
        traces,
        is_3d,
        layout,
    }
}

/// Builds the scene for a static graph, sampling each function directly.
#[must_use]
pub fn build_graph_scene(graph: &GraphConfig, config: &ViewConfig) -> RenderedScene {
    graph_scene_with(graph, config, |expression, x_min, x_max, count| {
        sample_expression(expression, x_min, x_max, count).into()
    })
}

fn graph_scene_with<F>(graph: &GraphConfig, config: &ViewConfig, mut sample: F) -> RenderedScene
where
    F: FnMut(&str, f64, f64, usize) -> Arc<[Sample]>,
{
    let mut traces = Vec::with_capacity(graph.functions.len());
    for function in &graph.functions {
        let samples = sample(
            &function.expression,
            graph.x_range.min,
            graph.x_range.max,
            config.sample_count,
        );
        if samples.is_empty() {
            debug!(expression = %function.expression, "function produced no samples; skipped");
            continue;
        }
        let (x, y): (Vec<f64>, Vec<f64>) = samples.iter().map(|s| (s.x, s.y)).unzip();
        let color = function
            .color
            .clone()
            .unwrap_or_else(|| config.default_color.clone());
        let name = function
            .label
            .clone()
            .unwrap_or_else(|| function.expression.clone());
        traces.push(Primitive::from(
            ScatterTrace::new(name, TraceMode::Lines)
                .with_coords(x, y)
                .with_line(LineStyle::new(color, config.line_width)),
        ));
    }

    let layout = fixed_graph_layout(graph, !traces.is_empty(), config);
    debug!(
        functions = graph.functions.len(),
        traces = traces.len(),
        "built graph scene"
    );
    RenderedScene {
        traces,
        is_3d: false,
        layout,
    }
}

/// Composition root: maps inputs to scenes, memoizes them, and hands each
/// scene to the renderer.
///
/// Every `render_*` call runs one synchronous `Idle -> Computing -> Rendered`
/// pass. A renderer failure leaves the view `Idle` and is returned as-is.
pub struct GraphView<R: Renderer> {
    renderer: R,
    config: ViewConfig,
    state: ViewState,
    scenes: SceneCache,
    samples: SampleCache,
    last_scene: Option<Arc<RenderedScene>>,
}

impl<R: Renderer> GraphView<R> {
    pub fn new(renderer: R, config: ViewConfig) -> PlotResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            scenes: SceneCache::new(config.scene_cache_capacity),
            samples: SampleCache::new(config.sample_cache_capacity),
            config,
            state: ViewState::Idle,
            last_scene: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Scene handed to the renderer by the last successful pass.
    #[must_use]
    pub fn last_scene(&self) -> Option<&RenderedScene> {
        self.last_scene.as_deref()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn scene_cache_stats(&self) -> SceneCacheStats {
        self.scenes.stats()
    }

    #[must_use]
    pub fn sample_cache_stats(&self) -> SampleCacheStats {
        self.samples.stats()
    }

    pub fn clear_caches(&mut self) {
        self.scenes.clear();
        self.samples.clear();
    }

    /// Renders a plot element list.
    pub fn render_elements(
        &mut self,
        elements: Arc<[PlotElement]>,
        title: Option<&str>,
    ) -> PlotResult<Arc<RenderedScene>> {
        let key = SceneKey::Elements {
            elements,
            title: title.map(str::to_owned),
        };
        self.run_pass(key)
    }

    /// Renders the plot elements attached to a backend computation result.
    pub fn render_computation(
        &mut self,
        result: &ComputationResult,
    ) -> PlotResult<Arc<RenderedScene>> {
        if !result.is_ok() {
            warn!(
                operation = %result.operation,
                "rendering plot elements of a computation that did not succeed"
            );
        }
        self.render_elements(Arc::from(result.plot_elements.as_slice()), None)
    }

    /// Renders a static graph by sampling its functions client-side.
    pub fn render_graph(&mut self, graph: Arc<GraphConfig>) -> PlotResult<Arc<RenderedScene>> {
        self.run_pass(SceneKey::Graph(graph))
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn run_pass(&mut self, key: SceneKey) -> PlotResult<Arc<RenderedScene>> {
        self.state = ViewState::Computing;
        let scene = match self.scenes.get(&key) {
            Some(scene) => {
                debug!("scene cache hit");
                scene
            }
            None => {
                debug!("scene cache miss");
                let scene = Arc::new(self.build(&key));
                self.scenes.insert(key, Arc::clone(&scene));
                scene
            }
        };

        if let Err(err) = self.renderer.render(&scene) {
            warn!(error = %err, "renderer rejected scene");
            self.state = ViewState::Idle;
            return Err(err);
        }
        self.last_scene = Some(Arc::clone(&scene));
        self.state = ViewState::Rendered;
        Ok(scene)
    }

    fn build(&mut self, key: &SceneKey) -> RenderedScene {
        match key {
            SceneKey::Elements { elements, title } => {
                build_scene(elements, title.as_deref(), &self.config)
            }
            SceneKey::Graph(graph) => {
                let samples = &mut self.samples;
                graph_scene_with(graph, &self.config, |expression, x_min, x_max, count| {
                    samples.sample(expression, x_min, x_max, count)
                })
            }
        }
    }
}
