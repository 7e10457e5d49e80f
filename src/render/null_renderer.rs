use crate::error::PlotResult;
use crate::render::{RenderedScene, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates every scene so tests catch malformed traces before a
/// real charting backend sees them.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_trace_count: usize,
    pub last_is_3d: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, scene: &RenderedScene) -> PlotResult<()> {
        scene.validate()?;
        self.render_count += 1;
        self.last_trace_count = scene.traces.len();
        self.last_is_3d = scene.is_3d;
        Ok(())
    }
}
