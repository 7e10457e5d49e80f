mod layout;
mod null_renderer;
mod primitives;
mod scene;

pub use layout::{
    Annotation, AspectMode, Axis2d, Axis3d, Camera, CameraEye, Layout, Legend, LegendOrientation,
    Margin, Scene3d,
};
pub use null_renderer::NullRenderer;
pub use primitives::{
    FillMode, LineStyle, MarkerStyle, Primitive, Scatter3dTrace, ScatterTrace, SurfaceTrace,
    TraceMode,
};
pub use scene::RenderedScene;

use crate::error::PlotResult;

/// Contract implemented by any charting backend.
///
/// Backends receive a fully assembled, validated-on-demand `RenderedScene`
/// so drawing code stays isolated from element mapping and layout rules.
pub trait Renderer {
    fn render(&mut self, scene: &RenderedScene) -> PlotResult<()>;
}
