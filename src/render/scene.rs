use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::render::{Layout, Primitive};

/// Backend-agnostic scene for one render pass: traces plus their layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedScene {
    pub traces: Vec<Primitive>,
    pub is_3d: bool,
    pub layout: Layout,
}

impl RenderedScene {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    /// Checks trace geometry and that `is_3d` agrees with traces and layout.
    pub fn validate(&self) -> PlotResult<()> {
        for trace in &self.traces {
            trace.validate()?;
        }
        let any_3d = self.traces.iter().any(Primitive::is_3d);
        if any_3d != self.is_3d || self.layout.is_3d() != self.is_3d {
            return Err(PlotError::InvalidData(format!(
                "scene dimensionality mismatch: is_3d={}, traces_3d={any_3d}, layout_3d={}",
                self.is_3d,
                self.layout.is_3d()
            )));
        }
        if self.is_3d && (self.layout.xaxis.is_some() || self.layout.yaxis.is_some()) {
            return Err(PlotError::InvalidData(
                "3-D scene must not carry planar axes".to_owned(),
            ));
        }
        Ok(())
    }
}
