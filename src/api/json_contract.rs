use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::render::{RenderedScene, Renderer};

use super::GraphView;

pub const SCENE_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneJsonContractV1 {
    pub schema_version: u32,
    pub scene: RenderedScene,
}

impl RenderedScene {
    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize scene json: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> PlotResult<String> {
        let payload = SceneJsonContractV1 {
            schema_version: SCENE_JSON_SCHEMA_V1,
            scene: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PlotError::InvalidData(format!("failed to serialize scene contract v1: {e}"))
        })
    }

    /// Parses either a bare scene or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> PlotResult<Self> {
        if let Ok(scene) = serde_json::from_str::<RenderedScene>(input) {
            return Ok(scene);
        }
        let payload: SceneJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            PlotError::InvalidData(format!("failed to parse scene json payload: {e}"))
        })?;
        if payload.schema_version != SCENE_JSON_SCHEMA_V1 {
            return Err(PlotError::InvalidData(format!(
                "unsupported scene schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.scene)
    }
}

impl<R: Renderer> GraphView<R> {
    /// Contract payload of the last rendered scene.
    pub fn scene_json_contract_v1_pretty(&self) -> PlotResult<String> {
        self.last_scene()
            .ok_or_else(|| PlotError::InvalidData("no scene has been rendered yet".to_owned()))?
            .to_json_contract_v1_pretty()
    }
}
