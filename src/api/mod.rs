mod element_mapper;
mod graph_view;
mod json_contract;
mod layout_assembler;
mod scene_cache;
mod view_config;

pub use element_mapper::{Primitives, circle_vertices, map_element, map_elements};
pub use graph_view::{GraphView, ViewState, build_graph_scene, build_scene};
pub use json_contract::{SCENE_JSON_SCHEMA_V1, SceneJsonContractV1};
pub use layout_assembler::{assemble_layout, fixed_graph_layout};
pub use scene_cache::{SampleCacheStats, SceneCacheStats};
pub use view_config::ViewConfig;
