mod axis_controller;
mod brush_controller;
mod cross_filter_controller;
mod data_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod hover_controller;
mod interaction_validation;
mod invalidation;
mod json_contract;
mod label_format;
mod plot_model;
mod plugin_dispatch;
mod plugin_registry;
mod polyline_projection;
mod render_coordinator;
mod render_frame_builder;
mod resize;
mod snapshot_controller;
mod view_model;
mod visibility;

pub use crate::extensions::{PcpEvent, PcpPlugin, PluginContext};
pub use engine::PcpEngine;
pub use engine_config::{PcpEngineConfig, PcpStyle};
pub use engine_snapshot::{AxisSnapshot, EngineSnapshot};
pub use hover_controller::HoverDetail;
pub use invalidation::InvalidationLevel;
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use label_format::truncate_label;
pub use plot_model::PlotStatus;
pub use polyline_projection::{SampleVec, project_polylines, project_samples};
pub use resize::ResizeDebouncer;
pub use view_model::{AxisView, PcpViewModel, PolylineView, TickView, ViewModelDiff};
pub use visibility::{record_visible, visible_record_indices};
