use serde::{Deserialize, Serialize};

use crate::core::{Field, Viewport};
use crate::interaction::DragState;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub records_len: usize,
    pub visible_len: usize,
    pub axis_count: usize,
    pub brushed_axis_count: usize,
    pub external_filter_active: bool,
    pub drag: DragState,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PcpEvent {
    LoadStarted { generation: u64 },
    DataLoaded { records_len: usize },
    LoadFailed,
    LoadDiscarded { generation: u64 },
    AxisDragStarted { field: Field },
    AxisOrderChanged,
    AxisDragEnded { field: Field },
    BrushChanged { field: Field },
    ExternalFilterChanged,
    HoverChanged { record: Option<usize> },
    ViewportChanged { width: u32, height: u32 },
    Rendered,
}

/// Extension hook interface for bounded custom logic.
pub trait PcpPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PcpEvent, context: PluginContext);
}
