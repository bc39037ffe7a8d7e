use serde::{Deserialize, Serialize};

use crate::core::{AxisKind, BrushInterval, Field, PlotArea, Viewport};
use crate::filter::ExternalFilter;
use crate::interaction::DragState;

use super::PlotStatus;

/// Per-axis state captured in an [`EngineSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshot {
    pub field: Field,
    pub label: String,
    pub kind: AxisKind,
    pub order: usize,
    pub screen_x: f64,
    pub brush: Option<BrushInterval>,
    /// `[min, max]` of a numeric axis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_domain: Option<(f64, f64)>,
    /// Categories of a categorical axis, bottom to top.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub plot_area: PlotArea,
    pub status: PlotStatus,
    /// Axes in display order.
    pub axes: Vec<AxisSnapshot>,
    pub record_count: usize,
    pub visible_records: Vec<usize>,
    pub external_filter: ExternalFilter,
    pub drag: DragState,
    pub hovered_record: Option<usize>,
}

impl EngineSnapshot {
    /// Display-order axis fields.
    #[must_use]
    pub fn axis_order(&self) -> Vec<Field> {
        self.axes.iter().map(|axis| axis.field).collect()
    }
}
