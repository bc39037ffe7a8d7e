use crate::core::AxisScale;
use crate::error::{PcpError, PcpResult};
use crate::interaction::axes_in_order;
use crate::render::Renderer;

use super::{AxisSnapshot, EngineSnapshot, PcpEngine};

impl<R: Renderer> PcpEngine<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let model = &self.core.model;
        let axes = axes_in_order(&model.axes)
            .into_iter()
            .map(|index| {
                let axis = &model.axes[index];
                let (numeric_domain, categories) = match &axis.scale {
                    AxisScale::Linear(scale) => (Some(scale.domain()), Vec::new()),
                    AxisScale::Point(scale) => (None, scale.domain().iter().cloned().collect()),
                };
                AxisSnapshot {
                    field: axis.field(),
                    label: axis.spec.label.clone(),
                    kind: axis.spec.kind,
                    order: axis.order,
                    screen_x: axis.screen_x,
                    brush: axis.brush,
                    numeric_domain,
                    categories,
                }
            })
            .collect();

        EngineSnapshot {
            viewport: model.viewport,
            plot_area: model.area,
            status: model.status.clone(),
            axes,
            record_count: model.records.len(),
            visible_records: self.visible_records(),
            external_filter: model.external_filter.clone(),
            drag: self.core.interaction.drag(),
            hovered_record: self.core.interaction.hovered_record(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> PcpResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| PcpError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
