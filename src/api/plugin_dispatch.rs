use crate::extensions::PluginContext;
use crate::render::Renderer;

use super::visibility::visible_record_indices;
use super::{PcpEngine, PcpEvent};

impl<R: Renderer> PcpEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        let model = &self.core.model;
        let visible_len = if model.status.shows_plot() {
            visible_record_indices(&model.records, &model.axes, &model.external_filter).len()
        } else {
            0
        };
        PluginContext {
            viewport: model.viewport,
            records_len: model.records.len(),
            visible_len,
            axis_count: model.axes.len(),
            brushed_axis_count: model.axes.iter().filter(|axis| axis.brush.is_some()).count(),
            external_filter_active: model.external_filter.is_active(),
            drag: self.core.interaction.drag(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PcpEvent) {
        if self.core.runtime.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.core.runtime.plugins {
            plugin.on_event(event, context);
        }
    }
}
