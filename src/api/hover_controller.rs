use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Field, distance_to_samples};
use crate::interaction::axes_in_order;
use crate::render::Renderer;

use super::polyline_projection::project_samples;
use super::visibility::record_visible;
use super::{InvalidationLevel, PcpEngine, PcpEvent};

const HOVER_DETAIL_FIELDS: [(&str, Field); 7] = [
    ("Year", Field::Year),
    ("Grid", Field::Grid),
    ("Laps", Field::Laps),
    ("Circuit Type", Field::CircuitType),
    ("Status", Field::Status),
    ("Reason", Field::ReasonRetired),
    ("Constructor", Field::Constructor),
];

/// One label/value row of the hovered record's details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverDetail {
    pub label: String,
    pub value: String,
}

impl<R: Renderer> PcpEngine<R> {
    /// Tracks the pointer and hit-tests visible polylines.
    ///
    /// Hover is frozen while an axis is dragged. Returns `true` when the
    /// hovered record changed.
    pub fn pointer_move(&mut self, x_px: f64, y_px: f64) -> bool {
        self.core.interaction.on_pointer_move(x_px, y_px);
        if self.core.interaction.drag().is_dragging() {
            return false;
        }
        let target = self.hit_test(x_px, y_px);
        self.update_hover(target)
    }

    pub fn pointer_leave(&mut self) -> bool {
        let changed = self.core.interaction.hovered_record().is_some();
        self.core.interaction.on_pointer_leave();
        if changed {
            self.invalidate(InvalidationLevel::Hover);
            self.emit_plugin_event(PcpEvent::HoverChanged { record: None });
        }
        changed
    }

    #[must_use]
    pub fn hovered_record(&self) -> Option<usize> {
        self.core.interaction.hovered_record()
    }

    /// Detail rows for the hovered record; missing values read "n/a".
    #[must_use]
    pub fn hover_details(&self) -> Option<Vec<HoverDetail>> {
        let record = self
            .core
            .model
            .records
            .get(self.core.interaction.hovered_record()?)?;
        Some(
            HOVER_DETAIL_FIELDS
                .iter()
                .map(|(label, field)| HoverDetail {
                    label: (*label).to_owned(),
                    value: record.display_value(*field),
                })
                .collect(),
        )
    }

    pub(super) fn update_hover(&mut self, record: Option<usize>) -> bool {
        if !self.core.interaction.set_hovered_record(record) {
            return false;
        }
        trace!(?record, "hover changed");
        self.invalidate(InvalidationLevel::Hover);
        self.emit_plugin_event(PcpEvent::HoverChanged { record });
        true
    }

    /// Drops the hover once its record is hidden by a brush or filter.
    pub(super) fn clear_hidden_hover(&mut self) -> bool {
        match self.core.interaction.hovered_record() {
            Some(index) if !self.is_record_visible(index) => self.update_hover(None),
            _ => false,
        }
    }

    fn hit_test(&self, x_px: f64, y_px: f64) -> Option<usize> {
        let model = &self.core.model;
        if !model.status.shows_plot() {
            return None;
        }
        let (x, y) = (x_px - model.area.origin_x, y_px - model.area.origin_y);
        let tolerance = self.core.config.hover_tolerance_px;
        let ordered = axes_in_order(&model.axes);
        model
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| record_visible(record, &model.axes, &model.external_filter))
            .filter_map(|(index, record)| {
                let samples = project_samples(record, &model.axes, &ordered);
                distance_to_samples(&samples, x, y).map(|distance| (index, distance))
            })
            .filter(|(_, distance)| *distance <= tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index)
    }
}
