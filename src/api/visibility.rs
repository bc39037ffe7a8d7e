use crate::core::{Axis, Record};
use crate::filter::ExternalFilter;
use crate::render::Renderer;

use super::PcpEngine;

/// A record is visible when it matches the external filter and lies inside
/// every active brush (AND across axes).
#[must_use]
pub fn record_visible(record: &Record, axes: &[Axis], filter: &ExternalFilter) -> bool {
    filter.matches(record) && axes.iter().all(|axis| axis.accepts(record))
}

/// Indices of visible records, ascending.
#[must_use]
pub fn visible_record_indices(
    records: &[Record],
    axes: &[Axis],
    filter: &ExternalFilter,
) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record_visible(record, axes, filter))
        .map(|(index, _)| index)
        .collect()
}

impl<R: Renderer> PcpEngine<R> {
    /// Indices of records currently shown, ascending.
    #[must_use]
    pub fn visible_records(&self) -> Vec<usize> {
        if !self.core.model.status.shows_plot() {
            return Vec::new();
        }
        visible_record_indices(
            &self.core.model.records,
            &self.core.model.axes,
            &self.core.model.external_filter,
        )
    }

    #[must_use]
    pub fn is_record_visible(&self, index: usize) -> bool {
        self.core.model.status.shows_plot()
            && self.core.model.records.get(index).is_some_and(|record| {
                record_visible(
                    record,
                    &self.core.model.axes,
                    &self.core.model.external_filter,
                )
            })
    }
}
