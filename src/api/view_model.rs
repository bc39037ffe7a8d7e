use crate::core::{Axis, AxisKind, AxisScale, BrushInterval, Field, PlotArea};
use crate::interaction::{InteractionState, axes_in_order};
use crate::render::PathVisibility;

use super::plot_model::{PlotModel, PlotStatus};
use super::polyline_projection::{SampleVec, project_polylines};
use super::visibility::record_visible;

#[derive(Debug, Clone, PartialEq)]
pub struct TickView {
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisView {
    pub field: Field,
    pub label: String,
    pub kind: AxisKind,
    pub x: f64,
    pub order: usize,
    pub brush: Option<BrushInterval>,
    pub ticks: Vec<TickView>,
    pub dragging: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolylineView {
    pub record: usize,
    pub samples: SampleVec,
    pub visible: bool,
    pub hovered: bool,
}

/// Declarative description of what the plot currently shows.
///
/// Derived from engine state on every render; the previous instance is kept
/// so the next render can be reduced to visibility toggles.
#[derive(Debug, Clone, PartialEq)]
pub struct PcpViewModel {
    pub area: PlotArea,
    pub status: PlotStatus,
    /// Axes in display order.
    pub axes: Vec<AxisView>,
    /// One entry per loaded record, indexed by record position.
    pub polylines: Vec<PolylineView>,
}

/// Minimal change set between two view models.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewModelDiff {
    Unchanged,
    Visibility(Vec<PathVisibility>),
    Rebuild,
}

impl PcpViewModel {
    pub(super) fn derive(
        model: &PlotModel,
        interaction: &InteractionState,
        tick_count: usize,
    ) -> Self {
        let dragged = interaction.drag().dragged_axis();
        let axes = axes_in_order(&model.axes)
            .into_iter()
            .map(|index| axis_view(&model.axes[index], tick_count, dragged == Some(index)))
            .collect();

        let polylines = if model.status.shows_plot() {
            let hovered = interaction.hovered_record();
            project_polylines(&model.records, &model.axes)
                .into_iter()
                .enumerate()
                .map(|(record, samples)| PolylineView {
                    record,
                    samples,
                    visible: record_visible(
                        &model.records[record],
                        &model.axes,
                        &model.external_filter,
                    ),
                    hovered: hovered == Some(record),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            area: model.area,
            status: model.status.clone(),
            axes,
            polylines,
        }
    }

    /// Changes needed to go from `previous` to `self`.
    ///
    /// Polyline visibility and brush intervals can be updated in place;
    /// anything else forces a rebuild.
    #[must_use]
    pub fn diff(&self, previous: &Self) -> ViewModelDiff {
        if self.area != previous.area
            || self.status != previous.status
            || self.polylines.len() != previous.polylines.len()
            || self.axes.len() != previous.axes.len()
        {
            return ViewModelDiff::Rebuild;
        }
        let axes_match = self.axes.iter().zip(&previous.axes).all(|(next, prev)| {
            next.field == prev.field
                && next.x == prev.x
                && next.dragging == prev.dragging
                && next.ticks == prev.ticks
        });
        if !axes_match {
            return ViewModelDiff::Rebuild;
        }

        let mut changes = Vec::new();
        for (next, prev) in self.polylines.iter().zip(&previous.polylines) {
            if next.samples != prev.samples || next.hovered != prev.hovered {
                return ViewModelDiff::Rebuild;
            }
            if next.visible != prev.visible {
                changes.push(PathVisibility {
                    id: next.record,
                    visible: next.visible,
                });
            }
        }
        let brushes_match = self
            .axes
            .iter()
            .zip(&previous.axes)
            .all(|(next, prev)| next.brush == prev.brush);
        if changes.is_empty() && brushes_match {
            ViewModelDiff::Unchanged
        } else {
            ViewModelDiff::Visibility(changes)
        }
    }
}

fn axis_view(axis: &Axis, tick_count: usize, dragging: bool) -> AxisView {
    let ticks = match &axis.scale {
        AxisScale::Linear(scale) => scale
            .ticks(tick_count)
            .into_iter()
            .map(|value| TickView {
                y: scale.map(value),
                label: scale.format_tick(value, tick_count),
            })
            .collect(),
        AxisScale::Point(scale) => scale
            .domain()
            .iter()
            .filter_map(|category| {
                scale.position(category).map(|y| TickView {
                    y,
                    label: category.clone(),
                })
            })
            .collect(),
    };
    AxisView {
        field: axis.spec.field,
        label: axis.spec.label.clone(),
        kind: axis.spec.kind,
        x: axis.screen_x,
        order: axis.order,
        brush: axis.brush,
        ticks,
        dragging,
    }
}
