use serde::{Deserialize, Serialize};

use crate::core::{Axis, PlotArea, Record, Viewport, build_axes};
use crate::error::PcpResult;
use crate::filter::ExternalFilter;

use super::PcpEngineConfig;

/// Lifecycle of the plotted data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum PlotStatus {
    /// No load has been requested; axes render over an empty record set.
    #[default]
    Idle,
    Loading,
    Ready,
    Failed { message: String },
}

impl PlotStatus {
    /// Whether the frame shows the plot itself rather than a status message.
    #[must_use]
    pub fn shows_plot(&self) -> bool {
        matches!(self, Self::Idle | Self::Ready)
    }
}

/// Plot data owned by the engine between (re)initializations.
pub(super) struct PlotModel {
    pub(super) viewport: Viewport,
    pub(super) area: PlotArea,
    pub(super) records: Vec<Record>,
    pub(super) axes: Vec<Axis>,
    pub(super) status: PlotStatus,
    pub(super) external_filter: ExternalFilter,
}

impl PlotModel {
    pub(super) fn new(config: &PcpEngineConfig) -> PcpResult<Self> {
        let area = PlotArea::from_viewport(config.viewport, config.margins)?;
        let axes = build_axes(&config.axes, &[], area, config.category_padding)?;
        Ok(Self {
            viewport: config.viewport,
            area,
            records: Vec::new(),
            axes,
            status: PlotStatus::Idle,
            external_filter: ExternalFilter::default(),
        })
    }

    /// Rebuilds axes from scratch: configured order, even spacing, no brushes.
    pub(super) fn rebuild_axes(&mut self, config: &PcpEngineConfig) -> PcpResult<()> {
        self.axes = build_axes(
            &config.axes,
            &self.records,
            self.area,
            config.category_padding,
        )?;
        Ok(())
    }

    /// Moves every axis to the evenly spaced slot of its current order.
    pub(super) fn snap_axes(&mut self) {
        let count = self.axes.len();
        for axis in &mut self.axes {
            axis.screen_x = self.area.slot_x(axis.order, count);
        }
    }
}
