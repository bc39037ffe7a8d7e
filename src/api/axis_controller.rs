use tracing::{debug, trace};

use crate::core::{Axis, Field, PlotArea, Record};
use crate::error::{PcpError, PcpResult};
use crate::interaction::{DragState, axes_in_order};
use crate::render::Renderer;

use super::interaction_validation::validate_pointer_x;
use super::{InvalidationLevel, PcpEngine, PcpEvent};

impl<R: Renderer> PcpEngine<R> {
    /// Axes in configuration order; see [`Axis::order`] for display order.
    #[must_use]
    pub fn axes(&self) -> &[Axis] {
        &self.core.model.axes
    }

    pub fn axis(&self, field: Field) -> PcpResult<&Axis> {
        let index = self.axis_index(field)?;
        Ok(&self.core.model.axes[index])
    }

    /// Axis fields in current display order (left to right).
    #[must_use]
    pub fn axis_order(&self) -> Vec<Field> {
        axes_in_order(&self.core.model.axes)
            .into_iter()
            .map(|index| self.core.model.axes[index].field())
            .collect()
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.core.model.area
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.core.interaction.drag()
    }

    /// Plot-local y of `record` on the axis for `field`.
    pub fn scale_value(&self, field: Field, record: &Record) -> PcpResult<Option<f64>> {
        Ok(self.axis(field)?.sample(record))
    }

    /// Axis whose header box contains the surface point, if any.
    #[must_use]
    pub fn axis_at_header(&self, x_px: f64, y_px: f64) -> Option<Field> {
        let area = self.core.model.area;
        let config = &self.core.config;
        let top = area.origin_y - config.header_offset;
        if y_px < top || y_px > top + config.header_height {
            return None;
        }
        self.core
            .model
            .axes
            .iter()
            .map(|axis| (axis.field(), (area.origin_x + axis.screen_x - x_px).abs()))
            .filter(|(_, distance)| *distance <= config.header_half_width)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(field, _)| field)
    }

    /// Starts dragging the axis for `field`.
    ///
    /// Returns `Ok(false)` when a drag is already in progress.
    pub fn pointer_down_on_axis(&mut self, field: Field, pointer_x_px: f64) -> PcpResult<bool> {
        let index = self.axis_index(field)?;
        let pointer_x = validate_pointer_x(pointer_x_px)? - self.core.model.area.origin_x;
        if !self
            .core
            .interaction
            .begin_drag(&self.core.model.axes, index, pointer_x)
        {
            debug!(field = field.key(), "ignoring pointer down during active drag");
            return Ok(false);
        }
        debug!(field = field.key(), pointer_x, "axis drag started");
        self.update_hover(None);
        self.invalidate(InvalidationLevel::Geometry);
        self.emit_plugin_event(PcpEvent::AxisDragStarted { field });
        Ok(true)
    }

    /// Moves the dragged axis under the pointer. Returns `true` when the
    /// tentative axis order changed.
    pub fn drag_move(&mut self, pointer_x_px: f64) -> PcpResult<bool> {
        let pointer_x = validate_pointer_x(pointer_x_px)? - self.core.model.area.origin_x;
        if !self.core.interaction.drag().is_dragging() {
            return Ok(false);
        }
        let changed = self
            .core
            .interaction
            .drag_to(&mut self.core.model.axes, pointer_x);
        self.invalidate(InvalidationLevel::Geometry);
        if changed {
            trace!(order = ?self.axis_order(), "tentative axis order changed");
            self.emit_plugin_event(PcpEvent::AxisOrderChanged);
        }
        Ok(changed)
    }

    /// Ends the drag and snaps every axis to its slot. No-op while idle.
    pub fn pointer_up(&mut self) -> bool {
        let Some(index) = self.core.interaction.finish_drag() else {
            return false;
        };
        self.core.model.snap_axes();
        self.invalidate(InvalidationLevel::Geometry);
        let field = self.core.model.axes[index].field();
        debug!(field = field.key(), order = ?self.axis_order(), "axis drag finished");
        self.emit_plugin_event(PcpEvent::AxisDragEnded { field });
        true
    }

    /// Abandons the drag and restores the order it started from.
    pub fn cancel_drag(&mut self) -> bool {
        let Some(index) = self
            .core
            .interaction
            .cancel_drag(&mut self.core.model.axes)
        else {
            return false;
        };
        self.core.model.snap_axes();
        self.invalidate(InvalidationLevel::Geometry);
        let field = self.core.model.axes[index].field();
        debug!(field = field.key(), "axis drag cancelled");
        self.emit_plugin_event(PcpEvent::AxisDragEnded { field });
        true
    }

    pub(super) fn axis_index(&self, field: Field) -> PcpResult<usize> {
        self.core
            .model
            .axes
            .iter()
            .position(|axis| axis.field() == field)
            .ok_or_else(|| PcpError::UnknownAxis(field.key().to_owned()))
    }
}
