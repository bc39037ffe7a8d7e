use tracing::debug;

use crate::core::{AxisScale, BrushInterval, Field};
use crate::error::{PcpError, PcpResult};
use crate::interaction::normalize_brush;
use crate::render::Renderer;

use super::{InvalidationLevel, PcpEngine, PcpEvent};

impl<R: Renderer> PcpEngine<R> {
    /// Sets the brush on `field` from plot-local y coordinates.
    ///
    /// Endpoints may come in either order and are clamped to the plot
    /// height; a zero-width interval clears the brush. Returns `true` when
    /// the stored brush changed.
    pub fn set_brush(&mut self, field: Field, y0: f64, y1: f64) -> PcpResult<bool> {
        let index = self.axis_index(field)?;
        let brush = normalize_brush(y0, y1, self.core.model.area.height)?;
        Ok(self.store_brush(index, brush))
    }

    /// Brushes a numeric axis by data values instead of pixels.
    pub fn set_brush_domain(&mut self, field: Field, low: f64, high: f64) -> PcpResult<bool> {
        let index = self.axis_index(field)?;
        let (y0, y1) = match &self.core.model.axes[index].scale {
            AxisScale::Linear(scale) => (scale.map(low), scale.map(high)),
            AxisScale::Point(_) => {
                return Err(PcpError::InvalidData(format!(
                    "axis `{}` is categorical; brush it in pixels",
                    field.key()
                )));
            }
        };
        self.set_brush(field, y0, y1)
    }

    pub fn clear_brush(&mut self, field: Field) -> PcpResult<bool> {
        let index = self.axis_index(field)?;
        Ok(self.store_brush(index, None))
    }

    /// Clears every brush. Returns `true` when at least one was set.
    pub fn clear_all_brushes(&mut self) -> bool {
        let mut changed = false;
        for index in 0..self.core.model.axes.len() {
            changed |= self.store_brush(index, None);
        }
        changed
    }

    pub fn brush(&self, field: Field) -> PcpResult<Option<BrushInterval>> {
        Ok(self.axis(field)?.brush)
    }

    /// Fields with an active brush, in configuration order.
    #[must_use]
    pub fn brushed_axes(&self) -> Vec<Field> {
        self.core
            .model
            .axes
            .iter()
            .filter(|axis| axis.brush.is_some())
            .map(|axis| axis.field())
            .collect()
    }

    fn store_brush(&mut self, index: usize, brush: Option<BrushInterval>) -> bool {
        let axis = &mut self.core.model.axes[index];
        if axis.brush == brush {
            return false;
        }
        axis.brush = brush;
        let field = axis.field();
        debug!(field = field.key(), ?brush, "brush changed");
        self.invalidate(InvalidationLevel::Visibility);
        self.emit_plugin_event(PcpEvent::BrushChanged { field });
        self.clear_hidden_hover();
        true
    }
}
