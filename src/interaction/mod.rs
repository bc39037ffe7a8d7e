use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{Axis, BrushInterval};
use crate::error::{PcpError, PcpResult};

/// Axis reorder state machine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Index of the dragged axis in configuration order.
        axis: usize,
        /// Pointer x minus the axis x at pointer-down.
        pointer_offset: f64,
        /// Axis x at pointer-down, used when a drag is cancelled.
        origin_x: f64,
    },
}

impl DragState {
    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    #[must_use]
    pub fn dragged_axis(self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Dragging { axis, .. } => Some(axis),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    drag: DragState,
    pre_drag_order: Vec<usize>,
    hovered_record: Option<usize>,
    cursor: Option<(f64, f64)>,
}

impl InteractionState {
    #[must_use]
    pub fn drag(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn hovered_record(&self) -> Option<usize> {
        self.hovered_record
    }

    #[must_use]
    pub fn cursor(&self) -> Option<(f64, f64)> {
        self.cursor
    }

    /// Enters `Dragging` for `axis`. Returns `false` while another drag is active.
    pub fn begin_drag(&mut self, axes: &[Axis], axis: usize, pointer_x: f64) -> bool {
        if self.drag.is_dragging() {
            return false;
        }
        let Some(target) = axes.get(axis) else {
            return false;
        };
        self.pre_drag_order = axes.iter().map(|axis| axis.order).collect();
        self.drag = DragState::Dragging {
            axis,
            pointer_offset: pointer_x - target.screen_x,
            origin_x: target.screen_x,
        };
        true
    }

    /// Moves the dragged axis under the pointer and re-derives tentative order.
    ///
    /// Returns `true` when the tentative order changed.
    pub fn drag_to(&mut self, axes: &mut [Axis], pointer_x: f64) -> bool {
        let DragState::Dragging {
            axis,
            pointer_offset,
            ..
        } = self.drag
        else {
            return false;
        };
        if let Some(target) = axes.get_mut(axis) {
            target.screen_x = pointer_x - pointer_offset;
        }
        reorder_by_screen_x(axes)
    }

    /// Leaves `Dragging`, keeping the order from the last move.
    pub fn finish_drag(&mut self) -> Option<usize> {
        let axis = self.drag.dragged_axis()?;
        self.drag = DragState::Idle;
        self.pre_drag_order.clear();
        Some(axis)
    }

    /// Leaves `Dragging` and puts every axis back in its pre-drag order.
    pub fn cancel_drag(&mut self, axes: &mut [Axis]) -> Option<usize> {
        let DragState::Dragging { axis, origin_x, .. } = self.drag else {
            return None;
        };
        for (target, order) in axes.iter_mut().zip(self.pre_drag_order.drain(..)) {
            target.order = order;
        }
        if let Some(target) = axes.get_mut(axis) {
            target.screen_x = origin_x;
        }
        self.drag = DragState::Idle;
        Some(axis)
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = None;
        self.hovered_record = None;
    }

    pub fn set_hovered_record(&mut self, record: Option<usize>) -> bool {
        let changed = self.hovered_record != record;
        self.hovered_record = record;
        changed
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Assigns `order` by ascending screen x. Ties keep their previous order.
///
/// Returns `true` when any axis changed position in the order.
pub fn reorder_by_screen_x(axes: &mut [Axis]) -> bool {
    let mut indices: Vec<usize> = (0..axes.len()).collect();
    indices.sort_by_key(|&index| axes[index].order);
    indices.sort_by_key(|&index| OrderedFloat(axes[index].screen_x));

    let mut changed = false;
    for (order, index) in indices.into_iter().enumerate() {
        if axes[index].order != order {
            axes[index].order = order;
            changed = true;
        }
    }
    changed
}

/// Indices of `axes` sorted by their current `order`.
#[must_use]
pub fn axes_in_order(axes: &[Axis]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..axes.len()).collect();
    indices.sort_by_key(|&index| axes[index].order);
    indices
}

/// Normalizes a raw brush gesture into a stored interval.
///
/// Endpoints are swapped into ascending order and clamped to `[0, height]`;
/// a zero-width selection means "no brush".
pub fn normalize_brush(y0: f64, y1: f64, height: f64) -> PcpResult<Option<BrushInterval>> {
    if !y0.is_finite() || !y1.is_finite() {
        return Err(PcpError::InvalidData(
            "brush coordinates must be finite".to_owned(),
        ));
    }
    let (low, high) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
    let low = low.clamp(0.0, height);
    let high = high.clamp(0.0, height);
    if low == high {
        return Ok(None);
    }
    Ok(Some(BrushInterval { y0: low, y1: high }))
}
