use serde::{Deserialize, Serialize};

use crate::error::{PcpError, PcpResult};

/// Outer pixel size of the render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the drawable plot area for headers and tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotMargins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self {
            top: 60.0,
            right: 80.0,
            bottom: 80.0,
            left: 80.0,
        }
    }
}

impl PlotMargins {
    pub fn validate(self) -> PcpResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PcpError::InvalidData(format!(
                    "plot margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Drawable area in plot-local coordinates.
///
/// Axis positions and scale ranges are expressed relative to `(origin_x,
/// origin_y)`; the render frame adds the origin back when emitting primitives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn from_viewport(viewport: Viewport, margins: PlotMargins) -> PcpResult<Self> {
        if !viewport.is_valid() {
            return Err(PcpError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let width = f64::from(viewport.width) - margins.left - margins.right;
        let height = f64::from(viewport.height) - margins.top - margins.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(PcpError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(Self {
            origin_x: margins.left,
            origin_y: margins.top,
            width,
            height,
        })
    }

    /// Horizontal slot for axis `index` out of `axis_count` evenly spaced axes.
    #[must_use]
    pub fn slot_x(self, index: usize, axis_count: usize) -> f64 {
        if axis_count <= 1 {
            return 0.0;
        }
        index as f64 * (self.width / (axis_count - 1) as f64)
    }
}
