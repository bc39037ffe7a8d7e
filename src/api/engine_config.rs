use serde::{Deserialize, Serialize};

use crate::core::{AxisSpec, PlotMargins, Viewport, default_dnf_axes, validate_axis_specs};
use crate::error::{PcpError, PcpResult};
use crate::render::Color;

/// Stroke, fill and font settings applied by the frame builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PcpStyle {
    pub line_color: Color,
    pub line_width: f64,
    pub highlight_color: Color,
    pub highlight_width: f64,
    pub axis_color: Color,
    pub axis_width: f64,
    pub text_color: Color,
    pub label_font_px: f64,
    pub tick_font_px: f64,
    pub header_fill: Color,
    pub header_drag_fill: Color,
    pub brush_fill: Color,
    pub brush_border: Color,
}

impl Default for PcpStyle {
    fn default() -> Self {
        Self {
            line_color: Color::rgb8(0x45, 0x75, 0xb4).with_alpha(0.5),
            line_width: 1.5,
            highlight_color: Color::rgb8(0xe1, 0x06, 0x00),
            highlight_width: 3.0,
            axis_color: Color::rgb(1.0, 1.0, 1.0),
            axis_width: 1.5,
            text_color: Color::rgb(1.0, 1.0, 1.0),
            label_font_px: 14.0,
            tick_font_px: 13.0,
            header_fill: Color::rgb8(0x1a, 0x1a, 0x1a).with_alpha(0.8),
            header_drag_fill: Color::rgb8(0x3a, 0x3a, 0x3a).with_alpha(0.9),
            brush_fill: Color::rgb8(0x4a, 0x4a, 0x4a).with_alpha(0.6),
            brush_border: Color::rgb8(0x66, 0x66, 0x66),
        }
    }
}

impl PcpStyle {
    pub fn validate(self) -> PcpResult<Self> {
        for color in [
            self.line_color,
            self.highlight_color,
            self.axis_color,
            self.text_color,
            self.header_fill,
            self.header_drag_fill,
            self.brush_fill,
            self.brush_border,
        ] {
            color.validate()?;
        }
        for (name, value) in [
            ("line_width", self.line_width),
            ("highlight_width", self.highlight_width),
            ("axis_width", self.axis_width),
            ("label_font_px", self.label_font_px),
            ("tick_font_px", self.tick_font_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PcpError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load plot setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcpEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: PlotMargins,
    #[serde(default = "default_dnf_axes")]
    pub axes: Vec<AxisSpec>,
    #[serde(default = "default_curve_tension")]
    pub curve_tension: f64,
    #[serde(default = "default_category_padding")]
    pub category_padding: f64,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default = "default_header_half_width")]
    pub header_half_width: f64,
    #[serde(default = "default_header_height")]
    pub header_height: f64,
    #[serde(default = "default_header_offset")]
    pub header_offset: f64,
    #[serde(default = "default_brush_half_width")]
    pub brush_half_width: f64,
    #[serde(default = "default_hover_tolerance_px")]
    pub hover_tolerance_px: f64,
    #[serde(default = "default_axis_label_max_chars")]
    pub axis_label_max_chars: usize,
    #[serde(default = "default_tick_label_max_chars")]
    pub tick_label_max_chars: usize,
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: f64,
    #[serde(default)]
    pub style: PcpStyle,
}

impl PcpEngineConfig {
    /// Creates a config with the dashboard's default axes and layout.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: PlotMargins::default(),
            axes: default_dnf_axes(),
            curve_tension: default_curve_tension(),
            category_padding: default_category_padding(),
            tick_count: default_tick_count(),
            header_half_width: default_header_half_width(),
            header_height: default_header_height(),
            header_offset: default_header_offset(),
            brush_half_width: default_brush_half_width(),
            hover_tolerance_px: default_hover_tolerance_px(),
            axis_label_max_chars: default_axis_label_max_chars(),
            tick_label_max_chars: default_tick_label_max_chars(),
            resize_debounce_ms: default_resize_debounce_ms(),
            style: PcpStyle::default(),
        }
    }

    /// Replaces the plotted axes, in left-to-right order.
    #[must_use]
    pub fn with_axes(mut self, axes: Vec<AxisSpec>) -> Self {
        self.axes = axes;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: PlotMargins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets cardinal spline tension (`0` = loose curve, `1` = straight segments).
    #[must_use]
    pub fn with_curve_tension(mut self, tension: f64) -> Self {
        self.curve_tension = tension;
        self
    }

    /// Sets outer padding of categorical axes as a fraction of the point step.
    #[must_use]
    pub fn with_category_padding(mut self, padding: f64) -> Self {
        self.category_padding = padding;
        self
    }

    #[must_use]
    pub fn with_hover_tolerance_px(mut self, tolerance: f64) -> Self {
        self.hover_tolerance_px = tolerance;
        self
    }

    #[must_use]
    pub fn with_resize_debounce_ms(mut self, debounce_ms: f64) -> Self {
        self.resize_debounce_ms = debounce_ms;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: PcpStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> PcpResult<()> {
        if !self.viewport.is_valid() {
            return Err(PcpError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.margins.validate()?;
        validate_axis_specs(&self.axes)?;
        if !self.curve_tension.is_finite() || !(0.0..=1.0).contains(&self.curve_tension) {
            return Err(PcpError::InvalidData(
                "curve tension must be finite and in [0, 1]".to_owned(),
            ));
        }
        if !self.category_padding.is_finite() || self.category_padding <= 0.0 {
            return Err(PcpError::InvalidData(
                "category padding must be finite and > 0".to_owned(),
            ));
        }
        if self.tick_count == 0 {
            return Err(PcpError::InvalidData(
                "tick count must be > 0".to_owned(),
            ));
        }
        for (name, value) in [
            ("header_half_width", self.header_half_width),
            ("header_height", self.header_height),
            ("brush_half_width", self.brush_half_width),
            ("hover_tolerance_px", self.hover_tolerance_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PcpError::InvalidData(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        if !self.header_offset.is_finite() || !self.resize_debounce_ms.is_finite() {
            return Err(PcpError::InvalidData(
                "header offset and resize debounce must be finite".to_owned(),
            ));
        }
        if self.resize_debounce_ms < 0.0 {
            return Err(PcpError::InvalidData(
                "resize debounce must be >= 0".to_owned(),
            ));
        }
        if self.axis_label_max_chars == 0 || self.tick_label_max_chars == 0 {
            return Err(PcpError::InvalidData(
                "label truncation lengths must be > 0".to_owned(),
            ));
        }
        self.style.validate()?;
        Ok(())
    }

    pub fn to_json_pretty(&self) -> PcpResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PcpError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> PcpResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PcpError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_curve_tension() -> f64 {
    0.5
}

fn default_category_padding() -> f64 {
    0.5
}

fn default_tick_count() -> usize {
    10
}

fn default_header_half_width() -> f64 {
    75.0
}

fn default_header_height() -> f64 {
    30.0
}

fn default_header_offset() -> f64 {
    38.0
}

fn default_brush_half_width() -> f64 {
    10.0
}

fn default_hover_tolerance_px() -> f64 {
    4.0
}

fn default_axis_label_max_chars() -> usize {
    15
}

fn default_tick_label_max_chars() -> usize {
    10
}

fn default_resize_debounce_ms() -> f64 {
    250.0
}
