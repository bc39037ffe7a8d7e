use crate::core::{PlotArea, Viewport, cardinal_path};
use crate::render::{
    LinePrimitive, PathPrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::label_format::truncate_label;
use super::plot_model::PlotStatus;
use super::{PcpEngineConfig, PcpViewModel};

const TICK_LENGTH_PX: f64 = 6.0;
const TICK_LABEL_GAP_PX: f64 = 3.0;
const HEADER_LABEL_BASELINE_PX: f64 = 20.0;
const HEADER_CORNER_RADIUS_PX: f64 = 6.0;

/// Materializes `view` into pixel-space primitives.
#[must_use]
pub(super) fn build_render_frame(
    view: &PcpViewModel,
    config: &PcpEngineConfig,
    viewport: Viewport,
) -> RenderFrame {
    let mut frame = RenderFrame::new(viewport);

    match &view.status {
        PlotStatus::Loading => {
            frame.texts.push(status_text("Loading data...", viewport, config));
            return frame;
        }
        PlotStatus::Failed { message } => {
            frame.texts.push(status_text(
                &format!("Failed to load data: {message}"),
                viewport,
                config,
            ));
            return frame;
        }
        PlotStatus::Idle | PlotStatus::Ready => {}
    }

    let area = view.area;
    let style = config.style;

    // Hovered line last so it draws over its neighbours.
    let ordered = view
        .polylines
        .iter()
        .filter(|polyline| !polyline.hovered)
        .chain(view.polylines.iter().filter(|polyline| polyline.hovered));
    for polyline in ordered {
        let commands = cardinal_path(&polyline.samples, config.curve_tension)
            .into_iter()
            .map(|command| command.translated(area.origin_x, area.origin_y))
            .collect();
        let (color, stroke_width) = if polyline.hovered {
            (style.highlight_color, style.highlight_width)
        } else {
            (style.line_color, style.line_width)
        };
        frame.paths.push(PathPrimitive {
            id: polyline.record,
            commands,
            stroke_width,
            color,
            visible: polyline.visible,
        });
    }

    for axis in &view.axes {
        let x = area.origin_x + axis.x;
        frame.lines.push(LinePrimitive::new(
            x,
            area.origin_y,
            x,
            area.origin_y + area.height,
            style.axis_width,
            style.axis_color,
        ));

        for tick in &axis.ticks {
            let y = area.origin_y + tick.y;
            frame.lines.push(LinePrimitive::new(
                x - TICK_LENGTH_PX,
                y,
                x,
                y,
                style.axis_width,
                style.axis_color,
            ));
            let label = truncate_label(&tick.label, config.tick_label_max_chars);
            if !label.is_empty() {
                frame.texts.push(TextPrimitive::new(
                    label,
                    x - TICK_LENGTH_PX - TICK_LABEL_GAP_PX,
                    y,
                    style.tick_font_px,
                    style.text_color,
                    TextHAlign::Right,
                ));
            }
        }

        let header_fill = if axis.dragging {
            style.header_drag_fill
        } else {
            style.header_fill
        };
        frame.rects.push(
            RectPrimitive::new(
                x - config.header_half_width,
                area.origin_y - config.header_offset,
                config.header_half_width * 2.0,
                config.header_height,
                header_fill,
            )
            .with_corner_radius(HEADER_CORNER_RADIUS_PX),
        );
        let header = truncate_label(&axis.label, config.axis_label_max_chars).to_uppercase();
        if !header.is_empty() {
            frame.texts.push(TextPrimitive::new(
                header,
                x,
                area.origin_y - HEADER_LABEL_BASELINE_PX,
                style.label_font_px,
                style.text_color,
                TextHAlign::Center,
            ));
        }
    }

    frame.brushes = brush_rects(view, config);
    frame
}

/// Selection rectangles for every brushed axis.
#[must_use]
pub(super) fn brush_rects(view: &PcpViewModel, config: &PcpEngineConfig) -> Vec<RectPrimitive> {
    if !view.status.shows_plot() {
        return Vec::new();
    }
    let area: PlotArea = view.area;
    view.axes
        .iter()
        .filter_map(|axis| {
            let brush = axis.brush?;
            Some(
                RectPrimitive::new(
                    area.origin_x + axis.x - config.brush_half_width,
                    area.origin_y + brush.y0,
                    config.brush_half_width * 2.0,
                    brush.y1 - brush.y0,
                    config.style.brush_fill,
                )
                .with_border(1.0, config.style.brush_border),
            )
        })
        .collect()
}

fn status_text(message: &str, viewport: Viewport, config: &PcpEngineConfig) -> TextPrimitive {
    TextPrimitive::new(
        message,
        f64::from(viewport.width) / 2.0,
        f64::from(viewport.height) / 2.0,
        config.style.label_font_px,
        config.style.text_color,
        TextHAlign::Center,
    )
}
