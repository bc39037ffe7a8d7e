use tracing::debug;

use crate::core::{PlotArea, Viewport, build_axes};
use crate::error::PcpResult;
use crate::render::Renderer;

use super::{PcpEngine, PcpEvent};

/// Collapses bursts of resize requests into one rebuild.
///
/// Time is supplied by the caller in milliseconds so the engine never reads
/// a clock itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeDebouncer {
    quiet_period_ms: f64,
    pending: Option<(Viewport, f64)>,
}

impl ResizeDebouncer {
    #[must_use]
    pub fn new(quiet_period_ms: f64) -> Self {
        Self {
            quiet_period_ms,
            pending: None,
        }
    }

    #[must_use]
    pub fn quiet_period_ms(self) -> f64 {
        self.quiet_period_ms
    }

    /// Records a request, restarting the quiet period.
    pub fn request(&mut self, viewport: Viewport, now_ms: f64) {
        self.pending = Some((viewport, now_ms));
    }

    #[must_use]
    pub fn is_pending(self) -> bool {
        self.pending.is_some()
    }

    /// Yields the latest requested viewport once the quiet period elapsed.
    pub fn poll(&mut self, now_ms: f64) -> Option<Viewport> {
        let (viewport, requested_at) = self.pending?;
        if now_ms - requested_at < self.quiet_period_ms {
            return None;
        }
        self.pending = None;
        Some(viewport)
    }
}

impl<R: Renderer> PcpEngine<R> {
    /// Queues a resize; it is applied by [`PcpEngine::poll_resize`].
    pub fn request_resize(&mut self, viewport: Viewport, now_ms: f64) {
        self.core.runtime.resize.request(viewport, now_ms);
    }

    /// Applies a debounced resize when due. Returns `true` when applied.
    pub fn poll_resize(&mut self, now_ms: f64) -> PcpResult<bool> {
        match self.core.runtime.resize.poll(now_ms) {
            Some(viewport) => {
                self.set_viewport(viewport)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Rebuilds the plot for a new surface size.
    ///
    /// Axes return to configured order with fresh scales; brushes, drag and
    /// hover are cleared. The external filter is kept.
    pub fn set_viewport(&mut self, viewport: Viewport) -> PcpResult<()> {
        let config = &self.core.config;
        let area = PlotArea::from_viewport(viewport, config.margins)?;
        let axes = build_axes(
            &config.axes,
            &self.core.model.records,
            area,
            config.category_padding,
        )?;

        self.core.config.viewport = viewport;
        self.core.model.viewport = viewport;
        self.core.model.area = area;
        self.core.model.axes = axes;
        self.core.interaction.reset();
        self.core.runtime.last_view = None;
        self.invalidate_full();
        debug!(
            width = viewport.width,
            height = viewport.height,
            "pcp viewport rebuilt"
        );
        self.emit_plugin_event(PcpEvent::ViewportChanged {
            width: viewport.width,
            height: viewport.height,
        });
        Ok(())
    }
}
