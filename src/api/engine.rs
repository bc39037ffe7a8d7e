use crate::error::PcpResult;
use crate::render::Renderer;

use super::{engine_core::EngineCore, render_coordinator::RenderCoordinator};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `PcpEngine` owns the record set, the axes and their drag/brush state, the
/// external cross-filter, and drives renderer calls. Every mutation is a
/// synchronous call made from the host's UI event handlers.
///
/// Coordinates: pointer methods take surface pixels; axis positions, brush
/// intervals and scale outputs are plot-local (origin at the top-left corner
/// of the drawable area, see [`PcpEngine::plot_area`]).
pub struct PcpEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> PcpEngine<R> {
    /// Renders whatever is pending, using in-place visibility toggles when
    /// only brush or filter state changed since the last frame.
    pub fn render(&mut self) -> PcpResult<()> {
        RenderCoordinator::render(self)
    }

    /// Renders only when something was invalidated. Returns `true` when a
    /// render happened.
    pub fn render_if_invalidated(&mut self) -> PcpResult<bool> {
        if !self.has_pending_invalidation() {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }

    /// Renders the frame into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> PcpResult<()>
    where
        R: CairoContextRenderer,
    {
        RenderCoordinator::render_on_cairo_context(self, context)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
