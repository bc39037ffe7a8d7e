use tracing::trace;

use crate::error::PcpResult;
use crate::render::{RenderFrame, Renderer, VisibilityUpdate};

use super::render_frame_builder::{brush_rects, build_render_frame};
use super::{InvalidationLevel, PcpEngine, PcpEvent, PcpViewModel, ViewModelDiff};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

pub(super) struct RenderCoordinator;

impl RenderCoordinator {
    pub(super) fn render<R: Renderer>(engine: &mut PcpEngine<R>) -> PcpResult<()> {
        let view = engine.view_model();
        if engine.core.runtime.invalidation == InvalidationLevel::Visibility
            && Self::try_render_visibility(engine, &view)?
        {
            Self::finish(engine, view);
            return Ok(());
        }

        let frame = build_render_frame(&view, &engine.core.config, engine.core.model.viewport);
        engine.renderer.render(&frame)?;
        trace!(
            paths = frame.paths.len(),
            visible = frame.visible_path_count(),
            "full render"
        );
        Self::finish(engine, view);
        Ok(())
    }

    /// Applies `view` as in-place toggles when it differs from the last
    /// rendered view only in visibility and brushes.
    fn try_render_visibility<R: Renderer>(
        engine: &mut PcpEngine<R>,
        view: &PcpViewModel,
    ) -> PcpResult<bool> {
        let Some(previous) = engine.core.runtime.last_view.as_ref() else {
            return Ok(false);
        };
        let paths = match view.diff(previous) {
            ViewModelDiff::Unchanged => {
                trace!("render skipped, view unchanged");
                return Ok(true);
            }
            ViewModelDiff::Visibility(paths) => paths,
            ViewModelDiff::Rebuild => return Ok(false),
        };
        let update = VisibilityUpdate {
            brushes: brush_rects(view, &engine.core.config),
            paths,
        };
        let applied = engine.renderer.apply_visibility(&update)?;
        if applied {
            trace!(toggled = update.paths.len(), "visibility-only render");
        }
        Ok(applied)
    }

    fn finish<R: Renderer>(engine: &mut PcpEngine<R>, view: PcpViewModel) {
        engine.core.runtime.last_view = Some(view);
        engine.clear_pending_invalidation();
        engine.emit_plugin_event(PcpEvent::Rendered);
    }

    #[cfg(feature = "cairo-backend")]
    pub(super) fn render_on_cairo_context<R: Renderer + CairoContextRenderer>(
        engine: &mut PcpEngine<R>,
        context: &cairo::Context,
    ) -> PcpResult<()> {
        let view = engine.view_model();
        let frame = build_render_frame(&view, &engine.core.config, engine.core.model.viewport);
        engine.renderer.render_on_cairo_context(context, &frame)?;
        Self::finish(engine, view);
        Ok(())
    }
}

impl<R: Renderer> PcpEngine<R> {
    /// Derives the declarative view of the current state.
    #[must_use]
    pub fn view_model(&self) -> PcpViewModel {
        PcpViewModel::derive(
            &self.core.model,
            &self.core.interaction,
            self.core.config.tick_count,
        )
    }

    /// Builds the frame a full render would draw, without rendering it.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        build_render_frame(
            &self.view_model(),
            &self.core.config,
            self.core.model.viewport,
        )
    }

    /// View model from the last render, if any.
    #[must_use]
    pub fn last_rendered_view(&self) -> Option<&PcpViewModel> {
        self.core.runtime.last_view.as_ref()
    }
}
