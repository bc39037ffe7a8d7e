mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, PathPrimitive, PathVisibility, RectPrimitive, TextHAlign, TextPrimitive,
    VisibilityUpdate,
};

use crate::error::PcpResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from plot state and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> PcpResult<()>;

    /// Toggles visibility of already drawn paths and swaps brush overlays
    /// without rebuilding geometry.
    ///
    /// Returns `false` when the backend cannot update in place; the engine
    /// then falls back to a full `render`.
    fn apply_visibility(&mut self, update: &VisibilityUpdate) -> PcpResult<bool> {
        let _ = update;
        Ok(false)
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
