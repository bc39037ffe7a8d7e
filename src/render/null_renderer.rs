use crate::error::PcpResult;
use crate::render::{RenderFrame, Renderer, VisibilityUpdate};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content and mirrors per-path visibility so tests
/// can observe in-place toggles without a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_path_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_brush_count: usize,
    pub full_render_count: usize,
    pub visibility_update_count: usize,
    path_visibility: Vec<bool>,
}

impl NullRenderer {
    /// Number of paths currently shown after the last render or toggle.
    #[must_use]
    pub fn visible_path_count(&self) -> usize {
        self.path_visibility.iter().filter(|visible| **visible).count()
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PcpResult<()> {
        frame.validate()?;
        self.last_path_count = frame.paths.len();
        self.last_line_count = frame.lines.len();
        self.last_text_count = frame.texts.len();
        self.last_brush_count = frame.brushes.len();
        self.full_render_count += 1;
        let slots = frame.paths.iter().map(|path| path.id + 1).max().unwrap_or(0);
        self.path_visibility = vec![false; slots];
        for path in &frame.paths {
            self.path_visibility[path.id] = path.visible;
        }
        Ok(())
    }

    fn apply_visibility(&mut self, update: &VisibilityUpdate) -> PcpResult<bool> {
        update.validate()?;
        if update
            .paths
            .iter()
            .any(|change| change.id >= self.path_visibility.len())
        {
            return Ok(false);
        }
        for change in &update.paths {
            self.path_visibility[change.id] = change.visible;
        }
        self.last_brush_count = update.brushes.len();
        self.visibility_update_count += 1;
        Ok(true)
    }
}
