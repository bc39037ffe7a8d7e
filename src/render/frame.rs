use crate::core::Viewport;
use crate::error::{PcpError, PcpResult};
use crate::render::{
    LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive, VisibilityUpdate,
};

/// Backend-agnostic scene for one plot draw pass.
///
/// Backends draw paths first, then lines, rects, brushes and texts, so axes
/// and headers sit on top of the record polylines.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub paths: Vec<PathPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub brushes: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            paths: Vec::new(),
            lines: Vec::new(),
            rects: Vec::new(),
            brushes: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: PathPrimitive) -> Self {
        self.paths.push(path);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    pub fn validate(&self) -> PcpResult<()> {
        if !self.viewport.is_valid() {
            return Err(PcpError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for path in &self.paths {
            path.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for rect in self.rects.iter().chain(&self.brushes) {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
            && self.lines.is_empty()
            && self.rects.is_empty()
            && self.brushes.is_empty()
            && self.texts.is_empty()
    }

    /// Applies an in-place update to this frame's paths and brushes.
    pub fn apply_visibility(&mut self, update: &VisibilityUpdate) {
        for change in &update.paths {
            if let Some(path) = self.paths.iter_mut().find(|path| path.id == change.id) {
                path.visible = change.visible;
            }
        }
        self.brushes.clone_from(&update.brushes);
    }

    #[must_use]
    pub fn visible_path_count(&self) -> usize {
        self.paths.iter().filter(|path| path.visible).count()
    }
}
