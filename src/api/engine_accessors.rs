use crate::core::Viewport;
use crate::render::Renderer;

use super::{PcpEngine, PcpEngineConfig};

impl<R: Renderer> PcpEngine<R> {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.core.model.viewport
    }

    #[must_use]
    pub fn config(&self) -> &PcpEngineConfig {
        &self.core.config
    }

    #[must_use]
    pub fn record_count(&self) -> usize {
        self.core.model.records.len()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_records().len()
    }
}
