use serde::{Deserialize, Serialize};

use crate::render::Renderer;

use super::PcpEngine;

/// Ordered repaint classes.
///
/// `Visibility` means only polyline show/hide flags changed, which backends
/// can apply in place. Anything above needs a rebuilt frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum InvalidationLevel {
    #[default]
    None,
    Visibility,
    Hover,
    Geometry,
    Full,
}

impl InvalidationLevel {
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self as u8 >= other as u8 {
            self
        } else {
            other
        }
    }
}

impl<R: Renderer> PcpEngine<R> {
    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationLevel {
        self.core.runtime.invalidation
    }

    #[must_use]
    pub fn has_pending_invalidation(&self) -> bool {
        self.core.runtime.invalidation != InvalidationLevel::None
    }

    pub fn clear_pending_invalidation(&mut self) {
        self.core.runtime.invalidation = InvalidationLevel::None;
    }

    pub(super) fn invalidate(&mut self, level: InvalidationLevel) {
        self.core.runtime.invalidation = self.core.runtime.invalidation.max(level);
    }

    pub(super) fn invalidate_full(&mut self) {
        self.invalidate(InvalidationLevel::Full);
    }
}
