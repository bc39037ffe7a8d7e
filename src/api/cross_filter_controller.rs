use tracing::{debug, trace};

use crate::filter::{CrossFilterBus, CrossFilterEvent, ExternalFilter};
use crate::render::Renderer;

use super::{InvalidationLevel, PcpEngine, PcpEvent};

impl<R: Renderer> PcpEngine<R> {
    /// Subscribes to `bus`, replacing any previous subscription.
    pub fn attach_cross_filter(&mut self, bus: &CrossFilterBus) {
        let subscription = bus.subscribe();
        debug!(subscription = ?subscription.id(), "cross-filter attached");
        self.core.runtime.subscription = Some(subscription);
    }

    /// Drops the bus subscription. Returns `true` when one was held.
    pub fn detach_cross_filter(&mut self) -> bool {
        self.core.runtime.subscription.take().is_some()
    }

    #[must_use]
    pub fn is_cross_filter_attached(&self) -> bool {
        self.core
            .runtime
            .subscription
            .as_ref()
            .is_some_and(|subscription| subscription.is_connected())
    }

    /// Applies pending bus events in publish order. Returns `true` when the
    /// external filter ended up changing at least once.
    pub fn sync_cross_filter(&mut self) -> bool {
        let Some(subscription) = &self.core.runtime.subscription else {
            return false;
        };
        let events = subscription.drain();
        let mut changed = false;
        for event in &events {
            changed |= self.apply_cross_filter_event(event);
        }
        changed
    }

    /// Applies one event directly, bypassing the bus.
    pub fn apply_cross_filter_event(&mut self, event: &CrossFilterEvent) -> bool {
        if !self.core.model.external_filter.apply(event) {
            trace!(?event, "cross-filter event left filter unchanged");
            return false;
        }
        debug!(country = ?self.core.model.external_filter.country, "external filter changed");
        self.invalidate(InvalidationLevel::Visibility);
        self.emit_plugin_event(PcpEvent::ExternalFilterChanged);
        self.clear_hidden_hover();
        true
    }

    #[must_use]
    pub fn external_filter(&self) -> &ExternalFilter {
        &self.core.model.external_filter
    }

    /// Whether a country filter is active; hosts use it to show a reset
    /// control.
    #[must_use]
    pub fn external_filter_active(&self) -> bool {
        self.core.model.external_filter.is_active()
    }
}
