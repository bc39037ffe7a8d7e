//! Typed cross-filter channel shared between dashboard widgets.
//!
//! The hosting application owns a [`CrossFilterBus`] and hands clones of it
//! to each widget. Widgets subscribe to get their own event queue and drain
//! it from their event handlers; nothing is global.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::Record;

/// Selection signal announced by another widget (e.g. the circuit map).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CrossFilterEvent {
    CountrySelected { country: String },
    ResetGeoFilters,
}

/// External constraint currently applied to the plot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExternalFilter {
    pub country: Option<String>,
}

impl ExternalFilter {
    /// Applies an event. Returns `true` when the filter changed.
    pub fn apply(&mut self, event: &CrossFilterEvent) -> bool {
        let next = match event {
            CrossFilterEvent::CountrySelected { country } => Some(country.clone()),
            CrossFilterEvent::ResetGeoFilters => None,
        };
        if self.country == next {
            return false;
        }
        self.country = next;
        true
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.country.is_some()
    }

    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        match &self.country {
            None => true,
            Some(country) => record.country.as_deref() == Some(country.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

#[derive(Debug, Default)]
struct BusInner {
    next_id: u64,
    queues: IndexMap<SubscriptionId, VecDeque<CrossFilterEvent>>,
}

/// Single-threaded publish/subscribe channel; clones share one bus.
#[derive(Debug, Clone, Default)]
pub struct CrossFilterBus {
    inner: Rc<RefCell<BusInner>>,
}

impl CrossFilterBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new subscriber whose queue starts empty.
    #[must_use]
    pub fn subscribe(&self) -> CrossFilterSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.queues.insert(id, VecDeque::new());
        trace!(subscription = id.0, "cross-filter subscribe");
        CrossFilterSubscription {
            id,
            bus: Rc::downgrade(&self.inner),
        }
    }

    /// Removes a subscriber. Returns `true` when it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.borrow_mut().queues.shift_remove(&id).is_some()
    }

    /// Queues `event` for every subscriber and returns how many received it.
    pub fn publish(&self, event: CrossFilterEvent) -> usize {
        let mut inner = self.inner.borrow_mut();
        for queue in inner.queues.values_mut() {
            queue.push_back(event.clone());
        }
        trace!(subscribers = inner.queues.len(), ?event, "cross-filter publish");
        inner.queues.len()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().queues.len()
    }
}

/// Receiving end of a bus subscription; unsubscribes on drop.
#[derive(Debug)]
pub struct CrossFilterSubscription {
    id: SubscriptionId,
    bus: Weak<RefCell<BusInner>>,
}

impl CrossFilterSubscription {
    #[must_use]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Takes all pending events in publish order.
    pub fn drain(&self) -> Vec<CrossFilterEvent> {
        let Some(bus) = self.bus.upgrade() else {
            return Vec::new();
        };
        let mut inner = bus.borrow_mut();
        inner
            .queues
            .get_mut(&self.id)
            .map(|queue| queue.drain(..).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.bus
            .upgrade()
            .is_some_and(|bus| bus.borrow().queues.contains_key(&self.id))
    }
}

impl Drop for CrossFilterSubscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.borrow_mut().queues.shift_remove(&self.id);
        }
    }
}
