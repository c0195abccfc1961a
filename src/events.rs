//! Scroll event hub with scoped subscriptions.
//!
//! egui has no scroll listeners: the host samples the scroll offset every
//! frame. [`ScrollHub::observe`] turns those samples back into discrete scroll
//! events, publishing only when the offset or viewport size changed. A width
//! change reflows the page and moves every section, so it counts as well.
//!
//! Subscribers hold a [`ScrollSubscription`]. Dropping it removes the listener
//! from the hub, so a torn-down controller can never receive events.

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::{Rc, Weak};

/// A single scroll (or resize) observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    /// Vertical scroll offset of the page in points.
    pub offset: f32,
    /// Width of the visible viewport in points.
    pub viewport_width: f32,
    /// Height of the visible viewport in points.
    pub viewport_height: f32,
}

impl ScrollEvent {
    /// Vertical center of the viewport, in viewport coordinates.
    pub fn midpoint(&self) -> f32 {
        self.viewport_height / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct ListenerId(u64);

#[derive(Debug, Default)]
struct HubInner {
    next_id: u64,
    listeners: BTreeMap<ListenerId, VecDeque<ScrollEvent>>,
    last: Option<ScrollEvent>,
}

/// Single-threaded publisher of scroll events.
///
/// Cloning yields another handle to the same hub.
#[derive(Debug, Clone, Default)]
pub struct ScrollHub {
    inner: Rc<RefCell<HubInner>>,
}

impl ScrollHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new listener.
    pub fn subscribe(&self) -> ScrollSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.insert(id, VecDeque::new());
        tracing::trace!(listener = id.0, "scroll listener attached");

        ScrollSubscription {
            id,
            hub: Rc::downgrade(&self.inner),
        }
    }

    /// Samples the current scroll state.
    ///
    /// Publishes a [`ScrollEvent`] when this is the first sample or when the
    /// offset or either viewport dimension differs from the previous sample.
    /// Returns whether an event was published.
    pub fn observe(&self, offset: f32, viewport_width: f32, viewport_height: f32) -> bool {
        let event = ScrollEvent {
            offset,
            viewport_width,
            viewport_height,
        };
        let changed = self.inner.borrow().last != Some(event);
        if changed {
            self.publish(event);
        }
        changed
    }

    /// Queues an event for every live listener, in publish order.
    pub fn publish(&self, event: ScrollEvent) {
        let mut inner = self.inner.borrow_mut();
        inner.last = Some(event);
        for queue in inner.listeners.values_mut() {
            queue.push_back(event);
        }
    }

    /// Number of currently attached listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Scoped registration with a [`ScrollHub`].
///
/// The listener stays attached for as long as this value lives.
#[derive(Debug)]
pub struct ScrollSubscription {
    id: ListenerId,
    hub: Weak<RefCell<HubInner>>,
}

impl ScrollSubscription {
    /// Returns true while the hub is alive.
    pub fn is_attached(&self) -> bool {
        self.hub.strong_count() > 0
    }

    /// Takes all queued events, oldest first.
    pub fn drain(&self) -> Vec<ScrollEvent> {
        let Some(hub) = self.hub.upgrade() else {
            return Vec::new();
        };
        let mut inner = hub.borrow_mut();
        let events = inner
            .listeners
            .get_mut(&self.id)
            .map(|queue| queue.drain(..).collect())
            .unwrap_or_default();
        events
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            hub.borrow_mut().listeners.remove(&self.id);
            tracing::trace!(listener = self.id.0, "scroll listener detached");
        }
    }
}
