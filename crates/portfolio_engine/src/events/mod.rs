//! Scene lifecycle events
//! Key principles:
//! - One ordered subscriber list per event kind
//! - Subscribers run synchronously, in registration order
//! - A panicking subscriber is logged and skipped; the rest still run
//! - Subscriptions can be dropped individually or all at once

use crate::foundation::collections::OrderedSlotMap;
use crate::scene::SceneId;
use std::panic::{self, AssertUnwindSafe};

slotmap::new_key_type! {
    /// Handle returned by every subscription
    pub struct SubscriptionId;
}

/// Event kind identification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneEventKind {
    /// The current scene finished changing; arguments are `(new, old)`
    SceneChanged,
    /// A transition was accepted; arguments are `(from, to)`
    TransitionStarted,
    /// A transition fully completed; arguments are `(from, to)`
    TransitionEnded,
}

/// A lifecycle event with its two scene ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneEvent {
    /// See [`SceneEventKind::SceneChanged`]
    SceneChanged {
        /// Scene that is now current
        new: SceneId,
        /// Scene that was current before
        old: SceneId,
    },
    /// See [`SceneEventKind::TransitionStarted`]
    TransitionStarted {
        /// Scene being left
        from: SceneId,
        /// Scene being entered
        to: SceneId,
    },
    /// See [`SceneEventKind::TransitionEnded`]
    TransitionEnded {
        /// Scene that was left
        from: SceneId,
        /// Scene that was entered
        to: SceneId,
    },
}

impl SceneEvent {
    /// Kind of this event
    pub fn kind(&self) -> SceneEventKind {
        match self {
            Self::SceneChanged { .. } => SceneEventKind::SceneChanged,
            Self::TransitionStarted { .. } => SceneEventKind::TransitionStarted,
            Self::TransitionEnded { .. } => SceneEventKind::TransitionEnded,
        }
    }

    /// Arguments in the order subscribers receive them
    pub fn args(&self) -> (&SceneId, &SceneId) {
        match self {
            Self::SceneChanged { new, old } => (new, old),
            Self::TransitionStarted { from, to } | Self::TransitionEnded { from, to } => (from, to),
        }
    }
}

/// Subscriber callback, called with the event's two scene ids
pub type SceneCallback = Box<dyn FnMut(&SceneId, &SceneId)>;

struct Subscriber {
    kind: SceneEventKind,
    callback: SceneCallback,
}

/// Result of emitting one event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Delivery {
    /// Subscribers that returned normally
    pub delivered: usize,
    /// Subscribers that panicked
    pub failed: usize,
}

/// Observer registry for scene lifecycle events
pub struct SceneEventBus {
    subscribers: OrderedSlotMap<SubscriptionId, Subscriber>,
}

impl SceneEventBus {
    /// Create an empty bus
    pub fn new() -> Self {
        Self {
            subscribers: OrderedSlotMap::new(),
        }
    }

    /// Register a callback for one event kind
    pub fn subscribe(&mut self, kind: SceneEventKind, callback: SceneCallback) -> SubscriptionId {
        self.subscribers.insert(Subscriber { kind, callback })
    }

    /// Drop a subscription; returns false for unknown or already removed ids
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id).is_some()
    }

    /// Number of live subscriptions for a kind
    pub fn subscriber_count(&self, kind: SceneEventKind) -> usize {
        self.subscribers.values().filter(|s| s.kind == kind).count()
    }

    /// Deliver an event to every subscriber of its kind
    pub fn emit(&mut self, event: &SceneEvent) -> Delivery {
        let kind = event.kind();
        let (a, b) = event.args();
        let mut delivery = Delivery::default();

        self.subscribers.for_each_mut(|id, subscriber| {
            if subscriber.kind != kind {
                return;
            }
            let callback = &mut subscriber.callback;
            match panic::catch_unwind(AssertUnwindSafe(|| callback(a, b))) {
                Ok(()) => delivery.delivered += 1,
                Err(_) => {
                    log::error!("{:?} subscriber {:?} panicked; continuing with the rest", kind, id);
                    delivery.failed += 1;
                }
            }
        });

        delivery
    }

    /// Remove every subscription
    pub fn clear(&mut self) {
        self.subscribers.clear();
    }
}

impl Default for SceneEventBus {
    fn default() -> Self {
        Self::new()
    }
}
