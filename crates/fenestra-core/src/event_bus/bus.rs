//! Event bus.
//!
//! A bus is a plain value handed to the views and managers that publish on
//! it, usually behind an `Arc`. Synchronous handlers run on the publishing
//! thread; async consumers poll a broadcast receiver.

use parking_lot::{Mutex, RwLock};
use std::collections::VecDeque;
use tokio::sync::broadcast;
use uuid::Uuid;

use super::events::{AppEvent, EventCategory};

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.simple().to_string()[..8])
    }
}

/// Which events a handler wants.
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    #[default]
    All,
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    pub fn matches(&self, event: &AppEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

type Handler = Box<dyn Fn(&AppEvent) + Send + Sync>;

struct Subscription {
    id: SubscriptionId,
    filter: EventFilter,
    handler: Handler,
}

#[derive(Debug, Clone)]
pub struct EventBusConfig {
    /// Slots in the broadcast channel; slow async receivers lag past this.
    pub channel_capacity: usize,
    /// Keep published events for [`EventBus::history`].
    pub enable_history: bool,
    pub max_history_size: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 256,
            enable_history: false,
            max_history_size: 500,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EventBusError {
    #[error("No active subscribers")]
    NoSubscribers,
}

#[derive(Default)]
struct History {
    next_seq: u64,
    events: VecDeque<(u64, AppEvent)>,
}

/// Publish/subscribe hub for engine events.
pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
    subscriptions: RwLock<Vec<Subscription>>,
    history: Mutex<History>,
    config: EventBusConfig,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_config(EventBusConfig::default())
    }

    pub fn with_config(config: EventBusConfig) -> Self {
        let (sender, _) = broadcast::channel(config.channel_capacity.max(1));
        Self {
            sender,
            subscriptions: RwLock::new(Vec::new()),
            history: Mutex::new(History::default()),
            config,
        }
    }

    /// Delivers `event` to matching handlers, then to async receivers.
    ///
    /// Returns how many async receivers got it. Errors only when there is
    /// neither a handler nor a receiver; the event is still recorded.
    pub fn publish(&self, event: AppEvent) -> Result<usize, EventBusError> {
        if self.config.enable_history {
            self.record(&event);
        }

        let subscriptions = self.subscriptions.read();
        for sub in subscriptions.iter().filter(|s| s.filter.matches(&event)) {
            (sub.handler)(&event);
        }
        let has_handlers = !subscriptions.is_empty();
        drop(subscriptions);

        match self.sender.send(event) {
            Ok(receivers) => Ok(receivers),
            Err(_) if has_handlers => Ok(0),
            Err(_) => Err(EventBusError::NoSubscribers),
        }
    }

    /// Publishes an event nobody is required to hear.
    pub fn notify(&self, event: AppEvent) {
        let category = event.category();
        match self.publish(event) {
            Ok(_) => {}
            Err(EventBusError::NoSubscribers) => {
                tracing::trace!("No listeners for {:?} event", category)
            }
        }
    }

    /// Registers a handler. Handlers run in subscription order.
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(&AppEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(Uuid::new_v4());
        self.subscriptions.write().push(Subscription {
            id,
            filter,
            handler: Box::new(handler),
        });
        tracing::debug!("Subscription {} added", id);
        id
    }

    pub fn receiver(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscriptions = self.subscriptions.write();
        let before = subscriptions.len();
        subscriptions.retain(|s| s.id != id);
        let removed = subscriptions.len() < before;
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.read().len()
    }

    /// Recorded events, oldest first. With `after`, only events whose
    /// sequence number is greater; see [`EventBus::last_seq`].
    pub fn history(&self, after: Option<u64>) -> Vec<AppEvent> {
        let history = self.history.lock();
        history
            .events
            .iter()
            .filter(|(seq, _)| after.is_none_or(|a| *seq > a))
            .map(|(_, event)| event.clone())
            .collect()
    }

    /// Sequence number of the newest recorded event.
    pub fn last_seq(&self) -> Option<u64> {
        self.history.lock().events.back().map(|(seq, _)| *seq)
    }

    pub fn clear_history(&self) {
        self.history.lock().events.clear();
    }

    pub fn config(&self) -> &EventBusConfig {
        &self.config
    }

    fn record(&self, event: &AppEvent) {
        let mut history = self.history.lock();
        let seq = history.next_seq;
        history.next_seq += 1;
        history.events.push_back((seq, event.clone()));
        while history.events.len() > self.config.max_history_size {
            history.events.pop_front();
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .field("config", &self.config)
            .finish()
    }
}
