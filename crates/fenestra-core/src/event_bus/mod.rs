//! # Event Bus Module
//!
//! Publish/subscribe channel between the engine and whatever embeds it.
//!
//! ```rust,ignore
//! use fenestra_core::event_bus::{AppEvent, EventBus, EventCategory, EventFilter, ShapeEvent};
//!
//! let bus = EventBus::new();
//! let id = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Shape]),
//!     |event| tracing::info!("{}", event.description()),
//! );
//! bus.notify(AppEvent::Shape(ShapeEvent::Recognized { splitters: 1 }));
//! bus.unsubscribe(id);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
