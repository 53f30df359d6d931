//! Domain event types shared between services and the API layer.

pub mod events;

pub use events::NotificationEvent;
