//! Notification relay (transactional email) integration

mod client;
mod traits;

pub use client::EmailJsRelay;
pub use traits::{NotificationRelay, RelayError};

#[cfg(test)]
pub use traits::MockNotificationRelay;
