//! Subscribers to keeper notifications.
//!
//! The keeper calls [`Subscriber::on_notify`] synchronously, in registration
//! order, before every batch. The stock subscriber is the [`ZooAnnouncer`].

use std::fmt;

use zoo_types::SubscriberId;

use crate::error::ZooError;
use crate::transcript::Transcript;

/// Greeting every announcer line starts with.
pub const ANNOUNCER_GREETING: &str = "Hi, This is the Zoo Announcer.";

/// A passive listener for keeper notifications.
///
/// Two handles with the same [`id`](Subscriber::id) are the same
/// subscriber as far as registration and removal are concerned.
pub trait Subscriber: fmt::Debug + Send + Sync {
    /// Stable identity used to match registrations on removal.
    fn id(&self) -> SubscriberId;

    /// React to `message`, writing any output to `out`.
    fn on_notify(&self, message: &str, out: &mut dyn Transcript) -> Result<(), ZooError>;
}

/// Announces every keeper notification to the visitors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZooAnnouncer {
    id: SubscriberId,
}

impl ZooAnnouncer {
    /// Create an announcer with a fresh identity.
    pub fn new() -> Self {
        Self {
            id: SubscriberId::new(),
        }
    }

    /// Format the announcement for `message`.
    pub fn announcement(message: &str) -> String {
        format!("{ANNOUNCER_GREETING} {message}")
    }
}

impl Default for ZooAnnouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl Subscriber for ZooAnnouncer {
    fn id(&self) -> SubscriberId {
        self.id
    }

    fn on_notify(&self, message: &str, out: &mut dyn Transcript) -> Result<(), ZooError> {
        out.emit(&Self::announcement(message))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn announcer_prefixes_the_greeting() {
        let announcer = ZooAnnouncer::new();
        let mut out: Vec<String> = Vec::new();
        announcer
            .on_notify("The Zookeeper is about to feed the animals!", &mut out)
            .unwrap();
        assert_eq!(
            out,
            vec!["Hi, This is the Zoo Announcer. The Zookeeper is about to feed the animals!"]
        );
    }

    #[test]
    fn announcers_have_distinct_ids() {
        assert_ne!(ZooAnnouncer::new().id(), ZooAnnouncer::new().id());
    }
}
