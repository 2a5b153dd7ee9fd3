//! Error types for the zoo-core crate.
//!
//! [`ZooError`] covers everything the keeper can fail at: a resident that
//! refuses an action, a roster or subscriber lookup that misses, and a
//! transcript that cannot be written.

use zoo_animals::AnimalError;
use zoo_types::SubscriberId;

/// Errors that can occur while running the zoo.
#[derive(Debug, thiserror::Error)]
pub enum ZooError {
    /// A resident failed to perform a lifecycle action.
    #[error("animal error: {source}")]
    Animal {
        /// The underlying animal error.
        #[from]
        source: AnimalError,
    },

    /// Removal was requested for a subscriber that is not registered.
    #[error("subscriber not found: {0}")]
    SubscriberNotFound(SubscriberId),

    /// No resident with the given name is on the roster.
    #[error("resident not found: {0}")]
    ResidentNotFound(String),

    /// A resident with the same name is already on the roster.
    #[error("duplicate resident name: {0}")]
    DuplicateName(String),

    /// Writing a transcript line failed.
    #[error("failed to write transcript: {source}")]
    Output {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
