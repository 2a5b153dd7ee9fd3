//! Error types for the zoo-animals crate.
//!
//! Lifecycle operations return typed errors rather than panicking. None of
//! these are recoverable inside the crate; they propagate to whoever drives
//! the animal (normally the keeper).

use zoo_types::AnimalKind;

/// Errors that can occur while constructing or driving an animal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnimalError {
    /// The animal's kind supplies no default for this operation.
    ///
    /// This is a design-time mistake (a new entity type that forgot to
    /// provide the operation), not a runtime condition to recover from.
    #[error("{name} the {kind:?} does not support {operation}")]
    UnsupportedOperation {
        /// Name of the animal the operation was invoked on.
        name: String,
        /// Kind of that animal.
        kind: AnimalKind,
        /// The operation that has no implementation.
        operation: &'static str,
    },

    /// A delegate was asked to sleep before any behavior was assigned.
    #[error("{name} has no sleep behavior assigned")]
    BehaviorUnassigned {
        /// Name of the delegate.
        name: String,
    },

    /// A plain animal was requested for a kind that only exists as a delegate.
    #[error("{name}: {kind:?} must be created as a behavior delegate")]
    DelegateKindRequired {
        /// Requested name.
        name: String,
        /// The delegate-only kind.
        kind: AnimalKind,
    },

    /// Animals must have a non-blank name.
    #[error("animal name must not be empty")]
    EmptyName,
}
