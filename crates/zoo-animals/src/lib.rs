//! Animal entities, lifecycle actions, and sleep behaviors for the zoo.
//!
//! This crate is the logic layer for residents -- everything that turns an
//! animal and a lifecycle action into a line of text, without touching I/O.
//! It sits between `zoo-types` (the vocabulary) and `zoo-core` (the keeper).
//!
//! # Modules
//!
//! - [`animal`] -- Table-driven animals ([`Animal`])
//! - [`behavior`] -- Pluggable sleep behaviors ([`SleepBehavior`])
//! - [`delegate`] -- Cats with a runtime-swappable sleep ([`DelegateCat`])
//! - [`error`] -- Error types for all animal operations ([`AnimalError`])
//! - [`lifecycle`] -- The five-action capability contract ([`Lifecycle`])
//! - [`resident`] -- Closed roster entry type ([`Resident`])

pub mod animal;
pub mod behavior;
pub mod delegate;
pub mod error;
pub mod lifecycle;
pub mod resident;

// Re-export primary types at crate root for convenience.
pub use animal::Animal;
pub use behavior::{Doze, Meow, Run, SleepBehavior};
pub use delegate::DelegateCat;
pub use error::AnimalError;
pub use lifecycle::Lifecycle;
pub use resident::Resident;
