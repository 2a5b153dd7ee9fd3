//! Shared type definitions for the zoo simulation.
//!
//! This crate is the single source of truth for the vocabulary used across
//! the workspace: the animal taxonomy, sleep behavior tags, lifecycle
//! actions, and typed identifiers.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for residents and subscribers
//! - [`enums`] -- Taxonomy, sleep behavior tags, and lifecycle actions

pub mod enums;
pub mod ids;

// Re-export all public types at crate root for convenience.
pub use enums::{AnimalKind, Category, LifecycleAction, SleepBehaviorKind};
pub use ids::{AnimalId, SubscriberId};
