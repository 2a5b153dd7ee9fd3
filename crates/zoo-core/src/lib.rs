//! Keeper, subscribers, roster, and configuration for the zoo simulation.
//!
//! This crate drives the zoo: the [`ZooKeeper`] owns the roster and the
//! subscriber list and runs the five lifecycle batches, writing every line
//! of output to a [`Transcript`].
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `zoo-config.yaml`
//!   ([`ZooConfig`]).
//! - [`error`] -- Error types for keeper operations ([`ZooError`]).
//! - [`keeper`] -- Roster ownership, notification, and batch dispatch.
//! - [`roster`] -- The fixed demonstration roster.
//! - [`subscriber`] -- [`Subscriber`] trait and the [`ZooAnnouncer`].
//! - [`transcript`] -- Ordered line sinks ([`Transcript`],
//!   [`WriterTranscript`]).

pub mod config;
pub mod error;
pub mod keeper;
pub mod roster;
pub mod subscriber;
pub mod transcript;

// Re-export primary types at crate root.
pub use config::{ConfigError, ZooConfig};
pub use error::ZooError;
pub use keeper::ZooKeeper;
pub use roster::{RECONFIGURED_CAT, build_resident, demonstration_roster};
pub use subscriber::{ANNOUNCER_GREETING, Subscriber, ZooAnnouncer};
pub use transcript::{Transcript, WriterTranscript};
