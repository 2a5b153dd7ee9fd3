//! Error types for the demonstration binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during startup and the demonstration run.

/// Top-level error for the demonstration binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: zoo_core::ConfigError,
    },

    /// Building the roster failed.
    #[error("roster error: {source}")]
    Roster {
        /// The underlying animal error.
        #[from]
        source: zoo_animals::AnimalError,
    },

    /// A keeper operation failed.
    #[error("zoo error: {source}")]
    Zoo {
        /// The underlying keeper error.
        #[from]
        source: zoo_core::ZooError,
    },

    /// The cat named for runtime reconfiguration is not on the roster.
    #[error("no cat named {name} on the roster")]
    MissingCat {
        /// The name that was looked up.
        name: String,
    },
}
