//! Error types for the `lifepath` binary.
//!
//! [`EngineError`] wraps every failure mode of a command-line run so that
//! `main` can propagate with `?`.

/// Top-level error for the `lifepath` binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: lifepath_core::ConfigError,
    },

    /// The scenario could not be set up.
    #[error("simulation error: {source}")]
    Simulation {
        /// The underlying simulation error.
        #[from]
        source: lifepath_core::SimulationError,
    },

    /// The outcome could not be encoded.
    #[error("output error: {source}")]
    Output {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
