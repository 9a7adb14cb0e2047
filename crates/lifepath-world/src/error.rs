//! Error types for the `lifepath-world` crate.
//!
//! World construction is the only fallible step: once a country and a city
//! are resolved, every yearly update saturates instead of failing.

/// Errors raised while resolving world configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// No country model is registered under the key.
    #[error("unknown country: {key}")]
    UnknownCountry {
        /// The requested key.
        key: String,
    },

    /// No city preset is registered under the key for the country.
    #[error("unknown city {key} for country {country}")]
    UnknownCity {
        /// The requested key.
        key: String,
        /// The country that was searched.
        country: String,
    },
}
