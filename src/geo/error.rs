//! Error types for geohash encoding and record validation.
//!
//! Every variant carries the rejected value and the rule it violated so
//! callers can report exactly what was wrong with their input.

use std::fmt::Display;

use thiserror::Error;

/// Errors raised by the validators, the encoder and the record builder.
#[derive(Error, Debug)]
pub enum GeoError {
    /// Storage key failed the emptiness, length or character-set rules.
    #[error("Invalid GeoFire key '{key}': {reason}")]
    InvalidKey {
        /// The rejected key.
        key: String,
        /// The rule that was violated.
        reason: String,
    },

    /// Coordinate pair failed the shape, finiteness or range rules.
    #[error("Invalid GeoFire location '{location}': {reason}")]
    InvalidLocation {
        /// The rejected coordinate, rendered as a list.
        location: String,
        /// The rule that was violated.
        reason: String,
    },

    /// Geohash failed the emptiness or alphabet rules.
    #[error("Invalid GeoFire geohash '{geohash}': {reason}")]
    InvalidGeohash {
        /// The rejected geohash.
        geohash: String,
        /// The rule that was violated.
        reason: String,
    },

    /// Precision failed the finiteness, range or integrality rules.
    #[error("Invalid geohash precision '{precision}': {reason}")]
    InvalidPrecision {
        /// The rejected precision, as supplied.
        precision: String,
        /// The rule that was violated.
        reason: String,
    },

    /// JSON (de)serialization failed.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for geohash operations.
pub type Result<T> = std::result::Result<T, GeoError>;

impl GeoError {
    pub(crate) fn invalid_key(key: &str, reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_location(location: &[f64], reason: impl Into<String>) -> Self {
        Self::InvalidLocation {
            location: format!("{location:?}"),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_geohash(geohash: &str, reason: impl Into<String>) -> Self {
        Self::InvalidGeohash {
            geohash: geohash.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_precision(precision: &impl Display, reason: impl Into<String>) -> Self {
        Self::InvalidPrecision {
            precision: precision.to_string(),
            reason: reason.into(),
        }
    }
}
