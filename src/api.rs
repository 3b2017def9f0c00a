//! Configured entry point for `GeoFire` operations.

use crate::geo::{
    encode, validate_key_with_precision, GeoFireSettings, GeoRecord, Location, Precision, Result,
};

/// Core interface for `GeoFire` functionality.
///
/// Holds the [`GeoFireSettings`] and applies the configured precision to
/// every encode, record build and key check.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeoFireCore {
    settings: GeoFireSettings,
}

impl GeoFireCore {
    /// Creates a `GeoFireCore` with default settings (precision 10).
    ///
    /// # Examples
    ///
    /// ```
    /// use geofire_core::GeoFireCore;
    ///
    /// let core = GeoFireCore::new();
    /// assert_eq!(core.precision().get(), 10);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `GeoFireCore` with the given settings.
    #[must_use]
    pub const fn with_settings(settings: GeoFireSettings) -> Self {
        Self { settings }
    }

    /// Returns the current settings.
    #[must_use]
    pub const fn settings(&self) -> &GeoFireSettings {
        &self.settings
    }

    /// Returns the configured geohash precision.
    #[must_use]
    pub const fn precision(&self) -> Precision {
        self.settings.geohash_precision
    }

    /// Encodes a `[latitude, longitude]` pair at the configured precision.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLocation` if the pair is malformed or out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use geofire_core::GeoFireCore;
    ///
    /// let core = GeoFireCore::new();
    /// assert_eq!(core.encode(&[37.7749, -122.4194]).unwrap(), "9q8yyk8ytp");
    /// ```
    pub fn encode(&self, location: &[f64]) -> Result<String> {
        let location = Location::try_from(location)?;
        Ok(encode(&location, self.precision()).into_string())
    }

    /// Encodes a location and builds the record to store for it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLocation` if the pair is malformed or out of range.
    pub fn build_record(&self, location: &[f64]) -> Result<GeoRecord> {
        let geohash = self.encode(location)?;
        GeoRecord::build(location, &geohash)
    }

    /// Validates a storage key against the configured precision.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` if the key is empty, too long, or contains a
    /// reserved character.
    pub fn validate_key(&self, key: &str) -> Result<()> {
        validate_key_with_precision(key, self.precision())
    }
}
