//! Storable geohash records.
//!
//! A [`GeoRecord`] pairs a geohash with the location it was stored for and
//! serializes as `{"g": "<geohash>", "l": [lat, lon]}`, the value written
//! under a key in the backing store.

use serde::{Deserialize, Serialize};

use super::encode::encode;
use super::error::Result;
use super::types::{Geohash, Location, Precision};

/// A validated geohash and location ready to be persisted.
///
/// Both fields are checked on every construction path, including
/// deserialization, so a record never holds a malformed geohash or an
/// out-of-range location.
///
/// The geohash is not required to match the location: a record may store a
/// coarse geohash next to a full-precision coordinate.
///
/// # Examples
///
/// ```
/// use geofire_core::geo::GeoRecord;
///
/// let record = GeoRecord::build(&[37.7749, -122.4194], "9q8yyk8ytp").unwrap();
/// assert_eq!(record.geohash().as_str(), "9q8yyk8ytp");
/// assert_eq!(
///     record.to_json().unwrap(),
///     r#"{"g":"9q8yyk8ytp","l":[37.7749,-122.4194]}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoRecord {
    g: Geohash,
    l: Location,
}

impl GeoRecord {
    /// Builds a record from a raw location and geohash.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::InvalidLocation`](super::GeoError::InvalidLocation)
    /// if the location is invalid, otherwise
    /// [`GeoError::InvalidGeohash`](super::GeoError::InvalidGeohash) if the
    /// geohash is invalid.
    pub fn build(location: &[f64], geohash: &str) -> Result<Self> {
        let l = Location::try_from(location)?;
        let g = Geohash::new(geohash)?;
        Ok(Self { g, l })
    }

    /// Pairs an already validated location and geohash.
    #[must_use]
    pub const fn new(location: Location, geohash: Geohash) -> Self {
        Self {
            g: geohash,
            l: location,
        }
    }

    /// Encodes `location` at `precision` and stores the result with it.
    ///
    /// # Examples
    ///
    /// ```
    /// use geofire_core::geo::{GeoRecord, Location, Precision};
    ///
    /// let location = Location::new(57.64911, 10.40744).unwrap();
    /// let record = GeoRecord::from_location(location, Precision::new(11).unwrap());
    /// assert_eq!(record.geohash().as_str(), "u4pruydqqvj");
    /// ```
    #[must_use]
    pub fn from_location(location: Location, precision: Precision) -> Self {
        Self {
            g: encode(&location, precision),
            l: location,
        }
    }

    /// The stored geohash.
    #[must_use]
    pub const fn geohash(&self) -> &Geohash {
        &self.g
    }

    /// The stored location.
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.l
    }

    /// Splits the record into its geohash and location.
    #[must_use]
    pub fn into_parts(self) -> (Geohash, Location) {
        (self.g, self.l)
    }

    /// Creates a record from its JSON form, validating both fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, a field is missing, or
    /// either field fails validation.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts this record to its JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Builds the storable object for a location and geohash.
///
/// Equivalent to [`GeoRecord::build`].
///
/// # Errors
///
/// Returns the first validation error, checking the location before the
/// geohash.
pub fn encode_geofire_object(location: &[f64], geohash: &str) -> Result<GeoRecord> {
    GeoRecord::build(location, geohash)
}
