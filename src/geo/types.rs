//! Geohash data types and constants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{GeoError, Result};
use super::validate::{validate_geohash, validate_location, validate_precision};

/// Characters used in geohashes, indexed by their 5-bit value.
pub const BASE32: &str = "0123456789bcdefghjkmnpqrstuvwxyz";

/// Number of bits encoded by each geohash character.
pub const BITS_PER_CHAR: u32 = 5;

/// Geohash length used when no precision is requested.
pub const DEFAULT_PRECISION: u8 = 10;

/// Longest geohash the encoder will produce.
pub const MAX_PRECISION: u8 = 22;

/// Maximum length of a geohash in bits.
pub const MAXIMUM_BITS_PRECISION: u32 = MAX_PRECISION as u32 * BITS_PER_CHAR;

/// Longest child path a key may occupy in the backing store.
///
/// The store caps paths at 768 characters; the path for a key is at least
/// `i/<geohash><key>`, so the key and geohash share what is left.
pub const MAX_KEY_PATH_LENGTH: usize = 755;

/// Characters the backing store reserves for its path syntax.
pub const RESERVED_KEY_CHARS: [char; 6] = ['.', '#', '$', ']', '[', '/'];

/// Southernmost valid latitude in degrees.
pub const MIN_LAT: f64 = -90.0;
/// Northernmost valid latitude in degrees.
pub const MAX_LAT: f64 = 90.0;

/// Westernmost valid longitude in degrees.
pub const MIN_LON: f64 = -180.0;
/// Easternmost valid longitude in degrees.
pub const MAX_LON: f64 = 180.0;

const BASE32_BYTES: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

const NOT_IN_ALPHABET: u8 = u8::MAX;

/// ASCII code point -> 5-bit value, `NOT_IN_ALPHABET` elsewhere.
const BASE32_LOOKUP: [u8; 128] = build_lookup();

#[allow(clippy::cast_possible_truncation)]
const fn build_lookup() -> [u8; 128] {
    let mut table = [NOT_IN_ALPHABET; 128];
    let mut i = 0;
    while i < BASE32_BYTES.len() {
        table[BASE32_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Returns the 5-bit value of a geohash character, or `None` if the
/// character is not part of the alphabet.
///
/// # Examples
///
/// ```
/// use geofire_core::geo::types::base32_value;
///
/// assert_eq!(base32_value('0'), Some(0));
/// assert_eq!(base32_value('z'), Some(31));
/// assert_eq!(base32_value('a'), None);
/// ```
#[must_use]
pub fn base32_value(c: char) -> Option<u8> {
    u8::try_from(c)
        .ok()
        .and_then(|byte| BASE32_LOOKUP.get(usize::from(byte)).copied())
        .filter(|&value| value != NOT_IN_ALPHABET)
}

/// Returns the geohash character for the low 5 bits of `value`.
pub(crate) fn base32_char(value: u8) -> char {
    char::from(BASE32_BYTES[usize::from(value & 0x1f)])
}

/// Number of geohash characters to encode.
///
/// Always within `1..=22`. Serialized as a plain integer.
///
/// # Examples
///
/// ```
/// use geofire_core::geo::Precision;
///
/// assert_eq!(Precision::default().get(), 10);
/// assert!(Precision::new(22).is_ok());
/// assert!(Precision::new(23).is_err());
/// assert!("ten".parse::<Precision>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Precision(u8);

impl Precision {
    /// The default precision (10 characters).
    pub const DEFAULT: Self = Self(DEFAULT_PRECISION);

    /// The maximum precision (22 characters).
    pub const MAX: Self = Self(MAX_PRECISION);

    /// Creates a precision from a character count.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::InvalidPrecision`] if `value` is 0 or above 22.
    pub fn new(value: u8) -> Result<Self> {
        validate_precision(f64::from(value))?;
        Ok(Self(value))
    }

    /// Returns the number of characters.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the number of bits encoded at this precision.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0 as u32 * BITS_PER_CHAR
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Precision {
    type Error = GeoError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<f64> for Precision {
    type Error = GeoError;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn try_from(value: f64) -> Result<Self> {
        validate_precision(value)?;
        // Integral and within 1..=22 after validation.
        Ok(Self(value as u8))
    }
}

impl FromStr for Precision {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| GeoError::invalid_precision(&s, "precision must be a number"))?;
        Self::try_from(value)
    }
}

impl From<Precision> for u8 {
    fn from(precision: Precision) -> Self {
        precision.0
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated (latitude, longitude) pair.
///
/// Latitude lies in `[-90, 90]`, longitude in `[-180, 180]`, and both are
/// finite. Serialized as the two-element array `[latitude, longitude]`;
/// deserialization applies the same validation.
///
/// # Examples
///
/// ```
/// use geofire_core::geo::Location;
///
/// let location = Location::new(37.7749, -122.4194).unwrap();
/// assert_eq!(location.to_array(), [37.7749, -122.4194]);
///
/// assert!(Location::new(90.0000001, 0.0).is_err());
/// assert!(Location::try_from(&[1.0, 2.0, 3.0][..]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 2]")]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

impl Location {
    /// Creates a location after checking both coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::InvalidLocation`] if either coordinate is not
    /// finite or is out of range. Latitude is checked first.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        validate_location(&[latitude, longitude])?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the pair as `[latitude, longitude]`.
    #[must_use]
    pub const fn to_array(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

impl TryFrom<&[f64]> for Location {
    type Error = GeoError;

    fn try_from(location: &[f64]) -> Result<Self> {
        validate_location(location)?;
        Ok(Self {
            latitude: location[0],
            longitude: location[1],
        })
    }
}

impl TryFrom<[f64; 2]> for Location {
    type Error = GeoError;

    fn try_from([latitude, longitude]: [f64; 2]) -> Result<Self> {
        Self::new(latitude, longitude)
    }
}

impl TryFrom<Vec<f64>> for Location {
    type Error = GeoError;

    fn try_from(location: Vec<f64>) -> Result<Self> {
        Self::try_from(location.as_slice())
    }
}

impl From<Location> for [f64; 2] {
    fn from(location: Location) -> Self {
        location.to_array()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.latitude, self.longitude)
    }
}

/// A non-empty string over the geohash alphabet.
///
/// Serialized as a plain string; deserialization validates the alphabet.
///
/// # Examples
///
/// ```
/// use geofire_core::geo::Geohash;
///
/// let geohash = Geohash::new("9q8yyk8ytp").unwrap();
/// assert_eq!(geohash.as_str(), "9q8yyk8ytp");
///
/// assert!(Geohash::new("").is_err());
/// assert!(Geohash::new("9q8a").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Geohash(String);

impl Geohash {
    /// Creates a geohash after checking it against the alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::InvalidGeohash`] if the string is empty or
    /// contains a character outside the alphabet.
    pub fn new(geohash: impl Into<String>) -> Result<Self> {
        let geohash = geohash.into();
        validate_geohash(&geohash)?;
        Ok(Self(geohash))
    }

    /// Wraps a string the encoder produced from the alphabet.
    pub(crate) const fn from_encoded(geohash: String) -> Self {
        Self(geohash)
    }

    /// Returns the geohash as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of characters, which is the precision it was
    /// encoded at.
    #[must_use]
    pub const fn char_count(&self) -> usize {
        self.0.len()
    }

    /// Consumes the geohash, returning the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Geohash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Geohash {
    type Error = GeoError;

    fn try_from(geohash: String) -> Result<Self> {
        Self::new(geohash)
    }
}

impl TryFrom<&str> for Geohash {
    type Error = GeoError;

    fn try_from(geohash: &str) -> Result<Self> {
        Self::new(geohash)
    }
}

impl FromStr for Geohash {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<Geohash> for String {
    fn from(geohash: Geohash) -> Self {
        geohash.0
    }
}

impl fmt::Display for Geohash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Settings for geohash encoding.
///
/// Controls the precision used by [`crate::GeoFireCore`] when encoding
/// locations, building records and checking key lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoFireSettings {
    /// Number of geohash characters to encode (1-22)
    pub geohash_precision: Precision,
}

impl GeoFireSettings {
    /// Creates settings from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, a field is missing, or the
    /// precision is out of range.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts these settings to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for GeoFireSettings {
    fn default() -> Self {
        Self {
            geohash_precision: Precision::DEFAULT,
        }
    }
}
