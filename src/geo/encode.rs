//! Geohash encoding by interval bisection.
//!
//! Longitude and latitude ranges are halved alternately, longitude first.
//! Each halving yields one bit (1 when the coordinate lies strictly above
//! the midpoint), and every 5 bits, packed most significant first, become
//! one character of the base-32 alphabet.

use log::trace;

use super::error::Result;
use super::types::{
    base32_char, Geohash, Location, Precision, BITS_PER_CHAR, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON,
};

/// A closed numeric range narrowed one bit at a time.
#[derive(Debug, Clone, Copy)]
struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Halves the interval around `value`, returning the chosen bit.
    // The midpoint formula is part of the bit-exact geohash contract.
    #[allow(clippy::manual_midpoint)]
    fn bisect(&mut self, value: f64) -> bool {
        let mid = (self.min + self.max) / 2.0;
        if value > mid {
            self.min = mid;
            true
        } else {
            self.max = mid;
            false
        }
    }
}

/// Encodes a validated location into a geohash of `precision` characters.
///
/// # Examples
///
/// ```
/// use geofire_core::geo::{encode, Location, Precision};
///
/// let location = Location::new(37.7749, -122.4194).unwrap();
/// assert_eq!(encode(&location, Precision::DEFAULT).as_str(), "9q8yyk8ytp");
/// assert_eq!(encode(&location, Precision::new(5).unwrap()).as_str(), "9q8yy");
/// ```
#[must_use]
pub fn encode(location: &Location, precision: Precision) -> Geohash {
    let length = usize::from(precision.get());
    let mut latitude_range = Interval::new(MIN_LAT, MAX_LAT);
    let mut longitude_range = Interval::new(MIN_LON, MAX_LON);

    let mut hash = String::with_capacity(length);
    let mut hash_value: u8 = 0;
    let mut bits: u32 = 0;
    let mut even = true;

    while hash.len() < length {
        let bit = if even {
            longitude_range.bisect(location.longitude())
        } else {
            latitude_range.bisect(location.latitude())
        };
        hash_value = (hash_value << 1) | u8::from(bit);
        even = !even;

        bits += 1;
        if bits == BITS_PER_CHAR {
            hash.push(base32_char(hash_value));
            hash_value = 0;
            bits = 0;
        }
    }

    trace!("Encoded {location} at precision {precision} as {hash}");
    Geohash::from_encoded(hash)
}

/// Encodes a `[latitude, longitude]` pair into a geohash string.
///
/// When `precision` is `None` the default of 10 characters is used.
///
/// # Errors
///
/// Returns [`GeoError::InvalidLocation`](super::GeoError::InvalidLocation)
/// if the pair is malformed or out of range, and
/// [`GeoError::InvalidPrecision`](super::GeoError::InvalidPrecision) if a
/// supplied precision is not a whole number in `1..=22`.
///
/// # Examples
///
/// ```
/// use geofire_core::geo::encode_geohash;
///
/// assert_eq!(encode_geohash(&[57.64911, 10.40744], Some(11.0)).unwrap(), "u4pruydqqvj");
/// assert_eq!(encode_geohash(&[37.7749, -122.4194], None).unwrap(), "9q8yyk8ytp");
/// assert!(encode_geohash(&[37.7749, -122.4194], Some(2.5)).is_err());
/// ```
pub fn encode_geohash(location: &[f64], precision: Option<f64>) -> Result<String> {
    let location = Location::try_from(location)?;
    let precision = match precision {
        Some(value) => Precision::try_from(value)?,
        None => Precision::DEFAULT,
    };
    Ok(encode(&location, precision).into_string())
}
