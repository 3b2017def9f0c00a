//! Input validation for keys, locations, geohashes and precisions.
//!
//! These checks are the only gate for malformed input; the encoder and the
//! record builder call into them rather than repeating the rules. Each
//! function fails fast with the first rule the input breaks.

use log::debug;

use super::error::{GeoError, Result};
use super::types::{
    base32_value, Precision, MAX_KEY_PATH_LENGTH, MAX_LAT, MAX_LON, MAX_PRECISION, MIN_LAT,
    MIN_LON, RESERVED_KEY_CHARS,
};

fn reject(err: GeoError) -> Result<()> {
    debug!("Rejected input: {err}");
    Err(err)
}

/// Returns the longest key that fits alongside a geohash of `precision`.
///
/// # Examples
///
/// ```
/// use geofire_core::geo::{validate::max_key_length, Precision};
///
/// assert_eq!(max_key_length(Precision::DEFAULT), 744);
/// ```
#[must_use]
pub const fn max_key_length(precision: Precision) -> usize {
    MAX_KEY_PATH_LENGTH - 1 - precision.get() as usize
}

/// Validates a storage key against the default geohash precision.
///
/// # Errors
///
/// Returns [`GeoError::InvalidKey`] if the key is empty, too long to be
/// stored next to a default-precision geohash, or contains any of
/// `. # $ ] [ /`.
///
/// # Examples
///
/// ```
/// use geofire_core::geo::validate_key;
///
/// assert!(validate_key("user-42").is_ok());
/// assert!(validate_key("users/42").is_err());
/// ```
pub fn validate_key(key: &str) -> Result<()> {
    validate_key_with_precision(key, Precision::DEFAULT)
}

/// Validates a storage key that will sit next to a geohash of `precision`.
///
/// The key's child path is at least `i/<geohash><key>`, so the allowed key
/// length shrinks as the precision grows.
///
/// # Errors
///
/// Returns [`GeoError::InvalidKey`] if the key is empty, if
/// `1 + precision + len(key)` exceeds 755, or if it contains a reserved
/// character.
pub fn validate_key_with_precision(key: &str, precision: Precision) -> Result<()> {
    if key.is_empty() {
        return reject(GeoError::invalid_key(key, "key cannot be the empty string"));
    }

    let length = key.chars().count();
    if 1 + usize::from(precision.get()) + length > MAX_KEY_PATH_LENGTH {
        return reject(GeoError::invalid_key(
            key,
            format!(
                "key is too long to be stored ({length} characters, at most {} allowed at precision {precision})",
                max_key_length(precision)
            ),
        ));
    }

    if let Some(c) = key.chars().find(|c| RESERVED_KEY_CHARS.contains(c)) {
        return reject(GeoError::invalid_key(
            key,
            format!("key cannot contain '{c}'; reserved characters are . # $ ] [ /"),
        ));
    }

    Ok(())
}

/// Validates a `[latitude, longitude]` pair.
///
/// # Errors
///
/// Returns [`GeoError::InvalidLocation`] if the slice does not hold exactly
/// two values, or if a coordinate is not finite or out of range. Latitude is
/// checked before longitude.
///
/// # Examples
///
/// ```
/// use geofire_core::geo::validate_location;
///
/// assert!(validate_location(&[90.0, -180.0]).is_ok());
/// assert!(validate_location(&[90.0000001, 0.0]).is_err());
/// assert!(validate_location(&[0.0]).is_err());
/// ```
pub fn validate_location(location: &[f64]) -> Result<()> {
    let &[latitude, longitude] = location else {
        return reject(GeoError::invalid_location(
            location,
            format!("expected array of length 2, got length {}", location.len()),
        ));
    };

    if !latitude.is_finite() {
        return reject(GeoError::invalid_location(
            location,
            format!("latitude must be a finite number, got {latitude}"),
        ));
    }
    if !(MIN_LAT..=MAX_LAT).contains(&latitude) {
        return reject(GeoError::invalid_location(
            location,
            format!("latitude must be within the range [-90, 90], got {latitude}"),
        ));
    }
    if !longitude.is_finite() {
        return reject(GeoError::invalid_location(
            location,
            format!("longitude must be a finite number, got {longitude}"),
        ));
    }
    if !(MIN_LON..=MAX_LON).contains(&longitude) {
        return reject(GeoError::invalid_location(
            location,
            format!("longitude must be within the range [-180, 180], got {longitude}"),
        ));
    }

    Ok(())
}

/// Validates a geohash string.
///
/// # Errors
///
/// Returns [`GeoError::InvalidGeohash`] if the string is empty or contains a
/// character outside `0123456789bcdefghjkmnpqrstuvwxyz`. The first offending
/// character is reported.
pub fn validate_geohash(geohash: &str) -> Result<()> {
    if geohash.is_empty() {
        return reject(GeoError::invalid_geohash(
            geohash,
            "geohash cannot be the empty string",
        ));
    }

    if let Some(c) = geohash.chars().find(|&c| base32_value(c).is_none()) {
        return reject(GeoError::invalid_geohash(
            geohash,
            format!("geohash cannot contain \"{c}\""),
        ));
    }

    Ok(())
}

/// Validates a requested geohash precision.
///
/// # Errors
///
/// Returns [`GeoError::InvalidPrecision`] if the value is NaN or infinite,
/// is not greater than 0, exceeds 22, or is not a whole number.
///
/// # Examples
///
/// ```
/// use geofire_core::geo::validate_precision;
///
/// assert!(validate_precision(1.0).is_ok());
/// assert!(validate_precision(22.0).is_ok());
/// assert!(validate_precision(2.5).is_err());
/// assert!(validate_precision(f64::NAN).is_err());
/// ```
pub fn validate_precision(precision: f64) -> Result<()> {
    if !precision.is_finite() {
        return reject(GeoError::invalid_precision(
            &precision,
            "precision must be a finite number",
        ));
    }
    if precision <= 0.0 {
        return reject(GeoError::invalid_precision(
            &precision,
            "precision must be greater than 0",
        ));
    }
    if precision > f64::from(MAX_PRECISION) {
        return reject(GeoError::invalid_precision(
            &precision,
            format!("precision cannot be greater than {MAX_PRECISION}"),
        ));
    }
    if precision.fract() != 0.0 {
        return reject(GeoError::invalid_precision(
            &precision,
            "precision must be an integer",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_of_length(length: usize) -> String {
        "k".repeat(length)
    }

    #[test]
    fn key_accepts_ordinary_keys() {
        assert!(validate_key("a").is_ok());
        assert!(validate_key("user-42_home").is_ok());
        assert!(validate_key("Zürich").is_ok());
    }

    #[test]
    fn key_rejects_empty() {
        let err = validate_key("").unwrap_err();
        assert!(matches!(err, GeoError::InvalidKey { .. }));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn key_at_length_ceiling_is_accepted() {
        assert_eq!(max_key_length(Precision::DEFAULT), 744);
        assert!(validate_key(&key_of_length(744)).is_ok());
    }

    #[test]
    fn key_one_over_length_ceiling_is_rejected() {
        let err = validate_key(&key_of_length(745)).unwrap_err();
        assert!(matches!(err, GeoError::InvalidKey { .. }));
        assert!(err.to_string().contains("too long"));
    }

    #[test]
    fn key_ceiling_follows_precision() {
        let max = Precision::MAX;
        assert_eq!(max_key_length(max), 732);
        assert!(validate_key_with_precision(&key_of_length(732), max).is_ok());
        assert!(validate_key_with_precision(&key_of_length(733), max).is_err());

        let one = Precision::new(1).unwrap();
        assert!(validate_key_with_precision(&key_of_length(753), one).is_ok());
        assert!(validate_key_with_precision(&key_of_length(754), one).is_err());
    }

    #[test]
    fn key_length_counts_characters() {
        assert!(validate_key(&"é".repeat(744)).is_ok());
        assert!(validate_key(&"é".repeat(745)).is_err());
    }

    #[test]
    fn key_rejects_each_reserved_character() {
        for c in RESERVED_KEY_CHARS {
            let key = format!("abc{c}def");
            let err = validate_key(&key).unwrap_err();
            assert!(
                matches!(err, GeoError::InvalidKey { .. }),
                "key containing {c:?} should be rejected"
            );
            assert!(err.to_string().contains(&key));
        }
    }

    #[test]
    fn location_accepts_inclusive_bounds() {
        for location in [
            [90.0, 0.0],
            [-90.0, 0.0],
            [0.0, 180.0],
            [0.0, -180.0],
            [90.0, 180.0],
            [-90.0, -180.0],
        ] {
            assert!(validate_location(&location).is_ok(), "{location:?}");
        }
    }

    #[test]
    fn location_rejects_just_outside_bounds() {
        for location in [
            [90.000_000_1, 0.0],
            [-90.000_000_1, 0.0],
            [0.0, 180.000_000_1],
            [0.0, -180.000_000_1],
        ] {
            let err = validate_location(&location).unwrap_err();
            assert!(matches!(err, GeoError::InvalidLocation { .. }), "{location:?}");
        }
    }

    #[test]
    fn location_rejects_wrong_length() {
        for location in [&[][..], &[1.0][..], &[1.0, 2.0, 3.0][..]] {
            let err = validate_location(location).unwrap_err();
            assert!(err.to_string().contains("expected array of length 2"));
        }
    }

    #[test]
    fn location_rejects_non_finite() {
        for location in [
            [f64::NAN, 0.0],
            [0.0, f64::NAN],
            [f64::INFINITY, 0.0],
            [0.0, f64::NEG_INFINITY],
        ] {
            let err = validate_location(&location).unwrap_err();
            assert!(err.to_string().contains("finite"), "{location:?}");
        }
    }

    #[test]
    fn location_reports_latitude_first() {
        let err = validate_location(&[100.0, 200.0]).unwrap_err();
        assert!(err.to_string().contains("latitude"));
        assert!(!err.to_string().contains("longitude must"));
    }

    #[test]
    fn location_error_embeds_value() {
        let err = validate_location(&[12.5, 181.0]).unwrap_err();
        assert!(err.to_string().contains("[12.5, 181.0]"));
        assert!(err.to_string().contains("[-180, 180]"));
    }

    #[test]
    fn geohash_accepts_full_alphabet() {
        assert!(validate_geohash("0123456789bcdefghjkmnpqrstuvwxyz").is_ok());
        assert!(validate_geohash("9q8yyk8ytp").is_ok());
    }

    #[test]
    fn geohash_rejects_empty() {
        let err = validate_geohash("").unwrap_err();
        assert!(matches!(err, GeoError::InvalidGeohash { .. }));
    }

    #[test]
    fn geohash_rejects_characters_outside_alphabet() {
        for geohash in ["9q8a", "9q8i", "9q8l", "9q8o", "9Q8Y", "9q8 y", "9q8-y"] {
            let err = validate_geohash(geohash).unwrap_err();
            assert!(matches!(err, GeoError::InvalidGeohash { .. }), "{geohash}");
        }
    }

    #[test]
    fn geohash_error_names_offending_character() {
        let err = validate_geohash("9qa8o").unwrap_err();
        assert!(err.to_string().contains("cannot contain \"a\""));
    }

    #[test]
    fn precision_accepts_range() {
        for precision in 1..=22_u8 {
            assert!(validate_precision(f64::from(precision)).is_ok());
        }
    }

    #[test]
    fn precision_rejects_invalid_values() {
        for precision in [0.0, 23.0, 2.5, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = validate_precision(precision).unwrap_err();
            assert!(
                matches!(err, GeoError::InvalidPrecision { .. }),
                "{precision} should be rejected"
            );
        }
    }

    #[test]
    fn precision_error_names_rule() {
        assert!(validate_precision(0.0)
            .unwrap_err()
            .to_string()
            .contains("greater than 0"));
        assert!(validate_precision(23.0)
            .unwrap_err()
            .to_string()
            .contains("cannot be greater than 22"));
        assert!(validate_precision(2.5)
            .unwrap_err()
            .to_string()
            .contains("integer"));
    }
}
