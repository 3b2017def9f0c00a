//! Geohash module for `GeoFire`.
//!
//! Provides everything needed to turn a coordinate into a storable record:
//! - Validation of storage keys, locations, geohashes and precisions
//! - Geohash encoding by alternating longitude/latitude bisection
//! - Composition of a geohash and its location into a [`GeoRecord`]
//!
//! All functions are pure and may be called from any thread.
//!
//! # Example Usage
//!
//! ```
//! use geofire_core::geo::{encode_geohash, validate_key, GeoRecord};
//!
//! validate_key("user-42").unwrap();
//!
//! let location = [37.7749, -122.4194];
//! let geohash = encode_geohash(&location, None).unwrap();
//! assert_eq!(geohash, "9q8yyk8ytp");
//!
//! let record = GeoRecord::build(&location, &geohash).unwrap();
//! let json = record.to_json().unwrap();
//! assert_eq!(json, r#"{"g":"9q8yyk8ytp","l":[37.7749,-122.4194]}"#);
//! ```

pub mod encode;
pub mod error;
pub mod record;
pub mod types;
pub mod validate;

pub use encode::{encode, encode_geohash};
pub use error::{GeoError, Result};
pub use record::{encode_geofire_object, GeoRecord};
pub use types::{
    GeoFireSettings, Geohash, Location, Precision, BASE32, BITS_PER_CHAR, DEFAULT_PRECISION,
    MAXIMUM_BITS_PRECISION, MAX_KEY_PATH_LENGTH, MAX_PRECISION, RESERVED_KEY_CHARS,
};
pub use validate::{
    validate_geohash, validate_key, validate_key_with_precision, validate_location,
    validate_precision,
};
