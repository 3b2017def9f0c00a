//! `GeoFire` Core Library
//!
//! Geohash encoding and input validation for storing locations in a
//! hierarchical key-value store. This crate produces the values to be
//! stored; it never performs the write itself.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![deny(unsafe_code)]

mod api;
pub mod geo;

pub use api::GeoFireCore;
