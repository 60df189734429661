//! Location acquisition and address resolution.
//!
//! Two independent pieces composed by the caller: a [`tracking::TrackingController`]
//! that turns a location capability's authorization events and position fixes
//! into normalized callbacks, and a [`geocoding::Geocoder`] that resolves
//! addresses and coordinates through either a device-native geocoder or a
//! third-party HTTP geocoding API, normalizing both into one address schema.

pub mod app_config;
pub mod domain;
pub mod geocoding;
pub mod tracking;
