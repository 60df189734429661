use crate::domain::Coordinate;
use crate::geocoding::address::Placemark;
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

/// Failure reported by the device geocoder, carrying its description.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct NativeGeocoderError(pub String);

/// Seam towards the device-native geocoder. Implementations resolve to zero
/// or more placemarks; ordering is provider-defined and only the first entry
/// is used by the resolution layer.
#[async_trait]
pub trait NativeGeocoder: Debug + Send + Sync {
    async fn geocode(&self, address: &str) -> Result<Vec<Placemark>, NativeGeocoderError>;

    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<Vec<Placemark>, NativeGeocoderError>;
}
