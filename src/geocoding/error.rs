use crate::geocoding::native::NativeGeocoderError;
use thiserror::Error;

/// Terminal outcome of a failed geocoding request. Every request resolves to
/// exactly one `Result`: a payload or one of these, never both. None of them
/// affect tracking state.
#[derive(Error, Debug)]
pub enum GeocodeError {
    /// The HTTP transport failed before a provider status was available.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// The provider reported one of its expected empty-result statuses; the
    /// raw status string is preserved as the error text.
    #[error("{0}")]
    ProviderStatus(String),
    /// The provider reported a status outside its documented set.
    #[error("Invalid Input")]
    InvalidInput,
    /// The provider answered OK but returned no placemarks to parse.
    #[error("No Placemarks Found!")]
    NoPlacemarks,
    /// The native geocoder could not match the given address text.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    /// The native geocoder itself failed; carries its description.
    #[error("{0}")]
    Geocoder(#[from] NativeGeocoderError),
}
