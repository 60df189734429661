mod address;
mod error;
mod geocoder;
mod http;
mod native;
mod parser;
mod response;

pub use address::{NormalizedAddress, Placemark, ResolvedAddress};
pub use error::GeocodeError;
pub use geocoder::{GeocodeProvider, Geocoder};
pub use http::{GeocodeRequestKind, HttpGeocoder};
pub use native::{NativeGeocoder, NativeGeocoderError};
