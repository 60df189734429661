use crate::app_config::AppConfig;
use crate::domain::Coordinate;
use crate::geocoding::address::{Placemark, ResolvedAddress};
use crate::geocoding::error::GeocodeError;
use crate::geocoding::http::HttpGeocoder;
use crate::geocoding::native::NativeGeocoder;
use crate::geocoding::parser::RawAddressFields;
use std::sync::Arc;
use tracing::instrument;

/// Which provider resolves a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeocodeProvider {
    Native,
    Http,
}

/// Entry point for on-demand address resolution. Requests are independent
/// futures: each call returns its own result and concurrent calls of the
/// same kind cannot clobber each other.
#[derive(Debug)]
pub struct Geocoder {
    http: HttpGeocoder,
    native: Arc<dyn NativeGeocoder>,
}

impl Geocoder {
    pub fn new(native: Arc<dyn NativeGeocoder>, config: &AppConfig) -> Result<Self, GeocodeError> {
        Ok(Geocoder {
            http: HttpGeocoder::new(config)?,
            native,
        })
    }

    /// Resolves a coordinate to an address (reverse geocoding). The native
    /// path returns the provider's first placemark as-is; the HTTP path
    /// synthesizes one.
    #[instrument(skip(self))]
    pub async fn resolve_address(&self, coordinate: Coordinate, provider: GeocodeProvider) -> Result<ResolvedAddress, GeocodeError> {
        match provider {
            GeocodeProvider::Http => self.http.reverse_geocode(coordinate).await,
            GeocodeProvider::Native => {
                let placemarks = self.native.reverse_geocode(coordinate).await?;
                let placemark = placemarks.into_iter().next().ok_or(GeocodeError::NoPlacemarks)?;
                Ok(resolve_placemark(placemark))
            }
        }
    }

    /// Resolves free-form address text to a coordinate-bearing address
    /// (forward geocoding).
    #[instrument(skip(self))]
    pub async fn resolve_coordinate(&self, address: &str, provider: GeocodeProvider) -> Result<ResolvedAddress, GeocodeError> {
        match provider {
            GeocodeProvider::Http => self.http.geocode(address).await,
            GeocodeProvider::Native => {
                let placemarks = self.native.geocode(address).await?;
                let placemark = placemarks
                    .into_iter()
                    .next()
                    .ok_or_else(|| GeocodeError::InvalidAddress(address.to_string()))?;
                Ok(resolve_placemark(placemark))
            }
        }
    }
}

fn resolve_placemark(placemark: Placemark) -> ResolvedAddress {
    let address = RawAddressFields::from_placemark(&placemark).to_normalized();
    ResolvedAddress { address, placemark }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::geocoding::address::Placemark;
    use crate::geocoding::native::NativeGeocoderError;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    #[derive(Debug)]
    struct FakeNativeGeocoder {
        placemarks: Vec<Placemark>,
        error: Option<String>,
    }

    impl FakeNativeGeocoder {
        fn returning(placemarks: Vec<Placemark>) -> Arc<Self> {
            Arc::new(FakeNativeGeocoder { placemarks, error: None })
        }

        fn failing(description: &str) -> Arc<Self> {
            Arc::new(FakeNativeGeocoder {
                placemarks: vec![],
                error: Some(description.to_string()),
            })
        }

        fn resolve(&self) -> Result<Vec<Placemark>, NativeGeocoderError> {
            match &self.error {
                Some(description) => Err(NativeGeocoderError(description.clone())),
                None => Ok(self.placemarks.clone()),
            }
        }
    }

    #[async_trait]
    impl NativeGeocoder for FakeNativeGeocoder {
        async fn geocode(&self, _address: &str) -> Result<Vec<Placemark>, NativeGeocoderError> {
            self.resolve()
        }

        async fn reverse_geocode(&self, _coordinate: Coordinate) -> Result<Vec<Placemark>, NativeGeocoderError> {
            self.resolve()
        }
    }

    fn geocoder_with(native: Arc<FakeNativeGeocoder>) -> Geocoder {
        Geocoder::new(native, &AppConfigBuilder::new().build()).unwrap()
    }

    fn spijkenisse() -> Placemark {
        Placemark {
            coordinate: Coordinate::new(51.8615899, 4.3580323),
            thoroughfare: "Koninginnelaan 42".to_string(),
            locality: "Spijkenisse".to_string(),
            administrative_area: "Zuid-Holland".to_string(),
            postal_code: "3201 EL".to_string(),
            country: "Netherlands".to_string(),
            formatted_address_lines: vec!["Koninginnelaan 42".to_string(), "3201 EL Spijkenisse".to_string()],
            ..Placemark::default()
        }
    }

    #[tokio::test]
    async fn native_path_normalizes_the_first_placemark() -> Result<(), GeocodeError> {
        let geocoder = geocoder_with(FakeNativeGeocoder::returning(vec![spijkenisse(), Placemark::default()]));

        let resolved = geocoder
            .resolve_address(Coordinate::new(51.8615899, 4.3580323), GeocodeProvider::Native)
            .await?;

        assert_eq!(resolved.placemark, spijkenisse());
        assert_eq!(resolved.address.locality, "Spijkenisse");
        assert_eq!(resolved.address.street_number, "Koninginnelaan 42");
        assert_eq!(resolved.address.formatted_address, "Koninginnelaan 42, 3201 EL Spijkenisse");
        assert_eq!(resolved.address.latitude, "51.8615899");

        Ok(())
    }

    #[tokio::test]
    async fn reverse_geocoding_without_placemarks_yields_no_placemarks() {
        let geocoder = geocoder_with(FakeNativeGeocoder::returning(vec![]));

        let result = geocoder.resolve_address(Coordinate::new(0.0, 0.0), GeocodeProvider::Native).await;

        assert!(matches!(result, Err(GeocodeError::NoPlacemarks)));
        assert_eq!(result.unwrap_err().to_string(), "No Placemarks Found!");
    }

    #[tokio::test]
    async fn forward_geocoding_without_placemarks_reports_the_address() {
        let geocoder = geocoder_with(FakeNativeGeocoder::returning(vec![]));

        let result = geocoder.resolve_coordinate("no such street 99", GeocodeProvider::Native).await;

        assert_eq!(result.unwrap_err().to_string(), "invalid address: no such street 99");
    }

    #[tokio::test]
    async fn native_geocoder_failure_surfaces_its_description() {
        let geocoder = geocoder_with(FakeNativeGeocoder::failing("geocoder unavailable"));

        let result = geocoder.resolve_address(Coordinate::new(1.0, 1.0), GeocodeProvider::Native).await;

        assert_eq!(result.unwrap_err().to_string(), "geocoder unavailable");
    }
}
