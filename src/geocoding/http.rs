use crate::app_config::AppConfig;
use crate::domain::Coordinate;
use crate::geocoding::address::ResolvedAddress;
use crate::geocoding::error::GeocodeError;
use crate::geocoding::parser::RawAddressFields;
use crate::geocoding::response::GeocodeResponse;
use reqwest::Client;
use tracing::{debug, instrument, warn};

/// Which of the two request shapes a call resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeocodeRequestKind {
    Geocode,
    ReverseGeocode,
}

/// Geocoder backed by the third-party HTTP geocoding API. Stateless apart
/// from the connection pool; safe to share across concurrent requests.
#[derive(Debug)]
pub struct HttpGeocoder {
    client: Client,
    base_url: String,
}

impl HttpGeocoder {
    pub fn new(config: &AppConfig) -> Result<Self, GeocodeError> {
        let client = Client::builder().build()?;
        Ok(HttpGeocoder {
            client,
            base_url: config.geocoder().base_url().trim_end_matches('/').to_string(),
        })
    }

    /// Forward geocode: resolves free-form address text to an address record.
    #[instrument(skip(self))]
    pub async fn geocode(&self, address: &str) -> Result<ResolvedAddress, GeocodeError> {
        self.fetch(GeocodeRequestKind::Geocode, &[("address", address.to_string()), ("sensor", "true".to_string())])
            .await
    }

    /// Reverse geocode: resolves a coordinate to an address record.
    #[instrument(skip(self))]
    pub async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<ResolvedAddress, GeocodeError> {
        let latlng = format!("{},{}", coordinate.latitude, coordinate.longitude);
        self.fetch(GeocodeRequestKind::ReverseGeocode, &[("latlng", latlng), ("sensor", "true".to_string())])
            .await
    }

    #[instrument(skip(self, query))]
    async fn fetch(&self, kind: GeocodeRequestKind, query: &[(&str, String)]) -> Result<ResolvedAddress, GeocodeError> {
        debug!("🌍 Requesting {:?} from {}...", kind, self.base_url);

        let response = self
            .client
            .get(format!("{}/geocode/json", self.base_url))
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        let body = response.json::<GeocodeResponse>().await?;
        debug!("🌍 Requesting {:?} from {}... {}", kind, self.base_url, body.status);

        classify(body)
    }
}

/// Normalizes the provider's status to lowercase and branches: "ok" parses
/// the first result; the four expected empty-result statuses surface as-is;
/// anything else is treated as invalid input.
fn classify(response: GeocodeResponse) -> Result<ResolvedAddress, GeocodeError> {
    match response.status.to_lowercase().as_str() {
        "ok" => {
            let Some(result) = response.results.first() else {
                warn!("⚠️ Provider answered OK without any results");
                return Err(GeocodeError::NoPlacemarks);
            };

            let raw = RawAddressFields::from_http_result(result);
            Ok(ResolvedAddress {
                address: raw.to_normalized(),
                placemark: raw.to_placemark(),
            })
        }
        "zero_results" | "over_query_limit" | "request_denied" | "invalid_request" => Err(GeocodeError::ProviderStatus(response.status)),
        _ => Err(GeocodeError::InvalidInput),
    }
}
