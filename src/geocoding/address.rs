use crate::domain::Coordinate;

/// Canonical address produced by both geocoding paths. Every field is a
/// string and absent values are empty strings, never an Option; callers rely
/// on this shape regardless of which provider resolved the address.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct NormalizedAddress {
    pub latitude: String,
    pub longitude: String,
    pub street_number: String,
    pub locality: String,
    pub sub_locality: String,
    pub administrative_area: String,
    pub postal_code: String,
    pub country: String,
    pub formatted_address: String,
}

/// Provider-neutral placemark value. The native geocoder returns these
/// directly; for the HTTP provider one is synthesized from the parsed
/// address fields since that provider has no native equivalent.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Placemark {
    pub coordinate: Coordinate,
    pub street: String,
    pub sub_thoroughfare: String,
    pub thoroughfare: String,
    pub sub_locality: String,
    pub locality: String,
    pub sub_administrative_area: String,
    pub administrative_area: String,
    /// Administrative-area code slot, e.g. "CA".
    pub state: String,
    pub postal_code: String,
    pub post_code_extension: String,
    pub country: String,
    pub iso_country_code: String,
    pub formatted_address_lines: Vec<String>,
}

/// Success payload of both geocoding paths.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedAddress {
    pub address: NormalizedAddress,
    pub placemark: Placemark,
}
