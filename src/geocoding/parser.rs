use crate::domain::Coordinate;
use crate::geocoding::address::{NormalizedAddress, Placemark};
use crate::geocoding::response::{AddressComponent, GeocodeResult};

/// Provider-specific intermediate populated by either parse entry point and
/// projected down to the public result shapes. Created per request.
#[derive(Clone, Default, Debug)]
pub struct RawAddressFields {
    latitude: String,
    longitude: String,
    street_number: String,
    route: String,
    locality: String,
    sub_locality: String,
    formatted_address: String,
    administrative_area: String,
    administrative_area_code: String,
    sub_administrative_area: String,
    postal_code: String,
    country: String,
    sub_thoroughfare: String,
    thoroughfare: String,
    iso_country_code: String,
}

impl RawAddressFields {
    /// Parses a native-provider placemark. Present fields are copied
    /// verbatim, absent ones stay empty; the formatted address is the
    /// placemark's address lines joined with ", ".
    pub fn from_placemark(placemark: &Placemark) -> Self {
        RawAddressFields {
            latitude: placemark.coordinate.latitude.to_string(),
            longitude: placemark.coordinate.longitude.to_string(),
            // The native provider reports the street line as the thoroughfare
            street_number: placemark.thoroughfare.clone(),
            locality: placemark.locality.clone(),
            postal_code: placemark.postal_code.clone(),
            sub_locality: placemark.sub_locality.clone(),
            administrative_area: placemark.administrative_area.clone(),
            country: placemark.country.clone(),
            formatted_address: placemark.formatted_address_lines.join(", "),
            ..RawAddressFields::default()
        }
    }

    /// Parses one result entry of the HTTP provider's response. Each semantic
    /// field comes from the address component whose first type tag matches a
    /// fixed name; a missing or empty component yields an empty string.
    pub fn from_http_result(result: &GeocodeResult) -> Self {
        let components = &result.address_components;
        let sub_thoroughfare = long_component(components, "street_number");
        let thoroughfare = long_component(components, "route");

        RawAddressFields {
            latitude: result.geometry.location.lat.to_string(),
            longitude: result.geometry.location.lng.to_string(),
            street_number: sub_thoroughfare.clone(),
            route: thoroughfare.clone(),
            locality: long_component(components, "locality"),
            postal_code: long_component(components, "postal_code"),
            sub_locality: long_component(components, "subLocality"),
            administrative_area: long_component(components, "administrative_area_level_1"),
            administrative_area_code: short_component(components, "administrative_area_level_1"),
            sub_administrative_area: long_component(components, "administrative_area_level_2"),
            country: long_component(components, "country"),
            iso_country_code: short_component(components, "country"),
            formatted_address: result.formatted_address.clone(),
            sub_thoroughfare,
            thoroughfare,
        }
    }

    /// Projects down to the canonical nine-field address.
    pub fn to_normalized(&self) -> NormalizedAddress {
        NormalizedAddress {
            latitude: self.latitude.clone(),
            longitude: self.longitude.clone(),
            street_number: self.street_number.clone(),
            locality: self.locality.clone(),
            sub_locality: self.sub_locality.clone(),
            administrative_area: self.administrative_area.clone(),
            postal_code: self.postal_code.clone(),
            country: self.country.clone(),
            formatted_address: self.formatted_address.clone(),
        }
    }

    /// Synthesizes a placemark for the HTTP path: the street line is the
    /// first comma-separated segment of the formatted address, the state slot
    /// carries the administrative-area code, and the coordinate is parsed
    /// back from the stringified values.
    pub fn to_placemark(&self) -> Placemark {
        let formatted_address_lines: Vec<String> = if self.formatted_address.is_empty() {
            vec![]
        } else {
            self.formatted_address.split(", ").map(str::to_string).collect()
        };

        Placemark {
            coordinate: Coordinate::new(
                self.latitude.parse().unwrap_or_default(),
                self.longitude.parse().unwrap_or_default(),
            ),
            street: formatted_address_lines.first().cloned().unwrap_or_default(),
            sub_thoroughfare: self.sub_thoroughfare.clone(),
            thoroughfare: self.thoroughfare.clone(),
            sub_locality: self.sub_locality.clone(),
            locality: self.locality.clone(),
            sub_administrative_area: self.sub_administrative_area.clone(),
            administrative_area: self.administrative_area.clone(),
            state: self.administrative_area_code.clone(),
            postal_code: self.postal_code.clone(),
            post_code_extension: String::new(),
            country: self.country.clone(),
            iso_country_code: self.iso_country_code.clone(),
            formatted_address_lines,
        }
    }
}

fn component<'a>(components: &'a [AddressComponent], name: &str) -> Option<&'a AddressComponent> {
    // Only the first type tag of an entry is consulted
    components.iter().find(|component| component.types.first().is_some_and(|t| t == name))
}

fn long_component(components: &[AddressComponent], name: &str) -> String {
    component(components, name)
        .map(|c| c.long_name.clone())
        .filter(|value| !value.is_empty())
        .unwrap_or_default()
}

fn short_component(components: &[AddressComponent], name: &str) -> String {
    component(components, name)
        .map(|c| c.short_name.clone())
        .filter(|value| !value.is_empty())
        .unwrap_or_default()
}
