use crate::domain::Coordinate;

/// Current and last-known position held by a tracking controller, together
/// with their decimal string mirrors. `current` is cleared whenever tracking
/// stops or fails; `last_known` survives unless retention is disabled.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct PositionSnapshot {
    current: Option<Coordinate>,
    last_known: Option<Coordinate>,
    latitude_text: String,
    longitude_text: String,
    last_known_latitude_text: String,
    last_known_longitude_text: String,
}

impl PositionSnapshot {
    /// Records an accepted fix: current and last-known always reflect the
    /// same fix, updated together with their string mirrors.
    pub fn record_fix(&mut self, coordinate: Coordinate) {
        self.current = Some(coordinate);
        self.last_known = Some(coordinate);
        self.latitude_text = coordinate.latitude.to_string();
        self.longitude_text = coordinate.longitude.to_string();
        self.last_known_latitude_text = self.latitude_text.clone();
        self.last_known_longitude_text = self.longitude_text.clone();
    }

    pub fn clear_current(&mut self) {
        self.current = None;
        self.latitude_text.clear();
        self.longitude_text.clear();
    }

    pub fn clear_last_known(&mut self) {
        self.last_known = None;
        self.last_known_latitude_text.clear();
        self.last_known_longitude_text.clear();
    }

    pub fn current(&self) -> Option<Coordinate> {
        self.current
    }

    pub fn last_known(&self) -> Option<Coordinate> {
        self.last_known
    }

    pub fn has_last_known(&self) -> bool {
        self.last_known.is_some()
    }

    /// Current latitude, or 0.0 when no fix is held. Mirrors what the result
    /// callback reports after a reset.
    pub fn latitude(&self) -> f64 {
        self.current.map(|c| c.latitude).unwrap_or_default()
    }

    pub fn longitude(&self) -> f64 {
        self.current.map(|c| c.longitude).unwrap_or_default()
    }

    pub fn latitude_text(&self) -> &str {
        &self.latitude_text
    }

    pub fn longitude_text(&self) -> &str {
        &self.longitude_text
    }

    pub fn last_known_latitude_text(&self) -> &str {
        &self.last_known_latitude_text
    }

    pub fn last_known_longitude_text(&self) -> &str {
        &self.last_known_longitude_text
    }
}
