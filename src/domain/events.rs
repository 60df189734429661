use crate::domain::authorization::AuthorizationStatus;
use crate::domain::coordinate::Coordinate;

/// Events emitted by the location capability, delivered to the tracking
/// controller over a single channel so that all state transitions are
/// serialized on one task.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationEvent {
    AuthorizationChanged(AuthorizationStatus),
    PositionFix(Coordinate),
    Failure(String),
}

/// Payload of the result callback registered through `start_tracking`.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionUpdate {
    pub latitude: f64,
    pub longitude: f64,
    pub status: String,
    pub verbose_message: String,
    pub error: Option<String>,
}
