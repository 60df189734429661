mod capability;
mod controller;
mod snapshot;

pub use capability::{LocationCapability, UpdateMode};
pub use controller::{ErrorCallback, ResultCallback, StatusCallback, TrackingController, TrackingState, VerboseMessageCallback};
pub use snapshot::PositionSnapshot;
