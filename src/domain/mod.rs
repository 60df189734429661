mod authorization;
mod coordinate;
pub mod events;

pub use authorization::AuthorizationStatus;
pub use coordinate::Coordinate;
