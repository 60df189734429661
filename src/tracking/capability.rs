use async_trait::async_trait;
use std::fmt::Debug;

/// Tracking mode requested from the location capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateMode {
    Continuous,
    /// Lower-power mode that only reports fixes on large displacement.
    SignificantChange,
}

/// Seam towards the device location subsystem. Implementations emit
/// `LocationEvent` values on the channel the controller listens on; the
/// controller only ever drives the subsystem through these calls.
#[async_trait]
pub trait LocationCapability: Debug + Send + Sync {
    async fn request_authorization(&self);

    async fn begin_updates(&self, mode: UpdateMode);

    async fn end_updates(&self);

    fn supports_significant_change(&self) -> bool;
}
