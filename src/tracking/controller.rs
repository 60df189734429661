use crate::app_config::AppConfig;
use crate::domain::events::{LocationEvent, PositionUpdate};
use crate::domain::{AuthorizationStatus, Coordinate};
use crate::tracking::capability::{LocationCapability, UpdateMode};
use crate::tracking::snapshot::PositionSnapshot;
use std::sync::Arc;
use tokio::sync::mpsc::Receiver;
use tracing::{debug, info, instrument, trace, warn};

/// Authorization/update state of one controller. Denied, Restricted and
/// Failed are recoverable: a fresh `start_tracking` re-enters
/// AwaitingAuthorization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackingState {
    Idle,
    AwaitingAuthorization,
    Active,
    Denied,
    Restricted,
    Failed,
}

pub type ResultCallback = Box<dyn Fn(PositionUpdate) + Send>;
pub type StatusCallback = Box<dyn Fn(&str) + Send>;
pub type ErrorCallback = Box<dyn Fn(&str) + Send>;
pub type VerboseMessageCallback = Box<dyn Fn(&str) + Send>;

const INITIAL_STATUS: &str = "Calibrating";

/// Owns the authorization/update state machine over a location capability.
///
/// All mutation happens through `&mut self`, so transitions are serialized by
/// construction: wire the capability's events into an mpsc channel and drain
/// it with [`TrackingController::listen`] on one task. Configuration switches
/// take effect immediately and must be flipped from that same task.
pub struct TrackingController {
    capability: Arc<dyn LocationCapability>,
    state: TrackingState,
    snapshot: PositionSnapshot,
    status_label: String,
    verbose_message: String,
    force_continuous: bool,
    retain_last_known: bool,
    verbose_status: bool,
    on_result: Option<ResultCallback>,
    on_status: Option<StatusCallback>,
    on_error: Option<ErrorCallback>,
    on_verbose_message: Option<VerboseMessageCallback>,
}

impl TrackingController {
    pub fn new(capability: Arc<dyn LocationCapability>, config: &AppConfig) -> Self {
        TrackingController {
            capability,
            state: TrackingState::Idle,
            snapshot: PositionSnapshot::default(),
            status_label: INITIAL_STATUS.to_string(),
            verbose_message: INITIAL_STATUS.to_string(),
            force_continuous: config.tracking().force_continuous(),
            retain_last_known: config.tracking().retain_last_known(),
            verbose_status: config.tracking().verbose_status(),
            on_result: None,
            on_status: None,
            on_error: None,
            on_verbose_message: None,
        }
    }

    pub fn state(&self) -> TrackingState {
        self.state
    }

    pub fn snapshot(&self) -> &PositionSnapshot {
        &self.snapshot
    }

    pub fn status_label(&self) -> &str {
        &self.status_label
    }

    pub fn is_running(&self) -> bool {
        self.state == TrackingState::Active
    }

    pub fn on_status(&mut self, callback: impl Fn(&str) + Send + 'static) {
        self.on_status = Some(Box::new(callback));
    }

    pub fn on_error(&mut self, callback: impl Fn(&str) + Send + 'static) {
        self.on_error = Some(Box::new(callback));
    }

    pub fn on_verbose_message(&mut self, callback: impl Fn(&str) + Send + 'static) {
        self.on_verbose_message = Some(Box::new(callback));
    }

    pub fn set_force_continuous(&mut self, value: bool) {
        self.force_continuous = value;
    }

    pub fn set_retain_last_known(&mut self, value: bool) {
        self.retain_last_known = value;
    }

    pub fn set_verbose_status(&mut self, value: bool) {
        self.verbose_status = value;
    }

    /// Registers the result callback and asks the capability for
    /// authorization. Callable again after Denied, Restricted or Failed; the
    /// machine re-enters AwaitingAuthorization and waits for a fresh outcome.
    #[instrument(skip_all)]
    pub async fn start_tracking(&mut self, on_result: impl Fn(PositionUpdate) + Send + 'static) {
        self.on_result = Some(Box::new(on_result));
        self.state = TrackingState::AwaitingAuthorization;

        info!("📍 Requesting location authorization...");
        self.capability.request_authorization().await;
    }

    /// Halts updates and applies the retention policy. A no-op when already
    /// Idle: no capability call, no callback.
    #[instrument(skip_all)]
    pub async fn stop_tracking(&mut self) {
        if self.state == TrackingState::Idle {
            debug!("📍 stop_tracking while Idle, nothing to do");
            return;
        }

        if self.state == TrackingState::Active {
            self.capability.end_updates().await;
        }

        info!("📍 Stopped tracking");
        self.state = TrackingState::Idle;
        self.reset_position();
    }

    /// Drains the capability's event stream. Runs until the channel closes;
    /// every transition happens sequentially on the calling task.
    #[instrument(skip_all)]
    pub async fn listen(&mut self, mut rx: Receiver<LocationEvent>) {
        while let Some(event) = rx.recv().await {
            debug!("📍 Received event: {:?}", event);
            self.handle_event(event).await;
        }
        debug!("📍 Event channel closed");
    }

    /// Single mutation point for capability events.
    pub async fn handle_event(&mut self, event: LocationEvent) {
        match event {
            LocationEvent::AuthorizationChanged(status) => self.authorization_changed(status).await,
            LocationEvent::PositionFix(coordinate) => self.position_fix(coordinate),
            LocationEvent::Failure(description) => self.capability_failed(description).await,
        }
    }

    async fn authorization_changed(&mut self, status: AuthorizationStatus) {
        self.status_label = status.label().to_string();
        self.verbose_message = status.verbose_message().to_string();

        if status.is_authorized() {
            info!("🟢 Location authorization granted, starting updates");
            self.begin_updates().await;
            self.state = TrackingState::Active;
            return;
        }

        self.state = match status {
            AuthorizationStatus::Denied => TrackingState::Denied,
            AuthorizationStatus::Restricted => TrackingState::Restricted,
            _ => TrackingState::AwaitingAuthorization,
        };
        warn!("⚠️ Location authorization not granted: {}", self.status_label);

        // Position state is reset before any callback observes the outcome
        self.reset_position();

        // A denied outcome is reported through the status callback only;
        // the result callback fires for the other outcomes.
        if status != AuthorizationStatus::Denied {
            let verbose = self.verbose_text();
            if !verbose.is_empty()
                && let Some(on_verbose_message) = &self.on_verbose_message
            {
                on_verbose_message(&verbose);
            }

            if let Some(on_result) = &self.on_result {
                on_result(PositionUpdate {
                    latitude: self.snapshot.latitude(),
                    longitude: self.snapshot.longitude(),
                    status: self.status_label.clone(),
                    verbose_message: verbose,
                    error: None,
                });
            }
        }

        if let Some(on_status) = &self.on_status {
            on_status(&self.status_label);
        }
    }

    fn position_fix(&mut self, coordinate: Coordinate) {
        if self.state != TrackingState::Active {
            trace!("📍 Ignoring fix while {:?}", self.state);
            return;
        }
        if !coordinate.is_valid() {
            warn!("⚠️ Capability reported an out-of-range fix: {:?}", coordinate);
        }

        self.snapshot.record_fix(coordinate);
        debug!("📍 Fix: {}, {}", self.snapshot.latitude_text(), self.snapshot.longitude_text());

        if let Some(on_result) = &self.on_result {
            on_result(PositionUpdate {
                latitude: coordinate.latitude,
                longitude: coordinate.longitude,
                status: self.status_label.clone(),
                verbose_message: self.verbose_text(),
                error: None,
            });
        }
    }

    async fn capability_failed(&mut self, description: String) {
        warn!("⚠️ Location capability failed: {}", description);

        self.capability.end_updates().await;
        self.state = TrackingState::Failed;
        self.reset_position();

        if let Some(on_result) = &self.on_result {
            on_result(PositionUpdate {
                latitude: 0.0,
                longitude: 0.0,
                status: self.status_label.clone(),
                verbose_message: self.verbose_text(),
                error: Some(description.clone()),
            });
        }

        if let Some(on_error) = &self.on_error {
            on_error(&description);
        }
    }

    async fn begin_updates(&mut self) {
        let mode = if self.force_continuous || !self.capability.supports_significant_change() {
            UpdateMode::Continuous
        } else {
            UpdateMode::SignificantChange
        };
        debug!("📍 Beginning updates in {:?} mode", mode);
        self.capability.begin_updates(mode).await;
    }

    fn reset_position(&mut self) {
        self.snapshot.clear_current();
        if !self.retain_last_known {
            self.snapshot.clear_last_known();
        }
    }

    fn verbose_text(&self) -> String {
        if self.verbose_status { self.verbose_message.clone() } else { String::new() }
    }
}
