/// Authorization outcome reported by the location capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthorizationStatus {
    NotDetermined,
    Restricted,
    Denied,
    AuthorizedAlways,
    AuthorizedWhenInUse,
}

impl AuthorizationStatus {
    /// Fixed status label passed to the result and status callbacks.
    pub fn label(&self) -> &'static str {
        match self {
            AuthorizationStatus::NotDetermined => "Not determined",
            AuthorizationStatus::Restricted => "Restricted Access",
            AuthorizationStatus::Denied => "Denied access",
            AuthorizationStatus::AuthorizedAlways | AuthorizationStatus::AuthorizedWhenInUse => "Allowed access",
        }
    }

    /// Explanatory text forwarded when verbose status reporting is enabled.
    pub fn verbose_message(&self) -> &'static str {
        match self {
            AuthorizationStatus::NotDetermined => "You have not yet made a choice with regards to this application.",
            AuthorizationStatus::Restricted => {
                "This application is not authorized to use location services. Due to active restrictions on location services, the user cannot change this status, and may not have personally denied authorization."
            }
            AuthorizationStatus::Denied => "You have explicitly denied authorization for this application, or location services are disabled in Settings.",
            AuthorizationStatus::AuthorizedAlways => "App is Authorized to use location services.",
            AuthorizationStatus::AuthorizedWhenInUse => "You have granted authorization to use your location only when the app is visible to you.",
        }
    }

    pub fn is_authorized(&self) -> bool {
        matches!(self, AuthorizationStatus::AuthorizedAlways | AuthorizationStatus::AuthorizedWhenInUse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AuthorizationStatus::NotDetermined, "Not determined", false)]
    #[case(AuthorizationStatus::Restricted, "Restricted Access", false)]
    #[case(AuthorizationStatus::Denied, "Denied access", false)]
    #[case(AuthorizationStatus::AuthorizedAlways, "Allowed access", true)]
    #[case(AuthorizationStatus::AuthorizedWhenInUse, "Allowed access", true)]
    fn maps_status_to_label(#[case] status: AuthorizationStatus, #[case] label: &str, #[case] authorized: bool) {
        assert_eq!(status.label(), label);
        assert_eq!(status.is_authorized(), authorized);
    }
}
