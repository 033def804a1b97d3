use super::prelude::*;

const GEOCODING_FAILURE_TITLE: &str = "Error!!";

pub fn locating_failure_notification(kind: LocatingErrorKind, raw_message: &str) -> Notification {
    use LocatingErrorKind as K;
    let (title, message, remediation) = match kind {
        K::Cancelled => (
            "CANCELLED",
            "Location cancelled by user or by another request",
            None,
        ),
        K::Unavailable => (
            "UNAVAILABLE",
            "Location service is disabled or unavailable",
            Some(Remediation::OpenLocationSettings),
        ),
        K::Timeout => ("TIMEOUT", "Location request timed out", None),
        K::Unauthorized => (
            "UNAUTHORIZED",
            "Authorization denied, please enable location permission",
            Some(Remediation::OpenAppPermissionSettings),
        ),
        K::Unknown => ("UNKNOWN", raw_message, None),
    };
    Notification {
        title: title.to_string(),
        message: message.to_string(),
        remediation,
    }
}

pub fn geocoding_failure_notification(raw_message: &str) -> Notification {
    Notification {
        title: GEOCODING_FAILURE_TITLE.to_string(),
        message: raw_message.to_string(),
        remediation: None,
    }
}
