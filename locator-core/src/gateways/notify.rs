use super::platform::PlatformSettings;

/// An action the user may take to fix the cause of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remediation {
    OpenLocationSettings,
    OpenAppPermissionSettings,
}

impl Remediation {
    pub fn apply(self, platform: &dyn PlatformSettings) {
        match self {
            Self::OpenLocationSettings => platform.open_location_settings(),
            Self::OpenAppPermissionSettings => platform.open_app_permission_settings(),
        }
    }
}

/// A user-facing alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub remediation: Option<Remediation>,
}

pub trait NotificationGateway: Send + Sync {
    fn notify(&self, notification: Notification);
}
