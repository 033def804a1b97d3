use locator_core::gateways::platform::PlatformSettings;

/// Desktop systems offer no API to open the privacy settings,
/// so the user is told where to find them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopPlatform;

impl DesktopPlatform {
    fn location_settings_hint() -> &'static str {
        if cfg!(target_os = "macos") {
            "System Settings > Privacy & Security > Location Services"
        } else if cfg!(target_os = "windows") {
            "Settings > Privacy & security > Location"
        } else {
            "the location or privacy settings of your desktop environment"
        }
    }
}

impl PlatformSettings for DesktopPlatform {
    fn open_location_settings(&self) {
        log::warn!(
            "Please enable the location service in {}",
            Self::location_settings_hint()
        );
    }

    fn open_app_permission_settings(&self) {
        log::warn!(
            "Please allow this application to access your location in {}",
            Self::location_settings_hint()
        );
    }
}
