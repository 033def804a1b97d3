/// Platform-level hooks that are only invoked as
/// the side effect of an alert action.
pub trait PlatformSettings: Send + Sync {
    fn open_location_settings(&self);
    fn open_app_permission_settings(&self);
}
