use super::*;
use gateways::position::PositionOptions;
use std::time::Duration;

const DEFAULT_REFRESH_MIN_DELAY: Duration = Duration::from_millis(2_000);

#[derive(Debug, Clone, PartialEq)]
pub struct CoordinatorSettings {
    pub position_options: PositionOptions,
    /// Minimum duration of a refresh, for visual feedback.
    pub refresh_min_delay: Duration,
    pub region_span: RegionSpan,
}

impl Default for CoordinatorSettings {
    fn default() -> Self {
        Self {
            position_options: PositionOptions::default(),
            refresh_min_delay: DEFAULT_REFRESH_MIN_DELAY,
            region_span: RegionSpan::default(),
        }
    }
}
