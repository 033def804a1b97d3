use super::*;

/// Read-only view on the state of a [`LocationCoordinator`](crate::prelude::LocationCoordinator).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub(crate) coordinate: Option<Coordinate>,
    pub(crate) address: Address,
    /// The coordinate the address has been resolved for.
    pub(crate) address_coordinate: Option<Coordinate>,
    pub(crate) locating: LocatingStatus,
    pub(crate) geocoding: GeocodingStatus,
    /// Number of pending refreshes.
    pub(crate) refreshing: usize,
    /// Identifies the most recent address request.
    pub(crate) geocoding_ticket: u64,
    pub(crate) region_span: RegionSpan,
}

impl Snapshot {
    pub(crate) fn new(region_span: RegionSpan) -> Self {
        Self {
            region_span,
            ..Default::default()
        }
    }

    pub const fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }

    pub const fn address(&self) -> &Address {
        &self.address
    }

    /// `true` if the address has been resolved for
    /// another coordinate than the current one.
    pub fn is_address_stale(&self) -> bool {
        !self.address.is_empty() && self.address_coordinate != self.coordinate
    }

    pub const fn locating(&self) -> LocatingStatus {
        self.locating
    }

    pub const fn geocoding(&self) -> GeocodingStatus {
        self.geocoding
    }

    pub const fn is_refreshing(&self) -> bool {
        self.refreshing > 0
    }

    pub fn region(&self) -> Option<ViewRegion> {
        self.coordinate
            .map(|center| ViewRegion::new(center, self.region_span))
    }
}
