use strum::Display;

/// Progress of a single asynchronous operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStatus<E> {
    Idle,
    InFlight,
    Succeeded,
    Failed(E),
}

impl<E> OperationStatus<E> {
    pub const fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }
}

impl<E> Default for OperationStatus<E> {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LocatingErrorKind {
    /// Superseded by another request or dismissed by the user.
    Cancelled,
    /// The location service is disabled.
    Unavailable,
    Timeout,
    /// Permission denied.
    Unauthorized,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GeocodingErrorKind {
    NoCoordinate,
    Unknown,
}

pub type LocatingStatus = OperationStatus<LocatingErrorKind>;
pub type GeocodingStatus = OperationStatus<GeocodingErrorKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_by_default() {
        assert_eq!(LocatingStatus::Idle, LocatingStatus::default());
        assert!(!GeocodingStatus::default().is_in_flight());
    }

    #[test]
    fn in_flight_status() {
        let status = LocatingStatus::Failed(LocatingErrorKind::Timeout);
        assert!(!status.is_in_flight());
        assert!(LocatingStatus::InFlight.is_in_flight());
    }
}
