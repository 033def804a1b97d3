use super::prelude::*;

pub fn classify_position_error(err: &PositionError) -> LocatingErrorKind {
    match err.code.parse::<PositionErrorCode>() {
        Ok(PositionErrorCode::Cancelled) => LocatingErrorKind::Cancelled,
        Ok(PositionErrorCode::Unavailable) => LocatingErrorKind::Unavailable,
        Ok(PositionErrorCode::Timeout) => LocatingErrorKind::Timeout,
        Ok(PositionErrorCode::Unauthorized) => LocatingErrorKind::Unauthorized,
        Err(_) => {
            log::debug!("Unknown position error code '{}'", err.code);
            LocatingErrorKind::Unknown
        }
    }
}
