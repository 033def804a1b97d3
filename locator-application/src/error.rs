use locator_core::{
    gateways::geocode::GeocodeError, status::LocatingErrorKind,
    usecases::Error as ParameterError,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error("Location could not be acquired: {0}")]
    Locating(LocatingErrorKind),
    #[error(transparent)]
    Geocoding(#[from] GeocodeError),
    #[error("The address belongs to an outdated coordinate")]
    StaleAddress,
}
