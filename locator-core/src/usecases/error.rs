use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("No coordinate has been acquired yet")]
    NoCoordinate,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("No address found")]
    EmptyGeocodingResult,
}
