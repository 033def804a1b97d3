use crate::entities::Coordinate;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodedAddress {
    pub formatted_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct GeocodeError(pub String);

#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn geocode_position(
        &self,
        pos: Coordinate,
    ) -> Result<Vec<GeocodedAddress>, GeocodeError>;
}
