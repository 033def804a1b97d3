use async_trait::async_trait;
use geocoding::{Opencage, Reverse};
use locator_core::{
    entities::Coordinate,
    gateways::geocode::{GeocodeError, GeocodedAddress, ReverseGeocoder},
};

use crate::reverse::reverse_blocking;

/// Reverse geocoding with the [OpenCage](https://opencagedata.com) API.
#[derive(Debug, Clone)]
pub struct OpenCage {
    api_key: Option<String>,
}

impl OpenCage {
    pub fn new(api_key: Option<String>) -> Self {
        if api_key.is_none() {
            log::warn!("No OpenCage API key found");
        }
        Self { api_key }
    }
}

#[async_trait]
impl ReverseGeocoder for OpenCage {
    async fn geocode_position(
        &self,
        pos: Coordinate,
    ) -> Result<Vec<GeocodedAddress>, GeocodeError> {
        let Some(api_key) = self.api_key.clone() else {
            return Err(GeocodeError("No OpenCage API key configured".into()));
        };
        reverse_blocking(pos, move |point| Opencage::new(api_key).reverse(point)).await
    }
}
