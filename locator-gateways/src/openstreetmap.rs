use async_trait::async_trait;
use geocoding::{Openstreetmap, Reverse};
use locator_core::{
    entities::Coordinate,
    gateways::geocode::{GeocodeError, GeocodedAddress, ReverseGeocoder},
};

use crate::reverse::reverse_blocking;

/// Reverse geocoding with the public Nominatim service
/// of OpenStreetMap.
#[derive(Debug, Clone, Default)]
pub struct OpenStreetMap;

#[async_trait]
impl ReverseGeocoder for OpenStreetMap {
    async fn geocode_position(
        &self,
        pos: Coordinate,
    ) -> Result<Vec<GeocodedAddress>, GeocodeError> {
        reverse_blocking(pos, |point| Openstreetmap::new().reverse(point)).await
    }
}
