use crate::config::{GeocodingGateway, PositioningGateway};
use async_trait::async_trait;
use locator_core::{
    entities::Coordinate,
    gateways::{
        geocode::{GeocodeError, GeocodedAddress, ReverseGeocoder},
        position::{Position, PositionError, PositionOptions, PositionProvider},
    },
};
use locator_gateways::{
    fixed_position::FixedPosition, ip_api::IpApi, opencage::OpenCage,
    openstreetmap::OpenStreetMap,
};

pub fn position_gateway(cfg: PositioningGateway) -> PositionGw {
    match cfg {
        PositioningGateway::IpApi { url } => {
            log::info!("Use IP based positioning ({url})");
            PositionGw::new(IpApi::new(url))
        }
        PositioningGateway::FixedPosition(pos) => {
            log::info!("Use fixed position {pos}");
            PositionGw::new(FixedPosition::new(pos.lat(), pos.lng()))
        }
    }
}

pub fn geocoding_gateway(cfg: GeocodingGateway) -> GeocodingGw {
    match cfg {
        GeocodingGateway::OpenCage { api_key } => {
            log::info!("Use OpenCage geocoding gateway");
            GeocodingGw::new(OpenCage::new(api_key))
        }
        GeocodingGateway::OpenStreetMap => {
            log::info!("Use OpenStreetMap geocoding gateway");
            GeocodingGw::new(OpenStreetMap)
        }
    }
}

pub struct PositionGw(Box<dyn PositionProvider + 'static>);

impl PositionGw {
    pub fn new<G>(gw: G) -> Self
    where
        G: PositionProvider + 'static,
    {
        Self(Box::new(gw))
    }
}

#[async_trait]
impl PositionProvider for PositionGw {
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Position, PositionError> {
        self.0.current_position(options).await
    }
}

pub struct GeocodingGw(Box<dyn ReverseGeocoder + 'static>);

impl GeocodingGw {
    pub fn new<G>(gw: G) -> Self
    where
        G: ReverseGeocoder + 'static,
    {
        Self(Box::new(gw))
    }
}

#[async_trait]
impl ReverseGeocoder for GeocodingGw {
    async fn geocode_position(
        &self,
        pos: Coordinate,
    ) -> Result<Vec<GeocodedAddress>, GeocodeError> {
        self.0.geocode_position(pos).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn dispatch_to_fixed_position() {
        let pos = Coordinate::try_from_lat_lng_deg(52.52, 13.405).unwrap();
        let gw = position_gateway(PositioningGateway::FixedPosition(pos));
        let fix = gw
            .current_position(&PositionOptions::default())
            .await
            .unwrap();
        assert_eq!(52.52, fix.latitude);
        assert_eq!(13.405, fix.longitude);
    }

    #[tokio::test]
    async fn dispatch_to_opencage() {
        let gw = geocoding_gateway(GeocodingGateway::OpenCage { api_key: None });
        let pos = Coordinate::try_from_lat_lng_deg(52.52, 13.405).unwrap();
        assert!(gw.geocode_position(pos).await.is_err());
    }
}
