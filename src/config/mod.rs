use anyhow::{anyhow, Result};
use locator_application::prelude::CoordinatorSettings;
use locator_core::{
    entities::{Coordinate, RegionSpan},
    gateways::position::PositionOptions,
};
use std::{env, fs, io::ErrorKind, path::Path};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "locator.toml";

const ENV_NAME_OPENCAGE_API_KEY: &str = "OPENCAGE_API_KEY";

pub struct Config {
    pub coordinator: CoordinatorSettings,
    pub positioning: PositioningGateway,
    pub geocoding: GeocodingGateway,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(api_key) = env::var(ENV_NAME_OPENCAGE_API_KEY) {
            cfg.set_opencage_api_key(api_key);
        }
        Ok(cfg)
    }

    fn set_opencage_api_key(&mut self, key: String) {
        if let GeocodingGateway::OpenCage { api_key } = &mut self.geocoding {
            *api_key = non_empty(key);
        }
    }
}

pub enum PositioningGateway {
    IpApi { url: String },
    FixedPosition(Coordinate),
}

pub enum GeocodingGateway {
    OpenCage { api_key: Option<String> },
    OpenStreetMap,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            locating,
            refresh,
            map,
            positioning,
            geocoding,
            gateway,
        } = from;

        let raw::Locating {
            high_accuracy,
            timeout,
        } = locating.unwrap_or_default();
        if timeout.is_zero() {
            return Err(anyhow!("The locating timeout must not be zero"));
        }
        let position_options = PositionOptions {
            enable_high_accuracy: high_accuracy,
            timeout,
        };

        let raw::Refresh { min_delay } = refresh.unwrap_or_default();

        let raw::Map {
            latitude_delta,
            longitude_delta,
        } = map.unwrap_or_default();
        if !is_valid_delta(latitude_delta) || !is_valid_delta(longitude_delta) {
            return Err(anyhow!(
                "Invalid map span: {latitude_delta} x {longitude_delta}"
            ));
        }
        let region_span = RegionSpan {
            latitude_delta,
            longitude_delta,
        };

        let coordinator = CoordinatorSettings {
            position_options,
            refresh_min_delay: min_delay,
            region_span,
        };

        let gateway = gateway.unwrap_or_default();

        let positioning = match positioning.unwrap_or_default().gateway {
            Some(raw::PositioningGateway::IpApi) => {
                let url = gateway
                    .ip_api
                    .clone()
                    .and_then(|gw| gw.url)
                    .unwrap_or_else(|| locator_gateways::ip_api::DEFAULT_URL.to_string());
                PositioningGateway::IpApi { url }
            }
            Some(raw::PositioningGateway::FixedPosition) => {
                let raw::FixedPosition {
                    latitude,
                    longitude,
                } = gateway.fixed_position.clone().ok_or_else(|| {
                    anyhow!("Missing 'fixed-position' gateway configuration")
                })?;
                let pos = Coordinate::try_from_lat_lng_deg(latitude, longitude)
                    .ok_or_else(|| anyhow!("Invalid fixed position: {latitude},{longitude}"))?;
                PositioningGateway::FixedPosition(pos)
            }
            None => return Err(anyhow!("No positioning gateway configured")),
        };

        let geocoding = match geocoding.unwrap_or_default().gateway {
            Some(raw::GeocodingGateway::Opencage) => {
                let api_key = gateway
                    .opencage
                    .and_then(|gw| gw.api_key)
                    .and_then(non_empty);
                GeocodingGateway::OpenCage { api_key }
            }
            Some(raw::GeocodingGateway::Openstreetmap) => GeocodingGateway::OpenStreetMap,
            None => return Err(anyhow!("No geocoding gateway configured")),
        };

        Ok(Self {
            coordinator,
            positioning,
            geocoding,
        })
    }
}

fn is_valid_delta(delta: f64) -> bool {
    delta.is_finite() && delta > 0.0
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
