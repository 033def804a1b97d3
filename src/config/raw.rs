use duration_str::deserialize_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("locator.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub locating: Option<Locating>,
    pub refresh: Option<Refresh>,
    pub map: Option<Map>,
    pub positioning: Option<Positioning>,
    pub geocoding: Option<Geocoding>,
    pub gateway: Option<Gateway>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Locating {
    pub high_accuracy: bool,
    #[serde(deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
}

impl Default for Locating {
    fn default() -> Self {
        Config::default().locating.expect("Locating configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Refresh {
    #[serde(deserialize_with = "deserialize_duration")]
    pub min_delay: Duration,
}

impl Default for Refresh {
    fn default() -> Self {
        Config::default().refresh.expect("Refresh configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Map {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Default for Map {
    fn default() -> Self {
        Config::default().map.expect("Map configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Positioning {
    pub gateway: Option<PositioningGateway>,
}

impl Default for Positioning {
    fn default() -> Self {
        Config::default()
            .positioning
            .expect("Positioning configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositioningGateway {
    IpApi,
    FixedPosition,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

impl Default for Geocoding {
    fn default() -> Self {
        Config::default().geocoding.expect("Geocoding configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Opencage,
    Openstreetmap,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub ip_api: Option<IpApi>,
    pub fixed_position: Option<FixedPosition>,
    pub opencage: Option<OpenCage>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct IpApi {
    pub url: Option<String>,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FixedPosition {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OpenCage {
    pub api_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        let locating = cfg.locating.unwrap();
        assert!(locating.high_accuracy);
        assert_eq!(Duration::from_secs(15), locating.timeout);
        assert_eq!(Duration::from_secs(2), cfg.refresh.unwrap().min_delay);
        assert!(matches!(
            cfg.positioning.unwrap().gateway,
            Some(PositioningGateway::IpApi)
        ));
        assert!(matches!(
            cfg.geocoding.unwrap().gateway,
            Some(GeocodingGateway::Openstreetmap)
        ));
        let gateway = cfg.gateway.unwrap();
        assert!(gateway.ip_api.unwrap().url.is_some());
        assert!(gateway.opencage.unwrap().api_key.is_none());
    }

    #[test]
    fn parse_durations() {
        let cfg: Refresh = toml::from_str(r#"min-delay = "1m30s""#).unwrap();
        assert_eq!(Duration::from_secs(90), cfg.min_delay);
        let cfg: Refresh = toml::from_str(r#"min-delay = "500ms""#).unwrap();
        assert_eq!(Duration::from_millis(500), cfg.min_delay);
    }

    #[test]
    fn reject_unknown_gateway() {
        assert!(toml::from_str::<Positioning>(r#"gateway = "gps""#).is_err());
    }
}
