use async_trait::async_trait;
use locator_core::gateways::position::*;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_URL: &str = "http://ip-api.com/json/?fields=status,message,lat,lon";

/// Best-effort positioning based on the public IP address.
#[derive(Debug, Clone)]
pub struct IpApi {
    url: String,
}

impl IpApi {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for IpApi {
    fn default() -> Self {
        Self::new(DEFAULT_URL)
    }
}

#[async_trait]
impl PositionProvider for IpApi {
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Position, PositionError> {
        if options.enable_high_accuracy {
            log::debug!("IP based positioning cannot provide high accuracy");
        }
        let url = self.url.clone();
        let timeout = options.timeout;
        tokio::task::spawn_blocking(move || fetch_position(&url, timeout))
            .await
            .map_err(|err| {
                if err.is_cancelled() {
                    PositionError::new(PositionErrorCode::Cancelled, err.to_string())
                } else {
                    PositionError::other("INTERNAL", err.to_string())
                }
            })?
    }
}

#[derive(Debug, Deserialize)]
struct Response {
    status: String,
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

fn fetch_position(url: &str, timeout: Duration) -> Result<Position, PositionError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(request_error)?;
    let response = client.get(url).send().map_err(request_error)?;
    if let Some(err) = status_error(response.status()) {
        return Err(err);
    }
    let response: Response = response.json().map_err(request_error)?;
    log::debug!("IP geolocation response: {response:?}");
    into_position(response)
}

fn request_error(err: reqwest::Error) -> PositionError {
    if err.is_timeout() {
        PositionError::new(PositionErrorCode::Timeout, err.to_string())
    } else if err.is_connect() || err.is_builder() {
        PositionError::new(PositionErrorCode::Unavailable, err.to_string())
    } else {
        PositionError::other("REQUEST_FAILED", err.to_string())
    }
}

fn status_error(status: StatusCode) -> Option<PositionError> {
    if status.is_success() {
        return None;
    }
    let err = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            PositionError::new(PositionErrorCode::Unauthorized, status.to_string())
        }
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            PositionError::new(PositionErrorCode::Timeout, status.to_string())
        }
        StatusCode::TOO_MANY_REQUESTS => {
            PositionError::new(PositionErrorCode::Unavailable, status.to_string())
        }
        _ if status.is_server_error() => {
            PositionError::new(PositionErrorCode::Unavailable, status.to_string())
        }
        _ => PositionError::other(format!("HTTP_{}", status.as_u16()), status.to_string()),
    };
    Some(err)
}

fn into_position(response: Response) -> Result<Position, PositionError> {
    let Response {
        status,
        message,
        lat,
        lon,
    } = response;
    match (status.as_str(), lat, lon) {
        ("success", Some(latitude), Some(longitude)) => Ok(Position {
            latitude,
            longitude,
        }),
        ("success", _, _) => Err(PositionError::other(
            "INCOMPLETE_RESPONSE",
            "The response contains no position",
        )),
        _ => {
            let message = message.unwrap_or(status);
            // Private and reserved addresses cannot be located
            if message.contains("range") {
                Err(PositionError::new(PositionErrorCode::Unavailable, message))
            } else {
                Err(PositionError::other("LOOKUP_FAILED", message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Position, PositionError> {
        into_position(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn successful_lookup() {
        let pos = parse(r#"{"status":"success","lat":52.52,"lon":13.405}"#).unwrap();
        assert_eq!(52.52, pos.latitude);
        assert_eq!(13.405, pos.longitude);
    }

    #[test]
    fn lookup_of_private_address() {
        let err = parse(r#"{"status":"fail","message":"private range"}"#).unwrap_err();
        assert_eq!("UNAVAILABLE", err.code);
        assert_eq!("private range", err.message);
    }

    #[test]
    fn lookup_of_invalid_query() {
        let err = parse(r#"{"status":"fail","message":"invalid query"}"#).unwrap_err();
        assert_eq!("LOOKUP_FAILED", err.code);
    }

    #[test]
    fn incomplete_response() {
        let err = parse(r#"{"status":"success","lat":52.52}"#).unwrap_err();
        assert_eq!("INCOMPLETE_RESPONSE", err.code);
    }

    #[test]
    fn classify_http_status() {
        assert!(status_error(StatusCode::OK).is_none());
        assert_eq!(
            "UNAUTHORIZED",
            status_error(StatusCode::FORBIDDEN).unwrap().code
        );
        assert_eq!(
            "UNAVAILABLE",
            status_error(StatusCode::TOO_MANY_REQUESTS).unwrap().code
        );
        assert_eq!(
            "UNAVAILABLE",
            status_error(StatusCode::BAD_GATEWAY).unwrap().code
        );
        assert_eq!(
            "TIMEOUT",
            status_error(StatusCode::GATEWAY_TIMEOUT).unwrap().code
        );
        assert_eq!("HTTP_404", status_error(StatusCode::NOT_FOUND).unwrap().code);
    }
}
