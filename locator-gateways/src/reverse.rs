use geocoding::{GeocodingError, Point};
use locator_core::{
    entities::Coordinate,
    gateways::geocode::{GeocodeError, GeocodedAddress},
};

/// Run a blocking reverse geocoding request on the blocking thread pool.
pub(crate) async fn reverse_blocking<F>(
    pos: Coordinate,
    reverse: F,
) -> Result<Vec<GeocodedAddress>, GeocodeError>
where
    F: FnOnce(&Point<f64>) -> Result<Option<String>, GeocodingError> + Send + 'static,
{
    let point = Point::new(pos.lng(), pos.lat());
    let res = tokio::task::spawn_blocking(move || reverse(&point))
        .await
        .map_err(|err| GeocodeError(err.to_string()))?;
    match res {
        Ok(addr) => {
            log::debug!("Resolved location {pos}: {addr:?}");
            Ok(into_results(addr))
        }
        Err(err) => {
            log::warn!("Failed to resolve location {pos}: {err}");
            Err(GeocodeError(err.to_string()))
        }
    }
}

fn into_results(addr: Option<String>) -> Vec<GeocodedAddress> {
    addr.into_iter()
        .filter(|addr| !addr.trim().is_empty())
        .map(|formatted_address| GeocodedAddress { formatted_address })
        .collect()
}
