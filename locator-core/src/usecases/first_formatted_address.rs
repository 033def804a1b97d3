use super::prelude::*;

/// Only the first (best) result of a reverse geocoding request is used.
pub fn first_formatted_address(results: Vec<GeocodedAddress>) -> Result<Address> {
    results
        .into_iter()
        .next()
        .map(|res| Address::from(res.formatted_address))
        .ok_or(Error::EmptyGeocodingResult)
}
