use super::prelude::*;

pub fn accept_position(pos: Position) -> Result<Coordinate> {
    let Position {
        latitude,
        longitude,
    } = pos;
    Coordinate::try_from_lat_lng_deg(latitude, longitude).ok_or(Error::InvalidPosition)
}
