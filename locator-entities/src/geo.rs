use std::fmt;

const LAT_DEG_MAX: f64 = 90.0;
const LAT_DEG_MIN: f64 = -90.0;
const LNG_DEG_MAX: f64 = 180.0;
const LNG_DEG_MIN: f64 = -180.0;

const DEFAULT_DELTA_DEG: f64 = 0.0055;

/// A single resolved latitude/longitude pair in degrees.
///
/// The values are stored exactly as they have been reported
/// by the position provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn try_from_lat_lng_deg(latitude: f64, longitude: f64) -> Option<Self> {
        if is_valid_lat_deg(latitude) && is_valid_lng_deg(longitude) {
            Some(Self {
                latitude,
                longitude,
            })
        } else {
            None
        }
    }

    pub const fn lat(self) -> f64 {
        self.latitude
    }

    pub const fn lng(self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

fn is_valid_lat_deg(deg: f64) -> bool {
    deg.is_finite() && (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&deg)
}

fn is_valid_lng_deg(deg: f64) -> bool {
    deg.is_finite() && (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&deg)
}

/// Zoom spans of a map view in degrees.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionSpan {
    pub latitude_delta  : f64,
    pub longitude_delta : f64,
}

impl Default for RegionSpan {
    fn default() -> Self {
        Self {
            latitude_delta: DEFAULT_DELTA_DEG,
            longitude_delta: DEFAULT_DELTA_DEG,
        }
    }
}

/// The visible part of a map, centered on a coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRegion {
    pub center: Coordinate,
    pub span: RegionSpan,
}

impl ViewRegion {
    pub const fn new(center: Coordinate, span: RegionSpan) -> Self {
        Self { center, span }
    }

    /// South-west and north-east corner as `(lat, lng)` pairs.
    pub fn bounds(&self) -> ((f64, f64), (f64, f64)) {
        let half_lat = self.span.latitude_delta / 2.0;
        let half_lng = self.span.longitude_delta / 2.0;
        (
            (self.center.lat() - half_lat, self.center.lng() - half_lng),
            (self.center.lat() + half_lat, self.center.lng() + half_lng),
        )
    }
}
