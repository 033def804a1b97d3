pub mod entities {
    pub use locator_entities::{address::*, geo::*};
}

pub mod gateways {
    pub mod geocode;
    pub mod notify;
    pub mod platform;
    pub mod position;
}

pub mod status;
pub mod usecases;
