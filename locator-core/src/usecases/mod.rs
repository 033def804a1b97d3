mod accept_position;
mod classify_position_error;
mod error;
mod first_formatted_address;
mod notifications;

pub use self::{
    accept_position::*, classify_position_error::*, error::Error, first_formatted_address::*,
    notifications::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        gateways::{geocode::*, notify::*, position::*},
        status::*,
    };
}
