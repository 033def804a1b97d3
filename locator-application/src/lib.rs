mod coordinator;
mod settings;
mod snapshot;

pub mod error;

pub mod prelude {
    pub use super::{coordinator::*, error::AppError, settings::*, snapshot::*};
}

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use locator_core::{entities::*, gateways, status::*, usecases};

#[cfg(test)]
pub(crate) mod tests;
