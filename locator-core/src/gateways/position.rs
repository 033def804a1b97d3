use async_trait::async_trait;
use std::time::Duration;
use strum::{Display, EnumString};
use thiserror::Error;

const DEFAULT_TIMEOUT: Duration = Duration::from_millis(15_000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    pub timeout: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// A raw fix as reported by a position provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// Well-known failure codes of a position provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionErrorCode {
    Cancelled,
    Unavailable,
    Timeout,
    Unauthorized,
}

/// A failed position request.
///
/// Providers may report codes beyond [`PositionErrorCode`],
/// therefore the code is kept as reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct PositionError {
    pub code: String,
    pub message: String,
}

impl PositionError {
    pub fn new(code: PositionErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn other(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

#[async_trait]
pub trait PositionProvider: Send + Sync {
    /// Request a single best-effort fix.
    ///
    /// The provider is responsible for honoring the timeout
    /// of the options and has to report [`PositionErrorCode::Timeout`]
    /// on expiry.
    async fn current_position(&self, options: &PositionOptions)
        -> Result<Position, PositionError>;
}
