use async_trait::async_trait;
use locator_core::gateways::position::*;

/// Always reports the same, configured position.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(Position);

impl FixedPosition {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self(Position {
            latitude,
            longitude,
        })
    }
}

#[async_trait]
impl PositionProvider for FixedPosition {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Position, PositionError> {
        Ok(self.0)
    }
}
