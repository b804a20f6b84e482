use async_trait::async_trait;

use crate::error::LutronError;

/// A load controlled by a Lutron main repeater, addressed by its integration id.
///
/// Levels are percentages in the 0.0-100.0 range.
#[async_trait]
pub trait LutronOutput: Send + Sync {
    fn id(&self) -> u32;

    fn name(&self) -> &str;

    fn is_dimmable(&self) -> bool;

    /// Level last reported by the controller for this output.
    async fn last_level(&self) -> Result<f64, LutronError>;

    /// Queries the controller for the current level.
    async fn level(&self) -> Result<f64, LutronError>;

    async fn set_level(&self, level: f64) -> Result<(), LutronError>;
}

#[async_trait]
pub trait LutronController: Send + Sync {
    /// Asks the controller to push level changes of `integration_id`.
    async fn subscribe(&self, integration_id: u32) -> Result<(), LutronError>;
}
