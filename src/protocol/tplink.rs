use std::fmt;

use async_trait::async_trait;

use crate::error::SmartBulbError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulbState {
    On,
    Off,
}

impl From<bool> for BulbState {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl fmt::Display for BulbState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BulbState::On => write!(f, "ON"),
            BulbState::Off => write!(f, "OFF"),
        }
    }
}

/// A TP-Link Wi-Fi bulb. Brightness is on the 0-255 scale, color temperature
/// in mireds.
#[async_trait]
pub trait SmartBulb: Send + Sync {
    async fn alias(&self) -> Result<String, SmartBulbError>;

    async fn state(&self) -> Result<BulbState, SmartBulbError>;

    async fn set_state(&self, state: BulbState) -> Result<(), SmartBulbError>;

    async fn brightness(&self) -> Result<u8, SmartBulbError>;

    async fn set_brightness(&self, brightness: u8) -> Result<(), SmartBulbError>;

    async fn color_temp(&self) -> Result<u16, SmartBulbError>;

    async fn set_color_temp(&self, mireds: u16) -> Result<(), SmartBulbError>;
}
