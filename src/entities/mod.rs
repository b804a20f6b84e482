mod lutron_light;
mod state;
mod tplink_bulb;

use std::time::Duration;

use async_trait::async_trait;
use derive_builder::Builder;
use enumset::{EnumSet, EnumSetType};
use serde_json::{Map, Value};

use crate::error::LightError;

pub use lutron_light::LutronLight;
pub use tplink_bulb::TplinkSmartBulb;

#[derive(EnumSetType, Debug)]
pub enum LightFeature {
    Brightness,
    ColorTemp,
}

/// Arguments of a turn on command. Unset fields leave the light's current
/// setting alone.
#[derive(Builder, Debug, Clone, Copy, Default, PartialEq)]
#[builder(default, setter(strip_option))]
pub struct LightOptions {
    /// Platform brightness, 0-255.
    pub brightness: Option<u8>,
    /// Color temperature in mireds.
    pub color_temp: Option<u16>,
    pub transition: Option<Duration>,
}

impl LightOptions {
    pub fn builder() -> LightOptionsBuilder {
        LightOptionsBuilder::default()
    }
}

/// A light as seen by the platform.
#[async_trait]
pub trait LightEntity: Send + Sync {
    fn name(&self) -> &str;

    fn supported_features(&self) -> EnumSet<LightFeature>;

    /// Vendor specific attributes shown next to the light state.
    fn extra_attributes(&self) -> Map<String, Value> {
        Map::new()
    }

    /// Whether the platform has to call [`LightEntity::refresh`] periodically.
    fn should_poll(&self) -> bool {
        true
    }

    async fn is_on(&self) -> Result<bool, LightError>;

    /// Current brightness on the 0-255 scale.
    async fn brightness(&mut self) -> Result<u8, LightError>;

    /// Color temperature in mireds, for lights that support it.
    async fn color_temp(&self) -> Result<Option<u16>, LightError> {
        Ok(None)
    }

    async fn turn_on(&mut self, options: LightOptions) -> Result<(), LightError>;

    async fn turn_off(&mut self) -> Result<(), LightError>;

    async fn refresh(&mut self) -> Result<(), LightError>;
}
