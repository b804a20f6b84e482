use async_trait::async_trait;
use enumset::EnumSet;
use tracing::{debug, info, warn};

use crate::entities::{LightEntity, LightFeature, LightOptions};
use crate::error::LightError;
use crate::protocol::tplink::{BulbState, SmartBulb};

/// A TP-Link smart bulb exposed as a light.
///
/// Wi-Fi bulbs drop off the network now and then, so [`LightEntity::refresh`]
/// only logs failures and keeps the last known state. Commands still fail loudly.
pub struct TplinkSmartBulb<B> {
    name: String,
    bulb: B,
    state: Option<bool>,
}

impl<B: SmartBulb> TplinkSmartBulb<B> {
    /// Wraps `bulb`, named after its alias unless `name` is given.
    pub async fn new(bulb: B, name: Option<String>) -> Result<Self, LightError> {
        let name = match name {
            Some(name) => name,
            None => bulb.alias().await?,
        };
        debug!("Setting up TP-Link smart bulb {name}");
        Ok(Self {
            name,
            bulb,
            state: None,
        })
    }

    /// On/off state recorded by the last successful refresh.
    ///
    /// [`LightEntity::is_on`] does not read it and always asks the bulb.
    pub fn cached_state(&self) -> Option<bool> {
        self.state
    }
}

#[async_trait]
impl<B: SmartBulb> LightEntity for TplinkSmartBulb<B> {
    fn name(&self) -> &str {
        &self.name
    }

    fn supported_features(&self) -> EnumSet<LightFeature> {
        LightFeature::Brightness | LightFeature::ColorTemp
    }

    async fn is_on(&self) -> Result<bool, LightError> {
        Ok(self.bulb.state().await? == BulbState::On)
    }

    async fn brightness(&mut self) -> Result<u8, LightError> {
        Ok(self.bulb.brightness().await?)
    }

    async fn color_temp(&self) -> Result<Option<u16>, LightError> {
        Ok(Some(self.bulb.color_temp().await?))
    }

    async fn turn_on(&mut self, options: LightOptions) -> Result<(), LightError> {
        if let Some(mireds) = options.color_temp {
            self.bulb.set_color_temp(mireds).await?;
        }
        if let Some(brightness) = options.brightness {
            self.bulb.set_brightness(brightness).await?;
        }
        self.bulb.set_state(BulbState::On).await?;
        info!("TP-Link bulb {} turned on ({options:?})", self.name);
        Ok(())
    }

    async fn turn_off(&mut self) -> Result<(), LightError> {
        self.bulb.set_state(BulbState::Off).await?;
        info!("TP-Link bulb {} turned off", self.name);
        Ok(())
    }

    async fn refresh(&mut self) -> Result<(), LightError> {
        match self.bulb.state().await {
            Ok(state) => {
                debug!("TP-Link bulb {} state: {state}", self.name);
                self.state = Some(state == BulbState::On);
            }
            Err(e) => warn!("Could not read state for {}: {}", self.name, e),
        }
        Ok(())
    }
}
