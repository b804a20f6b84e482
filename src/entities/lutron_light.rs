use std::sync::Arc;

use async_trait::async_trait;
use enumset::EnumSet;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::brightness::{to_device_level, to_platform_level};
use crate::entities::state::brightness::BrightnessMemory;
use crate::entities::{LightEntity, LightFeature, LightOptions};
use crate::error::LightError;
use crate::protocol::lutron::{LutronController, LutronOutput};

/// A Lutron output (dimmed or switched) exposed as a light.
///
/// Device failures are never handled here: every error goes back to the
/// caller untouched.
pub struct LutronLight<D, C> {
    name: String,
    area_name: String,
    device: D,
    controller: Arc<C>,
    memory: BrightnessMemory,
}

impl<D: LutronOutput, C: LutronController> LutronLight<D, C> {
    pub fn new(area_name: &str, device: D, controller: Arc<C>) -> Self {
        let name = format!("{area_name} {}", device.name());
        debug!(%name, id = device.id(), "Created Lutron light");
        Self {
            name,
            area_name: area_name.to_string(),
            device,
            controller,
            memory: BrightnessMemory::default(),
        }
    }

    pub fn area_name(&self) -> &str {
        &self.area_name
    }

    pub fn integration_id(&self) -> u32 {
        self.device.id()
    }

    /// Brightness restored by a turn on without an explicit level.
    pub fn previous_brightness(&self) -> Option<f64> {
        self.memory.previous()
    }

    /// Registers the output with the controller so level changes get pushed.
    pub async fn subscribe(&self) -> Result<(), LightError> {
        self.controller.subscribe(self.device.id()).await?;
        info!("Lutron light {} subscribed to controller updates", self.name);
        Ok(())
    }
}

#[async_trait]
impl<D: LutronOutput, C: LutronController> LightEntity for LutronLight<D, C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn supported_features(&self) -> EnumSet<LightFeature> {
        EnumSet::only(LightFeature::Brightness)
    }

    fn extra_attributes(&self) -> Map<String, Value> {
        let mut attributes = Map::new();
        attributes.insert("Lutron Integration ID".into(), self.device.id().into());
        attributes
    }

    fn should_poll(&self) -> bool {
        false
    }

    async fn is_on(&self) -> Result<bool, LightError> {
        Ok(self.device.last_level().await? > 0.0)
    }

    async fn brightness(&mut self) -> Result<u8, LightError> {
        let brightness = to_platform_level(self.device.last_level().await?);
        self.memory.observe(brightness);
        Ok(brightness)
    }

    async fn turn_on(&mut self, options: LightOptions) -> Result<(), LightError> {
        let requested = options.brightness.filter(|_| self.device.is_dimmable());
        let brightness = self.memory.resolve(requested);
        let level = to_device_level(brightness);
        info!(
            "Lutron light {}: turning on at {brightness} ({level}%)",
            self.name
        );
        self.device.set_level(level).await?;
        Ok(())
    }

    async fn turn_off(&mut self) -> Result<(), LightError> {
        info!("Lutron light {}: turning off", self.name);
        self.device.set_level(0.0).await?;
        Ok(())
    }

    async fn refresh(&mut self) -> Result<(), LightError> {
        if self.memory.previous().is_none() {
            let level = self.device.level().await?;
            self.memory.prime(to_platform_level(level));
            debug!(
                "Lutron light {}: primed brightness from level {level}",
                self.name
            );
        }
        Ok(())
    }
}
