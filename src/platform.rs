//! Builds light entities out of devices that were already enumerated by the
//! vendor SDK. Every light is refreshed once before it is handed back, so the
//! platform never sees an entity that has not talked to its device yet.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::entities::{LightEntity, LutronLight, TplinkSmartBulb};
use crate::protocol::lutron::{LutronController, LutronOutput};
use crate::protocol::tplink::SmartBulb;
use crate::settings::Settings;

/// Creates a light for every `(area name, output)` pair reported by the
/// controller. Any failure aborts the whole setup.
pub async fn setup_lutron_lights<D, C>(
    settings: &Settings,
    devices: Vec<(String, D)>,
    controller: Arc<C>,
) -> Result<Vec<LutronLight<D, C>>>
where
    D: LutronOutput,
    C: LutronController,
{
    if !settings.mount_lutron_lights.unwrap_or(true) {
        info!("Lutron lights disabled, skipping {} outputs", devices.len());
        return Ok(vec![]);
    }

    let mut lights = Vec::with_capacity(devices.len());
    for (area_name, device) in devices {
        let mut light = LutronLight::new(&area_name, device, controller.clone());
        light
            .subscribe()
            .await
            .with_context(|| format!("Cannot subscribe Lutron light {}", light.name()))?;
        light
            .refresh()
            .await
            .with_context(|| format!("Cannot refresh Lutron light {}", light.name()))?;
        info!(
            "Lutron light {} added (integration id {})",
            light.name(),
            light.integration_id()
        );
        lights.push(light);
    }
    Ok(lights)
}

/// Creates a light for every configured bulb, using `connect` to get a handle
/// for a host. Bulbs that cannot be set up are logged and left out.
pub async fn setup_tplink_bulbs<B, F>(settings: &Settings, connect: F) -> Vec<TplinkSmartBulb<B>>
where
    B: SmartBulb,
    F: Fn(&str) -> B,
{
    if !settings.mount_tplink_bulbs.unwrap_or(true) {
        info!("TP-Link bulbs disabled");
        return vec![];
    }

    let mut bulbs = vec![];
    for config in &settings.tplink_bulbs {
        match TplinkSmartBulb::new(connect(&config.host), config.name.clone()).await {
            Ok(mut bulb) => {
                // failures are logged by the bulb itself
                let _ = bulb.refresh().await;
                info!("TP-Link bulb {} at {} added", bulb.name(), config.host);
                bulbs.push(bulb);
            }
            Err(e) => error!("Failed to add TP-Link bulb at {}: {}", config.host, e),
        }
    }
    bulbs
}
