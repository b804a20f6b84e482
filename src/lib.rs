pub mod brightness;
mod entities;
mod error;
pub mod logging;
pub mod platform;
mod protocol;
pub mod settings;

#[cfg(test)]
mod testing;

pub use entities::{
    LightEntity, LightFeature, LightOptions, LightOptionsBuilder, LutronLight, TplinkSmartBulb,
};
pub use error::{LightError, LutronError, SmartBulbError};
pub use protocol::lutron::{LutronController, LutronOutput};
pub use protocol::tplink::{BulbState, SmartBulb};
