use thiserror::Error;

#[derive(Error, Debug)]
pub enum LutronError {
    #[error("Controller is not connected")]
    Disconnected,
    #[error("Controller request failed: {0}")]
    Controller(String),
}

/// Failures reported by a smart bulb.
#[derive(Error, Debug)]
pub enum SmartBulbError {
    #[error("Bulb returned an error: {0}")]
    Device(String),
    #[error("Bulb communication failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum LightError {
    #[error(transparent)]
    Lutron(#[from] LutronError),
    #[error(transparent)]
    SmartBulb(#[from] SmartBulbError),
}
