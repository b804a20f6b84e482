use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{BulbState, LutronController, LutronError, LutronOutput, SmartBulb, SmartBulbError};

#[derive(Clone)]
pub struct FakeLutronOutput {
    pub id: u32,
    pub name: String,
    pub dimmable: bool,
    pub level: Arc<RwLock<f64>>,
    pub set_calls: Arc<RwLock<Vec<f64>>>,
    pub should_fail: Arc<AtomicBool>,
}

impl FakeLutronOutput {
    pub fn new(id: u32, name: &str, level: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            dimmable: true,
            level: Arc::new(RwLock::new(level)),
            set_calls: Arc::default(),
            should_fail: Arc::default(),
        }
    }

    pub fn switched(id: u32, name: &str, level: f64) -> Self {
        Self {
            dimmable: false,
            ..Self::new(id, name, level)
        }
    }

    pub fn fail(&self) {
        self.should_fail.store(true, Ordering::Relaxed);
    }

    pub async fn set_device_level(&self, level: f64) {
        *self.level.write().await = level;
    }

    fn check(&self) -> Result<(), LutronError> {
        if self.should_fail.load(Ordering::Relaxed) {
            Err(LutronError::Controller("Fake error".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl LutronOutput for FakeLutronOutput {
    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_dimmable(&self) -> bool {
        self.dimmable
    }

    async fn last_level(&self) -> Result<f64, LutronError> {
        self.check()?;
        Ok(*self.level.read().await)
    }

    async fn level(&self) -> Result<f64, LutronError> {
        self.check()?;
        Ok(*self.level.read().await)
    }

    async fn set_level(&self, level: f64) -> Result<(), LutronError> {
        self.check()?;
        self.set_calls.write().await.push(level);
        *self.level.write().await = level;
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FakeLutronController {
    pub subscriptions: Arc<RwLock<Vec<u32>>>,
    pub should_fail: Arc<AtomicBool>,
}

#[async_trait]
impl LutronController for FakeLutronController {
    async fn subscribe(&self, integration_id: u32) -> Result<(), LutronError> {
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(LutronError::Disconnected);
        }
        self.subscriptions.write().await.push(integration_id);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulbCall {
    SetState(BulbState),
    SetBrightness(u8),
    SetColorTemp(u16),
}

#[derive(Clone)]
pub struct FakeSmartBulb {
    pub alias: String,
    pub state: Arc<RwLock<BulbState>>,
    pub brightness: Arc<RwLock<u8>>,
    pub color_temp: Arc<RwLock<u16>>,
    pub calls: Arc<RwLock<Vec<BulbCall>>>,
    pub should_fail: Arc<AtomicBool>,
}

impl FakeSmartBulb {
    pub fn new(alias: &str, state: BulbState) -> Self {
        Self {
            alias: alias.to_string(),
            state: Arc::new(RwLock::new(state)),
            brightness: Arc::new(RwLock::new(255)),
            color_temp: Arc::new(RwLock::new(370)),
            calls: Arc::default(),
            should_fail: Arc::default(),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.should_fail.store(failing, Ordering::Relaxed);
    }

    fn check(&self) -> Result<(), SmartBulbError> {
        if self.should_fail.load(Ordering::Relaxed) {
            Err(io::Error::new(io::ErrorKind::ConnectionRefused, "bulb unreachable").into())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SmartBulb for FakeSmartBulb {
    async fn alias(&self) -> Result<String, SmartBulbError> {
        self.check()?;
        Ok(self.alias.clone())
    }

    async fn state(&self) -> Result<BulbState, SmartBulbError> {
        self.check()?;
        Ok(*self.state.read().await)
    }

    async fn set_state(&self, state: BulbState) -> Result<(), SmartBulbError> {
        self.check()?;
        self.calls.write().await.push(BulbCall::SetState(state));
        *self.state.write().await = state;
        Ok(())
    }

    async fn brightness(&self) -> Result<u8, SmartBulbError> {
        self.check()?;
        Ok(*self.brightness.read().await)
    }

    async fn set_brightness(&self, brightness: u8) -> Result<(), SmartBulbError> {
        self.check()?;
        self.calls
            .write()
            .await
            .push(BulbCall::SetBrightness(brightness));
        *self.brightness.write().await = brightness;
        Ok(())
    }

    async fn color_temp(&self) -> Result<u16, SmartBulbError> {
        self.check()?;
        Ok(*self.color_temp.read().await)
    }

    async fn set_color_temp(&self, mireds: u16) -> Result<(), SmartBulbError> {
        self.check()?;
        self.calls.write().await.push(BulbCall::SetColorTemp(mireds));
        *self.color_temp.write().await = mireds;
        Ok(())
    }
}
