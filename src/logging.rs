//! Logging setup for applications embedding the light adapters.
//!
//! Adapters only emit `tracing` events; installing a subscriber is left to the
//! host, which can use one of the helpers below.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RotationPeriod {
    Minutely,
    Hourly,
    #[default]
    Daily,
    Never,
}

impl std::str::FromStr for RotationPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minutely" | "minute" => Ok(RotationPeriod::Minutely),
            "hourly" | "hour" => Ok(RotationPeriod::Hourly),
            "daily" | "day" => Ok(RotationPeriod::Daily),
            "never" | "none" => Ok(RotationPeriod::Never),
            _ => Err(format!("Invalid rotation period '{s}'")),
        }
    }
}

impl From<RotationPeriod> for Rotation {
    fn from(period: RotationPeriod) -> Self {
        match period {
            RotationPeriod::Minutely => Rotation::MINUTELY,
            RotationPeriod::Hourly => Rotation::HOURLY,
            RotationPeriod::Daily => Rotation::DAILY,
            RotationPeriod::Never => Rotation::NEVER,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub log_dir: String,
    pub log_prefix: String,
    pub rotation: RotationPeriod,
    /// Number of rotated files kept around, 0 keeps all of them.
    pub max_log_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: ".".to_string(),
            log_prefix: "light-adapters".to_string(),
            rotation: RotationPeriod::Daily,
            max_log_files: 7,
        }
    }
}

/// Flushes pending log lines when dropped. Keep it alive as long as the
/// program runs.
pub struct LogGuard {
    _guards: Vec<WorkerGuard>,
}

/// Logs to stdout, filtered by `RUST_LOG`.
pub fn setup_console_logging() -> LogGuard {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    LogGuard { _guards: vec![] }
}

/// Logs to rotating files in `config.log_dir`, filtered by `RUST_LOG`.
pub fn setup_file_logging(config: LogConfig) -> std::io::Result<LogGuard> {
    let appender = file_appender(&config)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = Layer::default()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(file_layer)
        .init();

    Ok(LogGuard {
        _guards: vec![guard],
    })
}

fn file_appender(config: &LogConfig) -> std::io::Result<RollingFileAppender> {
    let mut builder = RollingFileAppender::builder()
        .rotation(config.rotation.into())
        .filename_prefix(&config.log_prefix)
        .filename_suffix("log");
    if config.max_log_files > 0 {
        builder = builder.max_log_files(config.max_log_files);
    }
    builder
        .build(Path::new(&config.log_dir))
        .map_err(std::io::Error::other)
}
