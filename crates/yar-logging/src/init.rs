//! Subscriber installation and runtime level changes

use parking_lot::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};
use yar_core::{CodecConfig, LogLevel, YarError, YarResult};

type LevelHandle = reload::Handle<LevelFilter, Registry>;

// Set once the process-wide subscriber is ours. Held across installation so
// concurrent first calls cannot both try to install.
static INSTALLED: Mutex<Option<LevelHandle>> = Mutex::new(None);

/// Install a stderr `fmt` subscriber at `level`.
///
/// `RUST_LOG`, when set, narrows output further. Later calls only move the
/// level of the subscriber installed by the first one. Fails with
/// [`YarError::ConfigError`] if some other global subscriber is already set.
pub fn init_logging(level: LogLevel) -> YarResult<()> {
    use tracing_subscriber::prelude::*;

    let mut installed = INSTALLED.lock();
    if installed.is_some() {
        return apply_level(installed.as_ref(), level);
    }

    let (filter, handle) = reload::Layer::new(level_filter(level));
    let env_filter = EnvFilter::try_from_default_env().ok();

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true));

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| YarError::ConfigError(format!("cannot install subscriber: {e}")))?;
    *installed = Some(handle);
    Ok(())
}

/// Change the level of the subscriber installed by [`init_logging`]
pub fn set_log_level(level: LogLevel) -> YarResult<()> {
    apply_level(INSTALLED.lock().as_ref(), level)
}

/// Install logging at the level named in `config.log_level`
pub fn init_from_config(config: &CodecConfig) -> YarResult<()> {
    init_logging(level_from_config(config)?)
}

pub(crate) fn level_from_config(config: &CodecConfig) -> YarResult<LogLevel> {
    LogLevel::parse(&config.log_level)
        .ok_or_else(|| YarError::ConfigError(format!("unknown log level: {}", config.log_level)))
}

fn apply_level(handle: Option<&LevelHandle>, level: LogLevel) -> YarResult<()> {
    let handle =
        handle.ok_or_else(|| YarError::ConfigError("logging is not initialized".to_string()))?;
    handle
        .reload(level_filter(level))
        .map_err(|e| YarError::ConfigError(format!("failed to change log level: {e}")))
}

fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}
