//! Dynamic log level reloading support

use crate::{CONSOLE_TARGET, LogLevel};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::{Registry, reload};

struct Installed {
    handle: reload::Handle<Targets, Registry>,
    level: LogLevel,
}

/// Handle for changing the console log level after [`crate::init_logging`]
pub struct ReloadHandle {
    inner: Mutex<Option<Installed>>,
}

impl ReloadHandle {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }

    /// Get the global reload handle
    pub fn global() -> &'static ReloadHandle {
        static INSTANCE: OnceCell<ReloadHandle> = OnceCell::new();
        INSTANCE.get_or_init(ReloadHandle::new)
    }

    pub(crate) fn set_handle(&self, handle: reload::Handle<Targets, Registry>, level: LogLevel) {
        *self.inner.lock() = Some(Installed { handle, level });
    }

    /// Level currently in effect, if logging was initialized
    pub fn current_level(&self) -> Option<LogLevel> {
        self.inner.lock().as_ref().map(|installed| installed.level)
    }

    /// Reload the filter to use a new log level
    pub fn reload_level(&self, level: LogLevel) -> Result<(), String> {
        let mut guard = self.inner.lock();
        let installed = guard
            .as_mut()
            .ok_or_else(|| "logging has not been initialized".to_string())?;

        installed
            .handle
            .reload(console_filter(level))
            .map_err(|e| format!("failed to reload log level: {e}"))?;
        installed.level = level;
        Ok(())
    }
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}

/// Filter applying `level` to every target except [`CONSOLE_TARGET`], which is always enabled.
pub(crate) fn console_filter(level: LogLevel) -> Targets {
    Targets::new()
        .with_target(CONSOLE_TARGET, LevelFilter::TRACE)
        .with_default(level_filter(level))
}
