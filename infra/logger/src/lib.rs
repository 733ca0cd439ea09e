//! # Logger
//!
//! Installs the process-wide `tracing` subscriber: a compact console layer, an
//! optional rolling file layer (non-blocking, plain text or JSON) and an
//! [`EnvFilter`] that starts from the configured level and still honours `RUST_LOG`.
//!
//! The server drives it from the `[logging]` section through [`Logger::from_config`].

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};
use vacc_domain::config::LoggingConfig;

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct LoggerSettings {
    console: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            console: true,
            path: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// A builder for the global tracing subscriber. A name is required before `init`.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName> {
    settings: LoggerSettings,
    name: N,
}

impl LoggerBuilder<NoName> {
    /// Sets the name of the logger, also used as the log file prefix.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { name: WithName(name.into()), settings: self.settings }
    }
}

impl LoggerBuilder<WithName> {
    /// Minimum level emitted when neither `RUST_LOG` nor an explicit filter says otherwise.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `vacc_pages=debug,hyper=info`).
    ///
    /// Invalid filters make [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.settings.env_filter = Some(filter.into());
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Writes rolling log files into `path`.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings.path = Some(path.into());
        self
    }

    /// Maximum number of rotated files kept on disk.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.settings.rotation = rotation;
        self
    }

    /// Emits JSON lines in the file layer. The console stays human-readable.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.settings.json = enabled;
        self
    }

    /// Installs the global tracing subscriber.
    ///
    /// # Errors
    /// * [`LoggerError::Subscriber`] if a global subscriber has already been set.
    /// * [`LoggerError::InvalidConfiguration`] for invalid builder settings.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] if the log directory is unusable.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate_settings(&self.settings, &self.name.0)?;

        let env_filter = build_env_filter(&self.settings)?;

        let mut layers = Vec::new();

        if self.settings.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = if let Some(path) = self.settings.path {
            fs::create_dir_all(&path)
                .context(format!("Failed to create path: {}", path.display()))?;

            let file_appender = RollingFileAppender::builder()
                .rotation(self.settings.rotation)
                .filename_prefix(&self.name.0)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(self.settings.max_files)
                .build(path)?;

            let (non_blocking, g) = tracing_appender::non_blocking(file_appender);

            let file_layer = layer().with_writer(non_blocking).with_ansi(false);

            let boxed =
                if self.settings.json { file_layer.json().boxed() } else { file_layer.boxed() };

            layers.push(boxed);
            Some(g)
        } else {
            None
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

/// Keeps the file writer alive. `main` holds it until the server stops.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: LoggerSettings::default(), name: NoName }
    }

    /// Prepares a builder from the `[logging]` configuration section.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] if `level` is not a tracing level.
    pub fn from_config(
        name: impl Into<String>,
        config: &LoggingConfig,
    ) -> Result<LoggerBuilder<WithName>, LoggerError> {
        let level = LevelFilter::from_str(&config.level).map_err(|e| {
            LoggerError::InvalidConfiguration {
                message: format!("Invalid log level '{}': {e}", config.level).into(),
                context: None,
            }
        })?;

        let mut builder = Self::builder().name(name).level(level).json(config.json);
        if let Some(directory) = &config.directory {
            builder = builder.path(directory);
        }
        if let Some(filter) = &config.filter {
            builder = builder.env_filter(filter);
        }
        Ok(builder)
    }

    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

fn validate_settings(settings: &LoggerSettings, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if settings.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(settings: &LoggerSettings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    settings.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}
