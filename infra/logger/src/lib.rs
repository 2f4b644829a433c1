//! # Logger
//!
//! Installs the global `tracing` subscriber for `otsav` binaries.
//!
//! Console output goes to `stderr` so that command output on `stdout` stays clean.
//! An optional rolling file sink (plain text or JSON) writes through a non-blocking
//! worker; keep the returned [`Logger`] alive until shutdown so buffered lines are flushed.
//! `RUST_LOG` is honoured unless an explicit filter is set with [`LoggerBuilder::env_filter`].
//!
//! ## Example
//!
//! ```rust
//! use otsav_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder("otsav")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct FileSettings {
    dir: Option<PathBuf>,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self { dir: None, rotation: Rotation::DAILY, max_files: DEFAULT_MAX_FILES, json: false }
    }
}

/// Configures and installs the global tracing subscriber.
#[derive(Debug)]
#[must_use = "The builder does nothing until `init()` is called."]
pub struct LoggerBuilder {
    name: String,
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    file: FileSettings,
}

impl LoggerBuilder {
    /// Minimum level emitted when neither `RUST_LOG` nor an explicit filter says otherwise.
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Programmatic filter directives (e.g. `otsav_registration=debug,warn`).
    ///
    /// Invalid directives make [`LoggerBuilder::init`] fail.
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Enables or disables the `stderr` console layer.
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Writes rolling log files named `<name>.<date>.log` into `dir`.
    pub fn file(mut self, dir: impl Into<PathBuf>) -> Self {
        self.file.dir = Some(dir.into());
        self
    }

    /// Rotation policy for the file sink.
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.file.rotation = rotation;
        self
    }

    /// Number of rotated files kept on disk.
    pub const fn max_files(mut self, max: usize) -> Self {
        self.file.max_files = max;
        self
    }

    /// Switches the file sink to JSON lines.
    pub const fn json(mut self) -> Self {
        self.file.json = true;
        self
    }

    /// Installs the subscriber.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`,
    ///   a bad filter or when no output is enabled.
    /// * [`LoggerError::Appender`] if the log directory cannot be used.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        let env_filter = self.build_env_filter()?;

        let mut layers = Vec::new();

        if self.console {
            layers.push(layer().compact().with_writer(std::io::stderr).with_ansi(true).boxed());
        }

        let guard = if let Some(dir) = &self.file.dir {
            fs::create_dir_all(dir).map_err(|e| LoggerError::Internal {
                message: e.to_string().into(),
                context: Some(format!("Failed to create log directory {}", dir.display()).into()),
            })?;

            let appender = RollingFileAppender::builder()
                .rotation(self.file.rotation.clone())
                .filename_prefix(&self.name)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(self.file.max_files)
                .build(dir)
                .context("Building rolling file appender")?;

            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = layer().with_writer(writer).with_ansi(false);
            layers.push(if self.file.json { file_layer.json().boxed() } else { file_layer.boxed() });

            Some(guard)
        } else {
            None
        };

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        tracing::debug!(logger = %self.name, "Logging initialized");
        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }
        if self.file.max_files == 0 {
            return Err(LoggerError::InvalidConfiguration {
                message: "max_files must be greater than zero".into(),
                context: None,
            });
        }
        if !self.console && self.file.dir.is_none() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No output enabled: turn on the console or configure a log directory"
                    .into(),
                context: None,
            });
        }
        Ok(())
    }

    fn build_env_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.env_filter {
            None => Ok(builder.from_env_lossy()),
            Some(filter) => builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            }),
        }
    }
}

/// Handle to the installed logging system.
///
/// Holds the non-blocking worker guard of the file sink, if any.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a builder; `name` prefixes rolling log files.
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            console: true,
            level: LevelFilter::INFO,
            env_filter: None,
            file: FileSettings::default(),
        }
    }

    /// The file worker guard, present only when a log directory was configured.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logging system shutting down, flushing buffers");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = Logger::builder("otsav").env_filter("otsav_registration=debug");
        assert!(builder.console);
        assert_eq!(builder.level, LevelFilter::INFO);
        assert_eq!(builder.env_filter.as_deref(), Some("otsav_registration=debug"));
        assert!(builder.file.dir.is_none());
        assert_eq!(builder.file.max_files, DEFAULT_MAX_FILES);
    }

    #[test]
    fn file_settings_are_collected() {
        let builder =
            Logger::builder("otsav").file("/tmp/otsav-logs").max_files(3).json().console(false);
        assert_eq!(builder.file.dir.as_deref(), Some(std::path::Path::new("/tmp/otsav-logs")));
        assert_eq!(builder.file.max_files, 3);
        assert!(builder.file.json);
        assert!(!builder.console);
    }

    #[test]
    fn validation_rejects_bad_settings() {
        let empty_name = Logger::builder("  ").validate();
        assert!(matches!(empty_name, Err(LoggerError::InvalidConfiguration { .. })));

        let no_output = Logger::builder("otsav").console(false).validate();
        assert!(matches!(no_output, Err(LoggerError::InvalidConfiguration { .. })));

        let zero_files = Logger::builder("otsav").file("logs").max_files(0).validate();
        assert!(matches!(zero_files, Err(LoggerError::InvalidConfiguration { .. })));
    }

    #[test]
    fn invalid_filter_is_reported() {
        let builder = Logger::builder("otsav").env_filter("otsav=notalevel");
        assert!(matches!(
            builder.build_env_filter(),
            Err(LoggerError::InvalidConfiguration { .. })
        ));
    }
}
