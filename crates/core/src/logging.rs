//! Logging for the Purrsona client, built on the tracing ecosystem.
//!
//! # Environment Variables
//!
//! - `PURRSONA_LOG`: Filter directive (like `RUST_LOG`), e.g., `purrsona_ui=trace`
//! - `PURRSONA_LOG_FORMAT`: Output format for stderr: `pretty`, `json`, `compact`
//! - `PURRSONA_LOG_DIR`: Directory for file logs (default `~/.purrsona/logs`)
//!
//! The interactive view owns the terminal, so hosts that draw a TUI should
//! pass [`LogTarget::FileOnly`] and let file logging carry the events.
//!
//! ```no_run
//! use purrsona_core::logging::{self, LoggingConfig};
//!
//! logging::init_logging(Some(LoggingConfig::default()))?;
//! # Ok::<(), purrsona_core::Error>(())
//! ```

use crate::Error;
use crate::config::{FileLoggingConfig, LoggingConfig as ConfigLoggingConfig};
use std::env;
use std::io;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output format for stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Pretty, human-readable output with colors (default for TTY)
    #[default]
    Pretty,
    /// JSON output (one line per event)
    Json,
    /// Compact, single-line output
    Compact,
}

impl LogFormat {
    pub const VALUES: &[LogFormat] = &[LogFormat::Pretty, LogFormat::Json, LogFormat::Compact];

    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            "compact" => Some(LogFormat::Compact),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
            LogFormat::Compact => "compact",
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where formatted events go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogTarget {
    /// stderr, plus the log file when enabled
    #[default]
    Stderr,
    /// Only the log file; stderr is left alone for the TUI
    FileOnly,
}

/// Privacy controls for message text in logs.
#[derive(Debug, Clone, Default)]
pub struct PrivacyConfig {
    /// Include message text in debug events.
    pub log_content: bool,
    /// Maximum number of characters kept when content is logged.
    pub truncate_length: usize,
}

/// Logging configuration wrapper that bridges config and logging modules.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub target: LogTarget,
    pub file: Option<FileLoggingConfig>,
    pub privacy: PrivacyConfig,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::default(),
            target: LogTarget::default(),
            file: None,
            privacy: PrivacyConfig::default(),
        }
    }
}

impl From<ConfigLoggingConfig> for LoggingConfig {
    fn from(config: ConfigLoggingConfig) -> Self {
        Self {
            level: config.level,
            format: LogFormat::parse_str(&config.format).unwrap_or_default(),
            target: LogTarget::default(),
            file: if config.file.enabled { Some(config.file) } else { None },
            privacy: PrivacyConfig {
                log_content: config.privacy.log_content,
                truncate_length: config.privacy.truncate_length,
            },
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_target(mut self, target: LogTarget) -> Self {
        self.target = target;
        self
    }

    pub fn with_privacy(mut self, config: PrivacyConfig) -> Self {
        self.privacy = config;
        self
    }

    /// Build an EnvFilter from this config and environment variables.
    fn build_env_filter(&self) -> EnvFilter {
        let filter = env::var("PURRSONA_LOG")
            .ok()
            .or_else(|| env::var("RUST_LOG").ok())
            .unwrap_or_else(|| self.level.clone());

        EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("warn"))
    }

    /// Determine the appropriate format for stderr output.
    fn detect_format(&self) -> LogFormat {
        if let Ok(fmt_str) = env::var("PURRSONA_LOG_FORMAT")
            && let Some(fmt) = LogFormat::parse_str(&fmt_str)
        {
            return fmt;
        }

        if atty::is(atty::Stream::Stderr) { self.format } else { LogFormat::Compact }
    }

    /// Get the log directory path.
    pub fn log_dir() -> Result<PathBuf, Error> {
        if let Ok(custom_dir) = env::var("PURRSONA_LOG_DIR") {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = env::var("HOME")
            .or_else(|_| env::var("USERPROFILE"))
            .map_err(|_| Error::Config("Could not determine home directory".to_string()))?;

        Ok(PathBuf::from(home).join(".purrsona").join("logs"))
    }
}

/// Initialize the global tracing subscriber.
///
/// Returns the file writer guard when file logging is enabled; keep it alive
/// for as long as events should be flushed to disk.
pub fn init_logging(config: Option<LoggingConfig>) -> Result<Option<WorkerGuard>, Error> {
    let config = config.unwrap_or_default();
    let env_filter = config.build_env_filter();
    let format = config.detect_format();

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if config.target == LogTarget::Stderr {
        layers.push(match format {
            LogFormat::Pretty => fmt::layer()
                .pretty()
                .with_writer(io::stderr)
                .with_ansi(true)
                .with_filter(env_filter)
                .boxed(),
            LogFormat::Json => fmt::layer().json().with_writer(io::stderr).with_filter(env_filter).boxed(),
            LogFormat::Compact => fmt::layer().compact().with_writer(io::stderr).with_filter(env_filter).boxed(),
        });
    }

    let guard = match &config.file {
        Some(file) => {
            let log_dir = LoggingConfig::log_dir()?;
            std::fs::create_dir_all(&log_dir)
                .map_err(|e| Error::Config(format!("Failed to create log directory: {}", e)))?;

            let file_appender = tracing_appender::rolling::daily(log_dir, "purrsona.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let file_filter = EnvFilter::try_new(&file.level).unwrap_or_else(|_| EnvFilter::new("debug"));
            layers.push(fmt::layer().json().with_writer(non_blocking).with_filter(file_filter).boxed());
            Some(guard)
        }
        None => None,
    };

    Registry::default()
        .with(layers)
        .try_init()
        .map_err(|e| Error::Other(format!("Failed to initialize logging: {}", e)))?;

    Ok(guard)
}

/// Prepare message text for a log event according to privacy settings.
pub fn redact_content(content: &str, privacy: &PrivacyConfig) -> String {
    if !privacy.log_content {
        return format!("[{} chars]", content.chars().count());
    }

    let total = content.chars().count();
    if total <= privacy.truncate_length {
        return content.to_string();
    }

    let mut truncated = content.chars().take(privacy.truncate_length).collect::<String>();
    truncated.push_str("...");
    truncated.push_str(&format!(" ({} total chars)", total));
    truncated
}
