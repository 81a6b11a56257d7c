use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::logging::LogFormat;

/// Default prompt shown while the transcript is empty
pub const DEFAULT_IDLE_PROMPT: &str = "I'm your Purr-Sonal Cat Assistant,\nhere to help you.";

/// Default idle animation identifier
pub const DEFAULT_IDLE_ANIMATION: &str = "riv/V2/Pulse_kitty.riv";

/// Color theme for the transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    /// Warm light palette (cream bubbles, orange avatar)
    #[default]
    Latte,
    /// Dark palette for low-light terminals
    Midnight,
}

impl ThemeName {
    pub const VALUES: &[ThemeName] = &[ThemeName::Latte, ThemeName::Midnight];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Latte => "latte",
            ThemeName::Midnight => "midnight",
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ThemeName {
    type Err = crate::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "latte" => Ok(ThemeName::Latte),
            "midnight" => Ok(ThemeName::Midnight),
            _ => Err(crate::Error::Config(ConfigError::InvalidTheme(s.to_string()).to_string())),
        }
    }
}

/// How the transcript moves to newly arrived content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScrollBehavior {
    /// Eased over several frames (default)
    #[default]
    Smooth,
    /// Jump straight to the target
    Instant,
}

impl ScrollBehavior {
    pub const VALUES: &[ScrollBehavior] = &[ScrollBehavior::Smooth, ScrollBehavior::Instant];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollBehavior::Smooth => "smooth",
            ScrollBehavior::Instant => "instant",
        }
    }
}

impl std::fmt::Display for ScrollBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ScrollBehavior {
    type Err = crate::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "smooth" => Ok(ScrollBehavior::Smooth),
            "instant" => Ok(ScrollBehavior::Instant),
            _ => Err(crate::Error::Config(
                ConfigError::InvalidScrollBehavior(s.to_string()).to_string(),
            )),
        }
    }
}

/// Transcript view settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: ThemeName,

    #[serde(default)]
    pub scroll: ScrollBehavior,

    /// Identifier of the idle-state animation
    #[serde(default = "default_idle_animation")]
    pub idle_animation: String,

    /// Prompt shown under the idle animation
    #[serde(default = "default_idle_prompt")]
    pub idle_prompt: String,

    /// Redraw interval while animating, in milliseconds
    #[serde(default = "default_frame_rate_ms")]
    pub frame_rate_ms: u64,
}

fn default_idle_animation() -> String {
    DEFAULT_IDLE_ANIMATION.to_string()
}

fn default_idle_prompt() -> String {
    DEFAULT_IDLE_PROMPT.to_string()
}

fn default_frame_rate_ms() -> u64 {
    33
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            scroll: ScrollBehavior::default(),
            idle_animation: default_idle_animation(),
            idle_prompt: default_idle_prompt(),
            frame_rate_ms: default_frame_rate_ms(),
        }
    }
}

/// `[logging.file]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileLoggingConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_file_level")]
    pub level: String,
}

fn default_file_level() -> String {
    "debug".to_string()
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self { enabled: false, level: default_file_level() }
    }
}

/// `[logging.privacy]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrivacyLoggingConfig {
    /// Include message text in debug events
    #[serde(default)]
    pub log_content: bool,

    #[serde(default = "default_truncate_length")]
    pub truncate_length: usize,
}

fn default_truncate_length() -> usize {
    80
}

impl Default for PrivacyLoggingConfig {
    fn default() -> Self {
        Self { log_content: false, truncate_length: default_truncate_length() }
    }
}

/// `[logging]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default = "default_format")]
    pub format: String,

    #[serde(default)]
    pub file: FileLoggingConfig,

    #[serde(default)]
    pub privacy: PrivacyLoggingConfig,
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
            file: FileLoggingConfig::default(),
            privacy: PrivacyLoggingConfig::default(),
        }
    }
}

/// Root configuration structure for purrsona.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load from `path` when it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "config not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Render the configuration back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(format!("TOML encode error: {}", e)))
    }

    fn validate(&self) -> Result<()> {
        use crate::Error;

        if self.ui.frame_rate_ms == 0 {
            return Err(Error::Config(ConfigError::InvalidFrameRate(self.ui.frame_rate_ms).to_string()));
        }

        if LogFormat::parse_str(&self.logging.format).is_none() {
            return Err(Error::Config(
                ConfigError::InvalidLogFormat(self.logging.format.clone()).to_string(),
            ));
        }

        Ok(())
    }

    /// Commented example configuration
    pub fn example() -> &'static str {
        r#"# Purrsona configuration

[ui]
# Color theme: "latte" or "midnight"
theme = "latte"
# Scroll to new content: "smooth" or "instant"
scroll = "smooth"
# Idle animation shown while the transcript is empty
idle_animation = "riv/V2/Pulse_kitty.riv"
# Prompt shown under the idle animation
idle_prompt = "I'm your Purr-Sonal Cat Assistant,\nhere to help you."
# Redraw interval while animating (milliseconds)
frame_rate_ms = 33

[logging]
# Filter directive for stderr output (PURRSONA_LOG overrides)
level = "warn"
# Output format: "pretty", "json", or "compact"
format = "pretty"

[logging.file]
# Write JSON logs to ~/.purrsona/logs
enabled = false
level = "debug"

[logging.privacy]
# Include message text in debug logs
log_content = false
truncate_length = 80
"#
    }
}

fn one_of<T: std::fmt::Display>(values: &[T]) -> String {
    values.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Configuration-specific errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid theme: {0} (expected one of: {expected})", expected = one_of(ThemeName::VALUES))]
    InvalidTheme(String),

    #[error("invalid scroll behavior: {0} (expected one of: {expected})", expected = one_of(ScrollBehavior::VALUES))]
    InvalidScrollBehavior(String),

    #[error("invalid log format: {0} (expected one of: {expected})", expected = one_of(LogFormat::VALUES))]
    InvalidLogFormat(String),

    #[error("frame_rate_ms must be positive, got {0}")]
    InvalidFrameRate(u64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_theme_name_from_str() {
        assert_eq!(ThemeName::from_str("latte").unwrap(), ThemeName::Latte);
        assert_eq!(ThemeName::from_str("MIDNIGHT").unwrap(), ThemeName::Midnight);
        assert!(ThemeName::from_str("neon").is_err());
    }

    #[test]
    fn test_invalid_theme_lists_choices() {
        let err = ThemeName::from_str("neon").unwrap_err();
        assert!(err.to_string().contains("invalid theme: neon (expected one of: latte, midnight)"));
    }

    #[test]
    fn test_scroll_behavior_from_str() {
        assert_eq!(ScrollBehavior::from_str("smooth").unwrap(), ScrollBehavior::Smooth);
        assert_eq!(ScrollBehavior::from_str("Instant").unwrap(), ScrollBehavior::Instant);
        let err = ScrollBehavior::from_str("bouncy").unwrap_err();
        assert!(err.to_string().contains("(expected one of: smooth, instant)"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ui.theme, ThemeName::Latte);
        assert_eq!(config.ui.scroll, ScrollBehavior::Smooth);
        assert_eq!(config.ui.idle_prompt, DEFAULT_IDLE_PROMPT);
        assert_eq!(config.ui.idle_animation, DEFAULT_IDLE_ANIMATION);
        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.file.enabled);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_partial() {
        let config = Config::from_toml_str(
            r#"
[ui]
theme = "midnight"
scroll = "instant"
"#,
        )
        .unwrap();

        assert_eq!(config.ui.theme, ThemeName::Midnight);
        assert_eq!(config.ui.scroll, ScrollBehavior::Instant);
        assert_eq!(config.ui.frame_rate_ms, 33);
    }

    #[test]
    fn test_example_parses() {
        let config = Config::from_toml_str(Config::example()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = Config::from_toml_str("[ui]\nsparkles = true\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_frame_rate_rejected() {
        let err = Config::from_toml_str("[ui]\nframe_rate_ms = 0\n").unwrap_err();
        assert!(err.to_string().contains("frame_rate_ms"));
    }

    #[test]
    fn test_invalid_log_format_rejected() {
        let err = Config::from_toml_str("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert!(err.to_string().contains("invalid log format: xml (expected one of: pretty, json, compact)"));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("purrsona.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("purrsona.toml");
        std::fs::write(&path, "[ui]\ntheme = \"midnight\"\n").unwrap();

        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.ui.theme, ThemeName::Midnight);
    }

    #[test]
    fn test_to_toml_round_trip() {
        let mut config = Config::default();
        config.ui.theme = ThemeName::Midnight;
        let text = config.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }
}
