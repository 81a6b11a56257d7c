use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use purrsona_core::logging::{self, LogTarget, LoggingConfig};
use purrsona_core::{Config, TranscriptStore};
use purrsona_ui::App;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

mod scripted;

use scripted::ScriptedCat;

const DEFAULT_CONFIG_PATH: &str = "purrsona.toml";

/// Purrsona - a cat-themed chat transcript in your terminal
#[derive(Parser, Debug)]
#[command(name = "purrsona")]
#[command(about = "Chat transcript viewer with streaming replies", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the config file (default: ./purrsona.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Chat with the scripted cat in the interactive TUI
    Chat {
        /// JSON transcript to start from
        #[arg(short, long, value_name = "FILE")]
        transcript: Option<PathBuf>,

        /// Delay between streamed reply tokens
        #[arg(long, value_name = "MS", default_value_t = 40)]
        token_delay_ms: u64,
    },
    /// Render a single frame and print it to stdout
    Render {
        /// JSON transcript to render
        #[arg(short, long, value_name = "FILE")]
        transcript: Option<PathBuf>,

        /// In-progress assistant reply drawn after the history
        #[arg(short, long, value_name = "TEXT")]
        live: Option<String>,

        #[arg(long, default_value_t = 80)]
        width: u16,

        #[arg(long, default_value_t = 24)]
        height: u16,
    },
    /// Print the effective configuration
    Config {
        /// Print the commented example instead
        #[arg(long)]
        example: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    let target = if matches!(cli.command, Commands::Chat { .. }) { LogTarget::FileOnly } else { LogTarget::Stderr };
    let mut logging_config = LoggingConfig::from(config.logging.clone()).with_target(target);
    if cli.verbose {
        logging_config = logging_config.with_level("debug");
    }
    let privacy = logging_config.privacy.clone();
    let _guard = logging::init_logging(Some(logging_config)).context("Failed to initialize logging")?;

    match cli.command {
        Commands::Chat { transcript, token_delay_ms } => {
            if cli.verbose {
                println!("{} Theme: {}", "Info:".blue().bold(), config.ui.theme.cyan());
                println!("{} Token delay: {}ms", "Info:".blue().bold(), token_delay_ms.cyan());
            }
            let store = load_transcript(transcript.as_deref())?;
            let source = Arc::new(ScriptedCat::new(Duration::from_millis(token_delay_ms)));
            let mut app = App::new(&config.ui, store, source).with_privacy(privacy);

            let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
            runtime.block_on(app.run()).context("Terminal session failed")?;
        }
        Commands::Render { transcript, live, width, height } => {
            print!("{}", cmd_render(&config, transcript.as_deref(), live, width, height)?);
        }
        Commands::Config { example } => {
            print!("{}", cmd_config(&config, example)?);
        }
    }

    Ok(())
}

/// Load an explicitly named config, or the default file when present
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            Config::from_file(path).with_context(|| format!("Failed to load config from {}", path.display()))
        }
        None => Config::load_or_default(Path::new(DEFAULT_CONFIG_PATH))
            .with_context(|| format!("Failed to load config from {}", DEFAULT_CONFIG_PATH)),
    }
}

fn load_transcript(path: Option<&Path>) -> Result<TranscriptStore> {
    match path {
        Some(path) => TranscriptStore::load_json(path).context("Failed to load transcript"),
        None => Ok(TranscriptStore::new()),
    }
}

/// Render one frame headlessly
fn cmd_render(
    config: &Config, transcript: Option<&Path>, live: Option<String>, width: u16, height: u16,
) -> Result<String> {
    let mut store = load_transcript(transcript)?;
    if let Some(live) = live {
        store.set_live_response(live);
    }

    let mut frame = purrsona_ui::render_to_string(store, &config.ui, width, height).context("Failed to render")?;
    frame.push('\n');
    Ok(frame)
}

fn cmd_config(config: &Config, example: bool) -> Result<String> {
    if example {
        Ok(Config::example().to_string())
    } else {
        config.to_toml_string().context("Failed to encode config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::try_parse_from(["purrsona", "config"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
        assert!(matches!(cli.command, Commands::Config { example: false }));
    }

    #[test]
    fn test_cli_chat_command() {
        let cli = Cli::try_parse_from(["purrsona", "chat"]).unwrap();
        if let Commands::Chat { transcript, token_delay_ms } = cli.command {
            assert!(transcript.is_none());
            assert_eq!(token_delay_ms, 40);
        } else {
            panic!("Expected Chat command");
        }

        let cli = Cli::try_parse_from(["purrsona", "chat", "-t", "chat.json", "--token-delay-ms", "5"]).unwrap();
        if let Commands::Chat { transcript, token_delay_ms } = cli.command {
            assert_eq!(transcript, Some(PathBuf::from("chat.json")));
            assert_eq!(token_delay_ms, 5);
        } else {
            panic!("Expected Chat command");
        }
    }

    #[test]
    fn test_cli_render_command() {
        let cli = Cli::try_parse_from(["purrsona", "--verbose", "render", "--live", "Meow", "--width", "60"]).unwrap();
        assert!(cli.verbose);
        if let Commands::Render { live, width, height, .. } = cli.command {
            assert_eq!(live.as_deref(), Some("Meow"));
            assert_eq!(width, 60);
            assert_eq!(height, 24);
        } else {
            panic!("Expected Render command");
        }
    }

    #[test]
    fn test_load_config_missing_explicit_path() {
        let temp = TempDir::new().unwrap();
        let result = load_config(Some(&temp.path().join("nope.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("purrsona.toml");
        std::fs::write(&path, "[ui]\ntheme = \"midnight\"\nscroll = \"instant\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.ui.theme, purrsona_core::ThemeName::Midnight);
        assert_eq!(config.ui.scroll, purrsona_core::ScrollBehavior::Instant);
    }

    #[test]
    fn test_cmd_render_empty_shows_idle() {
        let output = cmd_render(&Config::default(), None, None, 80, 24).unwrap();
        assert!(output.contains("Purr-Sonal Cat Assistant"));
    }

    #[test]
    fn test_cmd_render_transcript_with_live_reply() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("chat.json");
        std::fs::write(&path, r#"[{"role": "user", "content": "Hi"}, {"role": "", "content": "Meow"}]"#).unwrap();

        let output = cmd_render(&Config::default(), Some(&path), Some("Purring...".to_string()), 80, 24).unwrap();
        assert!(output.contains("Hi"));
        assert!(output.contains("Meow"));
        assert!(output.contains("Purring..."));
        assert!(output.contains(purrsona_ui::transcript::AVATAR_GLYPH));
    }

    #[test]
    fn test_cmd_render_missing_transcript() {
        let temp = TempDir::new().unwrap();
        let result = cmd_render(&Config::default(), Some(&temp.path().join("missing.json")), None, 80, 24);
        assert!(result.is_err());
    }

    #[test]
    fn test_cmd_config_outputs() {
        let config = Config::default();
        let effective = cmd_config(&config, false).unwrap();
        assert!(effective.contains("[ui]"));
        assert_eq!(Config::from_toml_str(&effective).unwrap(), config);

        let example = cmd_config(&config, true).unwrap();
        assert!(example.contains("# Purrsona configuration"));
    }

    #[test]
    fn test_colored_output() {
        println!("{}", "Test".green().bold());
        println!("{}", "Test".blue());
    }
}
