//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `generate`: The interactive flow and `generate`
//! - `lyrics`: Lyric lookup and prompt preview
//! - `pixelate`: Run the filter chain on an existing image
//! - `tools`: Styles listing, environment check, config init

mod generate;
mod lyrics;
mod pixelate;
mod tools;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::config::{self, Config, Overrides};
use crate::error::Result;
use crate::lyrics::LyricsService;
use crate::prompt::StylePreset;

pub use generate::{GenerateArgs, cmd_generate};
pub use lyrics::{cmd_lyrics, cmd_prompt};
pub use pixelate::cmd_pixelate;
pub use tools::{cmd_check, cmd_config_init, cmd_styles};

/// Pixel-art album cover generator
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by every subcommand
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Spotify client ID
    #[arg(long, env = "SPOTIFY_CLIENT_ID", global = true, hide_env_values = true)]
    pub client_id: Option<String>,
    /// Spotify client secret
    #[arg(long, env = "SPOTIFY_CLIENT_SECRET", global = true, hide_env_values = true)]
    pub client_secret: Option<String>,
    /// Base URL of the lyrics service
    #[arg(long, env = "LYRICS_API_URL", global = true)]
    pub lyrics_url: Option<String>,
    /// Base URL of the diffusion backend
    #[arg(long, env = "DIFFUSION_API_URL", global = true)]
    pub diffusion_url: Option<String>,
    /// Directory covers are written to
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,
    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            lyrics_url: self.lyrics_url.clone(),
            diffusion_url: self.diffusion_url.clone(),
            output_dir: self.output_dir.clone(),
        }
    }
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a cover (prompts for anything not given on the command line)
    Generate(GenerateArgs),
    /// Look up lyrics for a song
    Lyrics {
        /// Song title
        #[arg(short, long)]
        title: String,
        /// Artist name
        #[arg(short, long)]
        artist: String,
    },
    /// Print the prompt that would be sent to the diffusion model
    Prompt {
        /// Song title
        #[arg(short, long)]
        title: String,
        /// Artist name
        #[arg(short, long)]
        artist: String,
        /// Mood or theme description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Style preset (see `styles`)
        #[arg(short, long)]
        style: Option<String>,
        /// Read lyrics from a file instead of looking them up
        #[arg(long)]
        lyrics_file: Option<PathBuf>,
    },
    /// Apply the pixel-art filter chain to an existing image
    Pixelate {
        /// Input image
        input: PathBuf,
        /// Block size in pixels
        #[arg(short, long)]
        pixel_size: Option<u32>,
        /// Output file (default: timestamped file in the output directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List the available style presets
    Styles,
    /// Check credentials, endpoints and accelerator
    Check,
    /// Write the effective configuration to the config file
    ConfigInit {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Run the parsed command line. No subcommand runs the interactive flow.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = effective_config(&cli.global);

    match &cli.command {
        None => {
            let args = GenerateArgs {
                interactive: true,
                ..Default::default()
            };
            cmd_generate(&runtime()?, &config, &args)
        }
        Some(Commands::Generate(args)) => cmd_generate(&runtime()?, &config, args),
        Some(Commands::Lyrics { title, artist }) => cmd_lyrics(&runtime()?, &config, title, artist),
        Some(Commands::Prompt {
            title,
            artist,
            description,
            style,
            lyrics_file,
        }) => cmd_prompt(
            &runtime()?,
            &config,
            title,
            artist,
            description,
            style.as_deref(),
            lyrics_file.as_ref(),
        ),
        Some(Commands::Pixelate {
            input,
            pixel_size,
            output,
        }) => cmd_pixelate(&config, input, *pixel_size, output.as_ref()),
        Some(Commands::Styles) => cmd_styles(&config),
        Some(Commands::Check) => cmd_check(&config, cli.global.config.as_ref()),
        Some(Commands::ConfigInit { force }) => {
            cmd_config_init(&config, cli.global.config.as_ref(), *force)
        }
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Config file (or defaults) with flag/environment overrides applied
pub(crate) fn effective_config(global: &GlobalArgs) -> Config {
    let mut config = match &global.config {
        Some(path) => config::load_from(path),
        None => config::load(),
    };
    config.apply(&global.overrides());
    config
}

/// Single-threaded runtime; every command does one request at a time
pub(crate) fn runtime() -> anyhow::Result<Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

/// Lyric lookup over HTTP with the configured endpoints and credentials
pub(crate) fn lyrics_service(config: &Config) -> Result<LyricsService> {
    Ok(LyricsService::new(config.lyrics_config())?)
}

/// Resolve a style key, telling the user when it falls back to the default
pub(crate) fn resolve_style(key: &str) -> StylePreset {
    match StylePreset::from_key(key) {
        Some(style) => style,
        None => {
            let fallback = StylePreset::default();
            tracing::warn!("Unknown style '{}', using {}", key, fallback);
            eprintln!("Unknown style '{}', using '{}' instead.", key, fallback);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_is_interactive() {
        let cli = Cli::try_parse_from(["pixel-cover"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_generate_args() {
        let cli = Cli::try_parse_from([
            "pixel-cover",
            "generate",
            "--title",
            "Yesterday",
            "--artist",
            "The Beatles",
            "--style",
            "retro",
            "--pixel-size",
            "8",
            "--skip-lyrics",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Generate(args)) => {
                assert_eq!(args.title.as_deref(), Some("Yesterday"));
                assert_eq!(args.artist.as_deref(), Some("The Beatles"));
                assert_eq!(args.style.as_deref(), Some("retro"));
                assert_eq!(args.pixel_size, Some(8));
                assert!(args.skip_lyrics);
                assert!(args.description.is_none());
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "pixel-cover",
            "styles",
            "--lyrics-url",
            "http://lyrics.lan/",
            "--output-dir",
            "covers",
        ])
        .unwrap();

        assert_eq!(cli.global.lyrics_url.as_deref(), Some("http://lyrics.lan/"));
        assert_eq!(cli.global.output_dir, Some(PathBuf::from("covers")));
    }

    #[test]
    fn test_lyrics_requires_title_and_artist() {
        assert!(Cli::try_parse_from(["pixel-cover", "lyrics", "--title", "x"]).is_err());
    }

    #[test]
    fn test_effective_config_applies_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[diffusion]\nbase_url = \"http://file:7860\"\n").unwrap();

        let global = GlobalArgs {
            diffusion_url: Some("http://flag:7860".to_string()),
            config: Some(path),
            ..Default::default()
        };
        let config = effective_config(&global);

        assert_eq!(config.diffusion.base_url, "http://flag:7860");
    }

    #[test]
    fn test_lyrics_service_from_config() {
        let config = Config::default();
        assert!(config.client_credentials().is_none());
        assert!(lyrics_service(&config).is_ok());
    }

    #[test]
    fn test_check_takes_config_flag() {
        let cli = Cli::try_parse_from(["pixel-cover", "check", "--config", "alt.toml"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Check)));
        assert_eq!(cli.global.config, Some(PathBuf::from("alt.toml")));
    }

    #[test]
    fn test_resolve_style() {
        assert_eq!(resolve_style("Cyberpunk"), StylePreset::Cyberpunk);
        assert_eq!(resolve_style("nope"), StylePreset::Fantasy);
    }
}
