mod config;
mod script;

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, EditorConfig};
use crate::script::{Replay, ReplayError, Script};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Replay(#[from] ReplayError),
    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "graphics-editor", about = "Headless vector graphics editor")]
struct Cli {
    /// Print compact JSON instead of pretty-printed.
    #[arg(long, global = true, env = "EDITOR_COMPACT", default_value_t = false)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a script of pointer events and edits, then print the scene.
    Replay {
        #[arg(default_value = "-", help = "Script path, or - for stdin")]
        script: PathBuf,

        /// Include the draw commands currently on screen.
        #[arg(long, default_value_t = false)]
        frame: bool,
    },
    /// Print the configuration resolved from the environment.
    Config,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = EditorConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let output = match cli.command {
        Command::Replay { script, frame } => {
            let source = read_script(&script)?;
            let mut replay = Replay::new(&config);
            replay.run(&Script::parse(&source)?)?;
            tracing::info!(added = replay.added().len(), live = replay.scene().len(), "script applied");
            serde_json::to_value(replay.summary(frame))?
        }
        Command::Config => serde_json::to_value(&config)?,
    };

    let text = if cli.compact { serde_json::to_string(&output)? } else { serde_json::to_string_pretty(&output)? };
    println!("{text}");
    Ok(())
}

fn read_script(path: &Path) -> Result<String, ReplayError> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }
    tracing::info!(path = %path.display(), "loading script");
    Ok(std::fs::read_to_string(path)?)
}
