use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(version, about = "Doom of Mokhaiotl interrupt sound tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a recorded tick capture through the detector
    Replay {
        /// Capture file, one JSON snapshot per line
        #[arg(short, long)]
        path: String,

        /// Play the interrupt cue when the capture contains interrupts
        #[arg(long)]
        play: bool,
    },
    /// Show current settings
    Config,
    /// Update settings
    Set {
        #[arg(long)]
        enabled: Option<bool>,

        /// Playback gain in decibels, clamped to [-60, 12]
        #[arg(long)]
        gain_db: Option<i32>,
    },
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Replay { path, play } => commands::replay(&path, play),
        Commands::Config => commands::show_config(),
        Commands::Set { enabled, gain_db } => commands::set_config(enabled, gain_db),
    }
}
