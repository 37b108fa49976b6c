use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use meteor::config::{self, Config};

#[derive(Parser)]
#[command(name = "meteor")]
#[command(about = "Meteor - a lightweight game launcher")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.meteor/launcher.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the launcher GUI
    Gui,

    /// Initialize a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config_path = cli.config.unwrap_or_else(Config::default_path);

    match cli.command {
        Some(Commands::Init { force }) => {
            let path = config::init_config(&config_path, force)?;
            println!("Wrote default config to {}", path.display());
            Ok(())
        }
        Some(Commands::Gui) | None => meteor::gui::run_gui(config_path),
    }
}
