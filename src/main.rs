use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::error;
use yb_core::config::AppConfig;

/// Yield dashboard with guided smart-account onboarding
#[derive(Parser)]
#[command(name = "yieldboard", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, short = 'c', env = "YB_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard and the setup panel
    Dashboard {
        /// Print the assembled view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the USDC balance
    Balance {
        /// Holder address (defaults to the configured position holder)
        #[arg(long)]
        holder: Option<String>,
    },

    /// Walk through the two setup steps interactively
    Setup {
        /// Sign wallet requests without asking
        #[arg(long)]
        auto_approve: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = yb_cli::bootstrap::tracing::init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {e}");
    }

    let config = match &cli.config {
        Some(path) => match yb_cli::load_config(path) {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load config: {e:#}");
                eprintln!("{}", yb_cli::commands::map_err(e));
                std::process::exit(1);
            }
        },
        None => AppConfig::with_defaults(),
    };

    let result = match cli.command {
        Commands::Dashboard { json } => yb_cli::run_dashboard(&config, json).await,
        Commands::Balance { holder } => yb_cli::run_balance(&config, holder.as_deref()).await,
        Commands::Setup { auto_approve } => yb_cli::run_setup(&config, auto_approve).await,
    };

    if let Err(e) = result {
        error!("{e:#}");
        eprintln!("{}", yb_cli::commands::map_err(e));
        std::process::exit(1);
    }
}
