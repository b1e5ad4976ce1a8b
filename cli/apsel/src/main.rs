//! apsel — command-line front end for the fuzzy apparatus selector.

mod commands;
mod config;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::Project;

#[derive(Parser)]
#[command(
    name = "apsel",
    version,
    about = "Select process apparatuses from flow rate and temperature"
)]
struct Cli {
    /// Configuration file (default: apsel.toml searched upward from cwd)
    #[arg(long, global = true, env = "CONFIG_PATH")]
    config: Option<PathBuf>,
    /// Rule file, overriding the configured one
    #[arg(long, global = true)]
    rules: Option<PathBuf>,
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run inference for one flow rate and temperature
    Infer {
        /// Raw material flow rate G
        #[arg(allow_negative_numbers = true)]
        input1: f64,
        /// Process temperature T
        #[arg(allow_negative_numbers = true)]
        input2: f64,
        /// Output format (text, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Load the rule file and check it against the configured outputs
    Check,
    /// Sample the membership curves of one input
    Curves {
        /// Input to sample (flow-rate, temperature)
        input: String,
        /// Distance between samples (default: 0.1)
        #[arg(long)]
        step: Option<f64>,
        /// Output format (text, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Create a project with a default configuration and sample rules
    Init {
        /// Directory to create
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the verbosity flag.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init { path } => commands::init::run(&path),

        Commands::Curves {
            input,
            step,
            format,
        } => commands::curves::run(&input, step, format.as_deref()),

        Commands::Infer {
            input1,
            input2,
            format,
        } => {
            let project = Project::discover(cli.config.as_deref(), &cwd)?;
            commands::infer::run(
                &project,
                cli.rules.as_deref(),
                input1,
                input2,
                format.as_deref(),
            )
        }

        Commands::Check => {
            let project = Project::discover(cli.config.as_deref(), &cwd)?;
            commands::check::run(&project, cli.rules.as_deref())
        }
    }
}
