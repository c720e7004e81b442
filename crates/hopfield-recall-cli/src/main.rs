//! hopfield-recall CLI - recover a stored grid pattern from a noisy observation

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;

use crate::cli::commands::{run_demo, run_recall};
use crate::config::Config;

#[derive(Parser)]
#[command(name = "hopfield-recall")]
#[command(about = "Single-pattern Hopfield associative memory", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Disable colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store the built-in 8x8 ring, corrupt it and recall it
    Demo {
        #[command(flatten)]
        run: RunArgs,
    },

    /// Store a pattern read from a file of '#'/'.' rows, corrupt it and recall it
    Recall {
        /// Pattern file path
        #[arg(short, long)]
        pattern: PathBuf,

        #[command(flatten)]
        run: RunArgs,
    },
}

/// Flags that override the configuration file.
#[derive(Args, Debug, Default)]
struct RunArgs {
    /// Per-unit flip probability in [0, 1]
    #[arg(short, long)]
    noise: Option<f64>,

    /// Maximum synchronous recall rounds
    #[arg(short, long)]
    max_iterations: Option<usize>,

    /// Noise generator seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl RunArgs {
    fn apply(&self, config: &mut Config) {
        if let Some(p) = self.noise {
            config.recall.flip_probability = p;
        }
        if let Some(k) = self.max_iterations {
            config.recall.max_iterations = k;
        }
        if let Some(seed) = self.seed {
            config.recall.seed = Some(seed);
        }
        if self.json {
            config.json = true;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug {
        "hopfield_recall=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let result = Config::load(cli.config.as_deref()).and_then(|mut config| match &cli.command {
        Commands::Demo { run } => {
            run.apply(&mut config);
            run_demo(&config)
        }
        Commands::Recall { pattern, run } => {
            run.apply(&mut config);
            run_recall(pattern, &config)
        }
    });

    if let Err(e) = result {
        eprintln!("{}", cli::format::format_error(&format!("{:#}", e)));
        if cli.debug {
            eprintln!("\n{:#?}", e);
        } else {
            eprintln!("\n{}", "Run with --debug for more details".dimmed());
        }
        std::process::exit(1);
    }

    Ok(())
}
