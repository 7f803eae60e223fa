// Copyright 2026 Pricewatch Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use pricewatch::cli;

#[derive(Parser)]
#[command(
    name = "pricewatch",
    about = "Pricewatch — live asset quotes with cross-source validation",
    version,
    after_help = "Run 'pricewatch' with no command to fetch and report all tracked assets."
)]
struct Cli {
    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch all tracked assets and print the price report (the default)
    Fetch {
        /// Navigation timeout override in milliseconds
        #[arg(long)]
        timeout: Option<u64>,
        /// Politeness delay between page fetches in milliseconds
        #[arg(long)]
        delay: Option<u64>,
    },
    /// Check environment and diagnose issues
    Doctor,
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

fn init_tracing(verbose: bool, quiet: bool) {
    let directive = if quiet {
        "pricewatch=error"
    } else if verbose {
        "pricewatch=debug"
    } else {
        "pricewatch=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(directive.parse().expect("valid filter directive")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let result = match cli.command {
        // No subcommand → run the pipeline with defaults
        None => cli::fetch_cmd::run(None, None).await,
        Some(Commands::Fetch { timeout, delay }) => cli::fetch_cmd::run(timeout, delay).await,
        Some(Commands::Doctor) => cli::doctor::run().await,
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "pricewatch", &mut std::io::stdout());
            Ok(())
        }
    };

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = &result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    result
}
