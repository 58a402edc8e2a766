//! CLI entry point for fwdgen.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// fwdgen — generate forwarding headers into a vendored source tree.
#[derive(Parser, Debug)]
#[command(name = "fwdgen", version, about)]
struct Cli {
    /// Path to the fwdgen.toml configuration file.
    #[arg(default_value = "fwdgen.toml")]
    config: PathBuf,

    /// Output directory (overrides config). Must already exist.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fwdgen=info")),
        )
        .init();

    let cli = Cli::parse();
    let report = fwdgen::run(&cli.config, cli.output_dir.as_deref())?;
    println!(
        "{} created, {} already present",
        report.created_count(),
        report.skipped_count()
    );
    Ok(())
}
