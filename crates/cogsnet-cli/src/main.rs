//! cogsnet: compute CogSNet snapshots from a delimited event file.

use clap::Parser;
use cogsnet_cli::{output, Cli};
use cogsnet_core::Delimiter;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.run_config()?;
    let delimiter: Delimiter = cli.delimiter.parse()?;

    let snapshots = cogsnet_core::cogsnet(&config, &cli.events, delimiter)?;
    tracing::info!(
        snapshots = snapshots.len(),
        events = %cli.events.display(),
        "cogsnet computed"
    );

    output::write_snapshots(&snapshots, cli.format, cli.output.as_deref())?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
