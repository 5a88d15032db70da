//! CLI argument definitions and their mapping onto a `RunConfig`.

use std::path::PathBuf;

use clap::Parser;
use cogsnet_core::{CogsnetResult, RunConfig, TimeUnit};

use crate::output::OutputFormat;

/// Compute a CogSNet: fold a chronological event file into decaying edge
/// weights and emit periodic snapshots of the full network.
#[derive(Debug, Parser)]
#[command(name = "cogsnet")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Delimited event file: a header line, then sender/receiver/timestamp rows
    pub events: PathBuf,

    /// Field delimiter: ',', ';', 'tab', or their names
    #[arg(short, long, default_value = ",")]
    pub delimiter: String,

    /// TOML config file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Forgetting curve: linear, power, or exponential
    #[arg(long)]
    pub forgetting: Option<String>,

    /// Baseline weight assigned on reinforcement, in (0, 1]
    #[arg(long)]
    pub mu: Option<f64>,

    /// Decay floor: weights at or below it are reported as zero
    #[arg(long)]
    pub theta: Option<f64>,

    /// Time for a weight to decay from mu to theta, in units
    #[arg(long)]
    pub edge_lifetime: Option<u64>,

    /// Time between snapshots in units; 0 = one snapshot per event time
    #[arg(long)]
    pub snapshot_interval: Option<u64>,

    /// Unit scale for interval and lifetime: 1, 60, or 3600 seconds
    #[arg(long)]
    pub units: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Output path; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the run configuration: config file (if any) as the base layer,
    /// then flag overrides, then validation.
    pub fn run_config(&self) -> CogsnetResult<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_toml_file(path)?,
            None => RunConfig::default(),
        };

        if let Some(forgetting) = &self.forgetting {
            config.forgetting = forgetting.parse()?;
        }
        if let Some(mu) = self.mu {
            config.mu = mu;
        }
        if let Some(theta) = self.theta {
            config.theta = theta;
        }
        if let Some(edge_lifetime) = self.edge_lifetime {
            config.edge_lifetime = edge_lifetime;
        }
        if let Some(snapshot_interval) = self.snapshot_interval {
            config.snapshot_interval = snapshot_interval;
        }
        if let Some(units) = self.units {
            config.units = TimeUnit::try_from(units)?;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use cogsnet_core::ForgettingKind;

    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "cogsnet",
            "events.csv",
            "--forgetting",
            "linear",
            "--mu",
            "0.5",
            "--theta",
            "0.1",
            "--edge-lifetime",
            "10",
            "--snapshot-interval",
            "5",
            "--units",
            "1",
        ]);
        let config = cli.run_config().unwrap();
        assert_eq!(config.forgetting, ForgettingKind::Linear);
        assert_eq!(config.mu, 0.5);
        assert_eq!(config.snapshot_interval, 5);
        assert_eq!(config.units, TimeUnit::Seconds);
    }

    #[test]
    fn invalid_flag_values_are_rejected() {
        let cli = Cli::parse_from(["cogsnet", "events.csv", "--mu", "1.5"]);
        assert!(cli.run_config().is_err());

        let cli = Cli::parse_from(["cogsnet", "events.csv", "--units", "7"]);
        assert!(cli.run_config().is_err());

        let cli = Cli::parse_from(["cogsnet", "events.csv", "--forgetting", "step"]);
        assert!(cli.run_config().is_err());
    }

    #[test]
    fn config_file_is_the_base_layer() {
        use std::io::Write as _;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "forgetting = \"power\"\nmu = 0.6\ntheta = 0.2\nedge_lifetime = 48\nunits = 3600\n"
        )
        .unwrap();

        let config_path = file.path().to_str().unwrap();
        let cli = Cli::parse_from(["cogsnet", "events.csv", "--config", config_path, "--mu", "0.9"]);
        let config = cli.run_config().unwrap();
        assert_eq!(config.forgetting, ForgettingKind::Power);
        assert_eq!(config.mu, 0.9);
        assert_eq!(config.theta, 0.2);
        assert_eq!(config.units, TimeUnit::Hours);
    }
}
