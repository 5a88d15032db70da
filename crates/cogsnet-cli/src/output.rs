//! Snapshot serialization: CSV rows or a JSON document.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use cogsnet_core::Snapshot;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `snapshot_time,source,target,weight` row per edge
    Csv,
    /// The full snapshot list as a JSON array
    Json,
}

/// Write the snapshot sequence to `output`, or stdout when omitted.
pub fn write_snapshots(
    snapshots: &[Snapshot],
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_to(&mut writer, snapshots, format)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_to(&mut writer, snapshots, format)?;
        }
    }
    Ok(())
}

fn write_to<W: Write>(
    writer: &mut W,
    snapshots: &[Snapshot],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Csv => write_csv(writer, snapshots)?,
        OutputFormat::Json => serde_json::to_writer_pretty(writer, snapshots)?,
    }
    Ok(())
}

fn write_csv<W: Write>(writer: &mut W, snapshots: &[Snapshot]) -> io::Result<()> {
    writeln!(writer, "snapshot_time,source,target,weight")?;
    for snapshot in snapshots {
        for edge in &snapshot.edges {
            writeln!(
                writer,
                "{},{},{},{}",
                snapshot.time, edge.source, edge.target, edge.weight
            )?;
        }
    }
    Ok(())
}
