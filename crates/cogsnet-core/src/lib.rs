//! # cogsnet-core
//!
//! Engine for computing CogSNet, a cognitively-inspired temporal social
//! network model. A chronological stream of pairwise interaction events is
//! folded into continuously decaying edge weights, and the full weighted
//! network is periodically frozen into snapshots.
//!
//! The pipeline: validated [`RunConfig`] + ingested event log →
//! [`simulation::simulate`] → ordered sequence of [`Snapshot`]s.

pub mod config;
pub mod errors;
pub mod event;
pub mod forgetting;
pub mod ingest;
pub mod network;
pub mod simulation;
pub mod snapshot;
pub mod weight;

pub use config::{DecayParams, ForgettingKind, RunConfig, TimeUnit};
pub use errors::{CogsnetError, CogsnetResult};
pub use event::{Event, NodeIndex};
pub use ingest::{Delimiter, EventLog};
pub use network::NetworkState;
pub use snapshot::{Snapshot, SnapshotEdge};

use std::path::Path;

/// Compute a CogSNet end to end: resolve the configuration, read the event
/// file, and fold it into a snapshot sequence.
pub fn cogsnet(
    config: &RunConfig,
    path_events: &Path,
    delimiter: Delimiter,
) -> CogsnetResult<Vec<Snapshot>> {
    let params = config.resolve()?;
    let log = ingest::read_events(path_events, delimiter)?;
    let snapshots = simulation::simulate(&params, &log.events, &log.nodes)?;
    Ok(snapshots)
}
