//! Read-only materialization of the full weighted network at one instant.

use rayon::prelude::*;
use serde::Serialize;

use crate::config::DecayParams;
use crate::errors::SimulationError;
use crate::event::NodeIndex;
use crate::network::NetworkState;
use crate::weight;

/// One ordered pair in a snapshot, keyed by the original external ids.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SnapshotEdge {
    pub source: i64,
    pub target: i64,
    pub weight: f64,
}

/// The full network frozen at `time`: N² edges covering every ordered pair
/// including the diagonal, never sparsified. Immutable once produced.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub time: i64,
    pub edges: Vec<SnapshotEdge>,
}

/// Sample every pair's decayed weight at `time` without mutating state.
///
/// Rows are independent, so they are computed in parallel; the memory cost
/// is quadratic in the node count, the dominant resource consumer of a run.
pub fn capture(
    time: i64,
    nodes: &NodeIndex,
    state: &NetworkState,
    params: &DecayParams,
) -> Result<Snapshot, SimulationError> {
    let n = state.node_count();

    let rows: Vec<Vec<SnapshotEdge>> = (0..n)
        .into_par_iter()
        .map(|i| {
            let source = nodes.real_id(i);
            let mut row = Vec::with_capacity(n);
            for j in 0..n {
                let target = nodes.real_id(j);
                let weight = weight::evaluate(
                    (source, target),
                    time,
                    state.last_event_time(i, j),
                    state.current_weight(i, j),
                    false,
                    params,
                )?;
                row.push(SnapshotEdge {
                    source,
                    target,
                    weight,
                });
            }
            Ok(row)
        })
        .collect::<Result<_, SimulationError>>()?;

    Ok(Snapshot {
        time,
        edges: rows.into_iter().flatten().collect(),
    })
}
