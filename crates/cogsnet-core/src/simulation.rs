//! The simulation driver: a sequential left-fold over the sorted event
//! sequence, interleaved with scheduled snapshot emission.

use crate::config::DecayParams;
use crate::errors::SimulationError;
use crate::event::{Event, NodeIndex};
use crate::network::NetworkState;
use crate::snapshot::{self, Snapshot};
use crate::weight;

/// Fold `events` into decaying edge weights and emit snapshots.
///
/// With a nonzero interval, snapshots are taken every
/// `params.snapshot_interval` ticks starting at the first event's timestamp
/// plus one interval; with interval 0, one snapshot per distinct subsequent
/// event time. A snapshot falling on the same instant as an event is taken
/// after that event is folded in. The state after the last event is always
/// captured by a final snapshot.
///
/// Events must be sorted ascending by timestamp; a violation between
/// consecutive interactions of the same pair aborts the run.
pub fn simulate(
    params: &DecayParams,
    events: &[Event],
    nodes: &NodeIndex,
) -> Result<Vec<Snapshot>, SimulationError> {
    if events.is_empty() {
        return Ok(Vec::new());
    }

    let first_time = events[0].timestamp;
    let last_time = events[events.len() - 1].timestamp;

    let expected_snapshots = if params.snapshot_interval != 0 {
        let scheduled = ((last_time - first_time) / params.snapshot_interval) as usize;
        // Bounds memory: the snapshot storage may not reach the event count.
        if scheduled >= events.len() {
            return Err(SimulationError::IntervalTooSmall {
                interval: params.snapshot_interval,
                events: events.len(),
                snapshots: scheduled + 1,
            });
        }
        scheduled + 1
    } else {
        events.len() + 1
    };

    tracing::debug!(
        events = events.len(),
        nodes = nodes.len(),
        expected_snapshots,
        "starting cogsnet fold"
    );

    let mut state = NetworkState::new(nodes.len());
    let mut snapshots = Vec::with_capacity(expected_snapshots);
    let mut next_snapshot_time = first_time + params.snapshot_interval;

    for (i, event) in events.iter().enumerate() {
        let previous = state.current_weight(event.source, event.target);

        // Weight 0 means no live history for the pair (never interacted, or
        // decayed to the floor): the reinforcement restarts at the baseline.
        let new_weight = if previous == 0.0 {
            params.mu
        } else {
            weight::evaluate(
                (nodes.real_id(event.source), nodes.real_id(event.target)),
                event.timestamp,
                state.last_event_time(event.source, event.target),
                previous,
                true,
                params,
            )?
        };

        state.apply_event(event.source, event.target, event.timestamp, new_weight);

        // Look ahead: emit every snapshot scheduled strictly before the next
        // event. A large gap between events may emit several in a row.
        while let Some(next_event) = events.get(i + 1) {
            if next_snapshot_time >= next_event.timestamp {
                break;
            }
            tracing::trace!(time = next_snapshot_time, "capturing snapshot");
            snapshots.push(snapshot::capture(next_snapshot_time, nodes, &state, params)?);
            next_snapshot_time = if params.snapshot_interval != 0 {
                next_snapshot_time + params.snapshot_interval
            } else {
                next_event.timestamp
            };
        }
    }

    // The state after all events is always captured.
    snapshots.push(snapshot::capture(next_snapshot_time, nodes, &state, params)?);

    tracing::debug!(snapshots = snapshots.len(), "cogsnet fold complete");
    Ok(snapshots)
}
