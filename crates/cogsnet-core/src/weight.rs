//! The weight update rule: chronology validation, curve dispatch, and
//! threshold zeroing. The single point where a new edge weight is computed,
//! both for live reinforcements and for read-only snapshot sampling.

use crate::config::DecayParams;
use crate::errors::SimulationError;
use crate::forgetting;

/// Compute the weight of `edge` (real node ids, used for error reporting)
/// at `now`, given the pair's last event time and weight.
///
/// A raw weight at or below `theta` collapses to exactly 0: the edge is
/// considered forgotten. Negative elapsed time is a chronology violation.
pub fn evaluate(
    edge: (i64, i64),
    now: i64,
    last_event_time: i64,
    previous: f64,
    reinforced: bool,
    params: &DecayParams,
) -> Result<f64, SimulationError> {
    let elapsed = (now - last_event_time) as f64 / params.unit_scale;

    if elapsed < 0.0 {
        return Err(SimulationError::OutOfOrder {
            source_id: edge.0,
            target: edge.1,
            event_time: now,
            last_event_time,
        });
    }

    let raw = forgetting::raw_weight(
        params.kind,
        reinforced,
        previous,
        elapsed,
        params.lambda,
        params.mu,
    );

    if raw <= params.theta {
        Ok(0.0)
    } else {
        Ok(raw)
    }
}
