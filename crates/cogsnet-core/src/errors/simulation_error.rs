//! Simulation-driver errors.

/// Errors raised while folding events and emitting snapshots.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    /// The scheduling precondition: for a nonzero interval the number of
    /// snapshots must stay below the number of events. Surfaced before any
    /// snapshot storage is allocated.
    #[error("snapshot interval {interval} yields {snapshots} snapshots for {events} events; increase the interval")]
    IntervalTooSmall {
        interval: i64,
        events: usize,
        snapshots: usize,
    },

    /// Negative elapsed time between consecutive interactions of a pair.
    /// The event sequence must be sorted ascending by timestamp.
    #[error("events out of chronological order for pair ({source_id}, {target}): time {event_time} precedes last event at {last_event_time}")]
    OutOfOrder {
        source_id: i64,
        target: i64,
        event_time: i64,
        last_event_time: i64,
    },
}
