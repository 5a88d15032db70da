//! Configuration errors.

/// Errors raised while validating or resolving run parameters.
/// All of these are detected before any event is processed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown forgetting kind '{value}': allowed values are 'linear', 'power', or 'exponential'")]
    UnknownForgettingKind { value: String },

    #[error("unknown time unit {value}: allowed values are 1 (seconds), 60 (minutes), or 3600 (hours)")]
    UnknownTimeUnit { value: u32 },

    #[error("edge_lifetime must be greater than 0")]
    EdgeLifetimeZero,

    #[error("mu ({mu}) must be greater than 0 and at most 1")]
    MuOutOfRange { mu: f64 },

    #[error("theta ({theta}) must be at least 0 and less than mu ({mu})")]
    ThetaOutOfRange { theta: f64, mu: f64 },

    #[error("failed to parse config {path}: {message}")]
    Parse { path: String, message: String },
}
