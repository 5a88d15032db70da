//! Error handling for CogSNet.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod ingest_error;
pub mod simulation_error;

pub use config_error::ConfigError;
pub use ingest_error::IngestError;
pub use simulation_error::SimulationError;

/// Top-level error aggregating subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum CogsnetError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),

    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),
}

/// Result alias used at the crate's API boundary.
pub type CogsnetResult<T> = Result<T, CogsnetError>;
