//! Run parameters: validation, unit scaling, and λ derivation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::forgetting;

/// The forgetting curve applied to edge weights between reinforcements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForgettingKind {
    Linear,
    Power,
    Exponential,
}

impl ForgettingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Power => "power",
            Self::Exponential => "exponential",
        }
    }
}

impl FromStr for ForgettingKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Self::Linear),
            "power" => Ok(Self::Power),
            "exponential" => Ok(Self::Exponential),
            other => Err(ConfigError::UnknownForgettingKind {
                value: other.to_string(),
            }),
        }
    }
}

/// Tick base for `snapshot_interval` and `edge_lifetime` relative to event
/// timestamps (which are always seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
}

impl TimeUnit {
    /// Number of event-timestamp ticks in one unit.
    pub fn ticks(&self) -> u64 {
        match self {
            Self::Seconds => 1,
            Self::Minutes => 60,
            Self::Hours => 3600,
        }
    }
}

impl TryFrom<u32> for TimeUnit {
    type Error = ConfigError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Seconds),
            60 => Ok(Self::Minutes),
            3600 => Ok(Self::Hours),
            other => Err(ConfigError::UnknownTimeUnit { value: other }),
        }
    }
}

impl From<TimeUnit> for u32 {
    fn from(unit: TimeUnit) -> Self {
        unit.ticks() as u32
    }
}

/// User-supplied run parameters.
///
/// `snapshot_interval` and `edge_lifetime` are expressed in `units`;
/// `resolve` scales them into the tick base of the event timestamps.
/// A `snapshot_interval` of 0 means one snapshot per distinct subsequent
/// event time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub forgetting: ForgettingKind,
    pub snapshot_interval: u64,
    pub edge_lifetime: u64,
    pub mu: f64,
    pub theta: f64,
    pub units: TimeUnit,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            forgetting: ForgettingKind::Exponential,
            snapshot_interval: 0,
            edge_lifetime: 24,
            mu: 0.3,
            theta: 0.1,
            units: TimeUnit::Hours,
        }
    }
}

impl RunConfig {
    /// Load a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load a configuration from a TOML file.
    pub fn from_toml_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.edge_lifetime == 0 {
            return Err(ConfigError::EdgeLifetimeZero);
        }
        if self.mu <= 0.0 || self.mu > 1.0 {
            return Err(ConfigError::MuOutOfRange { mu: self.mu });
        }
        if self.theta < 0.0 || self.theta >= self.mu {
            return Err(ConfigError::ThetaOutOfRange {
                theta: self.theta,
                mu: self.mu,
            });
        }
        Ok(())
    }

    /// Validate, scale the interval and lifetime into ticks, and derive λ.
    pub fn resolve(&self) -> Result<DecayParams, ConfigError> {
        self.validate()?;

        let scale = self.units.ticks();
        let edge_lifetime = (self.edge_lifetime * scale) as i64;
        let lambda =
            forgetting::derive_lambda(self.forgetting, self.mu, self.theta, edge_lifetime as f64);

        Ok(DecayParams {
            kind: self.forgetting,
            mu: self.mu,
            theta: self.theta,
            lambda,
            unit_scale: scale as f64,
            snapshot_interval: (self.snapshot_interval * scale) as i64,
            edge_lifetime,
        })
    }
}

/// Resolved parameters, read-only for the rest of the run. λ is always
/// derived here, never supplied directly.
#[derive(Debug, Clone)]
pub struct DecayParams {
    pub kind: ForgettingKind,
    pub mu: f64,
    pub theta: f64,
    pub lambda: f64,
    /// Divisor applied to raw timestamp differences.
    pub unit_scale: f64,
    /// Snapshot interval in event-timestamp ticks (0 = per-event snapshots).
    pub snapshot_interval: i64,
    /// Edge lifetime in event-timestamp ticks.
    pub edge_lifetime: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_config() -> RunConfig {
        RunConfig {
            forgetting: ForgettingKind::Linear,
            snapshot_interval: 5,
            edge_lifetime: 10,
            mu: 0.5,
            theta: 0.1,
            units: TimeUnit::Seconds,
        }
    }

    #[test]
    fn resolve_derives_linear_lambda() {
        let params = linear_config().resolve().unwrap();
        assert!((params.lambda - 0.04).abs() < 1e-12);
        assert_eq!(params.snapshot_interval, 5);
        assert_eq!(params.edge_lifetime, 10);
    }

    #[test]
    fn resolve_scales_by_units() {
        let mut config = linear_config();
        config.units = TimeUnit::Minutes;
        let params = config.resolve().unwrap();
        assert_eq!(params.snapshot_interval, 300);
        assert_eq!(params.edge_lifetime, 600);
        assert!((params.unit_scale - 60.0).abs() < f64::EPSILON);
        // λ uses the scaled lifetime.
        assert!((params.lambda - (0.5 - 0.1) / 600.0).abs() < 1e-12);
    }

    #[test]
    fn validate_rejects_zero_lifetime() {
        let mut config = linear_config();
        config.edge_lifetime = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EdgeLifetimeZero)
        ));
    }

    #[test]
    fn validate_rejects_mu_out_of_range() {
        let mut config = linear_config();
        config.mu = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MuOutOfRange { .. })
        ));
        config.mu = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MuOutOfRange { .. })
        ));
    }

    #[test]
    fn validate_rejects_theta_at_or_above_mu() {
        let mut config = linear_config();
        config.theta = 0.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ThetaOutOfRange { .. })
        ));
        config.theta = -0.1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ThetaOutOfRange { .. })
        ));
    }

    #[test]
    fn forgetting_kind_parses_known_values() {
        assert_eq!(
            "exponential".parse::<ForgettingKind>().unwrap(),
            ForgettingKind::Exponential
        );
        assert!(matches!(
            "ebbinghaus".parse::<ForgettingKind>(),
            Err(ConfigError::UnknownForgettingKind { .. })
        ));
    }

    #[test]
    fn time_unit_rejects_unknown_scale() {
        assert!(TimeUnit::try_from(1800).is_err());
        assert_eq!(TimeUnit::try_from(60).unwrap(), TimeUnit::Minutes);
    }

    #[test]
    fn from_toml_round_trip() {
        let config = RunConfig::from_toml(
            r#"
            forgetting = "linear"
            snapshot_interval = 5
            edge_lifetime = 10
            mu = 0.5
            theta = 0.1
            units = 1
            "#,
        )
        .unwrap();
        assert_eq!(config.forgetting, ForgettingKind::Linear);
        assert_eq!(config.units, TimeUnit::Seconds);

        let err = RunConfig::from_toml("units = 7").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
