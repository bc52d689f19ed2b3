//! Multiplication configuration.
//!
//! This module defines `MultiplicationConfig`, which holds the block-count
//! thresholds used by the `Multiplier` to choose an algorithm and the terminal
//! sizes at which the divide-and-conquer algorithms stop recursing.
//!
//! Validation helpers ensure obvious configuration mistakes are surfaced (e.g.,
//! a Karatsuba threshold below the schoolbook threshold).

use crate::definitions::{
    DEFAULT_KARATSUBA_BASE_CASE, DEFAULT_KARATSUBA_THRESHOLD, DEFAULT_STANDARD_THRESHOLD,
    DEFAULT_TOOM_BASE_CASE, MIN_BASE_CASE,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Thresholds for algorithm selection, all in blocks (one block is 18 digits).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiplicationConfig {
    /// Operands with `max` or `total` block count up to this use schoolbook.
    pub standard_threshold: usize,
    /// Operands with `max` or `total` block count up to this use Karatsuba;
    /// anything larger uses Toom-Cook-3.
    pub karatsuba_threshold: usize,
    /// Karatsuba falls back to schoolbook when either operand has at most
    /// this many blocks.
    pub karatsuba_base_case: usize,
    /// Toom-Cook-3 falls back to Karatsuba when either operand has at most
    /// this many blocks.
    pub toom_base_case: usize,
}

impl Default for MultiplicationConfig {
    fn default() -> Self {
        Self {
            standard_threshold: DEFAULT_STANDARD_THRESHOLD,
            karatsuba_threshold: DEFAULT_KARATSUBA_THRESHOLD,
            karatsuba_base_case: DEFAULT_KARATSUBA_BASE_CASE,
            toom_base_case: DEFAULT_TOOM_BASE_CASE,
        }
    }
}

impl MultiplicationConfig {
    /// Create a config with the given dispatcher thresholds and default base cases.
    pub fn new(standard_threshold: usize, karatsuba_threshold: usize) -> Self {
        Self {
            standard_threshold,
            karatsuba_threshold,
            ..Self::default()
        }
    }

    /// Replace the recursion base cases.
    pub fn with_base_cases(mut self, karatsuba_base_case: usize, toom_base_case: usize) -> Self {
        self.karatsuba_base_case = karatsuba_base_case;
        self.toom_base_case = toom_base_case;
        self
    }

    /// Validate the config.
    ///
    /// Policy: both thresholds are non-zero and ordered, and both base cases
    /// are at least `MIN_BASE_CASE`. Below that, the carry block of a half-sum
    /// keeps the recursive operand as large as its parent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.standard_threshold == 0 {
            return Err(ConfigError::ZeroThreshold {
                name: "standard_threshold",
            });
        }
        if self.karatsuba_threshold == 0 {
            return Err(ConfigError::ZeroThreshold {
                name: "karatsuba_threshold",
            });
        }
        if self.standard_threshold > self.karatsuba_threshold {
            return Err(ConfigError::ThresholdOrder {
                standard: self.standard_threshold,
                karatsuba: self.karatsuba_threshold,
            });
        }
        if self.karatsuba_base_case < MIN_BASE_CASE {
            return Err(ConfigError::BaseCaseTooSmall {
                name: "karatsuba_base_case",
                value: self.karatsuba_base_case,
            });
        }
        if self.toom_base_case < MIN_BASE_CASE {
            return Err(ConfigError::BaseCaseTooSmall {
                name: "toom_base_case",
                value: self.toom_base_case,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON config; absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Errors that can be produced by configuration validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A dispatcher threshold was zero.
    #[error("{name} must be greater than zero")]
    ZeroThreshold { name: &'static str },

    /// `standard_threshold > karatsuba_threshold`.
    #[error("standard_threshold {standard} exceeds karatsuba_threshold {karatsuba}")]
    ThresholdOrder { standard: usize, karatsuba: usize },

    /// A recursion base case was below `MIN_BASE_CASE`.
    #[error("{name} is {value}, must be at least {}", MIN_BASE_CASE)]
    BaseCaseTooSmall { name: &'static str, value: usize },

    /// The JSON text could not be parsed.
    #[error("invalid multiplication config: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_thresholds() {
        let cfg = MultiplicationConfig::default();
        assert_eq!(cfg.standard_threshold, 2_048);
        assert_eq!(cfg.karatsuba_threshold, 200_000);
        assert_eq!(cfg.karatsuba_base_case, 32);
        assert_eq!(cfg.toom_base_case, 100);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_threshold_policy() {
        let err = MultiplicationConfig::new(0, 10).validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::ZeroThreshold {
                name: "standard_threshold"
            }
        );

        let err = MultiplicationConfig::new(10, 5).validate().unwrap_err();
        match err {
            ConfigError::ThresholdOrder { standard, karatsuba } => {
                assert_eq!(standard, 10);
                assert_eq!(karatsuba, 5);
            }
            _ => panic!("unexpected error variant"),
        }

        let err = MultiplicationConfig::new(4, 8)
            .with_base_cases(3, 2)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::BaseCaseTooSmall {
                name: "toom_base_case",
                value: 2
            }
        );
        assert!(
            MultiplicationConfig::new(4, 8)
                .with_base_cases(3, 3)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let cfg = MultiplicationConfig::from_json(r#"{"standard_threshold": 16}"#).unwrap();
        assert_eq!(cfg.standard_threshold, 16);
        assert_eq!(cfg.karatsuba_threshold, 200_000);
        assert_eq!(cfg.toom_base_case, 100);
    }

    #[test]
    fn json_rejects_invalid_config() {
        let err = MultiplicationConfig::from_json(r#"{"standard_threshold": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroThreshold { .. }));

        let err = MultiplicationConfig::from_json("not json").unwrap_err();
        assert!(err.to_string().contains("invalid multiplication config"));
    }
}
