//! Multiplication strategy selection.
//!
//! `Multiplier` owns a validated `MultiplicationConfig` and picks one of the
//! three `Algorithm`s from the operands' block counts:
//!
//! - `Standard` if `max <= standard_threshold` or `total <= standard_threshold`
//! - `Karatsuba` if `max <= karatsuba_threshold` or `total <= karatsuba_threshold`
//! - `ToomCook` otherwise
//!
//! Checking `max` as well as `total` keeps a huge-times-tiny product on the
//! cheaper algorithm. `impl Mul for BlockNumber` uses the default thresholds.

use crate::config::{ConfigError, MultiplicationConfig};
use crate::karatsuba::multiply_karatsuba;
use crate::number::BlockNumber;
use crate::standard::multiply_standard;
use crate::toom_cook::multiply_toom_cook;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// The interchangeable multiplication algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Schoolbook, O(n·m).
    Standard,
    /// Karatsuba, O(n^1.585).
    Karatsuba,
    /// Toom-Cook-3, O(n^1.465).
    ToomCook,
}

impl Algorithm {
    /// All variants, cheapest first.
    pub const ALL: [Algorithm; 3] =
        [Algorithm::Standard, Algorithm::Karatsuba, Algorithm::ToomCook];

    /// Runs this algorithm directly, bypassing selection.
    ///
    /// `config` need not be validated; base cases below `MIN_BASE_CASE` are raised to it.
    pub fn multiply(
        self,
        a: &BlockNumber,
        b: &BlockNumber,
        config: &MultiplicationConfig,
    ) -> BlockNumber {
        match self {
            Algorithm::Standard => multiply_standard(a, b),
            Algorithm::Karatsuba => multiply_karatsuba(a, b, config),
            Algorithm::ToomCook => multiply_toom_cook(a, b, config),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Standard => "standard",
            Algorithm::Karatsuba => "karatsuba",
            Algorithm::ToomCook => "toom-cook-3",
        };
        f.write_str(name)
    }
}

/// Size-threshold dispatcher over the multiplication algorithms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Multiplier {
    config: MultiplicationConfig,
}

impl Multiplier {
    /// Create a multiplier after validating `config`.
    pub fn new(config: MultiplicationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The thresholds in use.
    pub fn config(&self) -> &MultiplicationConfig {
        &self.config
    }

    /// Chooses an algorithm for operands of `size1` and `size2` blocks.
    pub fn select(&self, size1: usize, size2: usize) -> Algorithm {
        let total = size1 + size2;
        let bound = size1.max(size2);
        let cfg = &self.config;

        if bound <= cfg.standard_threshold || total <= cfg.standard_threshold {
            Algorithm::Standard
        } else if bound <= cfg.karatsuba_threshold || total <= cfg.karatsuba_threshold {
            Algorithm::Karatsuba
        } else {
            Algorithm::ToomCook
        }
    }

    /// Multiplies with the algorithm chosen by `select`.
    pub fn multiply(&self, a: &BlockNumber, b: &BlockNumber) -> BlockNumber {
        let algorithm = self.select(a.block_count(), b.block_count());
        debug!(
            size1 = a.block_count(),
            size2 = b.block_count(),
            %algorithm,
            "selected multiplication algorithm"
        );
        algorithm.multiply(a, b, &self.config)
    }

    /// Multiplies with an explicit algorithm, bypassing selection.
    pub fn multiply_with(
        &self,
        algorithm: Algorithm,
        a: &BlockNumber,
        b: &BlockNumber,
    ) -> BlockNumber {
        algorithm.multiply(a, b, &self.config)
    }
}

impl std::ops::Mul for BlockNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Multiplier::default().multiply(&self, &rhs)
    }
}

impl std::ops::Mul<&BlockNumber> for &BlockNumber {
    type Output = BlockNumber;

    fn mul(self, rhs: &BlockNumber) -> BlockNumber {
        Multiplier::default().multiply(self, rhs)
    }
}

impl std::ops::Mul<&BlockNumber> for BlockNumber {
    type Output = BlockNumber;

    fn mul(self, rhs: &BlockNumber) -> BlockNumber {
        Multiplier::default().multiply(&self, rhs)
    }
}

impl std::ops::MulAssign<&BlockNumber> for BlockNumber {
    fn mul_assign(&mut self, rhs: &BlockNumber) {
        *self = Multiplier::default().multiply(self, rhs);
    }
}

impl std::ops::MulAssign for BlockNumber {
    fn mul_assign(&mut self, rhs: Self) {
        *self = Multiplier::default().multiply(self, &rhs);
    }
}

impl std::iter::Product for BlockNumber {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(BlockNumber::one(), |acc, x| acc * x)
    }
}
