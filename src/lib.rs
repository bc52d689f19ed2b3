//! block-bignum crate library entry point.
//!
//! This crate provides arbitrary-precision non-negative integers stored as
//! little-endian blocks in radix `10^18`, with exact addition and a
//! multiplication dispatcher over three algorithms.
//!
//! Modules:
//! - `definitions`: radix constants, default thresholds and slice-level block kernels.
//! - `number`: the `BlockNumber` value type (decimal parsing/rendering, accessors).
//! - `add`: block-wise addition with carry.
//! - `standard`, `karatsuba`, `toom_cook`: the multiplication algorithms.
//! - `config`, `multiplier`: thresholds and the size-based `Multiplier`.
//! - `serde_decimal`: serde support as decimal strings.
//! - `fibonacci`: Fibonacci numbers computed with the public operations.
//!
//! ```
//! use block_bignum::BlockNumber;
//!
//! let a: BlockNumber = "999999999999999999".parse().unwrap();
//! let b = &a + &BlockNumber::one();
//! assert_eq!(b.to_string(), "1000000000000000000");
//! assert_eq!((&b * &b).digit_count(), 37);
//! ```

pub mod definitions;
pub mod number;
pub mod add;
mod sub;
pub mod standard;
pub mod karatsuba;
pub mod toom_cook;
pub mod config;
pub mod multiplier;
pub mod serde_decimal;
pub mod fibonacci;

pub use config::{ConfigError, MultiplicationConfig};
pub use karatsuba::multiply_karatsuba;
pub use multiplier::{Algorithm, Multiplier};
pub use number::{BlockNumber, NumberError};
pub use standard::multiply_standard;
pub use toom_cook::multiply_toom_cook;
