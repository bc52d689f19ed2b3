//! The block number type: a non-negative integer in radix `10^18` blocks.
//!
//! `BlockNumber` owns a little-endian `Vec<u64>` of blocks. Values built by
//! `parse`, `try_from_blocks` and the arithmetic operators are always in
//! canonical form: every block below `BASE`, no most-significant zero blocks,
//! and zero stored as the single block `[0]`.
//!
//! `from_blocks` deliberately skips normalization so algorithm steps can wrap
//! intermediates; callers of that constructor are responsible for trimming.

use crate::definitions::{self, BASE, BLOCK_DIGITS, Block};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use thiserror::Error;

/// Arbitrary-precision non-negative integer stored as radix-`10^18` blocks.
#[derive(Clone, Debug)]
pub struct BlockNumber {
    /// Blocks in little-endian order; `blocks[0]` is least significant.
    blocks: Vec<Block>,
}

/// Errors produced when building or rendering a `BlockNumber`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumberError {
    /// Decimal input was empty or contained a non-digit character.
    #[error("invalid decimal number {input:?}: {reason}")]
    InvalidFormat { input: String, reason: String },

    /// A block sequence was empty where at least one block is required.
    #[error("block sequence is empty")]
    EmptyBlocks,

    /// A block was not below the radix.
    #[error("block {index} has value {value}, expected less than {}", BASE)]
    BlockOutOfRange { index: usize, value: Block },
}

impl BlockNumber {
    /// Zero, stored as the single block `[0]`.
    pub fn zero() -> Self {
        Self { blocks: vec![0] }
    }

    /// One.
    pub fn one() -> Self {
        Self { blocks: vec![1] }
    }

    /// Parses unsigned decimal text.
    ///
    /// Digits are grouped into 18-digit blocks from the least-significant end
    /// and the result is normalized, so leading zeros in the text are dropped
    /// and any all-zero input yields `[0]`.
    pub fn parse(text: &str) -> Result<Self, NumberError> {
        if text.is_empty() {
            return Err(NumberError::InvalidFormat {
                input: String::new(),
                reason: "empty string".to_string(),
            });
        }
        if let Some(position) = text.bytes().position(|b| !b.is_ascii_digit()) {
            return Err(NumberError::InvalidFormat {
                input: text.to_string(),
                reason: format!("non-digit character at byte {position}"),
            });
        }

        let bytes = text.as_bytes();
        let mut blocks = Vec::with_capacity(bytes.len().div_ceil(BLOCK_DIGITS));
        for chunk in bytes.rchunks(BLOCK_DIGITS) {
            let block = chunk
                .iter()
                .fold(0u64, |acc, &d| acc * 10 + u64::from(d - b'0'));
            blocks.push(block);
        }
        definitions::trim(&mut blocks);
        Ok(Self { blocks })
    }

    /// Wraps a caller-provided block sequence as-is, without normalization.
    ///
    /// The sequence must not be empty and every block must be below `BASE`;
    /// use `try_from_blocks` when those are not already guaranteed.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Validates a block sequence and returns it in canonical form.
    pub fn try_from_blocks(mut blocks: Vec<Block>) -> Result<Self, NumberError> {
        if blocks.is_empty() {
            return Err(NumberError::EmptyBlocks);
        }
        if let Some((index, &value)) = blocks.iter().enumerate().find(|(_, b)| **b >= BASE) {
            return Err(NumberError::BlockOutOfRange { index, value });
        }
        definitions::trim(&mut blocks);
        Ok(Self { blocks })
    }

    /// Block view, least-significant first.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Consumes the number and returns its blocks.
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    /// Number of stored blocks. Dispatcher decisions are made on this, not on digits.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Radix shared by every instance.
    pub fn base(&self) -> Block {
        BASE
    }

    /// Decimal digits per block.
    pub fn block_digits(&self) -> usize {
        BLOCK_DIGITS
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        definitions::is_zero_slice(&self.blocks)
    }

    /// Check if exactly the canonical one-block value `1`.
    pub fn is_one(&self) -> bool {
        self.blocks.len() == 1 && self.blocks[0] == 1
    }

    /// True if the block sequence is non-empty, in range and trimmed.
    pub fn is_normalized(&self) -> bool {
        match self.blocks.last() {
            None => false,
            Some(&last) => {
                (last != 0 || self.blocks.len() == 1) && self.blocks.iter().all(|&b| b < BASE)
            }
        }
    }

    /// Renders canonical decimal text, or `EmptyBlocks` for an empty sequence.
    pub fn try_to_decimal_string(&self) -> Result<String, NumberError> {
        let (most, rest) = self.blocks.split_last().ok_or(NumberError::EmptyBlocks)?;
        let mut out = String::with_capacity(20 + rest.len() * BLOCK_DIGITS);
        out.push_str(&most.to_string());
        for block in rest.iter().rev() {
            out.push_str(&format!("{block:0width$}", width = BLOCK_DIGITS));
        }
        Ok(out)
    }

    /// Renders canonical decimal text.
    ///
    /// The most-significant block is unpadded; every other block is padded to
    /// 18 digits. An empty block sequence (only reachable by misusing
    /// `from_blocks`) trips a debug assertion and renders as `"0"` otherwise.
    pub fn to_decimal_string(&self) -> String {
        debug_assert!(!self.blocks.is_empty(), "rendering an empty block sequence");
        self.try_to_decimal_string().unwrap_or_else(|_| "0".to_string())
    }

    /// Length of the rendered decimal string.
    pub fn digit_count(&self) -> usize {
        match self.blocks.split_last() {
            None => 0,
            Some((most, rest)) => decimal_len(*most) + rest.len() * BLOCK_DIGITS,
        }
    }
}

fn decimal_len(mut value: Block) -> usize {
    let mut len = 1;
    while value >= 10 {
        value /= 10;
        len += 1;
    }
    len
}

impl Default for BlockNumber {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for BlockNumber {
    fn from(value: u64) -> Self {
        let mut blocks = vec![value % BASE];
        if value >= BASE {
            blocks.push(value / BASE);
        }
        Self { blocks }
    }
}

impl FromStr for BlockNumber {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Vec<Block>> for BlockNumber {
    type Error = NumberError;

    fn try_from(blocks: Vec<Block>) -> Result<Self, Self::Error> {
        Self::try_from_blocks(blocks)
    }
}

impl fmt::Display for BlockNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_decimal_string())
    }
}

impl PartialEq for BlockNumber {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BlockNumber {}

impl Hash for BlockNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.blocks[..definitions::significant_len(&self.blocks)].hash(state);
    }
}

impl PartialOrd for BlockNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BlockNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        definitions::cmp_blocks(&self.blocks, &other.blocks)
    }
}
