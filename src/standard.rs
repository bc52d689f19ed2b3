//! Schoolbook multiplication.
//!
//! Implements the full block-grid product with `u128` intermediates. A step
//! computes `a[i] * b[j] + acc[i + j] + carry`, at most `(BASE - 1)^2 + 2 (BASE - 1)`,
//! which exceeds 64 bits but fits comfortably in 128.
//!
//! O(n·m) in block counts; used directly for small operands and as the
//! terminal case of `karatsuba`.

use crate::definitions::{self, BASE, Block};
use crate::number::BlockNumber;

/// Full product of two block slices, trimmed.
pub(crate) fn standard_blocks(a: &[Block], b: &[Block]) -> Vec<Block> {
    let a = &a[..definitions::significant_len(a)];
    let b = &b[..definitions::significant_len(b)];
    if a.is_empty() || b.is_empty() {
        return vec![0];
    }
    if a == [1] {
        return b.to_vec();
    }
    if b == [1] {
        return a.to_vec();
    }

    let base = BASE as u128;
    let mut acc = vec![0 as Block; a.len() + b.len()];

    for (i, &multiplier) in a.iter().enumerate() {
        // Sparse operands: a zero block contributes nothing.
        if multiplier == 0 {
            continue;
        }
        let m = multiplier as u128;
        let mut carry = 0u128;
        for (j, &bj) in b.iter().enumerate() {
            let prod = m * bj as u128 + acc[i + j] as u128 + carry;
            acc[i + j] = (prod % base) as Block;
            carry = prod / base;
        }
        // acc[i + b.len()] is untouched by earlier rows, so it is zero here.
        acc[i + b.len()] += carry as Block;
    }

    definitions::trim(&mut acc);
    acc
}

/// Schoolbook product of two numbers.
///
/// Early exits: a zero operand yields zero, and an operand equal to one returns
/// the other operand unchanged.
pub fn multiply_standard(a: &BlockNumber, b: &BlockNumber) -> BlockNumber {
    if a.is_zero() || b.is_zero() {
        return BlockNumber::zero();
    }
    if a.is_one() {
        return b.clone();
    }
    if b.is_one() {
        return a.clone();
    }
    BlockNumber::from_blocks(standard_blocks(a.blocks(), b.blocks()))
}
