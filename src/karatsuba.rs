//! Karatsuba multiplication.
//!
//! Splits both operands at `split` blocks into low and high halves and forms
//! three recursive products:
//!
//! ```text
//! z0 = lo_a * lo_b
//! z2 = hi_a * hi_b
//! z1 = (lo_a + hi_a) * (lo_b + hi_b)
//! a * b = z2 * B^(2 split) + (z1 - z0 - z2) * B^split + z0
//! ```
//!
//! The split point is half the longer operand, bounded by the shorter
//! operand's length, so unbalanced operands are not padded. When one operand
//! is at least twice as long as the other, the long one is cut into chunks of
//! the short one's length and each chunk product is accumulated at its block
//! offset, keeping the recursion depth logarithmic. A zero high half skips its
//! product. Operands at or below `karatsuba_base_case` blocks (never less than
//! `MIN_BASE_CASE`) go to schoolbook. O(n^1.585).

use crate::add::add_blocks;
use crate::config::MultiplicationConfig;
use crate::definitions::{self, Block, MIN_BASE_CASE};
use crate::number::BlockNumber;
use crate::standard::standard_blocks;
use crate::sub::sub_assign_blocks;
use tracing::trace;

/// Splits `blocks` into `(low, high)` at `at`; `high` is empty when `at` is past the end.
pub(crate) fn split_low_high(blocks: &[Block], at: usize) -> (&[Block], &[Block]) {
    blocks.split_at(at.min(blocks.len()))
}

/// Karatsuba product of two block slices, trimmed.
pub(crate) fn karatsuba_blocks(
    a: &[Block],
    b: &[Block],
    config: &MultiplicationConfig,
) -> Vec<Block> {
    let a = &a[..definitions::significant_len(a)];
    let b = &b[..definitions::significant_len(b)];
    if a.is_empty() || b.is_empty() {
        return vec![0];
    }
    let base_case = config.karatsuba_base_case.max(MIN_BASE_CASE);
    if a.len() <= base_case || b.len() <= base_case {
        return standard_blocks(a, b);
    }

    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if long.len() >= 2 * short.len() {
        return chunked_blocks(long, short, config, karatsuba_blocks);
    }

    let split = a.len().max(b.len()).div_ceil(2).min(a.len().min(b.len()));
    let (a_lo, a_hi) = split_low_high(a, split);
    let (b_lo, b_hi) = split_low_high(b, split);
    let a_hi_zero = definitions::is_zero_slice(a_hi);
    let b_hi_zero = definitions::is_zero_slice(b_hi);

    if a_hi_zero && b_hi_zero {
        return karatsuba_blocks(a_lo, b_lo, config);
    }
    trace!(a_len = a.len(), b_len = b.len(), split, "karatsuba split");

    let a_sum = add_blocks(a_lo, a_hi);
    let b_sum = add_blocks(b_lo, b_hi);
    let skip_high = a_hi_zero || b_hi_zero;
    let (z0, z1, z2) = sub_products(a_lo, b_lo, a_hi, b_hi, &a_sum, &b_sum, skip_high, config);

    let mut middle = z1;
    sub_assign_blocks(&mut middle, &z0);
    sub_assign_blocks(&mut middle, &z2);

    let mut result = z0;
    result.reserve(a.len() + b.len());
    definitions::add_into(&mut result, &middle, split);
    definitions::add_into(&mut result, &z2, 2 * split);
    definitions::trim(&mut result);
    result
}

/// Long times short: each `short.len()`-block chunk of `long` times `short`
/// with `multiply`, added in at the chunk's offset.
pub(crate) fn chunked_blocks(
    long: &[Block],
    short: &[Block],
    config: &MultiplicationConfig,
    multiply: fn(&[Block], &[Block], &MultiplicationConfig) -> Vec<Block>,
) -> Vec<Block> {
    trace!(long_len = long.len(), short_len = short.len(), "chunked product");
    let width = short.len();
    let mut result = vec![0; long.len() + width];
    for (i, chunk) in long.chunks(width).enumerate() {
        let product = multiply(chunk, short, config);
        definitions::add_into(&mut result, &product, i * width);
    }
    definitions::trim(&mut result);
    result
}

#[cfg(not(feature = "parallel"))]
#[allow(clippy::too_many_arguments)]
fn sub_products(
    a_lo: &[Block],
    b_lo: &[Block],
    a_hi: &[Block],
    b_hi: &[Block],
    a_sum: &[Block],
    b_sum: &[Block],
    skip_high: bool,
    config: &MultiplicationConfig,
) -> (Vec<Block>, Vec<Block>, Vec<Block>) {
    let z0 = karatsuba_blocks(a_lo, b_lo, config);
    let z2 = if skip_high { vec![0] } else { karatsuba_blocks(a_hi, b_hi, config) };
    let z1 = karatsuba_blocks(a_sum, b_sum, config);
    (z0, z1, z2)
}

#[cfg(feature = "parallel")]
#[allow(clippy::too_many_arguments)]
fn sub_products(
    a_lo: &[Block],
    b_lo: &[Block],
    a_hi: &[Block],
    b_hi: &[Block],
    a_sum: &[Block],
    b_sum: &[Block],
    skip_high: bool,
    config: &MultiplicationConfig,
) -> (Vec<Block>, Vec<Block>, Vec<Block>) {
    let ((z0, z2), z1) = rayon::join(
        || {
            rayon::join(
                || karatsuba_blocks(a_lo, b_lo, config),
                || if skip_high { vec![0] } else { karatsuba_blocks(a_hi, b_hi, config) },
            )
        },
        || karatsuba_blocks(a_sum, b_sum, config),
    );
    (z0, z1, z2)
}

/// Karatsuba product of two numbers, recursing down to `config.karatsuba_base_case`.
pub fn multiply_karatsuba(
    a: &BlockNumber,
    b: &BlockNumber,
    config: &MultiplicationConfig,
) -> BlockNumber {
    BlockNumber::from_blocks(karatsuba_blocks(a.blocks(), b.blocks(), config))
}
