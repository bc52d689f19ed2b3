//! Radix constants and slice-level block kernels.
//!
//! This module centralizes the fixed representation parameters so they can be
//! imported by the concrete types (`number`, `add`, the multiplication
//! algorithms, etc.).
//!
//! Contents:
//! - `BASE`, `BLOCK_DIGITS` and the default dispatcher thresholds
//! - `trim`, `significant_len`, `cmp_blocks`: normalization and ordering
//! - `add_into`: offset accumulation used to recombine sub-products
//! - `shift_blocks`: multiplication by `BASE^n`
//! - `mul_small`, `div_small_exact`: the small-constant steps of Toom-3
//!
//! All kernels take little-endian block slices (least-significant block
//! first) whose blocks are already in `[0, BASE)`.

use std::cmp::Ordering;

/// One fixed-radix digit group.
pub type Block = u64;

/// Decimal digits stored per block.
pub const BLOCK_DIGITS: usize = 18;

/// Radix of the representation, `10^BLOCK_DIGITS`.
pub const BASE: Block = 1_000_000_000_000_000_000;

/// Default block count up to which the dispatcher picks schoolbook multiplication.
pub const DEFAULT_STANDARD_THRESHOLD: usize = 2_048;
/// Default block count up to which the dispatcher picks Karatsuba.
pub const DEFAULT_KARATSUBA_THRESHOLD: usize = 200_000;
/// Operand size at or below which Karatsuba defers to schoolbook.
pub const DEFAULT_KARATSUBA_BASE_CASE: usize = 32;
/// Operand size at or below which Toom-Cook-3 defers to Karatsuba.
pub const DEFAULT_TOOM_BASE_CASE: usize = 100;
/// Smallest base case for which both recursive algorithms always shrink their operands.
pub const MIN_BASE_CASE: usize = 3;

const _: () = assert!(BASE == 10u64.pow(BLOCK_DIGITS as u32));
// Block addition: (BASE - 1) + (BASE - 1) + 1 must fit in a u64.
const _: () = assert!(2 * (BASE as u128 - 1) + 1 <= u64::MAX as u128);
// Block product step: (BASE - 1)^2 + accumulator + carry must fit in a u128.
const _: () =
    assert!((BASE as u128 - 1) * (BASE as u128 - 1) + 2 * (BASE as u128 - 1) <= u128::MAX);

/// Removes most-significant zero blocks, keeping a single `0` for zero.
///
/// An empty vector becomes `[0]`.
pub fn trim(blocks: &mut Vec<Block>) {
    while blocks.len() > 1 && blocks.last() == Some(&0) {
        blocks.pop();
    }
    if blocks.is_empty() {
        blocks.push(0);
    }
}

/// Length of `blocks` without its most-significant zero blocks (0 for zero).
pub fn significant_len(blocks: &[Block]) -> usize {
    blocks.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1)
}

/// True if every block is zero (or the slice is empty).
pub fn is_zero_slice(blocks: &[Block]) -> bool {
    significant_len(blocks) == 0
}

/// Numeric comparison of two block slices, ignoring most-significant zero blocks.
pub fn cmp_blocks(a: &[Block], b: &[Block]) -> Ordering {
    let a = &a[..significant_len(a)];
    let b = &b[..significant_len(b)];
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// Adds `src * BASE^offset` into `acc`, growing `acc` as needed.
pub fn add_into(acc: &mut Vec<Block>, src: &[Block], offset: usize) {
    let src = &src[..significant_len(src)];
    if src.is_empty() {
        return;
    }
    if acc.len() < offset + src.len() {
        acc.resize(offset + src.len(), 0);
    }

    let mut carry = 0u64;
    for (i, &s) in src.iter().enumerate() {
        let sum = acc[offset + i] + s + carry;
        acc[offset + i] = sum % BASE;
        carry = sum / BASE;
    }

    let mut i = offset + src.len();
    while carry != 0 {
        if i == acc.len() {
            acc.push(carry);
            break;
        }
        let sum = acc[i] + carry;
        acc[i] = sum % BASE;
        carry = sum / BASE;
        i += 1;
    }
}

/// Multiplies by `BASE^shift` by prepending zero blocks. Zero stays `[0]`.
pub fn shift_blocks(blocks: &[Block], shift: usize) -> Vec<Block> {
    let len = significant_len(blocks);
    if len == 0 {
        return vec![0];
    }
    let mut out = Vec::with_capacity(shift + len);
    out.resize(shift, 0);
    out.extend_from_slice(&blocks[..len]);
    out
}

/// Multiplies a block slice by a small factor `k < BASE`.
pub fn mul_small(blocks: &[Block], k: Block) -> Vec<Block> {
    debug_assert!(k < BASE);
    let mut out = Vec::with_capacity(blocks.len() + 1);
    let mut carry = 0u128;
    for &b in blocks {
        let prod = b as u128 * k as u128 + carry;
        out.push((prod % BASE as u128) as Block);
        carry = prod / BASE as u128;
    }
    if carry != 0 {
        out.push(carry as Block);
    }
    trim(&mut out);
    out
}

/// Divides a block slice by a small divisor known to divide it exactly.
///
/// Long division from the most-significant block; the remainder must be zero.
pub fn div_small_exact(blocks: &[Block], d: Block) -> Vec<Block> {
    debug_assert!(d != 0 && d < BASE);
    let mut out = vec![0; blocks.len()];
    let mut rem = 0u128;
    for (i, &b) in blocks.iter().enumerate().rev() {
        let cur = rem * BASE as u128 + b as u128;
        out[i] = (cur / d as u128) as Block;
        rem = cur % d as u128;
    }
    debug_assert_eq!(rem, 0, "inexact division by {d}");
    trim(&mut out);
    out
}
