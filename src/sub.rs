//! Magnitude subtraction with borrow, used to recombine sub-products.
//!
//! This is crate-internal: the public surface has no subtraction or signed
//! numbers. Callers guarantee `minuend >= subtrahend`.

use crate::definitions::{self, BASE, Block};
use std::cmp::Ordering;

/// Subtracts `b` from `a` in place. Requires `a >= b` numerically.
///
/// The result is trimmed.
pub(crate) fn sub_assign_blocks(a: &mut Vec<Block>, b: &[Block]) {
    let b = &b[..definitions::significant_len(b)];
    debug_assert!(
        definitions::cmp_blocks(a, b) != Ordering::Less,
        "subtraction would underflow"
    );

    let mut borrow = 0u64;
    for i in 0..a.len() {
        let sub = b.get(i).copied().unwrap_or(0) + borrow;
        if i >= b.len() && borrow == 0 {
            break;
        }
        if a[i] >= sub {
            a[i] -= sub;
            borrow = 0;
        } else {
            a[i] = a[i] + BASE - sub;
            borrow = 1;
        }
    }
    debug_assert_eq!(borrow, 0);
    definitions::trim(a);
}

/// Returns `a - b`. Requires `a >= b` numerically.
pub(crate) fn sub_blocks(a: &[Block], b: &[Block]) -> Vec<Block> {
    let mut out = a.to_vec();
    sub_assign_blocks(&mut out, b);
    out
}

/// Returns `|a - b|` together with whether `a < b`.
pub(crate) fn abs_diff_blocks(a: &[Block], b: &[Block]) -> (Vec<Block>, bool) {
    match definitions::cmp_blocks(a, b) {
        Ordering::Less => (sub_blocks(b, a), true),
        _ => (sub_blocks(a, b), false),
    }
}
