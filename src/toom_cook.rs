//! Toom-Cook-3 multiplication.
//!
//! Each operand is split into three parts of `k` blocks, read as a polynomial
//! `p(x) = p0 + p1 x + p2 x^2` with `x = B^k`. Both polynomials are evaluated
//! at `{0, 1, -1, 2, inf}`, the five evaluations are multiplied pairwise, and
//! the product's five coefficients are recovered by interpolation:
//!
//! ```text
//! v0   = r(0)     v1 = r(1)     vm1 = r(-1)     v2 = r(2)     vinf = r4
//! t2   = (v2 - vm1) / 3
//! tm1  = (v1 - vm1) / 2
//! t1   = v1 - v0
//! t2   = (t2 - t1) / 2
//! t1   = t1 - tm1 - vinf        -> r2
//! t2   = t2 - 2 vinf            -> r3
//! tm1  = tm1 - t2               -> r1
//! ```
//!
//! An operand at least twice as long as the other is cut into chunks of the
//! shorter length first, as in `karatsuba`.
//!
//! Every intermediate is non-negative except `vm1`, which is carried as a
//! magnitude plus a sign. O(n^1.465). Operands at or below `toom_base_case`
//! blocks (never less than `MIN_BASE_CASE`) go to Karatsuba.

use crate::add::add_blocks;
use crate::config::MultiplicationConfig;
use crate::definitions::{self, Block, MIN_BASE_CASE};
use crate::karatsuba::{chunked_blocks, karatsuba_blocks, split_low_high};
use crate::number::BlockNumber;
use crate::sub::{abs_diff_blocks, sub_assign_blocks, sub_blocks};
use tracing::trace;

/// A magnitude with a sign, only needed for the evaluation at `-1`.
struct Signed {
    magnitude: Vec<Block>,
    negative: bool,
}

/// Splits into `(p0, p1, p2)` at multiples of `k`; missing parts are empty.
fn split_three(blocks: &[Block], k: usize) -> (&[Block], &[Block], &[Block]) {
    let (p0, rest) = split_low_high(blocks, k);
    let (p1, p2) = split_low_high(rest, k);
    (p0, p1, p2)
}

/// Evaluations of `p0 + p1 x + p2 x^2` at `1`, `-1` and `2`.
fn evaluate(p0: &[Block], p1: &[Block], p2: &[Block]) -> (Vec<Block>, Signed, Vec<Block>) {
    let p0_p2 = add_blocks(p0, p2);
    let at_one = add_blocks(&p0_p2, p1);
    let (magnitude, negative) = abs_diff_blocks(&p0_p2, p1);
    let at_two = add_blocks(
        p0,
        &add_blocks(&definitions::mul_small(p1, 2), &definitions::mul_small(p2, 4)),
    );
    (
        at_one,
        Signed {
            magnitude,
            negative,
        },
        at_two,
    )
}

/// `lhs - rhs` for a signed `rhs`, where the result is known to be non-negative.
fn sub_signed(lhs: &[Block], rhs: &Signed) -> Vec<Block> {
    if rhs.negative {
        add_blocks(lhs, &rhs.magnitude)
    } else {
        sub_blocks(lhs, &rhs.magnitude)
    }
}

/// Toom-Cook-3 product of two block slices, trimmed.
pub(crate) fn toom_cook_blocks(
    a: &[Block],
    b: &[Block],
    config: &MultiplicationConfig,
) -> Vec<Block> {
    let a = &a[..definitions::significant_len(a)];
    let b = &b[..definitions::significant_len(b)];
    if a.is_empty() || b.is_empty() {
        return vec![0];
    }
    let base_case = config.toom_base_case.max(MIN_BASE_CASE);
    if a.len() <= base_case || b.len() <= base_case {
        return karatsuba_blocks(a, b, config);
    }

    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if long.len() >= 2 * short.len() {
        return chunked_blocks(long, short, config, toom_cook_blocks);
    }

    let k = a.len().max(b.len()).div_ceil(3);
    trace!(a_len = a.len(), b_len = b.len(), k, "toom-3 split");
    let (a0, a1, a2) = split_three(a, k);
    let (b0, b1, b2) = split_three(b, k);

    let (a_one, a_minus_one, a_two) = evaluate(a0, a1, a2);
    let (b_one, b_minus_one, b_two) = evaluate(b0, b1, b2);

    let v0 = toom_cook_blocks(a0, b0, config);
    let v1 = toom_cook_blocks(&a_one, &b_one, config);
    let vm1 = Signed {
        magnitude: toom_cook_blocks(&a_minus_one.magnitude, &b_minus_one.magnitude, config),
        negative: a_minus_one.negative != b_minus_one.negative,
    };
    let v2 = toom_cook_blocks(&a_two, &b_two, config);
    let vinf = toom_cook_blocks(a2, b2, config);

    let mut t2 = definitions::div_small_exact(&sub_signed(&v2, &vm1), 3);
    let mut tm1 = definitions::div_small_exact(&sub_signed(&v1, &vm1), 2);
    let mut t1 = sub_blocks(&v1, &v0);
    sub_assign_blocks(&mut t2, &t1);
    let mut t2 = definitions::div_small_exact(&t2, 2);
    sub_assign_blocks(&mut t1, &tm1);
    sub_assign_blocks(&mut t1, &vinf);
    sub_assign_blocks(&mut t2, &definitions::mul_small(&vinf, 2));
    sub_assign_blocks(&mut tm1, &t2);

    let mut result = v0;
    result.reserve(a.len() + b.len());
    definitions::add_into(&mut result, &tm1, k);
    definitions::add_into(&mut result, &t1, 2 * k);
    definitions::add_into(&mut result, &t2, 3 * k);
    definitions::add_into(&mut result, &vinf, 4 * k);
    definitions::trim(&mut result);
    result
}

/// Toom-Cook-3 product of two numbers, recursing down to `config.toom_base_case`.
pub fn multiply_toom_cook(
    a: &BlockNumber,
    b: &BlockNumber,
    config: &MultiplicationConfig,
) -> BlockNumber {
    BlockNumber::from_blocks(toom_cook_blocks(a.blocks(), b.blocks(), config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::BASE;
    use crate::standard::multiply_standard;

    fn small_base_cases() -> MultiplicationConfig {
        MultiplicationConfig::default().with_base_cases(3, 4)
    }

    fn pattern(len: usize, seed: u64) -> BlockNumber {
        let blocks = (0..len as u64)
            .map(|i| (i.wrapping_mul(0xD1B5_4A32_D192_ED03) ^ seed) % BASE)
            .collect();
        BlockNumber::try_from_blocks(blocks).unwrap()
    }

    #[test]
    fn matches_schoolbook_for_equal_sizes() {
        let config = small_base_cases();
        for len in [5, 6, 9, 10, 31, 64] {
            let a = pattern(len, 11);
            let b = pattern(len, 12);
            assert_eq!(multiply_toom_cook(&a, &b, &config), multiply_standard(&a, &b));
        }
    }

    #[test]
    fn matches_schoolbook_for_unbalanced_sizes() {
        let config = small_base_cases();
        let a = pattern(90, 13);
        let b = pattern(6, 14);
        assert_eq!(multiply_toom_cook(&a, &b, &config), multiply_standard(&a, &b));
        assert_eq!(multiply_toom_cook(&b, &a, &config), multiply_standard(&a, &b));
    }

    #[test]
    fn negative_evaluation_at_minus_one() {
        // Middle parts dominate, so p(-1) = p0 - p1 + p2 is negative for both operands.
        let config = small_base_cases();
        let mut blocks = vec![1; 15];
        for b in &mut blocks[5..10] {
            *b = BASE - 1;
        }
        let a = BlockNumber::from_blocks(blocks.clone());
        blocks[0] = 2;
        let b = BlockNumber::from_blocks(blocks);
        assert_eq!(multiply_toom_cook(&a, &b, &config), multiply_standard(&a, &b));
    }

    #[test]
    fn mixed_sign_evaluations() {
        let config = small_base_cases();
        let mut a_blocks = vec![1; 12];
        for b in &mut a_blocks[4..8] {
            *b = BASE - 1;
        }
        let a = BlockNumber::from_blocks(a_blocks);
        let b = BlockNumber::from_blocks(vec![BASE - 1; 12]);
        assert_eq!(multiply_toom_cook(&a, &b, &config), multiply_standard(&a, &b));
    }

    #[test]
    fn all_max_blocks() {
        let config = small_base_cases();
        let a = BlockNumber::from_blocks(vec![BASE - 1; 27]);
        let p = multiply_toom_cook(&a, &a, &config);
        assert_eq!(p, multiply_standard(&a, &a));
        assert!(p.is_normalized());
    }

    #[test]
    fn zero_and_one_operands() {
        let config = small_base_cases();
        let a = pattern(40, 15);
        assert!(multiply_toom_cook(&a, &BlockNumber::zero(), &config).is_zero());
        assert_eq!(multiply_toom_cook(&BlockNumber::one(), &a, &config), a);
    }

    #[test]
    fn base_cases_below_minimum_still_terminate() {
        let config = MultiplicationConfig::default().with_base_cases(0, 0);
        let seven = BlockNumber::from(7u64);
        assert_eq!(multiply_toom_cook(&seven, &seven, &config), BlockNumber::from(49u64));

        let a = pattern(25, 16);
        let b = pattern(14, 17);
        assert_eq!(multiply_toom_cook(&a, &b, &config), multiply_standard(&a, &b));
    }

    #[test]
    fn split_three_handles_short_tail() {
        let (p0, p1, p2) = split_three(&[1, 2, 3, 4], 2);
        assert_eq!((p0, p1, p2), (&[1, 2][..], &[3, 4][..], &[][..]));
    }
}
