//! Block-wise addition with carry propagation.
//!
//! Each step computes `left + right + carry` in a `u64`; with both blocks below
//! `10^18` and a carry of at most one the sum stays below `2^64` (checked by a
//! const assertion in `definitions`).

use crate::definitions::{self, BASE, Block};
use crate::number::BlockNumber;

/// Adds two block slices of arbitrary, possibly different, lengths.
///
/// A final carry block is appended only when non-zero, so canonical inputs
/// give a canonical output.
pub fn add_blocks(a: &[Block], b: &[Block]) -> Vec<Block> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut sum = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u64;

    for i in 0..short.len() {
        let s = long[i] + short[i] + carry;
        sum.push(s % BASE);
        carry = s / BASE;
    }
    for &block in &long[short.len()..] {
        let s = block + carry;
        sum.push(s % BASE);
        carry = s / BASE;
    }
    if carry != 0 {
        sum.push(carry);
    }
    if sum.is_empty() {
        sum.push(0);
    }
    sum
}

/// Adds two numbers, returning a new normalized number.
pub fn add(a: &BlockNumber, b: &BlockNumber) -> BlockNumber {
    let mut blocks = add_blocks(a.blocks(), b.blocks());
    // Non-canonical intermediates from `from_blocks` may carry high zero blocks.
    definitions::trim(&mut blocks);
    BlockNumber::from_blocks(blocks)
}

impl std::ops::Add for BlockNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        add(&self, &rhs)
    }
}

impl std::ops::Add<&BlockNumber> for &BlockNumber {
    type Output = BlockNumber;

    fn add(self, rhs: &BlockNumber) -> BlockNumber {
        add(self, rhs)
    }
}

impl std::ops::Add<&BlockNumber> for BlockNumber {
    type Output = BlockNumber;

    fn add(self, rhs: &BlockNumber) -> BlockNumber {
        add(&self, rhs)
    }
}

impl std::ops::AddAssign<&BlockNumber> for BlockNumber {
    fn add_assign(&mut self, rhs: &BlockNumber) {
        *self = add(self, rhs);
    }
}

impl std::ops::AddAssign for BlockNumber {
    fn add_assign(&mut self, rhs: Self) {
        *self = add(self, &rhs);
    }
}

impl std::iter::Sum for BlockNumber {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(BlockNumber::zero(), |acc, x| acc + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(s: &str) -> BlockNumber {
        s.parse().unwrap()
    }

    #[test]
    fn simple_add() {
        let sum = n("123456789012345678901234567890") + n("1");
        assert_eq!(sum.to_string(), "123456789012345678901234567891");
    }

    #[test]
    fn carry_across_block_boundary() {
        let sum = n("999999999999999999") + n("1");
        assert_eq!(sum.to_string(), "1000000000000000000");
        assert_eq!(sum.blocks(), &[0, 1]);
    }

    #[test]
    fn carry_runs_through_longer_operand() {
        let a = BlockNumber::from_blocks(vec![BASE - 1, BASE - 1, BASE - 1]);
        let sum = &a + &BlockNumber::one();
        assert_eq!(sum.blocks(), &[0, 0, 0, 1]);
    }

    #[test]
    fn add_identity() {
        let a = n("98765432109876543210987654321");
        assert_eq!(&a + &BlockNumber::zero(), a);
        assert_eq!(&BlockNumber::zero() + &a, a);
        assert_eq!((BlockNumber::zero() + BlockNumber::zero()).blocks(), &[0]);
    }

    #[test]
    fn add_commutativity() {
        let a = n("31415926535897932384626433832795028841971");
        let b = n("2718281828459045");
        assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn add_associativity() {
        let a = n("500000000000000000");
        let b = n("600000000000000000");
        let c = n("999999999999999999999999");
        assert_eq!((&a + &b) + &c, &a + &(&b + &c));
    }

    #[test]
    fn add_assign_and_sum() {
        let mut acc = BlockNumber::zero();
        acc += n("999999999999999999");
        acc += &BlockNumber::one();
        assert_eq!(acc.to_string(), "1000000000000000000");

        let total: BlockNumber = (1..=100u64).map(BlockNumber::from).sum();
        assert_eq!(total.to_string(), "5050");
    }

    #[test]
    fn result_is_trimmed_for_untrimmed_operands() {
        let a = BlockNumber::from_blocks(vec![1, 0, 0]);
        let sum = a + BlockNumber::one();
        assert_eq!(sum.blocks(), &[2]);
    }
}
