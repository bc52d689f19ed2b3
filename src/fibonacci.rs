//! Fibonacci numbers built purely on the public `+` and `*` operations.
//!
//! Two methods:
//! - `fibonacci_iterative`: the naive recurrence, one addition per step.
//! - `fibonacci_matrix`: powers of `[[1, 1], [1, 0]]`, which equal
//!   `[[F(k+1), F(k)], [F(k), F(k-1)]]`. The exponent is consumed one bit at a
//!   time, squaring for each bit and stepping by one for each set bit, so
//!   F(n) costs O(log n) multiplications of growing size.

use crate::multiplier::Multiplier;
use crate::number::BlockNumber;

/// The symmetric matrix `[[next, current], [current, previous]]`
/// = `[[F(k+1), F(k)], [F(k), F(k-1)]]`.
#[derive(Clone, Debug, PartialEq, Eq)]
struct FibMatrix {
    next: BlockNumber,
    current: BlockNumber,
    previous: BlockNumber,
}

impl FibMatrix {
    /// k = 0, i.e. the identity matrix (F(-1) = 1).
    fn identity() -> Self {
        Self {
            next: BlockNumber::one(),
            current: BlockNumber::zero(),
            previous: BlockNumber::one(),
        }
    }

    /// k -> 2k. The off-diagonal entries are equal, which saves one product.
    fn square(&self, multiplier: &Multiplier) -> Self {
        let cross = multiplier.multiply(&self.current, &self.current);
        let next = multiplier.multiply(&self.next, &self.next) + &cross;
        let current = multiplier.multiply(&self.next, &self.current)
            + multiplier.multiply(&self.current, &self.previous);
        let previous = cross + multiplier.multiply(&self.previous, &self.previous);
        Self {
            next,
            current,
            previous,
        }
    }

    /// k -> k + 1, multiplying by `[[1, 1], [1, 0]]`.
    fn step(self) -> Self {
        Self {
            next: &self.next + &self.current,
            current: self.next,
            previous: self.current,
        }
    }
}

/// F(n) by the recurrence F(k+1) = F(k) + F(k-1).
pub fn fibonacci_iterative(n: u64) -> BlockNumber {
    let mut previous = BlockNumber::zero();
    let mut current = BlockNumber::one();
    if n == 0 {
        return previous;
    }
    for _ in 1..n {
        let next = &previous + &current;
        previous = std::mem::replace(&mut current, next);
    }
    current
}

/// F(n) by matrix exponentiation with the default multiplier.
pub fn fibonacci_matrix(n: u64) -> BlockNumber {
    fibonacci_matrix_with(n, &Multiplier::default())
}

/// F(n) by matrix exponentiation, multiplying with `multiplier`.
pub fn fibonacci_matrix_with(n: u64, multiplier: &Multiplier) -> BlockNumber {
    let mut m = FibMatrix::identity();
    for bit in (0..u64::BITS - n.leading_zeros()).rev() {
        m = m.square(multiplier);
        if (n >> bit) & 1 == 1 {
            m = m.step();
        }
    }
    m.current
}

/// The first `count` Fibonacci numbers, starting at F(0).
pub fn fibonacci_sequence(count: usize) -> Vec<BlockNumber> {
    let mut out = Vec::with_capacity(count);
    let mut previous = BlockNumber::zero();
    let mut current = BlockNumber::one();
    for _ in 0..count {
        let next = &previous + &current;
        out.push(std::mem::replace(&mut previous, std::mem::replace(&mut current, next)));
    }
    out
}
