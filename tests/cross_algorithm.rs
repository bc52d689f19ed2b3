//! All three algorithms must equal the true product for operand sizes below,
//! at and above every threshold, including when the dispatcher is bypassed.

use block_bignum::definitions::BASE;
use block_bignum::{
    Algorithm, BlockNumber, MultiplicationConfig, Multiplier, multiply_karatsuba,
    multiply_standard, multiply_toom_cook,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_number(rng: &mut StdRng, blocks: usize) -> BlockNumber {
    let mut v: Vec<u64> = (0..blocks).map(|_| rng.random_range(0..BASE)).collect();
    if let Some(last) = v.last_mut() {
        *last = rng.random_range(1..BASE);
    }
    BlockNumber::try_from_blocks(v).unwrap()
}

/// Sizes straddling a small config's base cases and thresholds.
const SIZES: [usize; 12] = [1, 2, 3, 4, 5, 7, 8, 9, 16, 17, 33, 70];

fn small_config() -> MultiplicationConfig {
    MultiplicationConfig::new(8, 16).with_base_cases(4, 8)
}

#[test]
fn algorithms_agree_across_thresholds() {
    let config = small_config();
    let mut rng = StdRng::seed_from_u64(42);
    for &la in &SIZES {
        for &lb in &SIZES {
            let a = random_number(&mut rng, la);
            let b = random_number(&mut rng, lb);
            let expected = multiply_standard(&a, &b);
            assert_eq!(multiply_karatsuba(&a, &b, &config), expected, "karatsuba {la}x{lb}");
            assert_eq!(multiply_toom_cook(&a, &b, &config), expected, "toom {la}x{lb}");
        }
    }
}

#[test]
fn dispatcher_agrees_with_direct_calls() {
    let multiplier = Multiplier::new(small_config()).unwrap();
    let mut rng = StdRng::seed_from_u64(43);
    for &(la, lb) in &[(2, 3), (6, 6), (10, 10), (30, 2), (40, 45)] {
        let a = random_number(&mut rng, la);
        let b = random_number(&mut rng, lb);
        let expected = multiply_standard(&a, &b);
        assert_eq!(multiplier.multiply(&a, &b), expected);
        for algorithm in Algorithm::ALL {
            assert_eq!(multiplier.multiply_with(algorithm, &a, &b), expected);
        }
    }
}

#[test]
fn agree_with_default_base_cases_on_large_operands() {
    let config = MultiplicationConfig::default();
    let mut rng = StdRng::seed_from_u64(44);
    let a = random_number(&mut rng, 450);
    let b = random_number(&mut rng, 333);
    let expected = multiply_standard(&a, &b);
    assert_eq!(multiply_karatsuba(&a, &b, &config), expected);
    assert_eq!(multiply_toom_cook(&a, &b, &config), expected);
}

#[test]
fn worst_case_carries() {
    let config = small_config();
    for &(la, lb) in &[(17, 17), (33, 20), (70, 9)] {
        let a = BlockNumber::from_blocks(vec![BASE - 1; la]);
        let b = BlockNumber::from_blocks(vec![BASE - 1; lb]);
        let expected = multiply_standard(&a, &b);
        assert_eq!(multiply_karatsuba(&a, &b, &config), expected);
        assert_eq!(multiply_toom_cook(&a, &b, &config), expected);
    }
}

#[test]
fn sparse_operands() {
    let config = small_config();
    let mut blocks = vec![0; 64];
    blocks[0] = 1;
    blocks[21] = BASE - 1;
    blocks[63] = 12345;
    let a = BlockNumber::from_blocks(blocks);
    let b = BlockNumber::from_blocks(vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 7]);
    let expected = multiply_standard(&a, &b);
    assert_eq!(multiply_karatsuba(&a, &b, &config), expected);
    assert_eq!(multiply_toom_cook(&a, &b, &config), expected);
}

#[test]
fn multiplication_distributes_over_addition() {
    let multiplier = Multiplier::new(small_config()).unwrap();
    let mut rng = StdRng::seed_from_u64(45);
    let a = random_number(&mut rng, 40);
    let b = random_number(&mut rng, 25);
    let c = random_number(&mut rng, 31);
    for algorithm in Algorithm::ALL {
        let lhs = multiplier.multiply_with(algorithm, &a, &(&b + &c));
        let rhs = multiplier.multiply_with(algorithm, &a, &b)
            + multiplier.multiply_with(algorithm, &a, &c);
        assert_eq!(lhs, rhs, "{algorithm}");
    }
}
