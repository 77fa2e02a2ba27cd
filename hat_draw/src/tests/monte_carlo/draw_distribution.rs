//! Draw Distribution Tests
//!
//! A single draw without replacement should produce each per-color count
//! with hypergeometric frequency.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use super::exact::hypergeometric_pmf;
use crate::{Hat, Multiset};

#[test]
fn test_red_count_matches_hypergeometric() {
    const SAMPLES: usize = 200_000;
    let template = Hat::new([("black", 6), ("red", 4), ("green", 3)]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(99999);
    let mut red_counts = [0usize; 5];

    for _ in 0..SAMPLES {
        let mut hat = template.clone();
        let drawn = hat.draw_with_rng(5, &mut rng);
        red_counts[Multiset::from_labels(&drawn).count("red")] += 1;
    }

    println!("\nRed | Expected | Actual | Count");
    println!("{}", "-".repeat(40));

    let mut max_error: f64 = 0.0;
    for (k, &count) in red_counts.iter().enumerate() {
        let expected = hypergeometric_pmf(13, 4, 5, k);
        let actual = count as f64 / SAMPLES as f64;
        max_error = max_error.max((actual - expected).abs());
        println!("{:>3} | {:>8.5} | {:>6.5} | {}", k, expected, actual, count);
    }

    assert!(max_error < 0.005, "max frequency error {}", max_error);
}

#[test]
fn test_every_subset_equally_likely() {
    // 4 distinct balls, draw 2: 6 unordered pairs at 1/6 each
    const SAMPLES: usize = 60_000;
    let template = Hat::new([("a", 1), ("b", 1), ("c", 1), ("d", 1)]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(31337);
    let mut pairs = Multiset::new();

    for _ in 0..SAMPLES {
        let mut hat = template.clone();
        let mut drawn = hat.draw_with_rng(2, &mut rng);
        drawn.sort();
        pairs.insert(&drawn.concat(), 1).unwrap();
    }

    assert_eq!(pairs.iter().count(), 6);
    for (pair, count) in pairs.iter() {
        let freq = count as f64 / SAMPLES as f64;
        assert!((freq - 1.0 / 6.0).abs() < 0.01, "pair {} frequency {}", pair, freq);
    }
}
