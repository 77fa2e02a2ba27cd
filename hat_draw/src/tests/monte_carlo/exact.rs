//! Exact reference probabilities for the Monte Carlo tests.
//!
//! Only used as ground truth; the library itself never computes these.

pub fn binomial(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        result = result * (n - i) as u128 / (i + 1) as u128;
    }
    result
}

/// P(a draw of `draw_size` from `hat` holds at least `expected`), exactly.
pub fn containment_probability(hat: &[(&str, usize)], expected: &[(&str, usize)], draw_size: usize) -> f64 {
    let total: usize = hat.iter().map(|(_, count)| count).sum();
    let need = |label: &str| {
        expected.iter().filter(|(l, _)| *l == label).map(|(_, c)| *c).sum::<usize>()
    };
    // Labels missing from the hat can never be matched
    if expected.iter().any(|(label, count)| *count > 0 && !hat.iter().any(|(l, _)| l == label)) {
        return 0.0;
    }
    if draw_size >= total {
        return if hat.iter().all(|(label, count)| *count >= need(*label)) { 1.0 } else { 0.0 };
    }

    let minimums: Vec<(usize, usize)> = hat.iter().map(|(label, count)| (*count, need(*label))).collect();
    let favourable = count_ways(&minimums, draw_size);
    favourable as f64 / binomial(total, draw_size) as f64
}

// Ways to pick `remaining` balls so each (count, minimum) group gets >= minimum
fn count_ways(groups: &[(usize, usize)], remaining: usize) -> u128 {
    match groups.split_first() {
        None => if remaining == 0 { 1 } else { 0 },
        Some((&(count, minimum), rest)) => (minimum..=count.min(remaining))
            .map(|k| binomial(count, k) * count_ways(rest, remaining - k))
            .sum(),
    }
}

/// P(exactly `k` balls of a group of size `group` in a draw of `draw_size` from `total`).
pub fn hypergeometric_pmf(total: usize, group: usize, draw_size: usize, k: usize) -> f64 {
    if k > group || draw_size < k || draw_size - k > total - group {
        return 0.0;
    }
    (binomial(group, k) * binomial(total - group, draw_size - k)) as f64
        / binomial(total, draw_size) as f64
}

#[test]
fn test_binomial_values() {
    assert_eq!(binomial(13, 5), 1287);
    assert_eq!(binomial(11, 4), 330);
    assert_eq!(binomial(6, 0), 1);
    assert_eq!(binomial(3, 4), 0);
}

#[test]
fn test_reference_scenario_is_471_over_1287() {
    let p = containment_probability(
        &[("black", 6), ("red", 4), ("green", 3)],
        &[("red", 2), ("green", 1)],
        5,
    );
    assert!((p - 471.0 / 1287.0).abs() < 1e-12, "got {}", p);
}

#[test]
fn test_pmf_sums_to_one() {
    let total: f64 = (0..=4).map(|k| hypergeometric_pmf(13, 4, 5, k)).sum();
    assert!((total - 1.0).abs() < 1e-12);
}
