use crate::error::HatError;
use crate::hat::Hat;
use crate::multiset::Multiset;
use crate::seed::trial_rng;
use crate::types::{ExperimentConfig, ExperimentReport};
use rand::Rng;
use rayon::prelude::*;

// =============================================================================
// TRIAL
// =============================================================================

// One trial: draw from a private copy of the hat, never from the template
fn run_trial<R: Rng>(hat: &Hat, target: &Multiset, draw_size: usize, rng: &mut R) -> bool {
    let mut hat_copy = hat.clone();
    let drawn = hat_copy.draw_with_rng(draw_size, rng);
    target.is_contained_in(&drawn)
}

fn check_trials(num_trials: usize) -> Result<(), HatError> {
    if num_trials == 0 {
        return Err(HatError::ZeroTrials);
    }
    Ok(())
}

fn success_ratio(successes: usize, num_trials: usize) -> f64 {
    successes as f64 / num_trials as f64
}

// Serial tally over a single caller-supplied RNG
fn count_successes<R: Rng>(hat: &Hat, target: &Multiset, draw_size: usize, num_trials: usize, rng: &mut R) -> usize {
    (0..num_trials)
        .filter(|_| run_trial(hat, target, draw_size, rng))
        .count()
}

// Parallel tally, one thread-local RNG per rayon worker
fn count_successes_parallel(hat: &Hat, target: &Multiset, draw_size: usize, num_trials: usize) -> usize {
    (0..num_trials)
        .into_par_iter()
        .map_init(rand::thread_rng, |rng, _| run_trial(hat, target, draw_size, rng))
        .filter(|&hit| hit)
        .count()
}

// Seeded tally: each trial gets its own RNG keyed by trial index
fn count_successes_seeded(
    hat: &Hat,
    target: &Multiset,
    draw_size: usize,
    num_trials: usize,
    seed: u64,
    parallel: bool,
) -> usize {
    let trial = |i: usize| run_trial(hat, target, draw_size, &mut trial_rng(seed, i as u64));
    if parallel {
        (0..num_trials).into_par_iter().filter(|&i| trial(i)).count()
    } else {
        (0..num_trials).filter(|&i| trial(i)).count()
    }
}

// =============================================================================
// EXPERIMENTS
// =============================================================================

/// Estimates the chance that drawing `draw_size` balls from `hat` yields at
/// least the balls in `expected`.
///
/// Runs `num_trials` independent trials and returns the fraction that
/// succeeded. `hat` itself is never modified.
pub fn experiment<I, S>(
    hat: &Hat,
    expected: I,
    draw_size: usize,
    num_trials: usize,
) -> Result<f64, HatError>
where
    I: IntoIterator<Item = (S, usize)>,
    S: AsRef<str>,
{
    experiment_with_rng(hat, expected, draw_size, num_trials, &mut rand::thread_rng())
}

pub fn experiment_with_rng<I, S, R>(
    hat: &Hat,
    expected: I,
    draw_size: usize,
    num_trials: usize,
    rng: &mut R,
) -> Result<f64, HatError>
where
    I: IntoIterator<Item = (S, usize)>,
    S: AsRef<str>,
    R: Rng,
{
    check_trials(num_trials)?;
    let target = Multiset::from_counts(expected)?;
    tracing::debug!(balls = hat.len(), target = target.len(), draw_size, num_trials, "starting experiment");

    let successes = count_successes(hat, &target, draw_size, num_trials, rng);

    tracing::info!(successes, num_trials, "experiment finished");
    Ok(success_ratio(successes, num_trials))
}

/// Like [`experiment`], with trials spread over the rayon thread pool.
pub fn experiment_parallel<I, S>(
    hat: &Hat,
    expected: I,
    draw_size: usize,
    num_trials: usize,
) -> Result<f64, HatError>
where
    I: IntoIterator<Item = (S, usize)>,
    S: AsRef<str>,
{
    check_trials(num_trials)?;
    let target = Multiset::from_counts(expected)?;
    tracing::debug!(balls = hat.len(), target = target.len(), draw_size, num_trials, "starting parallel experiment");

    let successes = count_successes_parallel(hat, &target, draw_size, num_trials);

    tracing::info!(successes, num_trials, "parallel experiment finished");
    Ok(success_ratio(successes, num_trials))
}

// =============================================================================
// CONFIG-DRIVEN RUNS
// =============================================================================

/// Runs the experiment described by `config` and summarizes the outcome.
pub fn run_experiment(config: &ExperimentConfig) -> Result<ExperimentReport, HatError> {
    check_trials(config.num_trials)?;
    let hat = Hat::new(config.hat.iter().map(|(label, &count)| (label, count)))?;
    let target = Multiset::from_counts(config.expected.iter().map(|(label, &count)| (label, count)))?;
    let (draw_size, num_trials) = (config.draw_size, config.num_trials);
    tracing::debug!(seed = ?config.seed, parallel = config.parallel, draw_size, num_trials, "running configured experiment");

    let successes = match (config.seed, config.parallel) {
        (Some(seed), parallel) => count_successes_seeded(&hat, &target, draw_size, num_trials, seed, parallel),
        (None, true) => count_successes_parallel(&hat, &target, draw_size, num_trials),
        (None, false) => count_successes(&hat, &target, draw_size, num_trials, &mut rand::thread_rng()),
    };

    tracing::info!(successes, num_trials, "configured experiment finished");
    Ok(ExperimentReport::new(successes, num_trials, config.seed))
}
