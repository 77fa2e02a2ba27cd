use crate::error::HatError;
use crate::experiment::run_experiment;
use crate::types::{ExperimentConfig, ExperimentReport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sha2::{Digest, Sha256};

// =============================================================================
// SEEDED RANDOMNESS
// =============================================================================

// RNG for a single trial of a seeded run: SHA-256(seed || trial index).
// Keyed by trial index so serial and parallel runs draw identical balls.
pub fn trial_rng(seed: u64, trial: u64) -> StdRng {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_be_bytes());
    hasher.update(trial.to_be_bytes());
    let hash = hasher.finalize();

    let mut seed_bytes = [0u8; 32];
    seed_bytes.copy_from_slice(&hash);
    StdRng::from_seed(seed_bytes)
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Replays a seeded experiment and checks it reproduces `report`.
///
/// Every field is compared, so a report whose probability, standard error
/// or interval was edited after the run fails even when its success count
/// is genuine.
pub fn verify_report(config: &ExperimentConfig, report: &ExperimentReport) -> Result<bool, HatError> {
    let seed = report.seed.ok_or(HatError::UnseededReport)?;
    if config.seed != Some(seed) {
        return Ok(false);
    }

    let replay = run_experiment(config)?;
    Ok(replay == *report)
}
