use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::error::HatError;

// =============================================================================
// CONSTANTS
// =============================================================================

pub const CONFIDENCE_Z: f64 = 1.96; // 95% two-sided normal interval

// =============================================================================
// EXPERIMENT CONFIG
// =============================================================================

/// Everything needed to run one experiment, as a caller would write it down.
///
/// ```json
/// { "hat": { "black": 6, "red": 4, "green": 3 },
///   "expected": { "red": 2, "green": 1 },
///   "draw_size": 5,
///   "num_trials": 2000 }
/// ```
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ExperimentConfig {
    pub hat: BTreeMap<String, usize>,
    pub expected: BTreeMap<String, usize>,
    pub draw_size: usize,
    pub num_trials: usize,
    // Only set when the caller wants a replayable run
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub parallel: bool,
}

impl ExperimentConfig {
    pub fn from_json(json: &str) -> Result<Self, HatError> {
        Ok(serde_json::from_str(json)?)
    }
}

// =============================================================================
// EXPERIMENT REPORT
// =============================================================================

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ExperimentReport {
    pub successes: usize,
    pub num_trials: usize,
    pub probability: f64,
    pub standard_error: f64,
    pub confidence_interval: (f64, f64),
    pub seed: Option<u64>,
}

impl ExperimentReport {
    // Caller guarantees num_trials > 0
    pub fn new(successes: usize, num_trials: usize, seed: Option<u64>) -> Self {
        let n = num_trials as f64;
        let probability = successes as f64 / n;
        // Binomial standard error of the success ratio
        let standard_error = (probability * (1.0 - probability) / n).sqrt();
        let margin = CONFIDENCE_Z * standard_error;
        let confidence_interval = (
            (probability - margin).max(0.0),
            (probability + margin).min(1.0),
        );

        Self {
            successes,
            num_trials,
            probability,
            standard_error,
            confidence_interval,
            seed,
        }
    }
}
