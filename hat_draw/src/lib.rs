//! Monte Carlo estimation of "draw at least these balls from the hat" odds.
//!
//! A [`Hat`] holds labeled balls and supports destructive random draws
//! without replacement. [`experiment`] clones the hat once per trial, draws
//! from the clone and counts how often the draw contains the expected
//! sub-multiset.

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

pub mod error;
pub mod types;
pub mod multiset;
pub mod hat;
pub mod experiment;
pub mod seed;


// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use error::HatError;
pub use types::{ExperimentConfig, ExperimentReport};
pub use multiset::Multiset;
pub use hat::Hat;
pub use experiment::{experiment, experiment_parallel, experiment_with_rng, run_experiment};
pub use seed::verify_report;
