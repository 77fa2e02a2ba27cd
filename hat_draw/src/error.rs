//! Errors returned by hat construction and experiment runs.

#[derive(Debug, thiserror::Error)]
pub enum HatError {
    #[error("Ball labels must be non-empty")]
    EmptyLabel,

    #[error("Experiment needs at least one trial")]
    ZeroTrials,

    #[error("Invalid experiment config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("Report has no seed and cannot be replayed")]
    UnseededReport,
}
