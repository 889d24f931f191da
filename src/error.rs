use thiserror::Error;

pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("invalid sample size for `{group}`: {size} (must be > 0)")]
    InvalidSampleSize { group: String, size: usize },

    #[error("duplicate node identifier: `{0}`")]
    DuplicateNodeIdentifier(String),

    #[error("invalid chart: {0}")]
    InvalidChart(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
