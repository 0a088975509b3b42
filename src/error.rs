use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to fetch {resource}: {reason}")]
    FetchFailure { resource: String, reason: String },

    #[error("no scope has been loaded yet")]
    UninitializedState,

    #[error("unknown view: {0}")]
    UnknownView(String),

    #[error("scope load was cancelled")]
    Cancelled,

    #[error("invalid population figure: {0}")]
    InvalidPopulation(f64),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl ChartError {
    pub(crate) fn fetch(resource: impl Into<String>, reason: impl ToString) -> Self {
        Self::FetchFailure {
            resource: resource.into(),
            reason: reason.to_string(),
        }
    }
}
