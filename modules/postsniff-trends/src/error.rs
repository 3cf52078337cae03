use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrendError {
    #[error("cohort size must not be negative, got {0}")]
    InvalidCohortSize(i64),
}

impl From<TrendError> for postsniff_common::SniffError {
    fn from(err: TrendError) -> Self {
        postsniff_common::SniffError::InvalidArgument(err.to_string())
    }
}
