use crate::modules::products::adapters::outbound::product_repository::RepositoryError;
use crate::modules::products::core::rules::DecideError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Invalid(#[from] DecideError),

    #[error("version mismatch: current version is {current_version}")]
    Conflict { current_version: u64 },

    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ApplicationError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::VersionConflict { actual, .. } => Self::Conflict {
                current_version: actual,
            },
            other => Self::Repository(other),
        }
    }
}
