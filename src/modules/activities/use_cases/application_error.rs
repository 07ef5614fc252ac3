use thiserror::Error;

use crate::modules::activities::adapters::outbound::activity_directory::DirectoryError;
use crate::modules::activities::core::errors::RosterError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(RosterError),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl From<DirectoryError> for ApplicationError {
    fn from(error: DirectoryError) -> Self {
        match error {
            DirectoryError::Rejected(reason) => Self::Domain(reason),
            DirectoryError::Backend(message) => Self::Unexpected(message),
        }
    }
}
