use async_trait::async_trait;
use thiserror::Error;

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::changes::ActivityChange;
use crate::modules::activities::core::errors::RosterError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error(transparent)]
    Rejected(#[from] RosterError),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Write side of the activity directory. Implementations must look the
/// activity up, apply the change and store the result as one atomic step.
#[async_trait]
pub trait ActivityDirectory: Send + Sync {
    async fn apply(
        &self,
        activity_name: &str,
        change: ActivityChange,
    ) -> Result<Activity, DirectoryError>;
}
