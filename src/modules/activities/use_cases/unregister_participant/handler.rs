use std::sync::Arc;

use crate::modules::activities::adapters::outbound::activity_directory::ActivityDirectory;
use crate::modules::activities::core::changes::ActivityChange;
use crate::modules::activities::use_cases::application_error::ApplicationError;
use crate::modules::activities::use_cases::unregister_participant::command::UnregisterParticipant;

pub struct UnregisterParticipantHandler<TDirectory>
where
    TDirectory: ActivityDirectory + Send + Sync + 'static,
{
    directory: Arc<TDirectory>,
}

impl<TDirectory> UnregisterParticipantHandler<TDirectory>
where
    TDirectory: ActivityDirectory + Send + Sync + 'static,
{
    pub fn new(directory: Arc<TDirectory>) -> Self {
        Self { directory }
    }

    pub async fn handle(&self, command: UnregisterParticipant) -> Result<String, ApplicationError> {
        let change = ActivityChange::Withdraw {
            email: command.email.clone(),
        };

        self.directory
            .apply(&command.activity_name, change)
            .await
            .map_err(|error| {
                tracing::warn!(
                    activity = %command.activity_name,
                    email = %command.email,
                    %error,
                    "unregister rejected"
                );
                ApplicationError::from(error)
            })?;

        tracing::info!(
            activity = %command.activity_name,
            email = %command.email,
            "participant unregistered"
        );
        Ok(command.confirmation())
    }
}
