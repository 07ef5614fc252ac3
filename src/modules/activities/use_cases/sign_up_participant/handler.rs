use std::sync::Arc;

use crate::modules::activities::adapters::outbound::activity_directory::ActivityDirectory;
use crate::modules::activities::core::changes::{ActivityChange, CapacityPolicy};
use crate::modules::activities::use_cases::application_error::ApplicationError;
use crate::modules::activities::use_cases::sign_up_participant::command::SignUpParticipant;

pub struct SignUpParticipantHandler<TDirectory>
where
    TDirectory: ActivityDirectory + Send + Sync + 'static,
{
    directory: Arc<TDirectory>,
    capacity: CapacityPolicy,
}

impl<TDirectory> SignUpParticipantHandler<TDirectory>
where
    TDirectory: ActivityDirectory + Send + Sync + 'static,
{
    pub fn new(directory: Arc<TDirectory>, capacity: CapacityPolicy) -> Self {
        Self {
            directory,
            capacity,
        }
    }

    /// Returns the confirmation message on success.
    pub async fn handle(&self, command: SignUpParticipant) -> Result<String, ApplicationError> {
        let change = ActivityChange::Enroll {
            email: command.email.clone(),
            capacity: self.capacity,
        };

        match self.directory.apply(&command.activity_name, change).await {
            Ok(activity) => {
                tracing::info!(
                    activity = %command.activity_name,
                    email = %command.email,
                    spots_left = activity.spots_left(),
                    "participant signed up"
                );
                Ok(command.confirmation())
            }
            Err(error) => {
                tracing::warn!(
                    activity = %command.activity_name,
                    email = %command.email,
                    %error,
                    "signup rejected"
                );
                Err(error.into())
            }
        }
    }
}
