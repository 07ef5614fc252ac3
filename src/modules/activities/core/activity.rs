use serde::Serialize;

use crate::modules::activities::core::changes::{ActivityChange, CapacityPolicy};
use crate::modules::activities::core::errors::RosterError;

/// A single activity record. Participants keep signup order and never repeat;
/// every mutation goes through [`Activity::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    description: String,
    schedule: String,
    max_participants: u32,
    participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Seeds the roster, skipping emails that are already present.
    pub fn with_participants<I, S>(mut self, emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for email in emails {
            let email = email.into();
            if !self.is_signed_up(&email) {
                self.participants.push(email);
            }
        }
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    pub fn max_participants(&self) -> u32 {
        self.max_participants
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn is_signed_up(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }

    pub fn apply(&mut self, change: &ActivityChange) -> Result<(), RosterError> {
        match change {
            ActivityChange::Enroll { email, capacity } => {
                if email.trim().is_empty() {
                    return Err(RosterError::EmptyEmail);
                }
                if self.is_signed_up(email) {
                    return Err(RosterError::AlreadySignedUp);
                }
                if *capacity == CapacityPolicy::Enforced && self.spots_left() == 0 {
                    return Err(RosterError::ActivityFull);
                }
                self.participants.push(email.clone());
                Ok(())
            }
            ActivityChange::Withdraw { email } => {
                let position = self
                    .participants
                    .iter()
                    .position(|p| p == email)
                    .ok_or(RosterError::ParticipantNotFound)?;
                self.participants.remove(position);
                Ok(())
            }
        }
    }
}
