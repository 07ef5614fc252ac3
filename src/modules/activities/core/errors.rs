#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,

    #[error("Participant not found in this activity")]
    ParticipantNotFound,

    #[error("Activity is full")]
    ActivityFull,

    #[error("Email must not be empty")]
    EmptyEmail,
}

impl RosterError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ActivityNotFound | Self::ParticipantNotFound)
    }
}

#[cfg(test)]
mod roster_error_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RosterError::ActivityNotFound, true)]
    #[case(RosterError::ParticipantNotFound, true)]
    #[case(RosterError::AlreadySignedUp, false)]
    #[case(RosterError::ActivityFull, false)]
    #[case(RosterError::EmptyEmail, false)]
    fn it_should_classify_not_found_errors(#[case] error: RosterError, #[case] expected: bool) {
        assert_eq!(error.is_not_found(), expected);
    }

    #[rstest]
    fn it_should_mention_not_found_in_not_found_messages() {
        for error in [RosterError::ActivityNotFound, RosterError::ParticipantNotFound] {
            assert!(error.to_string().to_lowercase().contains("not found"));
        }
    }

    #[rstest]
    fn it_should_mention_already_signed_up_in_duplicate_message() {
        assert!(
            RosterError::AlreadySignedUp
                .to_string()
                .to_lowercase()
                .contains("already signed up")
        );
    }
}
