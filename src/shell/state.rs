use std::sync::Arc;

use crate::modules::activities::adapters::outbound::activity_directory_in_memory::InMemoryActivityDirectory;
use crate::modules::activities::core::changes::CapacityPolicy;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::sign_up_participant::handler::SignUpParticipantHandler;
use crate::modules::activities::use_cases::unregister_participant::handler::UnregisterParticipantHandler;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn ActivityQueries + Send + Sync>,
    pub sign_up_handler: Arc<SignUpParticipantHandler<InMemoryActivityDirectory>>,
    pub unregister_handler: Arc<UnregisterParticipantHandler<InMemoryActivityDirectory>>,
}

impl AppState {
    pub fn new(directory: Arc<InMemoryActivityDirectory>, capacity: CapacityPolicy) -> Self {
        Self {
            queries: directory.clone(),
            sign_up_handler: Arc::new(SignUpParticipantHandler::new(directory.clone(), capacity)),
            unregister_handler: Arc::new(UnregisterParticipantHandler::new(directory)),
        }
    }
}
