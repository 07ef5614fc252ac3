use std::sync::Arc;

use crate::modules::activities::adapters::outbound::activity_directory_in_memory::InMemoryActivityDirectory;
use crate::modules::activities::core::changes::CapacityPolicy;
use crate::shell::state::AppState;

pub const CHESS_CLUB: &str = "Chess Club";
pub const REGISTERED_EMAIL: &str = "michael@mergington.edu";
pub const NEW_EMAIL: &str = "newstudent@mergington.edu";

pub fn make_test_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryActivityDirectory::seeded()),
        CapacityPolicy::Advisory,
    )
}

pub fn make_offline_state() -> AppState {
    let mut directory = InMemoryActivityDirectory::seeded();
    directory.toggle_offline();
    AppState::new(Arc::new(directory), CapacityPolicy::Advisory)
}
