use axum::{
    extract::{Path, Query, State, rejection::QueryRejection},
    response::IntoResponse,
};

use crate::modules::activities::adapters::inbound::http_responses::{
    EmailParams, invalid_query, message,
};
use crate::modules::activities::use_cases::sign_up_participant::command::SignUpParticipant;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    params: Result<Query<EmailParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return invalid_query(rejection),
    };

    let command = SignUpParticipant::new(activity_name, params.email);

    match state.sign_up_handler.handle(command).await {
        Ok(confirmation) => message(confirmation),
        Err(error) => error.into_response(),
    }
}
