use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::activities::adapters::inbound::http_responses::detail;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.list_activities().await {
        Ok(activities) => Json(activities).into_response(),
        Err(error) => {
            tracing::error!(%error, "listing activities failed");
            detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}
