use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::activities::use_cases::application_error::ApplicationError;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Query string shared by the signup and unregister routes.
#[derive(Debug, Deserialize)]
pub struct EmailParams {
    pub email: String,
}

pub fn message(message: String) -> Response {
    (StatusCode::OK, Json(MessageResponse { message })).into_response()
}

pub fn detail(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDetail {
            detail: detail.into(),
        }),
    )
        .into_response()
}

pub fn invalid_query(rejection: QueryRejection) -> Response {
    detail(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            ApplicationError::Domain(reason) if reason.is_not_found() => {
                detail(StatusCode::NOT_FOUND, reason.to_string())
            }
            ApplicationError::Domain(reason) => detail(StatusCode::BAD_REQUEST, reason.to_string()),
            ApplicationError::Unexpected(_) => {
                detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}
