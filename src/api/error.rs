use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::response::ApiResponse;
use crate::utils::errors::DomainError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    InternalError(String),
    DatabaseError(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal_error(msg: impl Into<String>) -> Self {
        Self::InternalError(msg.into())
    }

    pub fn database_error(msg: impl Into<String>) -> Self {
        Self::DatabaseError(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::NotFound(msg) => format!("{} not found", msg),
            ApiError::InternalError(msg) => msg.clone(),
            ApiError::DatabaseError(msg) => msg.clone(),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast_ref::<DomainError>() {
            Some(DomainError::Validation(msg)) => ApiError::bad_request(msg.clone()),
            Some(DomainError::NotFound(entity)) => ApiError::not_found(entity.clone()),
            Some(DomainError::MissingAuthor(author_id)) => {
                let msg = DomainError::MissingAuthor(*author_id).to_string();
                tracing::error!("Store rejected write: {}", msg);
                ApiError::internal_error(msg)
            }
            None => {
                tracing::error!("Store failure: {:#}", err);
                ApiError::database_error("Internal storage error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_response = ApiResponse::<serde_json::Value>::error(self.message());

        (status, Json(error_response)).into_response()
    }
}
