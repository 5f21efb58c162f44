use axum::{extract::State, http::StatusCode, Json};

use crate::{
    action_router::{ActionRouterInput, ActionRouterOutput},
    api::{
        error::ApiError,
        extractors::{JsonBody, PathParams},
    },
    author::{
        db_types::AuthorRecord,
        processor_enums::{AuthorProcessorInput, AuthorProcessorOutput, CreateAuthorInputArgs},
    },
    utils::app_config::AppConfig,
};

/// POST /author/add
pub async fn add_author(
    State(app_config): State<AppConfig>,
    JsonBody(args): JsonBody<CreateAuthorInputArgs>,
) -> Result<(StatusCode, Json<AuthorRecord>), ApiError> {
    let action = ActionRouterInput::Author(AuthorProcessorInput::CreateAuthor(args));

    match action.process(app_config).await? {
        ActionRouterOutput::Author(AuthorProcessorOutput::CreateAuthor(author)) => {
            Ok((StatusCode::CREATED, Json(author)))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// GET /author/{id}
pub async fn get_author_by_id(
    State(app_config): State<AppConfig>,
    PathParams(author_id): PathParams<i32>,
) -> Result<(StatusCode, Json<AuthorRecord>), ApiError> {
    let action = ActionRouterInput::Author(AuthorProcessorInput::GetAuthor(author_id));

    match action.process(app_config).await? {
        ActionRouterOutput::Author(AuthorProcessorOutput::GetAuthor(author)) => {
            Ok((StatusCode::OK, Json(author)))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}
