use anyhow::Result;
use crate::author::db_types::{AuthorRecord, CreateAuthor};
use crate::author::processor_enums::CreateAuthorInputArgs;
use crate::utils::app_config::AppConfig;
use crate::utils::errors::DomainError;

pub async fn create_author(
    app_config: &AppConfig,
    args: CreateAuthorInputArgs,
) -> Result<AuthorRecord> {
    let full_name = args.full_name.trim();
    if full_name.is_empty() {
        tracing::warn!("Rejected author with blank name");
        return Err(DomainError::validation("fullName cannot be empty").into());
    }

    let author = app_config.authors.create(CreateAuthor {
        full_name: full_name.to_string(),
    })?;
    tracing::info!("Created author {}", author.id);

    Ok(author)
}

pub async fn get_author(app_config: &AppConfig, author_id: i32) -> Result<AuthorRecord> {
    app_config
        .authors
        .get(author_id)?
        .ok_or_else(|| DomainError::not_found("Author").into())
}
