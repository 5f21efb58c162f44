use serde::{Deserialize, Serialize};
use crate::author::db_types::AuthorRecord;

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthorInputArgs {
    pub full_name: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum AuthorProcessorInput {
    CreateAuthor(CreateAuthorInputArgs),
    GetAuthor(i32),
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum AuthorProcessorOutput {
    CreateAuthor(AuthorRecord),
    GetAuthor(AuthorRecord),
}
