use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use crate::schema::author as AuthorTable;

#[derive(Serialize, Deserialize, Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = AuthorTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct AuthorRecord {
    pub id: i32,
    pub full_name: String,
}

#[derive(Serialize, Deserialize, Insertable, Debug, Clone)]
#[diesel(table_name = AuthorTable)]
pub struct CreateAuthor {
    pub full_name: String,
}
