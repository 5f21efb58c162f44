use anyhow::Result;
use crate::author::db_types::{AuthorRecord, CreateAuthor};
use crate::budget::db_types::{BudgetEntry, BudgetRecord, CreateBudgetRecord};
use crate::utils::app_config::AppConfig;

pub trait ActionProcessor<Output> {
    async fn process(&self, app_config: &AppConfig) -> Result<Output>;
}

/// Persistence for authors. Ids are generated by the store.
pub trait AuthorStore: Send + Sync {
    fn create(&self, author: CreateAuthor) -> Result<AuthorRecord>;

    fn get(&self, id: i32) -> Result<Option<AuthorRecord>>;
}

/// Persistence for budget records.
///
/// `insert` must fail with `DomainError::MissingAuthor` when the record
/// references an author that does not exist, leaving nothing persisted.
pub trait BudgetStore: Send + Sync {
    fn insert(&self, record: CreateBudgetRecord) -> Result<BudgetRecord>;

    /// Every record for `year`, joined with its author. With a filter only
    /// records whose author's full name contains it (case-insensitive) are
    /// returned, so records without an author drop out.
    fn query_by_year(&self, year: i32, author_name_filter: Option<&str>) -> Result<Vec<BudgetEntry>>;
}
