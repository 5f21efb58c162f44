use std::sync::Arc;
use anyhow::Result;
use crate::api::config::ApiConfig;
use crate::storage::memory::InMemoryStore;
use crate::storage::postgres::{PgAuthorStore, PgBudgetStore};
use crate::utils::db::build_pool;
use crate::utils::traits::{AuthorStore, BudgetStore};

#[derive(Clone)]
pub struct AppConfig {
    pub authors: Arc<dyn AuthorStore>,
    pub budgets: Arc<dyn BudgetStore>,
}

impl AppConfig {
    pub fn new(authors: Arc<dyn AuthorStore>, budgets: Arc<dyn BudgetStore>) -> Self {
        Self { authors, budgets }
    }

    /// Both stores share one in-process table set, so author references
    /// are checked the same way the database checks them.
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::new(store.clone(), store)
    }

    pub fn from_api_config(config: &ApiConfig) -> Result<Self> {
        let database_url = match (&config.database_url, config.in_memory) {
            (Some(url), false) => url,
            (None, false) => {
                tracing::warn!("DATABASE_URL not set, falling back to in-memory storage");
                return Ok(Self::in_memory());
            }
            (_, true) => {
                tracing::info!("Using in-memory storage");
                return Ok(Self::in_memory());
            }
        };

        let pool = build_pool(database_url, config.db_pool_size)?;
        tracing::info!("Connected to Postgres (pool size {})", config.db_pool_size);

        Ok(Self::new(
            Arc::new(PgAuthorStore::new(pool.clone())),
            Arc::new(PgBudgetStore::new(pool)),
        ))
    }
}
