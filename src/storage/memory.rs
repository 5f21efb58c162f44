use std::sync::{Mutex, MutexGuard};
use anyhow::{Result, anyhow};
use crate::author::db_types::{AuthorRecord, CreateAuthor};
use crate::budget::db_types::{BudgetEntry, BudgetRecord, CreateBudgetRecord};
use crate::utils::errors::DomainError;
use crate::utils::traits::{AuthorStore, BudgetStore};

#[derive(Debug, Default)]
struct Tables {
    authors: Vec<AuthorRecord>,
    budgets: Vec<BudgetRecord>,
    next_author_id: i32,
    next_budget_id: i32,
}

/// In-process stand-in for the database. Serves as both the author and the
/// budget store so author references can be checked on insert.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>> {
        self.tables.lock().map_err(|_| anyhow!("in-memory store lock poisoned"))
    }
}

impl AuthorStore for InMemoryStore {
    fn create(&self, author: CreateAuthor) -> Result<AuthorRecord> {
        let mut tables = self.lock()?;
        tables.next_author_id += 1;

        let record = AuthorRecord {
            id: tables.next_author_id,
            full_name: author.full_name,
        };
        tables.authors.push(record.clone());

        Ok(record)
    }

    fn get(&self, id: i32) -> Result<Option<AuthorRecord>> {
        let tables = self.lock()?;
        Ok(tables.authors.iter().find(|a| a.id == id).cloned())
    }
}

impl BudgetStore for InMemoryStore {
    fn insert(&self, record: CreateBudgetRecord) -> Result<BudgetRecord> {
        let mut tables = self.lock()?;

        if let Some(author_id) = record.author_id {
            if !tables.authors.iter().any(|a| a.id == author_id) {
                return Err(DomainError::MissingAuthor(author_id).into());
            }
        }

        tables.next_budget_id += 1;
        let row = BudgetRecord {
            id: tables.next_budget_id,
            year: record.year,
            month: record.month,
            amount: record.amount,
            budget_type: record.budget_type,
            author_id: record.author_id,
        };
        tables.budgets.push(row.clone());

        Ok(row)
    }

    fn query_by_year(&self, year: i32, author_name_filter: Option<&str>) -> Result<Vec<BudgetEntry>> {
        let tables = self.lock()?;
        let needle = author_name_filter.map(str::to_lowercase);

        let entries = tables
            .budgets
            .iter()
            .filter(|record| record.year == year)
            .map(|record| {
                let author = record
                    .author_id
                    .and_then(|id| tables.authors.iter().find(|a| a.id == id).cloned());
                BudgetEntry::new(record.clone(), author)
            })
            .filter(|entry| match &needle {
                Some(needle) => entry
                    .author
                    .as_ref()
                    .is_some_and(|a| a.full_name.to_lowercase().contains(needle.as_str())),
                None => true,
            })
            .collect();

        Ok(entries)
    }
}
