use std::fmt;
use diesel::prelude::*;
use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use crate::author::db_types::AuthorRecord;
use crate::schema::budget as BudgetTable;

#[derive(DbEnum, Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[ExistingTypePath = "crate::schema::sql_types::BudgetType"]
pub enum BudgetType {
    Income,
    Expense,
}

impl BudgetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetType::Income => "Income",
            BudgetType::Expense => "Expense",
        }
    }
}

impl fmt::Display for BudgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = BudgetTable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct BudgetRecord {
    pub id: i32,
    pub year: i32,
    pub month: i32,
    pub amount: i32,
    #[serde(rename = "type")]
    pub budget_type: BudgetType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Insertable, Debug, Clone)]
#[diesel(table_name = BudgetTable)]
pub struct CreateBudgetRecord {
    pub year: i32,
    pub month: i32,
    pub amount: i32,
    pub budget_type: BudgetType,
    pub author_id: Option<i32>,
}

/// A budget record with its author resolved, as returned to clients.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BudgetEntry {
    #[serde(flatten)]
    pub record: BudgetRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorRecord>,
}

impl BudgetEntry {
    pub fn new(record: BudgetRecord, author: Option<AuthorRecord>) -> Self {
        Self { record, author }
    }
}
