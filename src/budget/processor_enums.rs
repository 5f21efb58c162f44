use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::budget::db_types::{BudgetEntry, BudgetType};

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AddBudgetRecordInputArgs {
    pub year: i32,
    pub month: i32,
    pub amount: i32,
    #[serde(rename = "type")]
    pub budget_type: BudgetType,
    #[serde(default)]
    pub author_id: Option<i32>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GetYearStatsInputArgs {
    pub year: i32,
    pub limit: i64,
    pub offset: i64,
    pub author_name_filter: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetYearStatsResponse {
    pub total: i64,
    pub items: Vec<BudgetEntry>,
    pub total_by_type: BTreeMap<String, i64>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum BudgetProcessorInput {
    AddRecord(AddBudgetRecordInputArgs),
    GetYearStats(GetYearStatsInputArgs),
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum BudgetProcessorOutput {
    AddRecord(BudgetEntry),
    GetYearStats(BudgetYearStatsResponse),
}
