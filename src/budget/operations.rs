use anyhow::Result;
use crate::budget::db_types::{BudgetEntry, CreateBudgetRecord};
use crate::budget::processor_enums::{
    AddBudgetRecordInputArgs, BudgetYearStatsResponse, GetYearStatsInputArgs,
};
use crate::budget::stats::build_year_stats;
use crate::utils::app_config::AppConfig;
use crate::utils::errors::DomainError;

pub fn validate_record(args: &AddBudgetRecordInputArgs) -> Result<(), DomainError> {
    if !(1..=12).contains(&args.month) {
        return Err(DomainError::validation(format!(
            "month must be between 1 and 12, got {}",
            args.month
        )));
    }

    if args.amount < 0 {
        return Err(DomainError::validation(format!(
            "amount must not be negative, got {}",
            args.amount
        )));
    }

    Ok(())
}

/// Blank filters are treated as no filter at all.
pub fn normalize_author_filter(filter: Option<&str>) -> Option<&str> {
    filter.filter(|value| !value.trim().is_empty())
}

fn page_bound(value: i64, name: &str) -> Result<usize, DomainError> {
    usize::try_from(value)
        .map_err(|_| DomainError::validation(format!("{} must not be negative, got {}", name, value)))
}

pub async fn add_record(
    app_config: &AppConfig,
    args: AddBudgetRecordInputArgs,
) -> Result<BudgetEntry> {
    if let Err(e) = validate_record(&args) {
        tracing::warn!("Rejected budget record: {}", e);
        return Err(e.into());
    }

    let record = app_config.budgets.insert(CreateBudgetRecord {
        year: args.year,
        month: args.month,
        amount: args.amount,
        budget_type: args.budget_type,
        author_id: args.author_id,
    })?;

    let author = match record.author_id {
        Some(author_id) => app_config.authors.get(author_id)?,
        None => None,
    };

    tracing::info!(
        "Created budget record {} ({}-{:02}, {} {})",
        record.id,
        record.year,
        record.month,
        record.amount,
        record.budget_type
    );

    Ok(BudgetEntry::new(record, author))
}

pub async fn get_year_stats(
    app_config: &AppConfig,
    args: GetYearStatsInputArgs,
) -> Result<BudgetYearStatsResponse> {
    let limit = page_bound(args.limit, "limit")?;
    let offset = page_bound(args.offset, "offset")?;
    let filter = normalize_author_filter(args.author_name_filter.as_deref());

    let candidates = app_config.budgets.query_by_year(args.year, filter)?;

    tracing::debug!(
        "Year {} stats: {} candidates (filter: {:?}, limit {}, offset {})",
        args.year,
        candidates.len(),
        filter,
        limit,
        offset
    );

    Ok(build_year_stats(candidates, limit, offset))
}
