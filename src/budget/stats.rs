use std::cmp::Ordering;
use std::collections::BTreeMap;
use crate::budget::db_types::BudgetEntry;
use crate::budget::processor_enums::BudgetYearStatsResponse;

/// Month ascending, then amount descending, then id ascending so that
/// repeated queries page through the same order.
pub fn stats_order(a: &BudgetEntry, b: &BudgetEntry) -> Ordering {
    a.record
        .month
        .cmp(&b.record.month)
        .then_with(|| b.record.amount.cmp(&a.record.amount))
        .then_with(|| a.record.id.cmp(&b.record.id))
}

/// Sum of amounts per type name over every entry given.
pub fn total_by_type(entries: &[BudgetEntry]) -> BTreeMap<String, i64> {
    let mut totals = BTreeMap::new();

    for entry in entries {
        *totals
            .entry(entry.record.budget_type.to_string())
            .or_insert(0i64) += i64::from(entry.record.amount);
    }

    totals
}

pub fn paginate(entries: Vec<BudgetEntry>, limit: usize, offset: usize) -> Vec<BudgetEntry> {
    entries.into_iter().skip(offset).take(limit).collect()
}

/// Builds the yearly stats from the full candidate set. `total` and
/// `total_by_type` cover the whole set, `items` only the requested page.
pub fn build_year_stats(
    mut candidates: Vec<BudgetEntry>,
    limit: usize,
    offset: usize,
) -> BudgetYearStatsResponse {
    let total = candidates.len() as i64;
    let total_by_type = total_by_type(&candidates);

    candidates.sort_by(stats_order);

    BudgetYearStatsResponse {
        total,
        items: paginate(candidates, limit, offset),
        total_by_type,
    }
}
