use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::{
    action_router::{ActionRouterInput, ActionRouterOutput},
    api::{
        error::ApiError,
        extractors::{JsonBody, PathParams, QueryParams},
    },
    budget::{
        db_types::BudgetEntry,
        processor_enums::{
            AddBudgetRecordInputArgs, BudgetProcessorInput, BudgetProcessorOutput,
            BudgetYearStatsResponse, GetYearStatsInputArgs,
        },
    },
    utils::app_config::AppConfig,
};

/// Query parameters for yearly stats
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearStatsParams {
    pub limit: i64,
    pub offset: i64,
    pub author_name_filter: Option<String>,
}

/// POST /budget/add
pub async fn add_budget_record(
    State(app_config): State<AppConfig>,
    JsonBody(args): JsonBody<AddBudgetRecordInputArgs>,
) -> Result<(StatusCode, Json<BudgetEntry>), ApiError> {
    let action = ActionRouterInput::Budget(BudgetProcessorInput::AddRecord(args));

    match action.process(app_config).await? {
        ActionRouterOutput::Budget(BudgetProcessorOutput::AddRecord(entry)) => {
            Ok((StatusCode::CREATED, Json(entry)))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}

/// GET /budget/year/{year}/stats
pub async fn get_year_stats(
    State(app_config): State<AppConfig>,
    PathParams(year): PathParams<i32>,
    QueryParams(params): QueryParams<YearStatsParams>,
) -> Result<(StatusCode, Json<BudgetYearStatsResponse>), ApiError> {
    let action = ActionRouterInput::Budget(BudgetProcessorInput::GetYearStats(
        GetYearStatsInputArgs {
            year,
            limit: params.limit,
            offset: params.offset,
            author_name_filter: params.author_name_filter,
        },
    ));

    match action.process(app_config).await? {
        ActionRouterOutput::Budget(BudgetProcessorOutput::GetYearStats(stats)) => {
            Ok((StatusCode::OK, Json(stats)))
        }
        _ => Err(ApiError::internal_error("Unexpected response type")),
    }
}
