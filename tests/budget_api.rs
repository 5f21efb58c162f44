use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use budget_back_end::{
    api::router,
    author::db_types::AuthorRecord,
    budget::{db_types::BudgetEntry, processor_enums::BudgetYearStatsResponse},
    utils::app_config::AppConfig,
};
use serde_json::{json, Value};
use tower::ServiceExt;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn app() -> Router {
    router(AppConfig::in_memory())
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> Result<(StatusCode, Vec<u8>), Box<dyn std::error::Error>> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&value)?)
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body)?).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;

    Ok((status, bytes.to_vec()))
}

async fn add_record(
    app: &Router,
    year: i32,
    month: i32,
    amount: i32,
    budget_type: &str,
) -> Result<BudgetEntry, Box<dyn std::error::Error>> {
    let (status, body) = send(
        app,
        Method::POST,
        "/budget/add",
        Some(json!({ "year": year, "month": month, "amount": amount, "type": budget_type })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);

    Ok(serde_json::from_slice(&body)?)
}

async fn add_author(app: &Router, full_name: &str) -> Result<AuthorRecord, Box<dyn std::error::Error>> {
    let (status, body) = send(
        app,
        Method::POST,
        "/author/add",
        Some(json!({ "fullName": full_name })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);

    Ok(serde_json::from_slice(&body)?)
}

async fn stats(app: &Router, uri: &str) -> Result<BudgetYearStatsResponse, Box<dyn std::error::Error>> {
    let (status, body) = send(app, Method::GET, uri, None).await?;
    assert_eq!(status, StatusCode::OK);

    Ok(serde_json::from_slice(&body)?)
}

#[tokio::test]
async fn test_budget_pagination() -> TestResult {
    let app = app();
    add_record(&app, 2020, 5, 10, "Income").await?;
    add_record(&app, 2020, 5, 5, "Income").await?;
    add_record(&app, 2020, 5, 20, "Income").await?;
    add_record(&app, 2020, 5, 30, "Income").await?;
    add_record(&app, 2020, 5, 40, "Income").await?;
    add_record(&app, 2030, 1, 1, "Expense").await?;

    let response = stats(&app, "/budget/year/2020/stats?limit=3&offset=1").await?;

    assert_eq!(response.total, 5);
    assert_eq!(response.items.len(), 3);
    assert_eq!(response.total_by_type.get("Income"), Some(&105));
    assert_eq!(response.total_by_type.get("Expense"), None);

    Ok(())
}

#[tokio::test]
async fn test_stats_sort_order() -> TestResult {
    let app = app();
    add_record(&app, 2020, 5, 100, "Income").await?;
    add_record(&app, 2020, 1, 5, "Income").await?;
    add_record(&app, 2020, 5, 50, "Income").await?;
    add_record(&app, 2020, 1, 30, "Income").await?;
    add_record(&app, 2020, 5, 400, "Income").await?;

    let response = stats(&app, "/budget/year/2020/stats?limit=100&offset=0").await?;

    let months: Vec<i32> = response.items.iter().map(|e| e.record.month).collect();
    let amounts: Vec<i32> = response.items.iter().map(|e| e.record.amount).collect();
    assert_eq!(months, vec![1, 1, 5, 5, 5]);
    assert_eq!(amounts, vec![30, 5, 400, 100, 50]);

    Ok(())
}

#[tokio::test]
async fn test_invalid_month_values() -> TestResult {
    let app = app();

    for month in [-5, 0, 13, 15] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/budget/add",
            Some(json!({ "year": 2020, "month": month, "amount": 5, "type": "Income" })),
        )
        .await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "month {month}");

        let error: Value = serde_json::from_slice(&body)?;
        assert_eq!(error["success"], json!(false));
        assert!(error["error"].as_str().is_some_and(|msg| msg.contains("month")));
    }

    let response = stats(&app, "/budget/year/2020/stats?limit=10&offset=0").await?;
    assert_eq!(response.total, 0);

    Ok(())
}

#[tokio::test]
async fn test_negative_amount_is_rejected() -> TestResult {
    let app = app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/budget/add",
        Some(json!({ "year": 2020, "month": 3, "amount": -1, "type": "Expense" })),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_budget_with_author() -> TestResult {
    let app = app();
    let author = add_author(&app, "John Doe").await?;

    let (status, body) = send(
        &app,
        Method::POST,
        "/budget/add",
        Some(json!({ "year": 2020, "month": 5, "amount": 100, "type": "Income", "authorId": author.id })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);

    let saved: Value = serde_json::from_slice(&body)?;
    assert_eq!(saved["authorId"], json!(author.id));
    assert_eq!(saved["author"]["fullName"], json!("John Doe"));
    assert_eq!(saved["type"], json!("Income"));

    add_record(&app, 2020, 6, 7, "Expense").await?;

    for filter in ["john", "JOHN", "Doe"] {
        let response = stats(
            &app,
            &format!("/budget/year/2020/stats?limit=100&offset=0&authorNameFilter={filter}"),
        )
        .await?;
        assert_eq!(response.total, 1, "filter {filter}");
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].record.author_id, Some(author.id));
        assert_eq!(response.items[0].author.as_ref(), Some(&author));
        assert_eq!(response.total_by_type.get("Income"), Some(&100));
    }

    let response = stats(&app, "/budget/year/2020/stats?limit=100&offset=0&authorNameFilter=Jane").await?;
    assert_eq!(response.total, 0);
    assert!(response.items.is_empty());
    assert!(response.total_by_type.is_empty());

    let response = stats(&app, "/budget/year/2020/stats?limit=100&offset=0").await?;
    assert_eq!(response.total, 2);

    Ok(())
}

#[tokio::test]
async fn test_unknown_author_is_a_server_error() -> TestResult {
    let app = app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/budget/add",
        Some(json!({ "year": 2020, "month": 5, "amount": 1, "type": "Income", "authorId": 99 })),
    )
    .await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let response = stats(&app, "/budget/year/2020/stats?limit=10&offset=0").await?;
    assert_eq!(response.total, 0);

    Ok(())
}

#[tokio::test]
async fn test_page_size_matches_bounds() -> TestResult {
    let app = app();
    for month in 1..=4 {
        add_record(&app, 2021, month, 10 * month, "Expense").await?;
    }

    for (limit, offset, expected) in [(2, 0, 2), (2, 3, 1), (10, 4, 0), (0, 0, 0), (3, 100, 0)] {
        let response = stats(
            &app,
            &format!("/budget/year/2021/stats?limit={limit}&offset={offset}"),
        )
        .await?;
        assert_eq!(response.items.len(), expected, "limit {limit} offset {offset}");
        assert_eq!(response.total, 4);
        assert_eq!(response.total_by_type.get("Expense"), Some(&100));
    }

    Ok(())
}

#[tokio::test]
async fn test_stats_requires_pagination_params() -> TestResult {
    let app = app();

    for uri in [
        "/budget/year/2020/stats",
        "/budget/year/2020/stats?limit=10",
        "/budget/year/2020/stats?limit=abc&offset=0",
        "/budget/year/2020/stats?limit=10&offset=-1",
        "/budget/year/twenty/stats?limit=10&offset=0",
    ] {
        let (status, _) = send(&app, Method::GET, uri, None).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
    }

    Ok(())
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() -> TestResult {
    let app = app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/budget/add",
        Some(json!({ "year": 2020, "month": 5, "amount": 1, "type": "Gift" })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::POST, "/author/add", Some(json!({ "fullName": "  " }))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn test_get_author() -> TestResult {
    let app = app();
    let author = add_author(&app, "Jane Roe").await?;

    let (status, body) = send(&app, Method::GET, &format!("/author/{}", author.id), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<AuthorRecord>(&body)?, author);

    let (status, _) = send(&app, Method::GET, "/author/12345", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_health() -> TestResult {
    let (status, body) = send(&app(), Method::GET, "/health", None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body)?, json!({ "status": "ok" }));
    Ok(())
}
