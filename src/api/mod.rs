pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::utils::app_config::AppConfig;
use handlers::{author::*, budget::*, health::health};

pub fn router(app_config: AppConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/author/add", post(add_author))
        .route("/author/:id", get(get_author_by_id))
        .route("/budget/add", post(add_budget_record))
        .route("/budget/year/:year/stats", get(get_year_stats))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_config)
}
