use super::AppState;
use crate::domain::error::DomainError;
use crate::domain::values::query::TransactionQuery;
use crate::domain::views::{
    CategoryCounts, CombinedView, Histogram, PagedResult, SeedReport, Statistics,
};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Request parameters, with unparseable query strings reported as
/// validation errors in the usual JSON error body.
type Params = Result<Query<TransactionQuery>, QueryRejection>;

fn params(query: Params) -> Result<TransactionQuery, DomainError> {
    query
        .map(|Query(q)| q)
        .map_err(|rejection| DomainError::Validation(rejection.body_text()))
}

pub async fn list_transactions(
    State(app): State<AppState>,
    query: Params,
) -> Result<Json<PagedResult>, DomainError> {
    app.list_transactions(&params(query)?).await.map(Json)
}

pub async fn statistics(
    State(app): State<AppState>,
    query: Params,
) -> Result<Json<Statistics>, DomainError> {
    app.statistics(&params(query)?).await.map(Json)
}

pub async fn bar_chart(
    State(app): State<AppState>,
    query: Params,
) -> Result<Json<Histogram>, DomainError> {
    app.histogram(&params(query)?).await.map(Json)
}

pub async fn pie_chart(
    State(app): State<AppState>,
    query: Params,
) -> Result<Json<CategoryCounts>, DomainError> {
    app.category_counts(&params(query)?).await.map(Json)
}

pub async fn combined_response(
    State(app): State<AppState>,
    query: Params,
) -> Result<Json<CombinedView>, DomainError> {
    app.combined_view(&params(query)?).await.map(Json)
}

pub async fn initialize_database(
    State(app): State<AppState>,
) -> Result<Json<SeedReport>, DomainError> {
    app.initialize().await.map(Json)
}
