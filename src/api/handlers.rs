//! HTTP request handlers for the Travel Cost Engine API.
//!
//! This module contains the handler for the company tree endpoint.

use std::time::Instant;

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use tracing::{info, warn};
use uuid::Uuid;

use crate::aggregation::build_company_tree;
use crate::error::EngineError;

use super::response::{ApiErrorResponse, CompanyTreeResponse, TimingBreakdown};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/company-tree", get(company_tree_handler))
        .with_state(state)
}

/// Handler for GET /company-tree.
///
/// Fetches the two record sets sequentially, runs the aggregation pipeline,
/// and returns the nested forest along with a retrieval/calculation timing
/// split.
async fn company_tree_handler(State(state): State<AppState>) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing company tree request");

    let retrieval_started = Instant::now();
    let travels = match state.source().fetch_travels().await {
        Ok(travels) => travels,
        Err(error) => return fail(correlation_id, error),
    };
    let companies = match state.source().fetch_companies().await {
        Ok(companies) => companies,
        Err(error) => return fail(correlation_id, error),
    };
    let retrieval_ms = elapsed_ms(retrieval_started);

    let calculation_started = Instant::now();
    let forest = match build_company_tree(travels, companies) {
        Ok(forest) => forest,
        Err(error) => return fail(correlation_id, error),
    };
    let calculation_ms = elapsed_ms(calculation_started);

    info!(
        correlation_id = %correlation_id,
        top_level = forest.len(),
        retrieval_ms,
        calculation_ms,
        "Built company tree"
    );

    Json(CompanyTreeResponse {
        companies: forest,
        timing: TimingBreakdown {
            retrieval_ms,
            calculation_ms,
        },
    })
    .into_response()
}

fn fail(correlation_id: Uuid, error: EngineError) -> axum::response::Response {
    warn!(correlation_id = %correlation_id, error = %error, "Company tree request failed");
    ApiErrorResponse::from(error).into_response()
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
