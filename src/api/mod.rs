//! HTTP API module for the Travel Cost Engine.
//!
//! This module provides the REST endpoint that fetches the two record sets,
//! runs the aggregation pipeline, and returns the cost-annotated company
//! tree.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, CompanyTreeResponse, TimingBreakdown};
pub use state::AppState;
