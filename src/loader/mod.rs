//! Data loading for the Travel Cost Engine.
//!
//! The aggregation core consumes two fully materialized record sets; this
//! module defines the [`DataSource`] seam that supplies them and the
//! payload-parsing helpers shared by implementations. The production
//! implementation is [`HttpLoader`]; tests substitute in-memory sources.

mod http;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{EngineError, EngineResult};
use crate::models::{CompanyRecord, TravelRecord};

pub use http::HttpLoader;

/// Supplies the two flat record sets the aggregation core consumes.
///
/// Implementations own all transport concerns (and any retry policy);
/// the core never fetches.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetches the full travel record set.
    async fn fetch_travels(&self) -> EngineResult<Vec<TravelRecord>>;

    /// Fetches the full company record set.
    async fn fetch_companies(&self) -> EngineResult<Vec<CompanyRecord>>;
}

/// Parses an upstream payload into typed records, failing fast on the first
/// malformed record.
///
/// # Errors
///
/// Returns `InvalidPayload` when the payload is not a JSON array, and
/// `MalformedRecord` identifying the dataset and the zero-based index of the
/// first record that misses a required field or carries one of the wrong
/// shape.
pub fn parse_records<T: DeserializeOwned>(dataset: &str, payload: Value) -> EngineResult<Vec<T>> {
    let Value::Array(values) = payload else {
        return Err(EngineError::InvalidPayload {
            dataset: dataset.to_string(),
            message: format!("expected a JSON array, got {}", json_type_name(&payload)),
        });
    };

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|e| EngineError::MalformedRecord {
                dataset: dataset.to_string(),
                index,
                message: e.to_string(),
            })
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
