//! Travel expense model.
//!
//! This module defines the travel record as received from the upstream
//! travel API. Only the company attribution and the price are interpreted;
//! everything else (employee name, route, timestamps) is opaque passthrough.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::CompanyId;

/// A single travel expense attributed to a company.
///
/// Prices arrive as JSON strings (`"1632.00"`) or numbers depending on the
/// source; both deserialize to the same `Decimal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelRecord {
    /// The company this expense is attributed to.
    #[serde(rename = "companyId")]
    pub company_id: CompanyId,
    /// The price of the travel.
    pub price: Decimal,
    /// Upstream fields that are not interpreted by the engine.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
