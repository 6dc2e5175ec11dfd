//! Error types for the Travel Cost Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while fetching record sets and
//! building the cost-annotated company tree.

use thiserror::Error;

/// The main error type for the Travel Cost Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use travel_cost_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/sources.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/sources.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {message}")]
    HttpClient {
        /// A description of the construction failure.
        message: String,
    },

    /// A request to an upstream record API failed at the transport level
    /// or returned a non-success status.
    #[error("Failed to fetch '{url}': {message}")]
    FetchFailed {
        /// The URL that was requested.
        url: String,
        /// A description of the failure.
        message: String,
    },

    /// An upstream payload was not the expected JSON array of records.
    #[error("Invalid {dataset} payload: {message}")]
    InvalidPayload {
        /// The dataset that was being parsed ("travel" or "company").
        dataset: String,
        /// A description of what made the payload invalid.
        message: String,
    },

    /// A single record within an upstream payload was missing required
    /// fields or carried values of the wrong shape.
    #[error("Malformed {dataset} record at index {index}: {message}")]
    MalformedRecord {
        /// The dataset the record belongs to ("travel" or "company").
        dataset: String,
        /// The zero-based position of the record within the payload.
        index: usize,
        /// A description of what made the record malformed.
        message: String,
    },

    /// The company hierarchy contains a cycle in its parent links.
    #[error("Company hierarchy contains a cycle involving ids: {company_ids}")]
    HierarchyCycle {
        /// The ids of the companies trapped in the cycle, comma separated.
        company_ids: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
