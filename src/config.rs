//! Configuration for the upstream record APIs.
//!
//! This module provides the [`SourceConfig`] type describing where the travel
//! and company record sets are fetched from. The defaults point at the public
//! mock API the engine was originally built against; a YAML file can override
//! them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default endpoint for the travel record set.
pub const DEFAULT_TRAVEL_API: &str =
    "https://5f27781bf5d27e001612e057.mockapi.io/webprovise/travels";

/// Default endpoint for the company record set.
pub const DEFAULT_COMPANY_API: &str =
    "https://5f27781bf5d27e001612e057.mockapi.io/webprovise/companies";

fn default_timeout_secs() -> u64 {
    30
}

/// Endpoints and request settings for the upstream record APIs.
///
/// # Example
///
/// ```no_run
/// use travel_cost_engine::config::SourceConfig;
///
/// let config = SourceConfig::load("./sources.yaml")?;
/// println!("fetching travels from {}", config.travel_api_url);
/// # Ok::<(), travel_cost_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// URL returning the travel records as a JSON array.
    pub travel_api_url: String,
    /// URL returning the company records as a JSON array.
    pub company_api_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            travel_api_url: DEFAULT_TRAVEL_API.to_string(),
            company_api_url: DEFAULT_COMPANY_API.to_string(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl SourceConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` when the file does not exist and
    /// `ConfigParseError` when it is not valid YAML or misses required
    /// fields.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_point_at_the_mock_api() {
        let config = SourceConfig::default();
        assert!(config.travel_api_url.ends_with("/travels"));
        assert!(config.company_api_url.ends_with("/companies"));
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_load_from_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sources.yaml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "travel_api_url: https://example.com/travels").unwrap();
        writeln!(file, "company_api_url: https://example.com/companies").unwrap();
        writeln!(file, "request_timeout_secs: 5").unwrap();

        let config = SourceConfig::load(&path).unwrap();

        assert_eq!(config.travel_api_url, "https://example.com/travels");
        assert_eq!(config.company_api_url, "https://example.com/companies");
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn test_timeout_defaults_when_omitted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sources.yaml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "travel_api_url: https://example.com/travels").unwrap();
        writeln!(file, "company_api_url: https://example.com/companies").unwrap();

        let config = SourceConfig::load(&path).unwrap();

        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_missing_file_is_config_not_found() {
        let result = SourceConfig::load("/definitely/missing/sources.yaml");

        match result.unwrap_err() {
            EngineError::ConfigNotFound { path } => {
                assert!(path.contains("sources.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sources.yaml");
        fs::write(&path, "travel_api_url: [unclosed").unwrap();

        let result = SourceConfig::load(&path);

        assert!(matches!(
            result.unwrap_err(),
            EngineError::ConfigParseError { .. }
        ));
    }

    #[test]
    fn test_missing_required_field_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sources.yaml");
        fs::write(&path, "travel_api_url: https://example.com/travels\n").unwrap();

        let result = SourceConfig::load(&path);

        match result.unwrap_err() {
            EngineError::ConfigParseError { message, .. } => {
                assert!(message.contains("company_api_url"), "unexpected: {message}");
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }
}
