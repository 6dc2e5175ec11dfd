//! Application state for the Travel Cost Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::loader::DataSource;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers, namely
/// the data source the record sets are fetched from.
#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn DataSource>,
}

impl AppState {
    /// Creates a new application state backed by the given data source.
    pub fn new(source: impl DataSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Returns a reference to the data source.
    pub fn source(&self) -> &dyn DataSource {
        self.source.as_ref()
    }
}
