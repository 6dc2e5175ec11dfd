//! Travel Cost Engine
//!
//! This crate computes, for each company in a hierarchy, the total travel cost
//! incurred by that company and all of its descendants, and renders the
//! hierarchy as a nested, cost-annotated forest.

#![warn(missing_docs)]

pub mod aggregation;
pub mod api;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
