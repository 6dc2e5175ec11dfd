//! Core data models for the Travel Cost Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod company;
mod travel;
mod tree;

pub use company::{CompanyId, CompanyRecord, CostedCompany};
pub use travel::TravelRecord;
pub use tree::{CompanyNode, render_forest};
