//! Aggregation logic for the Travel Cost Engine.
//!
//! This module contains the pure, synchronous core of the engine: grouping
//! travel records by company, summing each company's own travel cost,
//! rolling costs up the parent chain, and converting the flat company list
//! into a nested, cost-annotated forest.

mod grouping;
mod own_cost;
mod pipeline;
mod roll_up;
mod tree_builder;

pub use grouping::group_by_company;
pub use own_cost::annotate_own_costs;
pub use pipeline::build_company_tree;
pub use roll_up::{RollUp, apply_roll_up, roll_up};
pub use tree_builder::build_tree;
