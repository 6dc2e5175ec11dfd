//! The end-to-end aggregation pipeline.
//!
//! Ties the stages together: de-duplicate company ids, group travels,
//! annotate own costs, roll up into parents, apply the rolled-up values, and
//! build the nested forest. Pure and synchronous; fetching the two record
//! sets happens before this module is entered.

use std::collections::HashSet;

use tracing::debug;

use crate::error::EngineResult;
use crate::models::{CompanyId, CompanyNode, CompanyRecord, TravelRecord};

use super::{annotate_own_costs, apply_roll_up, build_tree, group_by_company, roll_up};

/// Builds the cost-annotated company forest from the two flat record sets.
///
/// Deterministic: re-running on unchanged input produces an identical forest
/// (and byte-identical JSON once serialized).
///
/// # Errors
///
/// Returns [`crate::error::EngineError::HierarchyCycle`] when the company
/// parent links contain a cycle. All other data-quality issues (travel
/// records for unknown companies, companies with a missing parent) are
/// logged and skipped.
pub fn build_company_tree(
    travels: Vec<TravelRecord>,
    companies: Vec<CompanyRecord>,
) -> EngineResult<Vec<CompanyNode>> {
    let known_ids: HashSet<CompanyId> = companies.iter().map(|c| c.id).collect();
    debug!(
        travels = travels.len(),
        companies = companies.len(),
        "aggregating travel costs"
    );

    let grouped = group_by_company(travels, &known_ids);
    let costed = annotate_own_costs(&grouped, companies);
    let totals = roll_up(&costed);
    let costed = apply_roll_up(&totals, costed);
    build_tree(costed)
}
