//! Flat-to-nested tree conversion.
//!
//! This module converts the flat, cost-annotated company list into a nested
//! forest. Construction is pure: records are bucketed by parent id and the
//! forest is grown recursively, each bucket consumed exactly once. Consuming
//! buckets guarantees termination even when the parent links are cyclic;
//! records left unconsumed afterwards are classified as either part of a
//! cycle (a structural-integrity error) or orphans of a company missing from
//! the dataset (dropped, like travel records for unknown companies).

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{CompanyId, CompanyNode, CostedCompany};

/// Builds the nested company forest from the flat annotated list.
///
/// Every record whose parent reference is absent (upstream sentinel `0`)
/// becomes a root; the rest are attached under their parent, recursively.
/// Sibling order is input order. Leaves carry an empty `children` vector.
///
/// # Errors
///
/// Returns [`EngineError::HierarchyCycle`] when the parent links contain a
/// cycle. An input with no top-level companies produces an empty forest, not
/// an error.
pub fn build_tree(companies: Vec<CostedCompany>) -> EngineResult<Vec<CompanyNode>> {
    let parent_of: HashMap<CompanyId, Option<CompanyId>> = companies
        .iter()
        .map(|c| (c.company.id, c.company.parent_id))
        .collect();

    let mut roots = Vec::new();
    let mut by_parent: HashMap<CompanyId, Vec<CostedCompany>> = HashMap::new();
    for costed in companies {
        match costed.company.parent_id {
            None => roots.push(costed),
            Some(parent) => by_parent.entry(parent).or_default().push(costed),
        }
    }

    let forest = grow(&mut by_parent, roots);

    if !by_parent.is_empty() {
        let mut cyclic: Vec<CompanyId> = Vec::new();
        let mut orphaned = 0usize;
        for costed in by_parent.values().flatten() {
            if parent_chain_loops(costed.company.id, &parent_of) {
                cyclic.push(costed.company.id);
            } else {
                orphaned += 1;
            }
        }

        if !cyclic.is_empty() {
            cyclic.sort();
            cyclic.dedup();
            let company_ids = cyclic
                .iter()
                .map(CompanyId::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(EngineError::HierarchyCycle { company_ids });
        }

        warn!(orphaned, "companies referenced a parent missing from the dataset and were dropped");
    }

    Ok(forest)
}

/// Grows a forest from `records`, attaching each record's children by
/// removing its bucket from `by_parent`.
fn grow(
    by_parent: &mut HashMap<CompanyId, Vec<CostedCompany>>,
    records: Vec<CostedCompany>,
) -> Vec<CompanyNode> {
    records
        .into_iter()
        .map(|costed| {
            let children = match by_parent.remove(&costed.company.id) {
                Some(child_records) => grow(by_parent, child_records),
                None => Vec::new(),
            };
            CompanyNode {
                company: costed.company,
                cost: costed.cost,
                children,
            }
        })
        .collect()
}

/// Walks the parent chain starting at `id` and reports whether it revisits a
/// company. A chain that leaves the dataset ends at an orphan, not a cycle.
fn parent_chain_loops(id: CompanyId, parent_of: &HashMap<CompanyId, Option<CompanyId>>) -> bool {
    let mut seen = HashSet::from([id]);
    let mut current = id;
    loop {
        match parent_of.get(&current) {
            Some(Some(parent)) => {
                if !seen.insert(*parent) {
                    return true;
                }
                current = *parent;
            }
            // chain reached a top-level company or left the dataset
            Some(None) | None => return false,
        }
    }
}
