//! Travel grouping functionality.
//!
//! This module partitions the flat travel record list into per-company
//! buckets, the first stage of the aggregation pipeline.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::models::{CompanyId, TravelRecord};

/// Partitions travel records by company id.
///
/// Records whose `company_id` is not in `known_ids` reference a company
/// absent from the company list; they are skipped as a data-quality issue
/// rather than treated as an error. A known company with no matching travel
/// records does not appear as a key: downstream stages treat an absent
/// bucket as "no travel, own cost 0".
///
/// `known_ids` must be the de-duplicated set of ids actually present in the
/// company list; the pipeline builds it from the fetched company records.
///
/// # Arguments
///
/// * `travels` - The flat travel record list
/// * `known_ids` - The unique set of company ids present in the company list
///
/// # Returns
///
/// A mapping from company id to that company's travel records. Record order
/// within a bucket follows input order, though no stage depends on it.
pub fn group_by_company(
    travels: Vec<TravelRecord>,
    known_ids: &HashSet<CompanyId>,
) -> HashMap<CompanyId, Vec<TravelRecord>> {
    let mut buckets: HashMap<CompanyId, Vec<TravelRecord>> = HashMap::new();
    let mut skipped = 0usize;

    for travel in travels {
        if known_ids.contains(&travel.company_id) {
            buckets.entry(travel.company_id).or_default().push(travel);
        } else {
            skipped += 1;
        }
    }

    if skipped > 0 {
        warn!(skipped, "travel records referenced unknown companies and were skipped");
    }

    buckets
}
