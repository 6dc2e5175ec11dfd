//! Own-cost annotation (aggregation step A).
//!
//! This module assigns each company its *own* cost: the sum of the prices of
//! the travel records directly attributed to it.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{CompanyId, CompanyRecord, CostedCompany, TravelRecord};

/// Annotates every company with its own travel cost.
///
/// The own cost is the sum of `price` over the company's bucket in
/// `grouped`. A company with no bucket has no recorded travel and is
/// treated as costless rather than as an error.
///
/// # Arguments
///
/// * `grouped` - Travel records partitioned by company id
/// * `companies` - The full company list; every entry is annotated
///
/// # Returns
///
/// The companies in input order, each paired with its own cost.
pub fn annotate_own_costs(
    grouped: &HashMap<CompanyId, Vec<TravelRecord>>,
    companies: Vec<CompanyRecord>,
) -> Vec<CostedCompany> {
    companies
        .into_iter()
        .map(|company| {
            let cost = grouped
                .get(&company.id)
                .map(|bucket| bucket.iter().map(|travel| travel.price).sum())
                .unwrap_or(Decimal::ZERO);
            CostedCompany { company, cost }
        })
        .collect()
}
