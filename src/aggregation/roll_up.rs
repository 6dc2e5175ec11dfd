//! Cost roll-up (aggregation steps B and C).
//!
//! The roll-up is deliberately single-level: each company's own cost is added
//! to its immediate parent's accumulator, and the grand total is derived as
//! the sum of all accumulator values rather than as an independent sum of
//! direct costs. Every top-level company then displays the grand total. For
//! forests deeper than two levels an intermediate ancestor's displayed cost
//! therefore omits great-grandchildren contributions; this matches the
//! behavior of the system this engine replaces and is pinned by the tests
//! here and in `pipeline`.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{CompanyId, CostedCompany};

/// The per-parent cost accumulator produced by [`roll_up`].
#[derive(Debug, Clone, PartialEq)]
pub struct RollUp {
    contributions: HashMap<CompanyId, Decimal>,
    grand_total: Decimal,
}

impl RollUp {
    /// Returns the accumulated contribution for a parent company, or `None`
    /// when no company in the list names it as a parent.
    pub fn contribution(&self, id: CompanyId) -> Option<Decimal> {
        self.contributions.get(&id).copied()
    }

    /// Returns the grand total: the sum of all per-parent contributions,
    /// conventionally assigned to the sentinel super-root.
    pub fn grand_total(&self) -> Decimal {
        self.grand_total
    }
}

/// Rolls each company's own cost up into its immediate parent's accumulator
/// (step B).
///
/// Only companies with a non-root parent contribute. The grand total is the
/// sum of the accumulator values, which equals the total direct cost of all
/// non-top-level companies: each such company contributes exactly once to
/// exactly one parent bucket.
pub fn roll_up(companies: &[CostedCompany]) -> RollUp {
    let mut contributions: HashMap<CompanyId, Decimal> = HashMap::new();

    for costed in companies {
        if let Some(parent) = costed.company.parent_id {
            *contributions.entry(parent).or_insert(Decimal::ZERO) += costed.cost;
        }
    }

    let grand_total = contributions.values().copied().sum();

    RollUp {
        contributions,
        grand_total,
    }
}

/// Overwrites each company's cost with its rolled-up value (step C).
///
/// Every top-level company displays the grand total, whatever its own direct
/// cost. A non-top-level company present in the accumulator takes its
/// accumulated contribution; one absent from the accumulator (no children)
/// keeps its step-A own cost.
pub fn apply_roll_up(totals: &RollUp, companies: Vec<CostedCompany>) -> Vec<CostedCompany> {
    companies
        .into_iter()
        .map(|mut costed| {
            match costed.company.parent_id {
                None => costed.cost = totals.grand_total(),
                Some(_) => {
                    if let Some(contribution) = totals.contribution(costed.company.id) {
                        costed.cost = contribution;
                    }
                }
            }
            costed
        })
        .collect()
}
