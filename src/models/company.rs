//! Company model and related types.
//!
//! This module defines the company identifier, the flat company record as
//! received from the upstream API, and the cost-annotated company produced
//! by the aggregation stages.
//!
//! The upstream convention uses `parentId == 0` as a sentinel for "no
//! parent". That magic value never reaches the core: the parent reference is
//! parsed into an `Option<CompanyId>` (`None` = top level) and mapped back to
//! `0` on serialization so the output stays shape-compatible with the source
//! data.

use std::fmt;

use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Unique identifier for a company.
///
/// Upstream APIs send ids as JSON numbers or numeric strings depending on the
/// source; both forms deserialize to the same `CompanyId`. Serializes as a
/// number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CompanyId(
    /// The raw numeric id.
    pub u64,
);

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for CompanyId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdVisitor;

        impl<'de> Visitor<'de> for IdVisitor {
            type Value = CompanyId;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a non-negative integer or a numeric string")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<CompanyId, E> {
                Ok(CompanyId(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<CompanyId, E> {
                u64::try_from(v)
                    .map(CompanyId)
                    .map_err(|_| E::custom(format!("company id must be non-negative, got {v}")))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<CompanyId, E> {
                v.trim()
                    .parse::<u64>()
                    .map(CompanyId)
                    .map_err(|_| E::custom(format!("company id is not a valid integer: '{v}'")))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// A flat company record as received from the upstream company API.
///
/// Only `id` and `parentId` are interpreted; every other field (name,
/// createdAt, ...) is carried through opaquely and reappears unchanged in the
/// rendered tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Unique identifier for the company.
    pub id: CompanyId,
    /// The parent company, or `None` for a top-level company.
    #[serde(
        rename = "parentId",
        deserialize_with = "parent_from_sentinel",
        serialize_with = "parent_to_sentinel"
    )]
    pub parent_id: Option<CompanyId>,
    /// Upstream fields that are not interpreted by the engine.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CompanyRecord {
    /// Returns true when the company has no parent (sentinel `0` upstream).
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Deserializes a parent reference, mapping the sentinel id `0` to `None`.
fn parent_from_sentinel<'de, D>(deserializer: D) -> Result<Option<CompanyId>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = CompanyId::deserialize(deserializer)?;
    Ok(if id.0 == 0 { None } else { Some(id) })
}

/// Serializes a parent reference, restoring the sentinel id `0` for `None`.
fn parent_to_sentinel<S>(parent: &Option<CompanyId>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u64(parent.map_or(0, |p| p.0))
}

/// A company record annotated with its accumulated travel cost.
///
/// Produced by the aggregation stages; the underlying record is never
/// mutated, only the derived cost changes between stages.
#[derive(Debug, Clone, PartialEq)]
pub struct CostedCompany {
    /// The company record as received.
    pub company: CompanyRecord,
    /// The accumulated travel cost for this company.
    pub cost: Decimal,
}
