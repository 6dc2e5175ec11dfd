//! The cost-annotated company tree.
//!
//! This module defines the nested node type produced by the tree builder and
//! a plain-text renderer for human inspection. The JSON shape of a node is
//! the original company record plus `cost` and `children`; leaf nodes carry
//! an empty `children` array rather than omitting the field, so the output
//! shape stays uniform.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use super::CompanyRecord;

/// A company in the rendered hierarchy, annotated with its accumulated
/// travel cost and its direct children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyNode {
    /// The company record as received, fields flattened into the node.
    #[serde(flatten)]
    pub company: CompanyRecord,
    /// The accumulated travel cost displayed for this company.
    pub cost: Decimal,
    /// Direct children of this company, in input order. Empty for leaves.
    pub children: Vec<CompanyNode>,
}

impl CompanyNode {
    /// Returns the company's display name, or its id when the upstream
    /// record carried no `name` field.
    pub fn display_name(&self) -> String {
        self.company
            .extra
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("company {}", self.company.id))
    }
}

/// Renders a forest as an indented plain-text listing, one company per line.
///
/// # Example
///
/// ```text
/// Webprovise Corp (cost 52983.38)
///   Stamm LLC (cost 5199.00)
/// ```
pub fn render_forest(forest: &[CompanyNode]) -> String {
    let mut out = String::new();
    for node in forest {
        render_node(node, 0, &mut out);
    }
    out
}

fn render_node(node: &CompanyNode, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(&node.display_name());
    out.push_str(&format!(" (cost {})\n", node.cost));
    for child in &node.children {
        render_node(child, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CompanyId;
    use serde_json::json;
    use std::str::FromStr;

    fn node(id: u64, parent: u64, name: &str, cost: &str, children: Vec<CompanyNode>) -> CompanyNode {
        let company: CompanyRecord =
            serde_json::from_value(json!({"id": id, "parentId": parent, "name": name})).unwrap();
        CompanyNode {
            company,
            cost: Decimal::from_str(cost).unwrap(),
            children,
        }
    }

    #[test]
    fn test_node_serializes_flat_record_with_cost_and_children() {
        let tree = node(1, 0, "Webprovise Corp", "120.00", vec![
            node(2, 1, "Stamm LLC", "70.00", vec![]),
        ]);
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json["id"], json!(1));
        assert_eq!(json["parentId"], json!(0));
        assert_eq!(json["name"], json!("Webprovise Corp"));
        assert_eq!(json["cost"], json!("120.00"));
        assert_eq!(json["children"][0]["id"], json!(2));
        assert_eq!(json["children"][0]["children"], json!([]));
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let company: CompanyRecord =
            serde_json::from_value(json!({"id": 9, "parentId": 0})).unwrap();
        let anonymous = CompanyNode {
            company,
            cost: Decimal::ZERO,
            children: vec![],
        };
        assert_eq!(anonymous.display_name(), "company 9");
        assert_eq!(anonymous.company.id, CompanyId(9));
    }

    #[test]
    fn test_render_forest_indents_by_depth() {
        let forest = vec![
            node(1, 0, "Webprovise Corp", "120.00", vec![
                node(2, 1, "Stamm LLC", "70.00", vec![
                    node(3, 2, "Blanda LLC", "70.00", vec![]),
                ]),
            ]),
            node(4, 0, "Price and Sons", "120.00", vec![]),
        ];
        let text = render_forest(&forest);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Webprovise Corp (cost 120.00)");
        assert_eq!(lines[1], "  Stamm LLC (cost 70.00)");
        assert_eq!(lines[2], "    Blanda LLC (cost 70.00)");
        assert_eq!(lines[3], "Price and Sons (cost 120.00)");
    }

    #[test]
    fn test_render_empty_forest_is_empty() {
        assert_eq!(render_forest(&[]), "");
    }
}
