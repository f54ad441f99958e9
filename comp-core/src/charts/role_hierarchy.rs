use rust_decimal::Decimal;
use serde::Serialize;

use crate::model::Summary;

/// Node of the `Total → Department → Role` treemap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreemapNode {
    pub name: String,
    pub value: Decimal,
    pub children: Vec<TreemapNode>,
}

/// Build the two-level role hierarchy from `role_totals`.
///
/// Department values are recomputed as the sum of their roles, not copied
/// from `dept_totals`; if the upstream summary is internally inconsistent
/// the two views will disagree, and that is left visible rather than
/// reconciled here.
pub fn role_hierarchy(summary: Option<&Summary>) -> TreemapNode {
    let mut root = TreemapNode {
        name: "Total".to_string(),
        value: Decimal::ZERO,
        children: Vec::new(),
    };

    let Some(summary) = summary else {
        return root;
    };

    for (department, roles) in &summary.role_totals {
        let children: Vec<TreemapNode> = roles
            .iter()
            .map(|(role, total)| TreemapNode {
                name: role.clone(),
                value: *total,
                children: Vec::new(),
            })
            .collect();

        let value: Decimal = children.iter().map(|child| child.value).sum();
        root.value += value;
        root.children.push(TreemapNode {
            name: department.clone(),
            value,
            children,
        });
    }

    root
}
