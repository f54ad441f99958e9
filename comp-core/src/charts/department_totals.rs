use rust_decimal::Decimal;
use serde::Serialize;

use crate::model::Summary;

/// Stacked base/bonus/total row for one department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentRow {
    pub department: String,
    pub base: Decimal,
    pub bonus: Decimal,
    pub total: Decimal,
}

/// One row per department from the summary, sorted descending by total.
pub fn department_totals(summary: Option<&Summary>) -> Vec<DepartmentRow> {
    let Some(summary) = summary else {
        return Vec::new();
    };

    let mut rows: Vec<DepartmentRow> = summary
        .dept_totals
        .iter()
        .map(|(department, totals)| DepartmentRow {
            department: department.clone(),
            base: totals.base,
            bonus: totals.bonus,
            total: totals.total,
        })
        .collect();

    rows.sort_by(|a, b| b.total.cmp(&a.total));
    rows
}
