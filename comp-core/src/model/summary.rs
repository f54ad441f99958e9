use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-department compensation totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeptTotals {
    pub base: Decimal,
    pub bonus: Decimal,
    pub total: Decimal,
}

/// Aggregate over all results of one calculation run.
///
/// Produced remotely and coerced into typed form at the gateway boundary.
/// Ordered maps are deliberate: views that enumerate map entries need a
/// stable iteration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_payroll: Decimal,
    /// Expected fractional base increase, `revenue_delta * adjustment_factor`.
    pub avg_base_increase: Decimal,
    pub total_employees: usize,
    pub mrt_breaches: u32,
    pub total_flags: u32,
    /// Flag tag → occurrence count.
    pub flag_distribution: BTreeMap<String, u32>,
    /// Department → base/bonus/total.
    pub dept_totals: BTreeMap<String, DeptTotals>,
    /// Department → role → total compensation.
    pub role_totals: BTreeMap<String, BTreeMap<String, Decimal>>,
    /// Composite `"(department, flag)"` key → count.
    pub flag_matrix: BTreeMap<String, u32>,
    /// Percentage-bucket label (`"<min>% to <max>%"`) → employee count.
    pub salary_change_histogram: BTreeMap<String, u32>,
}
