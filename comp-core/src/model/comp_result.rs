use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One computed outcome per employee, produced by the calculation service.
///
/// `employee_id` is a foreign key into the roster; a result whose id matches
/// no employee is orphaned and is skipped by per-employee views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompResult {
    pub employee_id: String,
    pub original_base: Decimal,
    pub adjusted_base: Decimal,
    pub base_salary_change: Decimal,
    pub bonus: Decimal,
    pub total_compensation: Decimal,
    /// Diagnostic tags such as `MRT_DECREASE` or `HIGH_INCREASE`.
    pub flags: Vec<String>,
}

impl CompResult {
    pub fn has_flag(&self, tag: &str) -> bool {
        self.flags.iter().any(|flag| flag == tag)
    }
}
