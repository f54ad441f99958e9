use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::model::{CompResult, Employee};

/// Bracket labels, lowest first. Boundaries are half-open on the low end: a
/// salary of exactly 50,000 belongs to `50K-100K`.
const BRACKET_LABELS: [&str; 5] = ["0-50K", "50K-100K", "100K-150K", "150K-200K", "200K+"];

/// One fixed salary bracket with original and adjusted head counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryBracketRow {
    pub bracket: &'static str,
    pub original: u32,
    pub adjusted: u32,
}

fn bracket_index(salary: Decimal) -> usize {
    let thresholds = [
        Decimal::from(50_000),
        Decimal::from(100_000),
        Decimal::from(150_000),
        Decimal::from(200_000),
    ];
    thresholds
        .iter()
        .position(|threshold| salary < *threshold)
        .unwrap_or(BRACKET_LABELS.len() - 1)
}

/// Partition the roster into fixed salary brackets, by `base_salary` for the
/// original series and by `adjusted_base` (joined on `employee_id`) for the
/// adjusted series. Orphaned results are skipped.
pub fn salary_bracket_distribution(
    employees: &[Employee],
    results: Option<&[CompResult]>,
) -> Vec<SalaryBracketRow> {
    let mut original = [0u32; 5];
    let mut adjusted = [0u32; 5];

    for employee in employees {
        original[bracket_index(employee.base_salary)] += 1;
    }

    let mut orphaned = 0usize;
    for result in results.unwrap_or_default() {
        if employees.iter().any(|employee| employee.id == result.employee_id) {
            adjusted[bracket_index(result.adjusted_base)] += 1;
        } else {
            orphaned += 1;
        }
    }
    if orphaned > 0 {
        debug!(orphaned, "salary distribution skipped results with no roster match");
    }

    BRACKET_LABELS
        .iter()
        .enumerate()
        .map(|(index, label)| SalaryBracketRow {
            bracket: label,
            original: original[index],
            adjusted: adjusted[index],
        })
        .collect()
}
