//! Results export: employees joined with their computed results, serialized
//! into a downloadable CSV.

use std::collections::HashMap;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use comp_core::model::{CompResult, Employee};
use comp_core::num::round_half_up;

/// Export column order. Fixed; consumers key on these exact labels.
pub const EXPORT_HEADERS: [&str; 15] = [
    "ID",
    "Name",
    "Department",
    "Role",
    "MRT",
    "Base Salary",
    "Performance Rating",
    "Quintile",
    "AUM ($M)",
    "Adjusted Salary",
    "Salary Change",
    "Increase %",
    "Bonus",
    "Total Compensation",
    "Flags",
];

/// Errors that can occur while rendering the export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// There is nothing to export; the triggering control should be
    /// disabled in this state.
    #[error("no results to export")]
    NoResults,

    #[error("CSV write error: {0}")]
    Csv(String),
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::Csv(err.to_string())
    }
}

/// Download filename for a given date.
pub fn export_filename(date: NaiveDate) -> String {
    format!("compensation_results_{}.csv", date.format("%Y-%m-%d"))
}

/// Download filename for today, local time.
pub fn export_filename_today() -> String {
    export_filename(Local::now().date_naive())
}

fn result_cells(employee: &Employee, result: &CompResult) -> [String; 5] {
    let increase_percent = if employee.base_salary > Decimal::ZERO {
        let percent =
            (result.adjusted_base / employee.base_salary - Decimal::ONE) * Decimal::ONE_HUNDRED;
        round_half_up(percent).to_string()
    } else {
        String::new()
    };

    [
        result.adjusted_base.to_string(),
        result.base_salary_change.to_string(),
        increase_percent,
        result.bonus.to_string(),
        (result.adjusted_base + result.bonus).to_string(),
    ]
}

/// Render the roster joined with results into CSV text.
///
/// Employees without a matching result are exported with their raw fields
/// and blank derived cells, never dropped. Exporting with no results is an
/// error ([`ExportError::NoResults`]); callers gate on result presence.
pub fn render_results_csv(
    employees: &[Employee],
    results: &[CompResult],
) -> Result<String, ExportError> {
    if results.is_empty() {
        return Err(ExportError::NoResults);
    }

    let by_id: HashMap<&str, &CompResult> = results
        .iter()
        .map(|result| (result.employee_id.as_str(), result))
        .collect();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXPORT_HEADERS)?;

    let mut unmatched = 0usize;
    for employee in employees {
        let matched = by_id.get(employee.id.as_str()).copied();
        let [adjusted, change, increase, bonus, total] = match matched {
            Some(result) => result_cells(employee, result),
            None => {
                unmatched += 1;
                Default::default()
            }
        };
        let flags = matched
            .map(|result| result.flags.join(","))
            .unwrap_or_default();

        writer.write_record([
            employee.id.clone(),
            employee.name.clone(),
            employee.department.clone(),
            employee.role.clone(),
            employee.is_mrt.to_string(),
            employee.base_salary.to_string(),
            employee.performance_rating.to_string(),
            employee.quintile.as_str().to_string(),
            employee.aum.to_string(),
            adjusted,
            change,
            increase,
            bonus,
            total,
            flags,
        ])?;
    }
    if unmatched > 0 {
        debug!(unmatched, "exported employees with no result; derived cells left blank");
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Csv(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| ExportError::Csv(err.to_string()))
}
