//! Roster import from uploaded CSV text.
//!
//! ## CSV Format
//!
//! Column order does **not** matter (headers are matched by name, and names
//! are case-sensitive). Every column is optional per cell: a missing or
//! unparsable value falls back to the column's default rather than failing
//! the row. Structural problems (malformed quoting, ragged rows) abort
//! the whole import; no partial roster is ever committed.
//!
//! | Column               | Type    | Default when missing/unparsable        |
//! |----------------------|---------|----------------------------------------|
//! | `id`                 | string  | synthesized `emp-<rowIndex>` (0-based) |
//! | `name`               | string  | empty                                  |
//! | `department`         | string  | empty                                  |
//! | `role`               | string  | empty                                  |
//! | `base_salary`        | decimal | `0`                                    |
//! | `performance_rating` | integer | `3` (neutral)                          |
//! | `quintile`           | Q1..Q5  | `Q3`                                   |
//! | `aum`                | decimal | `0` ($M)                               |
//! | `is_mrt`             | boolean | `false`; only the literal `true` is true |
//! | `team_size`          | integer | `1`, floored at 1                      |
//! | `last_year_revenue`  | decimal | `0`                                    |
//!
//! Synthesized ids are not stable across repeated imports; callers must not
//! rely on an `emp-<n>` id surviving a second upload.

use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use comp_core::model::{Employee, Quintile};

/// Errors that can occur while importing a roster.
#[derive(Debug, Error)]
pub enum RosterLoadError {
    /// The CSV was structurally invalid (bad quoting, ragged rows, I/O).
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    /// Two rows carry the same id. `row` is 1-based among data rows.
    #[error("duplicate employee id '{id}' on row {row}")]
    DuplicateId { id: String, row: usize },
}

impl From<csv::Error> for RosterLoadError {
    fn from(err: csv::Error) -> Self {
        RosterLoadError::CsvParse(err.to_string())
    }
}

/// Column positions resolved once from the header row.
#[derive(Debug, Default)]
struct ColumnMap {
    id: Option<usize>,
    name: Option<usize>,
    department: Option<usize>,
    role: Option<usize>,
    base_salary: Option<usize>,
    performance_rating: Option<usize>,
    quintile: Option<usize>,
    aum: Option<usize>,
    is_mrt: Option<usize>,
    team_size: Option<usize>,
    last_year_revenue: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|header| header == name);
        Self {
            id: find("id"),
            name: find("name"),
            department: find("department"),
            role: find("role"),
            base_salary: find("base_salary"),
            performance_rating: find("performance_rating"),
            quintile: find("quintile"),
            aum: find("aum"),
            is_mrt: find("is_mrt"),
            team_size: find("team_size"),
            last_year_revenue: find("last_year_revenue"),
        }
    }
}

fn cell<'r>(record: &'r StringRecord, column: Option<usize>) -> &'r str {
    column.and_then(|index| record.get(index)).unwrap_or("")
}

fn parse_decimal_or_zero(raw: &str) -> Decimal {
    raw.parse().unwrap_or(Decimal::ZERO)
}

fn employee_from_record(columns: &ColumnMap, record: &StringRecord, row_index: usize) -> Employee {
    let id = match cell(record, columns.id) {
        "" => format!("emp-{row_index}"),
        raw => raw.to_string(),
    };

    Employee {
        id,
        name: cell(record, columns.name).to_string(),
        department: cell(record, columns.department).to_string(),
        role: cell(record, columns.role).to_string(),
        base_salary: parse_decimal_or_zero(cell(record, columns.base_salary)),
        performance_rating: cell(record, columns.performance_rating)
            .parse()
            .unwrap_or(3),
        quintile: Quintile::parse(cell(record, columns.quintile)).unwrap_or_default(),
        aum: parse_decimal_or_zero(cell(record, columns.aum)),
        is_mrt: cell(record, columns.is_mrt) == "true",
        team_size: cell(record, columns.team_size).parse().unwrap_or(1).max(1),
        last_year_revenue: parse_decimal_or_zero(cell(record, columns.last_year_revenue)),
    }
}

/// Loader for roster data from delimited text.
pub struct RosterLoader;

impl RosterLoader {
    /// Parse a full roster from a CSV reader. Rows come back in file order;
    /// on success the returned set is the complete new roster.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<Employee>, RosterLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        let columns = ColumnMap::from_headers(csv_reader.headers()?);

        let mut employees: Vec<Employee> = Vec::new();
        for (row_index, record) in csv_reader.records().enumerate() {
            let record = record?;
            let employee = employee_from_record(&columns, &record, row_index);

            if employees.iter().any(|existing| existing.id == employee.id) {
                return Err(RosterLoadError::DuplicateId {
                    id: employee.id,
                    row: row_index + 1,
                });
            }
            employees.push(employee);
        }

        debug!(rows = employees.len(), "roster parsed");
        Ok(employees)
    }

    /// Parse roster CSV from an in-memory string.
    pub fn load_from_str(input: &str) -> Result<Vec<Employee>, RosterLoadError> {
        Self::parse(input.as_bytes())
    }

    /// Read a file from disk and delegate to [`RosterLoader::parse`].
    pub fn load_from_file(path: &Path) -> Result<Vec<Employee>, RosterLoadError> {
        let file = std::fs::File::open(path)
            .map_err(|err| RosterLoadError::CsvParse(err.to_string()))?;
        Self::parse(file)
    }
}
