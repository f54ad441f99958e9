use rust_decimal::Decimal;

use crate::model::{Employee, Quintile, ScenarioOutcome, ScenarioPatch};

/// One typed field patch for a single employee, matched by id.
#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeField {
    Name(String),
    Department(String),
    Role(String),
    BaseSalary(Decimal),
    PerformanceRating(i32),
    Quintile(Quintile),
    Aum(Decimal),
    IsMrt(bool),
    TeamSize(u32),
    LastYearRevenue(Decimal),
}

impl EmployeeField {
    pub(crate) fn apply_to(self, employee: &mut Employee) {
        match self {
            Self::Name(name) => employee.name = name,
            Self::Department(department) => employee.department = department,
            Self::Role(role) => employee.role = role,
            Self::BaseSalary(base_salary) => employee.base_salary = base_salary,
            Self::PerformanceRating(rating) => employee.performance_rating = rating,
            Self::Quintile(quintile) => employee.quintile = quintile,
            Self::Aum(aum) => employee.aum = aum,
            Self::IsMrt(is_mrt) => employee.is_mrt = is_mrt,
            Self::TeamSize(team_size) => employee.team_size = team_size,
            Self::LastYearRevenue(revenue) => employee.last_year_revenue = revenue,
        }
    }
}

/// State transitions recognized by the reducer.
///
/// The set is closed and additive: variants are added as the dashboard
/// grows, and no variant may panic the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the roster wholesale.
    SetEmployees(Vec<Employee>),
    /// Patch one field of one employee; a no-op when the id is unknown.
    UpdateEmployee { id: String, field: EmployeeField },
    /// Shallow-merge into the scenario config.
    SetScenario(ScenarioPatch),
    SetLoading(bool),
    /// Install a run's results and summary atomically; clears `loading`.
    SetResults(ScenarioOutcome),
    /// Record or clear the error message; clears `loading`, never results.
    SetError(Option<String>),
    /// Drop the current outcome (results and summary together).
    ClearResults,
}
