//! Full client-side flow against a mock calculation service: load a roster,
//! run a scenario through the store, then derive every chart dataset from
//! the installed outcome.

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use comp_core::charts::{
    change_histogram, department_totals, flag_distribution, flag_matrix,
    performance_distribution, role_hierarchy, salary_bracket_distribution, waterfall_bridge,
};
use comp_core::gateway::{CalculationGateway, GatewayError};
use comp_core::model::{
    CompResult, Employee, Quintile, ScenarioConfig, ScenarioOutcome, Summary,
};
use comp_core::store::Store;

fn roster() -> Vec<Employee> {
    let mk = |id: &str, name: &str, dept: &str, role: &str, base: Decimal, rating: i32,
              quintile: Quintile, aum: Decimal, is_mrt: bool| Employee {
        id: id.to_string(),
        name: name.to_string(),
        department: dept.to_string(),
        role: role.to_string(),
        base_salary: base,
        performance_rating: rating,
        quintile,
        aum,
        is_mrt,
        team_size: 1,
        last_year_revenue: base * Decimal::TEN,
    };

    vec![
        mk("e1", "Ana Ortiz", "Global Equities", "PM", dec!(185000), 5, Quintile::Q1, dec!(450), true),
        mk("e2", "Ben Cho", "Fixed Income", "Analyst", dec!(92000), 3, Quintile::Q3, dec!(120), false),
        mk("e3", "Carla Voss", "Global Equities", "Analyst", dec!(50000), 4, Quintile::Q2, dec!(95), false),
    ]
}

/// Emulates the remote engine just enough to hand back an internally
/// consistent outcome for this roster.
struct FakeEngine;

#[async_trait]
impl CalculationGateway for FakeEngine {
    async fn run_scenario(
        &self,
        employees: &[Employee],
        config: &ScenarioConfig,
    ) -> Result<ScenarioOutcome, GatewayError> {
        let passthrough = config.revenue_delta * config.adjustment_factor;

        let results: Vec<CompResult> = employees
            .iter()
            .map(|employee| {
                let adjusted = employee.base_salary * (Decimal::ONE + passthrough);
                let bonus = employee.base_salary * dec!(0.2);
                let mut flags = Vec::new();
                if employee.is_mrt && passthrough < Decimal::ZERO {
                    flags.push("MRT_DECREASE".to_string());
                }
                if passthrough > dec!(0.02) {
                    flags.push("HIGH_INCREASE".to_string());
                }
                CompResult {
                    employee_id: employee.id.clone(),
                    original_base: employee.base_salary,
                    adjusted_base: adjusted,
                    base_salary_change: adjusted - employee.base_salary,
                    bonus,
                    total_compensation: adjusted + bonus,
                    flags,
                }
            })
            .collect();

        let mut summary = Summary {
            total_payroll: results.iter().map(|r| r.total_compensation).sum(),
            avg_base_increase: passthrough,
            total_employees: employees.len(),
            ..Summary::default()
        };
        for (employee, result) in employees.iter().zip(&results) {
            summary.total_flags += result.flags.len() as u32;
            for flag in &result.flags {
                *summary.flag_distribution.entry(flag.clone()).or_default() += 1;
                *summary
                    .flag_matrix
                    .entry(format!("({}, {flag})", employee.department))
                    .or_default() += 1;
            }
            if result.flags.iter().any(|f| f == "MRT_DECREASE") {
                summary.mrt_breaches += 1;
            }

            let dept = summary.dept_totals.entry(employee.department.clone()).or_default();
            dept.base += result.adjusted_base;
            dept.bonus += result.bonus;
            dept.total += result.total_compensation;

            *summary
                .role_totals
                .entry(employee.department.clone())
                .or_default()
                .entry(employee.role.clone())
                .or_default() += result.total_compensation;

            let change_percent = passthrough * Decimal::ONE_HUNDRED;
            let floor = change_percent.floor();
            *summary
                .salary_change_histogram
                .entry(format!("{floor}% to {}%", floor + Decimal::ONE))
                .or_default() += 1;
        }

        Ok(ScenarioOutcome { results, summary })
    }
}

#[tokio::test]
async fn scenario_run_feeds_every_derived_view() {
    let mut store = Store::new();
    store.load_roster(roster());
    store.dispatch(comp_core::store::Action::SetScenario(
        comp_core::model::ScenarioPatch {
            revenue_delta: Some(dec!(0.10)),
            adjustment_factor: Some(dec!(0.5)),
        },
    ));

    store.run_scenario(&FakeEngine).await.expect("run succeeds");

    let state = store.state();
    let results = state.results().expect("results installed");
    let summary = state.summary().expect("summary installed");
    assert_eq!(results.len(), 3);

    // 5% passthrough: every result is flagged HIGH_INCREASE.
    assert_eq!(summary.flag_distribution["HIGH_INCREASE"], 3);

    // Salary brackets: 185000 → 150K-200K, 92000 → 50K-100K,
    // 50000 sits exactly on the boundary and lands in 50K-100K too.
    let brackets = salary_bracket_distribution(&state.employees, state.results());
    assert_eq!(brackets[1].original, 2);
    assert_eq!(brackets[3].original, 1);
    // Adjusted: 194250 stays in 150K-200K, 96600 and 52500 in 50K-100K.
    assert_eq!(brackets[1].adjusted, 2);
    assert_eq!(brackets[3].adjusted, 1);

    // Performance axis counts each rating once.
    let performance = performance_distribution(&state.employees);
    assert_eq!(performance[2].count, 1);
    assert_eq!(performance[2].share_label, "33%");

    // Flag views agree with the engine's aggregation.
    let flags = flag_distribution(Some(summary));
    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].count, 3);

    let matrix = flag_matrix(Some(summary));
    assert_eq!(matrix.departments, vec!["Fixed Income", "Global Equities"]);
    assert_eq!(matrix.flags, vec!["HIGH_INCREASE"]);

    // Department rows sort descending by total.
    let departments = department_totals(Some(summary));
    assert_eq!(departments[0].department, "Global Equities");
    assert_eq!(
        departments[0].total,
        summary.dept_totals["Global Equities"].total
    );

    // Treemap departments sum their roles.
    let tree = role_hierarchy(Some(summary));
    assert_eq!(tree.value, summary.total_payroll);

    // Histogram has one 5%-bucket holding the whole roster.
    let bins = change_histogram(&state.employees, Some(summary));
    assert_eq!(bins.len(), 1);
    assert_eq!(bins[0].count, 3);
    assert_eq!(bins[0].midpoint, dec!(5.5));

    // Waterfall bridges old payroll to the summary's new payroll.
    let steps = waterfall_bridge(state.results(), Some(summary));
    assert_eq!(steps[0].amount, dec!(327000));
    assert_eq!(steps[1].amount, dec!(16350));
    assert_eq!(steps[4].amount, summary.total_payroll);
}

#[tokio::test]
async fn rerun_after_inline_edit_replaces_the_outcome() {
    let mut store = Store::new();
    store.load_roster(roster());

    store.run_scenario(&FakeEngine).await.expect("first run");
    let first_payroll = store.state().summary().expect("summary").total_payroll;

    store.dispatch(comp_core::store::Action::UpdateEmployee {
        id: "e2".to_string(),
        field: comp_core::store::EmployeeField::BaseSalary(dec!(120000)),
    });
    // An inline edit leaves the previous outcome visible until the rerun.
    assert_eq!(
        store.state().summary().expect("summary").total_payroll,
        first_payroll
    );

    store.run_scenario(&FakeEngine).await.expect("second run");
    let second_payroll = store.state().summary().expect("summary").total_payroll;
    assert!(second_payroll > first_payroll);
}
