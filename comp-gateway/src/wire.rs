//! Wire schema for the calculation endpoint.
//!
//! Decimal's serde support already accepts JSON numbers or numeric strings
//! on deserialize, so each field here lands as a typed value no matter how
//! the service chose to serialize it. Unknown fields are ignored; numeric
//! fields the service omits default to zero.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use comp_core::model::{
    CompResult, DeptTotals, Employee, ScenarioConfig, ScenarioOutcome, Summary,
};

#[derive(Debug, Serialize)]
pub(crate) struct CalculateRequest<'a> {
    pub employees: &'a [Employee],
    pub config: WireConfig,
}

/// Scenario parameters on the wire: fractions, always.
#[derive(Debug, Serialize)]
pub(crate) struct WireConfig {
    pub revenue_delta: Decimal,
    pub adjustment_factor: Decimal,
}

impl From<&ScenarioConfig> for WireConfig {
    fn from(config: &ScenarioConfig) -> Self {
        Self {
            revenue_delta: config.revenue_delta,
            adjustment_factor: config.adjustment_factor,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CalculateResponse {
    #[serde(default)]
    pub results: Vec<WireResult>,
    #[serde(default)]
    pub summary: WireSummary,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireResult {
    #[serde(alias = "id")]
    pub employee_id: String,
    #[serde(default)]
    pub original_base: Decimal,
    #[serde(default, alias = "adjusted_salary")]
    pub adjusted_base: Decimal,
    #[serde(default, alias = "salary_change")]
    pub base_salary_change: Decimal,
    #[serde(default, alias = "performance_adjusted_bonus")]
    pub bonus: Decimal,
    #[serde(default)]
    pub total_compensation: Decimal,
    #[serde(default)]
    pub flags: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireDeptTotals {
    #[serde(default)]
    pub base: Decimal,
    #[serde(default)]
    pub bonus: Decimal,
    #[serde(default)]
    pub total: Decimal,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireSummary {
    #[serde(default)]
    pub total_payroll: Decimal,
    #[serde(default)]
    pub avg_base_increase: Decimal,
    #[serde(default)]
    pub total_employees: usize,
    #[serde(default)]
    pub mrt_breaches: u32,
    #[serde(default)]
    pub total_flags: u32,
    #[serde(default)]
    pub flag_distribution: BTreeMap<String, u32>,
    #[serde(default)]
    pub dept_totals: BTreeMap<String, WireDeptTotals>,
    #[serde(default)]
    pub role_totals: BTreeMap<String, BTreeMap<String, Decimal>>,
    #[serde(default)]
    pub flag_matrix: BTreeMap<String, u32>,
    #[serde(default)]
    pub salary_change_histogram: BTreeMap<String, u32>,
}

impl From<WireResult> for CompResult {
    fn from(wire: WireResult) -> Self {
        Self {
            employee_id: wire.employee_id,
            original_base: wire.original_base,
            adjusted_base: wire.adjusted_base,
            base_salary_change: wire.base_salary_change,
            bonus: wire.bonus,
            total_compensation: wire.total_compensation,
            flags: wire.flags,
        }
    }
}

impl From<WireSummary> for Summary {
    fn from(wire: WireSummary) -> Self {
        Self {
            total_payroll: wire.total_payroll,
            avg_base_increase: wire.avg_base_increase,
            total_employees: wire.total_employees,
            mrt_breaches: wire.mrt_breaches,
            total_flags: wire.total_flags,
            flag_distribution: wire.flag_distribution,
            dept_totals: wire
                .dept_totals
                .into_iter()
                .map(|(department, totals)| {
                    (
                        department,
                        DeptTotals {
                            base: totals.base,
                            bonus: totals.bonus,
                            total: totals.total,
                        },
                    )
                })
                .collect(),
            role_totals: wire.role_totals,
            flag_matrix: wire.flag_matrix,
            salary_change_histogram: wire.salary_change_histogram,
        }
    }
}

impl From<CalculateResponse> for ScenarioOutcome {
    fn from(response: CalculateResponse) -> Self {
        Self {
            results: response.results.into_iter().map(CompResult::from).collect(),
            summary: response.summary.into(),
        }
    }
}
