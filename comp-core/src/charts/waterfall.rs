use rust_decimal::Decimal;
use serde::Serialize;

use crate::model::{CompResult, Summary};

/// One step of the payroll bridge. Step order is fixed and must not be
/// re-sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaterfallStep {
    pub label: &'static str,
    pub amount: Decimal,
}

/// Build the five-step payroll bridge:
/// last-year payroll, base-salary delta, bonus pool, flag-driven
/// adjustments, new payroll.
///
/// The flag step is a heuristic estimate (true per-flag adjustment amounts
/// are not tracked upstream): each result carrying `MRT_DECREASE` counts
/// −5,000 and each carrying `HIGH_INCREASE` counts +2,000.
pub fn waterfall_bridge(
    results: Option<&[CompResult]>,
    summary: Option<&Summary>,
) -> Vec<WaterfallStep> {
    let results = results.unwrap_or_default();

    let mrt_decrease_penalty = Decimal::from(-5_000);
    let high_increase_bump = Decimal::from(2_000);

    let original: Decimal = results.iter().map(|result| result.original_base).sum();
    let adjusted: Decimal = results.iter().map(|result| result.adjusted_base).sum();
    let bonus: Decimal = results.iter().map(|result| result.bonus).sum();

    let flag_adjustment: Decimal = results
        .iter()
        .map(|result| {
            let mut amount = Decimal::ZERO;
            if result.has_flag("MRT_DECREASE") {
                amount += mrt_decrease_penalty;
            }
            if result.has_flag("HIGH_INCREASE") {
                amount += high_increase_bump;
            }
            amount
        })
        .sum();

    let new_payroll = summary.map(|summary| summary.total_payroll).unwrap_or_default();

    vec![
        WaterfallStep { label: "Last Year Payroll", amount: original },
        WaterfallStep { label: "Base Salary Delta", amount: adjusted - original },
        WaterfallStep { label: "Bonus Pool", amount: bonus },
        WaterfallStep { label: "Flag Adjustments", amount: flag_adjustment },
        WaterfallStep { label: "New Payroll", amount: new_payroll },
    ]
}
