use futures::future::join_all;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use crate::gateway::CalculationGateway;
use crate::model::{Employee, ScenarioConfig};

/// Assumed management fee on AUM, used to estimate firm revenue from the
/// roster when projecting a compensation ratio.
const MANAGEMENT_FEE_RATE_BPS: i64 = 100; // 1%

/// One probed point of the sensitivity curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SensitivityPoint {
    /// Probed revenue delta, as a fraction.
    pub revenue_delta: Decimal,
    pub total_payroll: Decimal,
    /// Payroll over estimated revenue at this delta; `None` when the roster
    /// carries no AUM to estimate revenue from.
    pub comp_ratio: Option<Decimal>,
}

/// The fixed revenue-delta probe points, as fractions, ascending.
pub fn probe_deltas() -> Vec<Decimal> {
    [-10, -5, -2, 0, 2, 5, 10, 15, 20]
        .into_iter()
        .map(|percent| Decimal::new(percent, 2))
        .collect()
}

/// Estimated firm revenue at a given delta: roster AUM ($M) × the assumed
/// management fee, scaled by the delta.
fn estimated_revenue(employees: &[Employee], revenue_delta: Decimal) -> Decimal {
    let aum_millions: Decimal = employees.iter().map(|employee| employee.aum).sum();
    let fee_rate = Decimal::new(MANAGEMENT_FEE_RATE_BPS, 4);
    aum_millions * Decimal::from(1_000_000) * fee_rate * (Decimal::ONE + revenue_delta)
}

/// Probe the calculation gateway across the fixed revenue deltas, holding
/// the current adjustment factor fixed.
///
/// Probes run concurrently and are joined with wait-for-all semantics; a
/// failed probe is logged and dropped without aborting the sweep. Points
/// come back sorted ascending by delta.
pub async fn sensitivity_curve<G>(
    gateway: &G,
    employees: &[Employee],
    scenario: &ScenarioConfig,
) -> Vec<SensitivityPoint>
where
    G: CalculationGateway + ?Sized,
{
    let probes = probe_deltas().into_iter().map(|revenue_delta| {
        let config = ScenarioConfig {
            revenue_delta,
            adjustment_factor: scenario.adjustment_factor,
        };
        async move {
            let outcome = gateway.run_scenario(employees, &config).await;
            (revenue_delta, outcome)
        }
    });

    let mut points: Vec<SensitivityPoint> = join_all(probes)
        .await
        .into_iter()
        .filter_map(|(revenue_delta, outcome)| match outcome {
            Ok(outcome) => {
                let total_payroll = outcome.summary.total_payroll;
                let revenue = estimated_revenue(employees, revenue_delta);
                let comp_ratio = if revenue > Decimal::ZERO {
                    Some(total_payroll / revenue)
                } else {
                    None
                };
                Some(SensitivityPoint {
                    revenue_delta,
                    total_payroll,
                    comp_ratio,
                })
            }
            Err(error) => {
                warn!(%revenue_delta, %error, "sensitivity probe failed; point dropped");
                None
            }
        })
        .collect();

    points.sort_by(|a, b| a.revenue_delta.cmp(&b.revenue_delta));
    points
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::gateway::GatewayError;
    use crate::model::{Quintile, ScenarioOutcome, Summary};

    use super::*;

    fn employee(aum: Decimal) -> Employee {
        Employee {
            id: "e1".to_string(),
            name: String::new(),
            department: String::new(),
            role: String::new(),
            base_salary: dec!(100000),
            performance_rating: 3,
            quintile: Quintile::Q3,
            aum,
            is_mrt: false,
            team_size: 1,
            last_year_revenue: Decimal::ZERO,
        }
    }

    /// Fails for the configured deltas, otherwise answers with a payroll
    /// proportional to the probe.
    struct FlakyGateway {
        fail_on: Vec<Decimal>,
    }

    #[async_trait]
    impl CalculationGateway for FlakyGateway {
        async fn run_scenario(
            &self,
            _employees: &[Employee],
            config: &ScenarioConfig,
        ) -> Result<ScenarioOutcome, GatewayError> {
            if self.fail_on.contains(&config.revenue_delta) {
                return Err(GatewayError::Transport("probe refused".to_string()));
            }
            Ok(ScenarioOutcome {
                results: vec![],
                summary: Summary {
                    total_payroll: dec!(1000000) * (Decimal::ONE + config.revenue_delta),
                    ..Summary::default()
                },
            })
        }
    }

    #[tokio::test]
    async fn failed_probes_are_dropped_not_fatal() {
        let gateway = FlakyGateway {
            fail_on: vec![dec!(-0.05), dec!(0.10)],
        };
        let employees = vec![employee(dec!(500))];

        let points = sensitivity_curve(&gateway, &employees, &ScenarioConfig::default()).await;

        assert_eq!(points.len(), 7);
        let deltas: Vec<Decimal> = points.iter().map(|p| p.revenue_delta).collect();
        assert_eq!(
            deltas,
            vec![
                dec!(-0.10),
                dec!(-0.02),
                dec!(0.00),
                dec!(0.02),
                dec!(0.05),
                dec!(0.15),
                dec!(0.20)
            ]
        );
    }

    #[tokio::test]
    async fn comp_ratio_uses_estimated_revenue_at_delta() {
        let gateway = FlakyGateway { fail_on: vec![] };
        // $500M AUM at a 1% fee → $5M baseline revenue.
        let employees = vec![employee(dec!(500))];

        let points = sensitivity_curve(&gateway, &employees, &ScenarioConfig::default()).await;

        let flat = points
            .iter()
            .find(|p| p.revenue_delta == dec!(0.00))
            .expect("flat probe");
        assert_eq!(flat.total_payroll, dec!(1000000));
        assert_eq!(flat.comp_ratio, Some(dec!(0.2)));
    }

    #[tokio::test]
    async fn zero_aum_roster_omits_the_ratio() {
        let gateway = FlakyGateway { fail_on: vec![] };
        let employees = vec![employee(Decimal::ZERO)];

        let points = sensitivity_curve(&gateway, &employees, &ScenarioConfig::default()).await;

        assert_eq!(points.len(), 9);
        assert!(points.iter().all(|p| p.comp_ratio.is_none()));
    }

    #[tokio::test]
    async fn all_probes_failing_yields_an_empty_curve() {
        let gateway = FlakyGateway {
            fail_on: probe_deltas(),
        };

        let points = sensitivity_curve(&gateway, &[], &ScenarioConfig::default()).await;

        assert!(points.is_empty());
    }
}
