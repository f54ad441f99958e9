use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Simulation parameters.
///
/// Both values are fractions: a 5% revenue change is `0.05`. Percent forms
/// exist only at the display layer; everything inside the workspace and on
/// the gateway wire uses fractions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Assumed change in firm revenue, signed.
    pub revenue_delta: Decimal,
    /// How much of the revenue delta passes through to base salaries.
    pub adjustment_factor: Decimal,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            revenue_delta: Decimal::ZERO,
            adjustment_factor: Decimal::ONE,
        }
    }
}

/// Partial update for [`ScenarioConfig`]; unset fields keep their prior
/// value when merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioPatch {
    pub revenue_delta: Option<Decimal>,
    pub adjustment_factor: Option<Decimal>,
}

impl ScenarioConfig {
    /// Shallow-merge a patch into this config.
    pub fn merge(&mut self, patch: ScenarioPatch) {
        if let Some(revenue_delta) = patch.revenue_delta {
            self.revenue_delta = revenue_delta;
        }
        if let Some(adjustment_factor) = patch.adjustment_factor {
            self.adjustment_factor = adjustment_factor;
        }
    }
}
