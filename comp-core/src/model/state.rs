use serde::{Deserialize, Serialize};

use super::{CompResult, Employee, ScenarioConfig, Summary};

/// Results and summary of one completed calculation run.
///
/// The two always travel together: holding results from one run next to the
/// summary of another is unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub results: Vec<CompResult>,
    pub summary: Summary,
}

/// The aggregate root owned by the scenario store.
///
/// Created once at startup with an empty roster and default scenario.
/// `loading` and `error` are ephemeral UI signals; an error can be present
/// while loading has already been cleared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioState {
    pub employees: Vec<Employee>,
    pub scenario: ScenarioConfig,
    pub outcome: Option<ScenarioOutcome>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ScenarioState {
    pub fn results(&self) -> Option<&[CompResult]> {
        self.outcome.as_ref().map(|outcome| outcome.results.as_slice())
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.outcome.as_ref().map(|outcome| &outcome.summary)
    }

    pub fn has_results(&self) -> bool {
        self.outcome.is_some()
    }
}
