use crate::model::ScenarioState;

use super::action::Action;

/// Pure state transition: consumes the previous state and the action,
/// returns the next state. Executes synchronously; no transition can be
/// observed half-applied.
pub fn reduce(state: ScenarioState, action: Action) -> ScenarioState {
    match action {
        Action::SetEmployees(employees) => ScenarioState { employees, ..state },

        Action::UpdateEmployee { id, field } => {
            let mut employees = state.employees;
            if let Some(employee) = employees.iter_mut().find(|employee| employee.id == id) {
                field.apply_to(employee);
            }
            ScenarioState { employees, ..state }
        }

        Action::SetScenario(patch) => {
            let mut scenario = state.scenario;
            scenario.merge(patch);
            ScenarioState { scenario, ..state }
        }

        Action::SetLoading(loading) => ScenarioState { loading, ..state },

        Action::SetResults(outcome) => ScenarioState {
            outcome: Some(outcome),
            loading: false,
            error: None,
            ..state
        },

        Action::SetError(error) => ScenarioState {
            error,
            loading: false,
            ..state
        },

        Action::ClearResults => ScenarioState {
            outcome: None,
            ..state
        },
    }
}
