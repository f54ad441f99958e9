use tracing::debug;

use crate::gateway::{CalculationGateway, GatewayError};
use crate::model::{Employee, ScenarioOutcome, ScenarioState};

use super::action::Action;
use super::reducer::reduce;

/// Identifies one in-flight calculation run.
///
/// Tokens are monotonic; only the most recently issued token may commit a
/// result, so a slow first run can never overwrite a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunToken(u64);

/// Exclusive owner of the [`ScenarioState`].
///
/// Everything else receives snapshots via [`Store::state`] and requests
/// changes through [`Store::dispatch`].
#[derive(Debug, Default)]
pub struct Store {
    state: ScenarioState,
    run_seq: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state snapshot.
    pub fn state(&self) -> &ScenarioState {
        &self.state
    }

    /// Apply one action through the reducer.
    pub fn dispatch(&mut self, action: Action) {
        let previous = std::mem::take(&mut self.state);
        self.state = reduce(previous, action);
    }

    /// Replace the roster wholesale and invalidate the previous run's
    /// outcome; a materially different roster must not render against stale
    /// results. Returns the new roster size.
    pub fn load_roster(&mut self, employees: Vec<Employee>) -> usize {
        let count = employees.len();
        self.dispatch(Action::SetEmployees(employees));
        self.dispatch(Action::ClearResults);
        count
    }

    /// Start a calculation run: flips `loading` on and issues the token the
    /// eventual response must present.
    pub fn begin_run(&mut self) -> RunToken {
        self.run_seq += 1;
        self.dispatch(Action::SetLoading(true));
        RunToken(self.run_seq)
    }

    fn is_latest(&self, token: RunToken) -> bool {
        token.0 == self.run_seq
    }

    /// Commit a run's outcome. Returns `false` (and changes nothing) when a
    /// newer run has been started since the token was issued.
    pub fn complete_run(&mut self, token: RunToken, outcome: ScenarioOutcome) -> bool {
        if !self.is_latest(token) {
            debug!(token = token.0, latest = self.run_seq, "discarding stale run result");
            return false;
        }
        self.dispatch(Action::SetResults(outcome));
        true
    }

    /// Record a run failure. Stale failures are discarded too: an old run's
    /// error must not clobber the state of a newer run.
    pub fn fail_run(&mut self, token: RunToken, message: String) -> bool {
        if !self.is_latest(token) {
            debug!(token = token.0, latest = self.run_seq, "discarding stale run error");
            return false;
        }
        self.dispatch(Action::SetError(Some(message)));
        true
    }

    /// Drive one full scenario run through a gateway.
    ///
    /// On success the outcome is installed atomically; on failure the error
    /// message is recorded, `loading` is cleared, and any prior outcome is
    /// left untouched. `&mut self` prevents overlapping submissions against
    /// the same store; the token guard covers logical reruns.
    pub async fn run_scenario<G>(&mut self, gateway: &G) -> Result<(), GatewayError>
    where
        G: CalculationGateway + ?Sized,
    {
        let token = self.begin_run();
        let employees = self.state.employees.clone();
        let config = self.state.scenario.clone();

        match gateway.run_scenario(&employees, &config).await {
            Ok(outcome) => {
                self.complete_run(token, outcome);
                Ok(())
            }
            Err(error) => {
                self.fail_run(token, error.to_string());
                Err(error)
            }
        }
    }
}
