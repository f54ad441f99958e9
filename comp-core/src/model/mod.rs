mod comp_result;
mod employee;
mod scenario;
mod state;
mod summary;

pub use comp_result::CompResult;
pub use employee::{Employee, Quintile};
pub use scenario::{ScenarioConfig, ScenarioPatch};
pub use state::{ScenarioOutcome, ScenarioState};
pub use summary::{DeptTotals, Summary};
