//! Chart-ready dataset builders.
//!
//! Each builder is a pure function of roster, results, and summary. They all
//! degrade to an empty or zeroed structure when inputs are missing so the
//! caller can render a "no data yet" view, and they skip (never propagate)
//! records that fail the employee↔result join. The sensitivity curve is the
//! one exception to purity: it probes the calculation gateway.

mod change_histogram;
mod department_totals;
mod flag_distribution;
mod flag_matrix;
mod performance_distribution;
mod role_hierarchy;
mod salary_distribution;
mod sensitivity;
mod waterfall;

pub use change_histogram::{HistogramBin, change_histogram};
pub use department_totals::{DepartmentRow, department_totals};
pub use flag_distribution::{FlagCount, flag_distribution};
pub use flag_matrix::{FlagMatrixView, MatrixCell, flag_matrix};
pub use performance_distribution::{PerformanceBucket, performance_distribution};
pub use role_hierarchy::{TreemapNode, role_hierarchy};
pub use salary_distribution::{SalaryBracketRow, salary_bracket_distribution};
pub use sensitivity::{SensitivityPoint, probe_deltas, sensitivity_curve};
pub use waterfall::{WaterfallStep, waterfall_bridge};
