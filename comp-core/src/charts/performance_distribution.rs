use rust_decimal::Decimal;
use serde::Serialize;

use crate::model::Employee;
use crate::num::round_whole;

/// Head count and share for one performance rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerformanceBucket {
    pub rating: i32,
    pub count: u32,
    /// `"<n>%"`, rounded to the nearest whole percent; empty for zero-count
    /// buckets so they render without a misleading "0%".
    pub share_label: String,
}

/// Count employees per rating on the fixed 1–5 axis. Ratings outside the
/// axis are ignored; shares are fractions of total headcount.
pub fn performance_distribution(employees: &[Employee]) -> Vec<PerformanceBucket> {
    let headcount = employees.len();

    (1..=5)
        .map(|rating| {
            let count = employees
                .iter()
                .filter(|employee| employee.performance_rating == rating)
                .count() as u32;

            let share_label = if count == 0 || headcount == 0 {
                String::new()
            } else {
                let share = Decimal::from(count) * Decimal::ONE_HUNDRED
                    / Decimal::from(headcount as u64);
                format!("{}%", round_whole(share))
            };

            PerformanceBucket {
                rating,
                count,
                share_label,
            }
        })
        .collect()
}
