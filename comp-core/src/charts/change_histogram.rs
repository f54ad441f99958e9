use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::model::{Employee, Summary};
use crate::num::round_half_up;

/// One pre-bucketed salary-change bin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub label: String,
    /// Midpoint of the bucket's percentage range; the sort key.
    pub midpoint: Decimal,
    pub count: u32,
    /// Bucket count × mean salary (`total_payroll / headcount`). An
    /// approximation: per-bucket salary sums are not retained upstream, so
    /// this must not be treated as authoritative.
    pub approx_total_salary: Decimal,
}

/// Parse a bucket label of the form `"<min>% to <max>%"` (the `%` signs are
/// optional) into its numeric range.
fn parse_change_label(label: &str) -> Option<(Decimal, Decimal)> {
    let (low, high) = label.split_once(" to ")?;
    let low: Decimal = low.trim().trim_end_matches('%').parse().ok()?;
    let high: Decimal = high.trim().trim_end_matches('%').parse().ok()?;
    Some((low, high))
}

/// Rebuild the engine's salary-change histogram with midpoints and
/// approximate bucket salary totals, sorted ascending by midpoint.
/// Buckets with unparsable labels are dropped.
pub fn change_histogram(employees: &[Employee], summary: Option<&Summary>) -> Vec<HistogramBin> {
    let Some(summary) = summary else {
        return Vec::new();
    };

    let headcount = employees.len();
    let mean_salary = if headcount == 0 {
        Decimal::ZERO
    } else {
        summary.total_payroll / Decimal::from(headcount as u64)
    };

    let mut skipped = 0usize;
    let mut bins: Vec<HistogramBin> = summary
        .salary_change_histogram
        .iter()
        .filter_map(|(label, count)| match parse_change_label(label) {
            Some((low, high)) => Some(HistogramBin {
                label: label.clone(),
                midpoint: (low + high) / Decimal::TWO,
                count: *count,
                approx_total_salary: round_half_up(Decimal::from(*count) * mean_salary),
            }),
            None => {
                skipped += 1;
                None
            }
        })
        .collect();
    if skipped > 0 {
        debug!(skipped, "histogram dropped buckets with unparsable labels");
    }

    bins.sort_by(|a, b| a.midpoint.cmp(&b.midpoint));
    bins
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::model::Quintile;

    use super::*;

    fn employee(id: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: String::new(),
            department: String::new(),
            role: String::new(),
            base_salary: dec!(100000),
            performance_rating: 3,
            quintile: Quintile::Q3,
            aum: Decimal::ZERO,
            is_mrt: false,
            team_size: 1,
            last_year_revenue: Decimal::ZERO,
        }
    }

    fn summary_with_bins(bins: &[(&str, u32)], total_payroll: Decimal) -> Summary {
        let mut summary = Summary {
            total_payroll,
            ..Summary::default()
        };
        for (label, count) in bins {
            summary
                .salary_change_histogram
                .insert(label.to_string(), *count);
        }
        summary
    }

    #[test]
    fn bins_sort_ascending_by_midpoint() {
        // Map order is lexicographic ("-1% to 0%" < "-2% to -1%" < "2% to 3%"),
        // so numeric midpoint sorting must rearrange.
        let summary = summary_with_bins(
            &[("2% to 3%", 1), ("-2% to -1%", 2), ("-1% to 0%", 3)],
            dec!(600000),
        );
        let employees = vec![employee("e1"), employee("e2"), employee("e3")];

        let bins = change_histogram(&employees, Some(&summary));

        let labels: Vec<&str> = bins.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["-2% to -1%", "-1% to 0%", "2% to 3%"]);
        assert_eq!(bins[0].midpoint, dec!(-1.5));
    }

    #[test]
    fn approximate_salary_is_count_times_mean() {
        let summary = summary_with_bins(&[("0% to 1%", 2)], dec!(600000));
        let employees = vec![employee("e1"), employee("e2"), employee("e3")];

        let bins = change_histogram(&employees, Some(&summary));

        // mean = 600000 / 3 = 200000; bucket holds 2 employees.
        assert_eq!(bins[0].approx_total_salary, dec!(400000.00));
    }

    #[test]
    fn malformed_labels_are_dropped() {
        let summary = summary_with_bins(&[("garbage", 4), ("0% to 1%", 1)], dec!(100000));
        let employees = vec![employee("e1")];

        let bins = change_histogram(&employees, Some(&summary));

        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].label, "0% to 1%");
    }

    #[test]
    fn empty_roster_degrades_to_zero_mean() {
        let summary = summary_with_bins(&[("0% to 1%", 2)], dec!(600000));

        let bins = change_histogram(&[], Some(&summary));

        assert_eq!(bins[0].approx_total_salary, dec!(0.00));
    }

    #[test]
    fn missing_summary_yields_empty_list() {
        assert!(change_histogram(&[], None).is_empty());
    }

    #[test]
    fn labels_without_percent_signs_still_parse() {
        let summary = summary_with_bins(&[("1 to 2", 1)], dec!(100000));
        let employees = vec![employee("e1")];

        let bins = change_histogram(&employees, Some(&summary));

        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].midpoint, dec!(1.5));
    }
}
