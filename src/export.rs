//! Monthly aggregation and delimited-text rendering of ETo results.

use std::collections::HashMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::eto::EToResult;

pub const DAILY_CSV_HEADER: &str = "Date,ETo (mm/day),Rn (MJ/m2/d),es (kPa),ea (kPa)";
pub const MONTHLY_CSV_HEADER: &str = "Month,Mean ETo (mm/day),Total ETo (mm),Days";

/// Aggregate of one calendar month of daily results.
///
/// `total_eto == mean_eto * count` within floating-point tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Month key, `YYYY-MM`
    pub month: String,
    /// Mean daily ETo over the month [mm/day]
    pub mean_eto: f64,
    /// Total ETo over the month [mm]
    pub total_eto: f64,
    /// Number of daily results falling in the month
    pub count: usize,
}

/// Group daily results by calendar month, ascending by month key.
///
/// Grouping goes through an unordered map, so the output is always re-sorted
/// before being returned; callers must not rely on insertion order having
/// survived.
pub fn aggregate_monthly(results: &[EToResult]) -> Vec<MonthlySummary> {
    let mut groups: HashMap<(i32, u32), (f64, usize)> = HashMap::new();
    for result in results {
        let key = (result.date.year(), result.date.month());
        let entry = groups.entry(key).or_insert((0.0, 0));
        entry.0 += result.eto;
        entry.1 += 1;
    }

    let mut keys: Vec<(i32, u32)> = groups.keys().copied().collect();
    keys.sort_unstable();

    keys.into_iter()
        .map(|(year, month)| {
            let (sum, count) = groups[&(year, month)];
            MonthlySummary {
                month: format!("{year:04}-{month:02}"),
                mean_eto: sum / count as f64,
                total_eto: sum,
                count,
            }
        })
        .collect()
}

/// Render daily results as a delimited table.
///
/// ETo and Rn carry 2 decimals, vapor pressures 3. Empty input yields the
/// header line only.
pub fn export_daily_csv(results: &[EToResult]) -> String {
    let mut lines = vec![DAILY_CSV_HEADER.to_string()];
    for r in results {
        lines.push(format!(
            "{},{:.2},{:.2},{:.3},{:.3}",
            r.date.format("%Y-%m-%d"),
            r.eto,
            r.rn,
            r.es,
            r.ea
        ));
    }
    lines.join("\n")
}

/// Render monthly summaries as a delimited table.
///
/// Mean carries 2 decimals, total 1; day count is an integer. Empty input
/// yields the header line only.
pub fn export_monthly_csv(summaries: &[MonthlySummary]) -> String {
    let mut lines = vec![MONTHLY_CSV_HEADER.to_string()];
    for s in summaries {
        lines.push(format!(
            "{},{:.2},{:.1},{}",
            s.month, s.mean_eto, s.total_eto, s.count
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn result(date: &str, eto: f64) -> EToResult {
        EToResult {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            eto,
            rn: 15.0,
            es: 4.5,
            ea: 2.8,
            delta: 0.22,
            gamma: 0.067,
        }
    }

    #[test]
    fn aggregates_by_calendar_month() {
        let results = vec![
            result("2024-07-01", 5.0),
            result("2024-07-02", 4.8),
            result("2024-08-01", 4.5),
        ];
        let monthly = aggregate_monthly(&results);

        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly[0].month, "2024-07");
        assert!((monthly[0].mean_eto - 4.9).abs() < 1e-9);
        assert!((monthly[0].total_eto - 9.8).abs() < 1e-9);
        assert_eq!(monthly[0].count, 2);
        assert_eq!(monthly[1].month, "2024-08");
        assert_eq!(monthly[1].count, 1);
    }

    #[test]
    fn months_are_sorted_regardless_of_input_order() {
        let results = vec![
            result("2024-08-01", 4.5),
            result("2023-12-31", 1.0),
            result("2024-07-01", 5.0),
        ];
        let monthly = aggregate_monthly(&results);
        let months: Vec<&str> = monthly.iter().map(|s| s.month.as_str()).collect();
        assert_eq!(months, vec!["2023-12", "2024-07", "2024-08"]);
    }

    #[test]
    fn total_equals_mean_times_count() {
        let results = vec![
            result("2024-07-01", 5.13),
            result("2024-07-02", 4.87),
            result("2024-07-03", 3.02),
        ];
        let monthly = aggregate_monthly(&results);
        for s in &monthly {
            let reconstructed = s.mean_eto * s.count as f64;
            assert!(
                (s.total_eto - reconstructed).abs() <= 1e-6 * s.total_eto.abs().max(1.0),
                "total {} != mean*count {}",
                s.total_eto,
                reconstructed
            );
        }
    }

    #[test]
    fn empty_results_aggregate_to_nothing() {
        assert!(aggregate_monthly(&[]).is_empty());
    }

    #[test]
    fn daily_csv_format() {
        let csv = export_daily_csv(&[result("2024-07-01", 5.0)]);
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], DAILY_CSV_HEADER);
        assert_eq!(lines[1], "2024-07-01,5.00,15.00,4.500,2.800");
    }

    #[test]
    fn monthly_csv_format() {
        let monthly = aggregate_monthly(&[result("2024-07-01", 5.0), result("2024-07-02", 4.8)]);
        let csv = export_monthly_csv(&monthly);
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], MONTHLY_CSV_HEADER);
        assert_eq!(lines[1], "2024-07,4.90,9.8,2");
    }

    #[test]
    fn empty_exports_are_header_only() {
        assert_eq!(export_daily_csv(&[]), DAILY_CSV_HEADER);
        assert_eq!(export_monthly_csv(&[]), MONTHLY_CSV_HEADER);
    }
}
