//! Industry trend analysis
//!
//! Turns yearly industry metrics into compound growth rates over a recent
//! window and classifies the production/price pair into a market regime.

pub mod regime;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::domain::industry::{Industry, MetricRole};
use crate::domain::table::TimeSeriesTable;
use crate::errors::DomainError;

pub use regime::{classify, classify_regime, MarketRegime, REGIME_BAND};

/// First year of the default analysis window.
pub const DEFAULT_MIN_YEAR: i32 = 2020;

/// Minimum number of rows (and observed points per metric) for growth analysis.
pub const MIN_OBSERVATIONS: usize = 2;

/// Compound annual growth rate between the first and last observed values.
///
/// Missing entries are skipped. Returns `None` when growth is undefined:
/// fewer than two observations, a negative start, a zero start that does
/// not grow, or a series that turns negative over several periods. A zero start followed by a positive end counts as 100% growth.
pub fn compute_cagr(series: &[Option<f64>]) -> Option<f64> {
    let observed: Vec<f64> = series.iter().flatten().copied().filter(|v| !v.is_nan()).collect();
    if observed.len() < MIN_OBSERVATIONS {
        return None;
    }

    let start = observed[0];
    let end = observed[observed.len() - 1];
    let periods = observed.len() - 1;

    if start > 0.0 && periods > 0 {
        // A sign change has no real root.
        Some((end / start).powf(1.0 / periods as f64) - 1.0).filter(|rate| rate.is_finite())
    } else if start == 0.0 && end > 0.0 {
        Some(1.0)
    } else {
        None
    }
}

/// Growth and latest value for one metric role.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MetricTrend {
    pub cagr: Option<f64>,
    pub latest: Option<f64>,
}

/// Output of [`TrendAnalyzer::analyze`]. Roles whose column is absent or too
/// sparse are left out rather than filled with zero.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrendSet {
    pub industry: Industry,
    pub window_start: i32,
    pub window_end: i32,
    pub metrics: BTreeMap<MetricRole, MetricTrend>,
    pub price_name: Option<String>,
}

impl TrendSet {
    pub fn get(&self, role: MetricRole) -> Option<&MetricTrend> {
        self.metrics.get(&role)
    }

    pub fn cagr(&self, role: MetricRole) -> Option<f64> {
        self.metrics.get(&role).and_then(|trend| trend.cagr)
    }

    pub fn latest(&self, role: MetricRole) -> Option<f64> {
        self.metrics.get(&role).and_then(|trend| trend.latest)
    }

    pub fn regime(&self) -> MarketRegime {
        classify_regime(self)
    }
}

#[derive(Clone, Debug)]
pub struct TrendAnalyzer {
    min_year: i32,
}

impl TrendAnalyzer {
    pub fn new() -> Self {
        Self { min_year: DEFAULT_MIN_YEAR }
    }

    pub fn with_min_year(min_year: i32) -> Self {
        Self { min_year }
    }

    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    pub fn analyze(
        &self,
        table: &TimeSeriesTable,
        industry: Industry,
    ) -> Result<TrendSet, DomainError> {
        let recent = table.since(self.min_year);
        let (Some(&window_start), Some(window_end)) = (recent.years().first(), recent.latest_year())
        else {
            return Err(DomainError::InsufficientData { rows: 0, min_year: self.min_year });
        };
        if recent.len() < MIN_OBSERVATIONS {
            return Err(DomainError::InsufficientData {
                rows: recent.len(),
                min_year: self.min_year,
            });
        }

        let mut metrics = BTreeMap::new();
        for role in MetricRole::ALL {
            let column = industry.column_for(role);
            let Some(series) = recent.series(&column) else {
                debug!(
                    event_name = "analysis.trends.column_absent",
                    industry = industry.as_str(),
                    column = column.as_str(),
                    "metric column absent, role omitted"
                );
                continue;
            };
            if series.observed_count() < MIN_OBSERVATIONS {
                debug!(
                    event_name = "analysis.trends.column_sparse",
                    industry = industry.as_str(),
                    column = column.as_str(),
                    observed = series.observed_count(),
                    "metric column too sparse, role omitted"
                );
                continue;
            }

            metrics.insert(
                role,
                MetricTrend { cagr: compute_cagr(&series.values()), latest: series.latest() },
            );
        }

        let price_name =
            metrics.contains_key(&MetricRole::Price).then(|| industry.price_label().to_string());

        debug!(
            event_name = "analysis.trends.computed",
            industry = industry.as_str(),
            window_start,
            window_end,
            roles = metrics.len(),
            "trend set computed"
        );

        Ok(TrendSet { industry, window_start, window_end, metrics, price_name })
    }
}

impl Default for TrendAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Latest-year raw values for an industry, as shown before the survey starts.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IndustrySnapshot {
    pub industry: Industry,
    pub year: i32,
    pub values: BTreeMap<MetricRole, Option<f64>>,
    pub price_name: String,
}

/// Returns `None` for an empty table. Only roles whose column exists appear.
pub fn snapshot(table: &TimeSeriesTable, industry: Industry) -> Option<IndustrySnapshot> {
    let year = table.latest_year()?;
    let values = MetricRole::ALL
        .into_iter()
        .filter_map(|role| {
            let column = industry.column_for(role);
            table.has_column(&column).then(|| (role, table.value(year, &column)))
        })
        .collect();

    Some(IndustrySnapshot {
        industry,
        year,
        values,
        price_name: industry.price_label().to_string(),
    })
}

/// Renders a growth rate with a direction arrow, e.g. `▲ 4.2%`.
pub fn format_growth(cagr: Option<f64>) -> String {
    match cagr {
        Some(value) if !value.is_nan() => {
            let arrow = if value > 0.0 {
                "▲"
            } else if value < 0.0 {
                "▼"
            } else {
                "→"
            };
            format!("{arrow} {:.1}%", value.abs() * 100.0)
        }
        _ => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(raw: &[f64]) -> Vec<Option<f64>> {
        raw.iter().copied().map(Some).collect()
    }

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("growth should be defined");
        assert!((actual - expected).abs() < 1e-12, "expected {expected}, got {actual}");
    }

    #[test]
    fn cagr_of_flat_series_is_zero() {
        assert_close(compute_cagr(&values(&[100.0, 100.0, 100.0])), 0.0);
    }

    #[test]
    fn cagr_of_single_period_doubling_is_one() {
        assert_close(compute_cagr(&values(&[100.0, 200.0])), 1.0);
    }

    #[test]
    fn cagr_from_zero_base_is_full_growth() {
        assert_close(compute_cagr(&values(&[0.0, 50.0])), 1.0);
    }

    #[test]
    fn cagr_needs_two_points() {
        assert_eq!(compute_cagr(&values(&[100.0])), None);
        assert_eq!(compute_cagr(&[]), None);
        assert_eq!(compute_cagr(&[None, Some(5.0), None]), None);
    }

    #[test]
    fn cagr_is_undefined_for_negative_or_dead_start() {
        assert_eq!(compute_cagr(&values(&[-10.0, 20.0])), None);
        assert_eq!(compute_cagr(&values(&[0.0, 0.0])), None);
        assert_eq!(compute_cagr(&values(&[0.0, -5.0])), None);
    }

    #[test]
    fn cagr_is_undefined_when_series_turns_negative() {
        assert_eq!(compute_cagr(&values(&[100.0, 50.0, -10.0])), None);
        assert_eq!(compute_cagr(&values(&[100.0, 80.0, 60.0, -10.0])), None);

        let table = TimeSeriesTable::new(vec![2020, 2021, 2022])
            .and_then(|t| t.with_column("반도체_생산(조원)", values(&[100.0, 50.0, -10.0])))
            .expect("valid table");
        let trends = TrendAnalyzer::new().analyze(&table, Industry::Semiconductor).expect("trends");
        assert_eq!(trends.cagr(MetricRole::Production), None);
        assert_eq!(trends.latest(MetricRole::Production), Some(-10.0));
        assert_eq!(trends.regime(), MarketRegime::InsufficientSignal);
    }

    #[test]
    fn cagr_skips_missing_entries() {
        // 100 -> 121 over two observed periods: 10% a year.
        assert_close(compute_cagr(&[Some(100.0), None, Some(110.0), Some(121.0)]), 0.1);
    }

    fn semiconductor_table(years: Vec<i32>) -> TimeSeriesTable {
        let n = years.len();
        let ramp = |base: f64, step: f64| -> Vec<Option<f64>> {
            (0..n).map(|i| Some(base + step * i as f64)).collect()
        };
        TimeSeriesTable::new(years)
            .and_then(|t| t.with_column("반도체_생산(조원)", ramp(100.0, 10.0)))
            .and_then(|t| t.with_column("반도체_수출(억불)", ramp(800.0, -20.0)))
            .and_then(|t| t.with_column("DRAM_가격(달러)", ramp(4.0, 0.5)))
            .expect("valid table")
    }

    #[test]
    fn analyze_fails_without_recent_rows() {
        let table = semiconductor_table(vec![2018, 2019]);
        let error =
            TrendAnalyzer::new().analyze(&table, Industry::Semiconductor).expect_err("no data");
        assert_eq!(error, DomainError::InsufficientData { rows: 0, min_year: 2020 });

        let table = semiconductor_table(vec![2018, 2019, 2020]);
        let error =
            TrendAnalyzer::new().analyze(&table, Industry::Semiconductor).expect_err("one row");
        assert_eq!(error, DomainError::InsufficientData { rows: 1, min_year: 2020 });
    }

    #[test]
    fn analyze_restricts_to_recent_window() {
        let table = semiconductor_table(vec![2018, 2019, 2020, 2021, 2022]);
        let trends = TrendAnalyzer::new().analyze(&table, Industry::Semiconductor).expect("trends");

        assert_eq!(trends.window_start, 2020);
        assert_eq!(trends.window_end, 2022);
        // 2020..=2022 production: 120 -> 140 over two periods.
        assert_close(trends.cagr(MetricRole::Production), (140.0f64 / 120.0).sqrt() - 1.0);
        assert_eq!(trends.latest(MetricRole::Production), Some(140.0));
        assert_eq!(trends.latest(MetricRole::Price), Some(6.0));
        assert_eq!(trends.price_name.as_deref(), Some("DRAM price"));
    }

    #[test]
    fn analyze_omits_absent_and_sparse_roles() {
        let table = semiconductor_table(vec![2020, 2021, 2022])
            .with_column("반도체_시장점유율(퍼센트)", vec![None, Some(18.0), None])
            .expect("valid column");
        let trends = TrendAnalyzer::new().analyze(&table, Industry::Semiconductor).expect("trends");

        assert!(trends.get(MetricRole::Share).is_none(), "one point is too sparse");
        assert!(trends.get(MetricRole::Export).is_some());
        assert_eq!(trends.metrics.len(), 3);

        let display = TrendAnalyzer::new().analyze(&table, Industry::Display).expect("trends");
        assert!(display.metrics.is_empty());
        assert_eq!(display.price_name, None);
        assert_eq!(display.regime(), MarketRegime::InsufficientSignal);
    }

    #[test]
    fn latest_is_raw_value_of_final_year() {
        let table = TimeSeriesTable::new(vec![2020, 2021, 2022])
            .and_then(|t| {
                t.with_column("디스플레이_생산(조원)", vec![Some(90.0), Some(95.0), None])
            })
            .expect("valid table");
        let trends = TrendAnalyzer::new().analyze(&table, Industry::Display).expect("trends");
        let production = trends.get(MetricRole::Production).expect("production present");

        assert_eq!(production.latest, None);
        assert_close(production.cagr, 95.0 / 90.0 - 1.0);
    }

    #[test]
    fn configured_window_start_is_honoured() {
        let table = semiconductor_table(vec![2018, 2019]);
        let trends = TrendAnalyzer::with_min_year(2018)
            .analyze(&table, Industry::Semiconductor)
            .expect("older window has data");
        assert_eq!(trends.window_start, 2018);
    }

    #[test]
    fn snapshot_reports_latest_year_values() {
        let table = semiconductor_table(vec![2021, 2022, 2023]);
        let snap = snapshot(&table, Industry::Semiconductor).expect("non-empty table");

        assert_eq!(snap.year, 2023);
        assert_eq!(snap.values.get(&MetricRole::Production), Some(&Some(120.0)));
        assert!(!snap.values.contains_key(&MetricRole::Share));
        assert!(snapshot(&TimeSeriesTable::default(), Industry::Display).is_none());
    }

    #[test]
    fn growth_formatting_uses_direction_arrows() {
        assert_eq!(format_growth(Some(0.042)), "▲ 4.2%");
        assert_eq!(format_growth(Some(-0.01)), "▼ 1.0%");
        assert_eq!(format_growth(Some(0.0)), "→ 0.0%");
        assert_eq!(format_growth(None), "N/A");
    }
}
