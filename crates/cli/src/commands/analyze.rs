use std::collections::BTreeMap;

use careerfit_core::dataset::DataSource;
use careerfit_core::errors::ApplicationError;
use careerfit_core::{format_growth, MarketRegime, MetricRole, TrendAnalyzer, TrendSet};
use serde::Serialize;

use super::{open_workspace, parse_industry, CommandResult, DataOptions};

const COMMAND: &str = "analyze";

#[derive(Debug, Serialize)]
struct MetricReport {
    cagr: Option<f64>,
    growth: String,
    latest: Option<f64>,
}

#[derive(Debug, Serialize)]
struct AnalyzeReport {
    industry: String,
    source: DataSource,
    window_start: i32,
    window_end: i32,
    metrics: BTreeMap<MetricRole, MetricReport>,
    price_name: Option<String>,
    regime: MarketRegime,
    market_summary: &'static str,
}

impl From<(TrendSet, DataSource)> for AnalyzeReport {
    fn from((trends, source): (TrendSet, DataSource)) -> Self {
        let regime = trends.regime();
        let metrics = trends
            .metrics
            .iter()
            .map(|(role, trend)| {
                (
                    *role,
                    MetricReport {
                        cagr: trend.cagr,
                        growth: format_growth(trend.cagr),
                        latest: trend.latest,
                    },
                )
            })
            .collect();

        Self {
            industry: trends.industry.as_str().to_string(),
            source,
            window_start: trends.window_start,
            window_end: trends.window_end,
            metrics,
            price_name: trends.price_name,
            regime,
            market_summary: regime.narrative(),
        }
    }
}

pub fn run(industry: &str, options: &DataOptions) -> CommandResult {
    let industry = match parse_industry(COMMAND, industry) {
        Ok(industry) => industry,
        Err(result) => return result,
    };
    let workspace = match open_workspace(COMMAND, options) {
        Ok(workspace) => workspace,
        Err(result) => return result,
    };

    let analyzer = TrendAnalyzer::with_min_year(workspace.config.analysis.min_year);
    match analyzer.analyze(&workspace.dataset.table, industry) {
        Ok(trends) => {
            let message = format!(
                "{} {}-{}: {}",
                industry,
                trends.window_start,
                trends.window_end,
                trends.regime().label()
            );
            let report = AnalyzeReport::from((trends, workspace.dataset.source));
            CommandResult::success_with_data(COMMAND, message, Some(report))
        }
        Err(error) => CommandResult::application_failure(COMMAND, ApplicationError::from(error)),
    }
}
