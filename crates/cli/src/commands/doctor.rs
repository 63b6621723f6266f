use std::path::Path;

use careerfit_core::config::{AppConfig, LoadOptions};
use careerfit_core::dataset::{load_csv, sample_table};
use careerfit_core::{Industry, TimeSeriesTable, TrendAnalyzer};
use serde::Serialize;

use super::{CommandResult, EXIT_CONFIG, EXIT_FAILURE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool, config_path: Option<&Path>) -> CommandResult {
    let report = build_report(config_path);
    let exit_code = report.exit_code();

    if json_output {
        let output = serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        });
        return CommandResult::text_with_exit(output, exit_code);
    }

    CommandResult::text_with_exit(render_human(&report), exit_code)
}

impl DoctorReport {
    /// Config failures keep their own code; any other failed check is generic.
    fn exit_code(&self) -> u8 {
        let failed = |name: &str| {
            self.checks.iter().any(|check| check.name == name && check.status == CheckStatus::Fail)
        };
        if self.overall_status == CheckStatus::Pass {
            0
        } else if failed("config_validation") {
            EXIT_CONFIG
        } else {
            EXIT_FAILURE
        }
    }
}

fn build_report(config_path: Option<&Path>) -> DoctorReport {
    let mut checks = Vec::new();

    match AppConfig::load(LoadOptions {
        config_path: config_path.map(Path::to_path_buf),
        ..LoadOptions::default()
    }) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            let (dataset_check, table) = check_dataset(&config);
            checks.push(dataset_check);
            checks.push(check_recent_window(&config, table.as_ref()));
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            for name in ["dataset_source", "recent_window"] {
                checks.push(DoctorCheck {
                    name,
                    status: CheckStatus::Skipped,
                    details: "skipped because configuration did not load".to_string(),
                });
            }
        }
    }

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

/// A configured CSV must load on its own; no configured CSV means the sample.
fn check_dataset(config: &AppConfig) -> (DoctorCheck, Option<TimeSeriesTable>) {
    let Some(path) = config.data.path.as_deref() else {
        let table = sample_table();
        let check = DoctorCheck {
            name: "dataset_source",
            status: CheckStatus::Pass,
            details: format!("no dataset configured, built-in sample has {} rows", table.len()),
        };
        return (check, Some(table));
    };

    match load_csv(path) {
        Ok(table) => {
            let check = DoctorCheck {
                name: "dataset_source",
                status: CheckStatus::Pass,
                details: format!("loaded {} rows from `{}`", table.len(), path.display()),
            };
            (check, Some(table))
        }
        Err(error) => {
            let check = DoctorCheck {
                name: "dataset_source",
                status: CheckStatus::Fail,
                details: format!("{error} (commands would fall back to the built-in sample)"),
            };
            (check, None)
        }
    }
}

fn check_recent_window(config: &AppConfig, table: Option<&TimeSeriesTable>) -> DoctorCheck {
    let Some(table) = table else {
        return DoctorCheck {
            name: "recent_window",
            status: CheckStatus::Skipped,
            details: "skipped because the dataset did not load".to_string(),
        };
    };

    let analyzer = TrendAnalyzer::with_min_year(config.analysis.min_year);
    let mut ready = Vec::new();
    let mut problems = Vec::new();
    for industry in Industry::ALL {
        match analyzer.analyze(table, industry) {
            Ok(trends) if trends.regime().is_signal() => ready.push(format!(
                "{industry} {}-{} ({} metrics)",
                trends.window_start,
                trends.window_end,
                trends.metrics.len()
            )),
            Ok(_) => problems.push(format!("{industry}: production or price growth is undefined")),
            Err(error) => problems.push(format!("{industry}: {error}")),
        }
    }

    if problems.is_empty() {
        DoctorCheck { name: "recent_window", status: CheckStatus::Pass, details: ready.join("; ") }
    } else {
        DoctorCheck {
            name: "recent_window",
            status: CheckStatus::Fail,
            details: problems.join("; "),
        }
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
