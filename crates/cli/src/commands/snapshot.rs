use careerfit_core::dataset::DataSource;
use careerfit_core::errors::ApplicationError;
use careerfit_core::{snapshot, IndustrySnapshot};
use serde::Serialize;

use super::{open_workspace, parse_industry, CommandResult, DataOptions};

const COMMAND: &str = "snapshot";

#[derive(Debug, Serialize)]
struct SnapshotReport {
    source: DataSource,
    #[serde(flatten)]
    snapshot: IndustrySnapshot,
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

    let Some(latest) = snapshot(&workspace.dataset.table, industry) else {
        return CommandResult::application_failure(
            COMMAND,
            ApplicationError::Dataset("dataset has no rows".to_string()),
        );
    };

    let message = format!("{industry} latest values for {}", latest.year);
    let report = SnapshotReport { source: workspace.dataset.source, snapshot: latest };
    CommandResult::success_with_data(COMMAND, message, Some(report))
}
