use careerfit_core::directory::{listings, CompanyTier, TierListing, JOB_SEARCH_HINTS};
use serde::Serialize;

use super::{CommandResult, EXIT_INVALID_INPUT};

const COMMAND: &str = "companies";

#[derive(Debug, Serialize)]
struct CompaniesReport {
    tiers: Vec<TierListing>,
    hints: &'static [&'static str],
}

pub fn run(tier: Option<&str>) -> CommandResult {
    let tier = match tier.map(str::parse::<CompanyTier>).transpose() {
        Ok(tier) => tier,
        Err(error) => {
            let expected =
                CompanyTier::ALL.iter().map(CompanyTier::as_str).collect::<Vec<_>>().join("|");
            return CommandResult::failure(
                COMMAND,
                "invalid_input",
                format!("{error} (expected {expected})"),
                EXIT_INVALID_INPUT,
            );
        }
    };

    let tiers = listings(tier);
    let count: usize = tiers.iter().map(|listing| listing.companies.len()).sum();
    let report = CompaniesReport { tiers, hints: &JOB_SEARCH_HINTS };
    CommandResult::success_with_data(COMMAND, format!("{count} companies"), Some(report))
}
