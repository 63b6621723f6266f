use std::collections::BTreeSet;

use crate::domain::industry::{head_term, Industry};
use crate::domain::survey::{JobRole, Strength};

fn strength_group(strength: Strength) -> &'static [&'static str] {
    match strength {
        Strength::AnalyticalThinking => {
            &["Data Analysis", "Hypothesis Testing", "Root Cause", "Logical Thinking"]
        }
        Strength::ProblemSolving => {
            &["Troubleshooting", "Debugging", "Cause Analysis", "Recurrence Prevention"]
        }
        Strength::NumericalPrecision => &["Yield", "Quantitative Analysis", "Reliability", "SPC"],
        Strength::Communication => &["Collaboration", "Reporting", "Persuasion", "VOC", "B2B"],
    }
}

fn role_group(role: JobRole) -> &'static [&'static str] {
    match role {
        JobRole::RndCircuitDesign => {
            &["EDA", "Verilog", "VLSI", "Computer Architecture", "PDK", "Setup/Hold"]
        }
        JobRole::RndDeviceMaterials => {
            &["TCAD", "Solid-State Physics", "Novel Devices", "EUV", "GAA", "TSV"]
        }
        JobRole::ProcessManufacturing => &["8 Major Processes", "SPC", "FMEA", "JMP", "CapEx"],
        JobRole::QualityYield => &["Failure Analysis", "Reliability", "JMP", "ISO", "VOC"],
        JobRole::StrategyPlanning => &[
            "SCM",
            "Market Analysis",
            "Financial Statements",
            "Cyclical Industry",
            "Competitor Analysis",
        ],
        JobRole::SalesMarketing => {
            &["B2B", "Technical Sales", "Customer Engagement", "Roadmap", "Needs Analysis"]
        }
    }
}

fn industry_group(industry: Industry) -> &'static [&'static str] {
    match industry {
        Industry::Semiconductor => &["HBM", "AI Semiconductor", "Foundry", "TSMC", "Nvidia", "CXL"],
        Industry::Display => &["OLED", "XR", "Automotive Display", "LTPO"],
    }
}

/// Hashtag keywords for interviews and cover letters: the industry, the head
/// terms of the sub-industry and role labels, plus the fixed groups gated by
/// strength, role and industry. Sorted and deduplicated; blank terms dropped.
pub fn build_keywords(
    industry: Industry,
    sub_industry: &str,
    role: Option<JobRole>,
    strength: Option<Strength>,
) -> Vec<String> {
    let mut keywords: BTreeSet<String> = BTreeSet::new();
    let mut add = |term: &str| {
        let term = term.trim();
        if !term.is_empty() {
            keywords.insert(term.to_string());
        }
    };

    add(industry.as_str());
    add(head_term(sub_industry));
    if let Some(role) = role {
        add(head_term(role.label()));
    }

    let strength_terms = strength.map(strength_group).unwrap_or_default();
    let role_terms = role.map(role_group).unwrap_or_default();
    for term in strength_terms.iter().chain(role_terms).chain(industry_group(industry)) {
        add(*term);
    }

    keywords.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted_unique(keywords: &[String]) {
        assert!(
            keywords.windows(2).all(|pair| pair[0] < pair[1]),
            "not sorted/unique: {keywords:?}"
        );
    }

    #[test]
    fn overlapping_groups_are_deduplicated() {
        // Reliability is in both the precision and the quality groups.
        let keywords = build_keywords(
            Industry::Semiconductor,
            "Memory (HBM, DRAM)",
            Some(JobRole::QualityYield),
            Some(Strength::NumericalPrecision),
        );

        assert_sorted_unique(&keywords);
        assert_eq!(keywords.iter().filter(|k| *k == "Reliability").count(), 1);
        assert!(keywords.contains(&"Memory".to_string()));
        assert!(keywords.contains(&"Quality/Yield".to_string()));
        assert!(keywords.contains(&"HBM".to_string()));
        assert!(keywords.contains(&"semiconductor".to_string()));
    }

    #[test]
    fn every_role_and_strength_combination_is_sorted() {
        for industry in Industry::ALL {
            for role in JobRole::ALL {
                for strength in Strength::AXES {
                    let keywords = build_keywords(
                        industry,
                        industry.sub_industries()[0],
                        Some(role),
                        Some(strength),
                    );
                    assert_sorted_unique(&keywords);
                }
            }
        }
    }

    #[test]
    fn missing_answers_only_drop_their_groups() {
        let keywords = build_keywords(Industry::Display, "", None, None);
        assert_eq!(keywords, vec!["Automotive Display", "LTPO", "OLED", "XR", "display"]);
    }
}
