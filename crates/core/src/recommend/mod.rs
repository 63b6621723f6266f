//! Rule-based career recommendation engine
//!
//! Maps a [`TrendSet`] and a [`SurveyResponse`] to a bundle of advice,
//! interview questions and keywords. Every rule is a fixed branch on the
//! parsed survey enums, so the same inputs always give the same bundle.

mod keywords;
mod tables;

pub use keywords::build_keywords;
pub use tables::{role_strength_advice, stage_tip, COMMON_QUESTIONS, GENERIC_STAGE_TIP};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::industry::Industry;
use crate::domain::survey::{BusinessLanguage, JobRole, SurveyResponse, TheoryLevel};
use crate::trends::{classify_regime, MarketRegime, TrendSet};

/// Maximum number of complement tips, one per rule.
pub const MAX_COMPLEMENT_TIPS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    pub regime: MarketRegime,
    pub market_summary: String,
    pub status_tip: String,
    /// Empty when no advice is defined for the role and strength pairing.
    pub core_advice: String,
    pub complement_tips: Vec<String>,
    pub interview_questions: Vec<String>,
    pub keywords: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn recommend(&self, trends: &TrendSet, survey: &SurveyResponse) -> RecommendationBundle {
        let regime = classify_regime(trends);

        let core_advice = match (survey.job_role, survey.strength) {
            (Some(role), Some(strength)) => role_strength_advice(role, strength),
            _ => None,
        };

        let bundle = RecommendationBundle {
            regime,
            market_summary: regime.narrative().to_string(),
            status_tip: stage_tip(survey.stage).to_string(),
            core_advice: core_advice.unwrap_or_default().to_string(),
            complement_tips: complement_tips(survey),
            interview_questions: interview_questions(survey),
            keywords: build_keywords(
                survey.industry,
                &survey.sub_industry,
                survey.job_role,
                survey.strength,
            ),
        };

        debug!(
            event_name = "recommend.bundle.built",
            industry = survey.industry.as_str(),
            regime = regime.label(),
            has_core_advice = !bundle.core_advice.is_empty(),
            complement_tips = bundle.complement_tips.len(),
            interview_questions = bundle.interview_questions.len(),
            keywords = bundle.keywords.len(),
            "recommendation bundle built"
        );

        bundle
    }
}

/// Convenience wrapper over [`RecommendationEngine::recommend`].
pub fn recommend(trends: &TrendSet, survey: &SurveyResponse) -> RecommendationBundle {
    RecommendationEngine::new().recommend(trends, survey)
}

/// Gap-filling tips. The three rules are independent and keep this order.
fn complement_tips(survey: &SurveyResponse) -> Vec<String> {
    let mut tips = Vec::with_capacity(MAX_COMPLEMENT_TIPS);
    let role = survey.job_role;

    if role.is_some_and(|role| role.is_rnd()) && survey.theory_level == Some(TheoryLevel::Low) {
        tips.push(tables::GRADUATE_COURSEWORK_TIP.to_string());
    }
    if survey.major.is_some_and(|major| major.is_non_technical())
        && role.is_some_and(|role| role.needs_technical_base())
    {
        tips.push(tables::TECHNICAL_FOUNDATION_TIP.to_string());
    }
    if role.is_some_and(|role| role.is_business_facing())
        && survey.business_language == Some(BusinessLanguage::Incapable)
    {
        tips.push(tables::SPOKEN_BUSINESS_TIP.to_string());
    }

    tips
}

/// Industry blocks first, the common fundamentals last. Not deduplicated.
fn interview_questions(survey: &SurveyResponse) -> Vec<String> {
    let mut questions: Vec<&str> = Vec::new();
    let designs_circuits = survey.job_role == Some(JobRole::RndCircuitDesign);

    if survey.targets_memory() {
        questions.extend(tables::MEMORY_QUESTIONS);
        if designs_circuits {
            questions.push(tables::MEMORY_DESIGN_QUESTION);
        }
    }
    if survey.targets_foundry() {
        questions.extend(tables::FOUNDRY_QUESTIONS);
        if designs_circuits {
            questions.push(tables::FOUNDRY_DESIGN_QUESTION);
        }
    }
    if survey.industry == Industry::Display {
        questions.extend(tables::DISPLAY_QUESTIONS);
    }
    questions.extend(COMMON_QUESTIONS);

    questions.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::domain::industry::MetricRole;
    use crate::domain::survey::{Major, PreparationStage, Strength};
    use crate::trends::MetricTrend;

    fn trends(production: Option<f64>, price: Option<f64>) -> TrendSet {
        let mut metrics = BTreeMap::new();
        metrics.insert(MetricRole::Production, MetricTrend { cagr: production, latest: Some(400.0) });
        metrics.insert(MetricRole::Price, MetricTrend { cagr: price, latest: Some(4.2) });
        TrendSet {
            industry: Industry::Semiconductor,
            window_start: 2020,
            window_end: 2024,
            metrics,
            price_name: Some("DRAM price".to_string()),
        }
    }

    fn survey() -> SurveyResponse {
        SurveyResponse::new(Industry::Semiconductor)
            .with_sub_industry("Memory (HBM, DRAM)")
            .with_stage(PreparationStage::Exploration)
            .with_major(Major::Electronics)
            .with_job_role(JobRole::RndCircuitDesign)
            .with_strength(Strength::AnalyticalThinking)
            .with_theory_level(TheoryLevel::High)
            .with_business_language(BusinessLanguage::Capable)
    }

    #[test]
    fn bundle_is_deterministic() {
        let trends = trends(Some(0.05), Some(0.04));
        let first = recommend(&trends, &survey());
        let second = recommend(&trends, &survey());

        assert_eq!(first, second);
        let first_json = serde_json::to_string(&first).expect("serialize");
        let second_json = serde_json::to_string(&second).expect("serialize");
        assert_eq!(first_json, second_json);
    }

    #[test]
    fn market_summary_follows_regime() {
        let bundle = recommend(&trends(Some(0.05), Some(-0.05)), &survey());
        assert_eq!(bundle.regime, MarketRegime::CapacityRace);
        assert_eq!(bundle.market_summary, MarketRegime::CapacityRace.narrative());

        let bundle = recommend(&trends(None, Some(0.1)), &survey());
        assert_eq!(bundle.regime, MarketRegime::InsufficientSignal);
        assert_eq!(
            bundle.market_summary,
            "There is not enough data to judge the industry outlook precisely."
        );
    }

    #[test]
    fn stage_advice_is_never_empty() {
        for stage in PreparationStage::ORDERED.into_iter().chain([PreparationStage::Unspecified]) {
            let bundle = recommend(&trends(None, None), &survey().with_stage(stage));
            assert!(!bundle.status_tip.is_empty());
        }
        let bundle =
            recommend(&trends(None, None), &survey().with_stage(PreparationStage::Unspecified));
        assert_eq!(bundle.status_tip, GENERIC_STAGE_TIP);
    }

    #[test]
    fn core_advice_is_empty_without_table_entry() {
        let response = survey()
            .with_job_role(JobRole::SalesMarketing)
            .with_strength(Strength::NumericalPrecision);
        let bundle = recommend(&trends(Some(0.0), Some(0.0)), &response);
        assert_eq!(bundle.core_advice, "");

        let mut unanswered = survey();
        unanswered.strength = None;
        assert_eq!(recommend(&trends(None, None), &unanswered).core_advice, "");
    }

    #[test]
    fn core_advice_uses_role_and_strength() {
        let bundle = recommend(&trends(None, None), &survey());
        assert!(bundle.core_advice.contains("TCAD"));
    }

    #[test]
    fn complement_tips_fire_independently() {
        // Each gate is driven by a different answer, so every combination of
        // the three rules can be reached with a role that satisfies its gate.
        for mask in 0u8..8 {
            let rnd_low_theory = mask & 1 != 0;
            let non_technical_major = mask & 2 != 0;
            let no_business_language = mask & 4 != 0;

            let mut response = SurveyResponse::new(Industry::Display);
            response.theory_level =
                Some(if rnd_low_theory { TheoryLevel::Low } else { TheoryLevel::High });
            response.major = Some(if non_technical_major {
                Major::BusinessHumanities
            } else {
                Major::Electronics
            });
            response.business_language = Some(if no_business_language {
                BusinessLanguage::Incapable
            } else {
                BusinessLanguage::Capable
            });

            // Role choice decides which gates can open at all.
            let tips_for = |role: JobRole| {
                let mut response = response.clone();
                response.job_role = Some(role);
                complement_tips(&response)
            };

            let materials = tips_for(JobRole::RndDeviceMaterials);
            let expected_materials = usize::from(rnd_low_theory) + usize::from(non_technical_major);
            assert_eq!(materials.len(), expected_materials, "mask {mask:03b}");

            let sales = tips_for(JobRole::SalesMarketing);
            assert_eq!(sales.len(), usize::from(no_business_language), "mask {mask:03b}");

            for role in JobRole::ALL {
                assert!(tips_for(role).len() <= MAX_COMPLEMENT_TIPS);
            }
        }
    }

    #[test]
    fn complement_tips_keep_rule_order() {
        let survey = SurveyResponse::new(Industry::Semiconductor)
            .with_job_role(JobRole::RndDeviceMaterials)
            .with_theory_level(TheoryLevel::Low)
            .with_major(Major::BusinessHumanities);
        let tips = complement_tips(&survey);

        assert_eq!(
            tips,
            vec![
                tables::GRADUATE_COURSEWORK_TIP.to_string(),
                tables::TECHNICAL_FOUNDATION_TIP.to_string()
            ]
        );
    }

    #[test]
    fn complement_tips_need_answers() {
        let survey = SurveyResponse::new(Industry::Semiconductor);
        assert!(complement_tips(&survey).is_empty());
    }

    #[test]
    fn memory_design_track_gets_tsv_question() {
        let bundle = recommend(&trends(None, None), &survey());
        let questions = &bundle.interview_questions;

        assert_eq!(questions.len(), 5);
        assert_eq!(questions[0], tables::MEMORY_QUESTIONS[0]);
        assert_eq!(questions[2], tables::MEMORY_DESIGN_QUESTION);
    }

    #[test]
    fn foundry_and_memory_blocks_can_both_fire() {
        let survey = survey().with_sub_industry("Memory and foundry");
        let questions = recommend(&trends(None, None), &survey).interview_questions;

        assert_eq!(questions.len(), 8);
        assert_eq!(questions[3], tables::FOUNDRY_QUESTIONS[0]);
        assert_eq!(questions[5], tables::FOUNDRY_DESIGN_QUESTION);
    }

    #[test]
    fn interview_questions_always_end_with_common_fundamentals() {
        let surveys = [
            survey(),
            survey().with_sub_industry("Devices/Materials/Equipment"),
            SurveyResponse::new(Industry::Display).with_sub_industry("Large Panel (TV)"),
            SurveyResponse::new(Industry::Semiconductor),
        ];

        for survey in surveys {
            let questions = recommend(&trends(None, None), &survey).interview_questions;
            assert!(questions.len() >= 2);
            assert_eq!(&questions[questions.len() - 2..], &COMMON_QUESTIONS[..]);
        }
    }

    #[test]
    fn display_block_precedes_common_tail() {
        let survey = SurveyResponse::new(Industry::Display).with_job_role(JobRole::RndCircuitDesign);
        let questions = recommend(&trends(None, None), &survey).interview_questions;
        assert_eq!(questions.len(), 5);
        assert!(questions[0].contains("OLED"));
    }

    #[test]
    fn keywords_are_sorted_and_unique() {
        let bundle = recommend(&trends(None, None), &survey());
        assert!(bundle.keywords.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(bundle.keywords.contains(&"R&D".to_string()));
    }
}
