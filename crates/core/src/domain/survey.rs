//! Self-assessment survey answers and their parsed, typed form.
//!
//! Raw answers arrive as free-text labels (English identifiers or the Korean
//! labels of the original questionnaire). They are parsed into enums once, at
//! the boundary, and every rule downstream matches on the enums.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::industry::Industry;
use crate::errors::DomainError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreparationStage {
    /// Just started collecting information.
    Foundation,
    /// Studying the major, no job-specific preparation yet.
    Coursework,
    /// Has project or extracurricular experience.
    Exploration,
    /// Actively writing portfolio and cover letters.
    Portfolio,
    /// Has internship, contract or industry experience.
    Experienced,
    /// Label did not match any known stage.
    Unspecified,
}

impl PreparationStage {
    pub const ORDERED: [PreparationStage; 5] = [
        PreparationStage::Foundation,
        PreparationStage::Coursework,
        PreparationStage::Exploration,
        PreparationStage::Portfolio,
        PreparationStage::Experienced,
    ];

    /// Keyword containment in questionnaire order; the first hit wins.
    /// English keywords must match whole words.
    pub fn from_label(label: &str) -> Self {
        let lowered = label.to_lowercase();
        let contains_any =
            |needles: &[&str]| needles.iter().any(|needle| contains_keyword(&lowered, needle));

        if contains_any(&["입문", "early", "foundation"]) {
            Self::Foundation
        } else if contains_any(&["전공 공부", "coursework"]) {
            Self::Coursework
        } else if contains_any(&["기본 경험", "basic experience", "exploration"]) {
            Self::Exploration
        } else if contains_any(&["포트폴리오", "portfolio"]) {
            Self::Portfolio
        } else if contains_any(&[
            "인턴/계약직",
            "실무 경험",
            "intern",
            "internship",
            "work experience",
            "experienced",
        ]) {
            Self::Experienced
        } else {
            Self::Unspecified
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Foundation => "Early stage: just started gathering information",
            Self::Coursework => "Coursework in progress, job preparation still lacking",
            Self::Exploration => "Have basic experience from projects or activities",
            Self::Portfolio => "Actively preparing portfolio and cover letters",
            Self::Experienced => "Have intern, contract or work experience",
            Self::Unspecified => "Unspecified",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Major {
    Electronics,
    MaterialsChemical,
    ComputerScience,
    Mechanical,
    Industrial,
    BusinessHumanities,
}

impl Major {
    pub fn is_non_technical(&self) -> bool {
        matches!(self, Self::BusinessHumanities)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Electronics => "Electronic Engineering",
            Self::MaterialsChemical => "Materials/Chemical Engineering",
            Self::ComputerScience => "Computer Science/SW",
            Self::Mechanical => "Mechanical Engineering",
            Self::Industrial => "Industrial Engineering",
            Self::BusinessHumanities => "Business/Humanities",
        }
    }
}

impl FromStr for Major {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase();
        match normalized.as_str() {
            "electronics" | "electronic engineering" | "전자공학" => Ok(Self::Electronics),
            "materials_chemical" | "materials/chemical engineering" | "재료/화학공학" => {
                Ok(Self::MaterialsChemical)
            }
            "computer_science" | "computer science/sw" | "컴퓨터공학/sw" => Ok(Self::ComputerScience),
            "mechanical" | "mechanical engineering" | "기계공학" => Ok(Self::Mechanical),
            "industrial" | "industrial engineering" | "산업공학" => Ok(Self::Industrial),
            "business_humanities" | "business/humanities" | "상경/인문계열" => {
                Ok(Self::BusinessHumanities)
            }
            _ => Err(DomainError::InvalidSurveyInput { field: "major", value: value.to_string() }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobRole {
    RndCircuitDesign,
    RndDeviceMaterials,
    ProcessManufacturing,
    QualityYield,
    StrategyPlanning,
    SalesMarketing,
}

impl JobRole {
    pub const ALL: [JobRole; 6] = [
        JobRole::RndCircuitDesign,
        JobRole::RndDeviceMaterials,
        JobRole::ProcessManufacturing,
        JobRole::QualityYield,
        JobRole::StrategyPlanning,
        JobRole::SalesMarketing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::RndCircuitDesign => "R&D (Circuit/Design)",
            Self::RndDeviceMaterials => "R&D (Device/Materials)",
            Self::ProcessManufacturing => "Process/Manufacturing/Equipment",
            Self::QualityYield => "Quality/Yield (QA)",
            Self::StrategyPlanning => "Management/Planning/Strategy",
            Self::SalesMarketing => "Sales/Marketing/CS",
        }
    }

    pub fn is_rnd(&self) -> bool {
        matches!(self, Self::RndCircuitDesign | Self::RndDeviceMaterials)
    }

    pub fn is_business_facing(&self) -> bool {
        matches!(self, Self::SalesMarketing | Self::StrategyPlanning)
    }

    /// Roles that assume hands-on device or fab knowledge.
    pub fn needs_technical_base(&self) -> bool {
        matches!(self, Self::ProcessManufacturing | Self::QualityYield | Self::RndDeviceMaterials)
    }
}

impl FromStr for JobRole {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase().replace(' ', "");
        let role = match normalized.as_str() {
            "rnd_circuit_design" | "r&d(circuit/design)" | "r&d(회로/설계)" => Self::RndCircuitDesign,
            "rnd_device_materials" | "r&d(device/materials)" | "r&d(소자/재료)" => {
                Self::RndDeviceMaterials
            }
            "process_manufacturing" | "process/manufacturing/equipment" | "공정/제조/설비" => {
                Self::ProcessManufacturing
            }
            "quality_yield" | "quality/yield(qa)" | "품질/수율(qa)" => Self::QualityYield,
            "strategy_planning" | "management/planning/strategy" | "경영/기획/전략" => {
                Self::StrategyPlanning
            }
            "sales_marketing" | "sales/marketing/cs" | "영업/마케팅/cs" => Self::SalesMarketing,
            _ => {
                return Err(DomainError::InvalidSurveyInput {
                    field: "job_role",
                    value: value.to_string(),
                })
            }
        };
        Ok(role)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    AnalyticalThinking,
    ProblemSolving,
    NumericalPrecision,
    Communication,
}

impl Strength {
    /// Radar chart axis order.
    pub const AXES: [Strength; 4] = [
        Strength::AnalyticalThinking,
        Strength::ProblemSolving,
        Strength::NumericalPrecision,
        Strength::Communication,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::AnalyticalThinking => "Analytical Thinking",
            Self::ProblemSolving => "Problem Solving",
            Self::NumericalPrecision => "Numerical Precision",
            Self::Communication => "Communication",
        }
    }
}

impl FromStr for Strength {
    type Err = DomainError;

    /// Matches by containment so annotated labels such as
    /// `분석적 사고력 (R&D/공정)` resolve to their strength.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lowered = value.to_lowercase();
        let contains_any = |needles: &[&str]| needles.iter().any(|needle| lowered.contains(needle));

        if contains_any(&["분석적 사고", "analytical"]) {
            Ok(Self::AnalyticalThinking)
        } else if contains_any(&["문제 해결", "problem"]) {
            Ok(Self::ProblemSolving)
        } else if contains_any(&["수치감각", "수치/정확성", "numerical", "precision"]) {
            Ok(Self::NumericalPrecision)
        } else if contains_any(&["커뮤니케이션", "communication"]) {
            Ok(Self::Communication)
        } else {
            Err(DomainError::InvalidSurveyInput { field: "strength", value: value.to_string() })
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TheoryLevel {
    Low,
    Mid,
    High,
}

impl FromStr for TheoryLevel {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" | "하" => Ok(Self::Low),
            "mid" | "medium" | "중" => Ok(Self::Mid),
            "high" | "상" => Ok(Self::High),
            _ => Err(DomainError::InvalidSurveyInput {
                field: "theory_level",
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessLanguage {
    Capable,
    Incapable,
}

impl FromStr for BusinessLanguage {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        // Exact match: `불가능` contains `가능`.
        match value.trim().to_ascii_lowercase().as_str() {
            "capable" | "yes" | "true" | "가능" => Ok(Self::Capable),
            "incapable" | "no" | "false" | "불가능" => Ok(Self::Incapable),
            _ => Err(DomainError::InvalidSurveyInput {
                field: "business_language",
                value: value.to_string(),
            }),
        }
    }
}

/// A completed survey. Answers a respondent skipped stay `None` and make the
/// rules that depend on them silent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub industry: Industry,
    pub sub_industry: String,
    pub stage: PreparationStage,
    pub major: Option<Major>,
    pub job_role: Option<JobRole>,
    pub strength: Option<Strength>,
    pub theory_level: Option<TheoryLevel>,
    pub business_language: Option<BusinessLanguage>,
    pub toeic: Option<String>,
    pub opic: Option<String>,
}

impl SurveyResponse {
    pub fn new(industry: Industry) -> Self {
        Self {
            industry,
            sub_industry: String::new(),
            stage: PreparationStage::Unspecified,
            major: None,
            job_role: None,
            strength: None,
            theory_level: None,
            business_language: None,
            toeic: None,
            opic: None,
        }
    }

    pub fn with_sub_industry(mut self, sub_industry: impl Into<String>) -> Self {
        self.sub_industry = sub_industry.into();
        self
    }

    pub fn with_stage(mut self, stage: PreparationStage) -> Self {
        self.stage = stage;
        self
    }

    pub fn with_major(mut self, major: Major) -> Self {
        self.major = Some(major);
        self
    }

    pub fn with_job_role(mut self, job_role: JobRole) -> Self {
        self.job_role = Some(job_role);
        self
    }

    pub fn with_strength(mut self, strength: Strength) -> Self {
        self.strength = Some(strength);
        self
    }

    pub fn with_theory_level(mut self, theory_level: TheoryLevel) -> Self {
        self.theory_level = Some(theory_level);
        self
    }

    pub fn with_business_language(mut self, business_language: BusinessLanguage) -> Self {
        self.business_language = Some(business_language);
        self
    }

    /// Sub-industry mentions memory products (DRAM, NAND, HBM lines).
    pub fn targets_memory(&self) -> bool {
        self.industry == Industry::Semiconductor
            && mentions_any(&self.sub_industry, &["메모리", "memory", "dram", "nand"])
    }

    /// Sub-industry mentions logic: system semiconductors or foundry.
    pub fn targets_foundry(&self) -> bool {
        self.industry == Industry::Semiconductor
            && mentions_any(
                &self.sub_industry,
                &["시스템 반도체", "파운드리", "system semiconductor", "foundry"],
            )
    }
}

/// Hangul needles match anywhere since particles attach to the word; ASCII
/// needles need a non-alphanumeric neighbour on both sides.
fn contains_keyword(haystack: &str, needle: &str) -> bool {
    if !needle.is_ascii() {
        return haystack.contains(needle);
    }
    haystack.match_indices(needle).any(|(start, matched)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + matched.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

fn mentions_any(label: &str, needles: &[&str]) -> bool {
    let lowered = label.to_lowercase();
    needles.iter().any(|needle| lowered.contains(needle))
}

/// Raw survey answers as written in a survey file or passed on the command line.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SurveyAnswers {
    pub industry: Option<String>,
    pub sub_industry: Option<String>,
    pub stage: Option<String>,
    pub major: Option<String>,
    pub job_role: Option<String>,
    pub strength: Option<String>,
    pub theory_level: Option<String>,
    pub business_language: Option<String>,
    pub toeic: Option<String>,
    pub opic: Option<String>,
}

impl SurveyAnswers {
    /// Parses every answered label. Only the industry is required. Unanswered
    /// or unrecognised labels stay `None` and the stage falls back to
    /// [`PreparationStage::Unspecified`], so the rules that need them go quiet.
    pub fn parse(self) -> Result<SurveyResponse, DomainError> {
        let industry = match self.industry.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => value.parse::<Industry>()?,
            _ => {
                return Err(DomainError::InvalidSurveyInput {
                    field: "industry",
                    value: String::new(),
                })
            }
        };

        Ok(SurveyResponse {
            industry,
            sub_industry: self.sub_industry.unwrap_or_default().trim().to_string(),
            stage: self
                .stage
                .as_deref()
                .map(PreparationStage::from_label)
                .unwrap_or(PreparationStage::Unspecified),
            major: parse_answer("major", self.major.as_deref()),
            job_role: parse_answer("job_role", self.job_role.as_deref()),
            strength: parse_answer("strength", self.strength.as_deref()),
            theory_level: parse_answer("theory_level", self.theory_level.as_deref()),
            business_language: parse_answer("business_language", self.business_language.as_deref()),
            toeic: non_blank(self.toeic),
            opic: non_blank(self.opic),
        })
    }
}

fn parse_answer<T>(field: &'static str, value: Option<&str>) -> Option<T>
where
    T: FromStr<Err = DomainError>,
{
    let value = value.map(str::trim).filter(|value| !value.is_empty())?;
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(error) => {
            warn!(
                event_name = "survey.answer.unrecognised",
                field,
                value,
                error = %error,
                "survey answer not recognised, treated as unanswered"
            );
            None
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

/// Radar chart values for the four strength axes: the chosen strength is
/// drawn at 5, the others at the baseline 2.
pub fn strength_profile(selected: Option<Strength>) -> [(Strength, u8); 4] {
    Strength::AXES.map(|axis| (axis, if Some(axis) == selected { 5 } else { 2 }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_matches_original_questionnaire_labels() {
        let cases = [
            ("이제 정보를 모으기 시작하는 단계이다. (입문 단계)", PreparationStage::Foundation),
            ("전공 공부는 하고 있지만 직무 준비는 아직 부족하다.", PreparationStage::Coursework),
            ("프로젝트·대외활동 등 기본 경험은 있다.", PreparationStage::Exploration),
            (
                "포트폴리오·자기소개서 등 취업 준비를 본격적으로 하고 있다.",
                PreparationStage::Portfolio,
            ),
            ("인턴/계약직/실무 경험이 있어 실전 준비가 되어 있다.", PreparationStage::Experienced),
        ];

        for (label, expected) in cases {
            assert_eq!(PreparationStage::from_label(label), expected, "label: {label}");
        }
    }

    #[test]
    fn stage_matches_english_keywords_and_falls_back() {
        assert_eq!(PreparationStage::from_label("Early stage"), PreparationStage::Foundation);
        assert_eq!(PreparationStage::from_label("portfolio"), PreparationStage::Portfolio);
        assert_eq!(PreparationStage::from_label("experienced"), PreparationStage::Experienced);
        assert_eq!(PreparationStage::from_label("undecided"), PreparationStage::Unspecified);
        assert_eq!(PreparationStage::from_label(""), PreparationStage::Unspecified);
    }

    #[test]
    fn stage_english_keywords_match_whole_words() {
        assert_eq!(
            PreparationStage::from_label("Coursework nearly done"),
            PreparationStage::Coursework
        );
        assert_eq!(PreparationStage::from_label("yearly planning"), PreparationStage::Unspecified);
        assert_eq!(
            PreparationStage::from_label("international exchange"),
            PreparationStage::Unspecified
        );
        assert_eq!(
            PreparationStage::from_label("Finished an internship"),
            PreparationStage::Experienced
        );
        assert_eq!(PreparationStage::from_label("early-stage"), PreparationStage::Foundation);
        assert_eq!(PreparationStage::from_label("(입문 단계)"), PreparationStage::Foundation);
    }

    #[test]
    fn stage_labels_round_trip_through_from_label() {
        for stage in PreparationStage::ORDERED {
            assert_eq!(PreparationStage::from_label(stage.label()), stage);
        }
    }

    #[test]
    fn job_role_parses_korean_and_english_labels() {
        assert_eq!("R&D(회로/설계)".parse::<JobRole>().ok(), Some(JobRole::RndCircuitDesign));
        assert_eq!("품질/수율(QA)".parse::<JobRole>().ok(), Some(JobRole::QualityYield));
        for role in JobRole::ALL {
            assert_eq!(role.label().parse::<JobRole>().ok(), Some(role));
        }
        assert!("astronaut".parse::<JobRole>().is_err());
    }

    #[test]
    fn strength_parses_annotated_labels() {
        assert_eq!(
            "분석적 사고력 (R&D/공정)".parse::<Strength>().ok(),
            Some(Strength::AnalyticalThinking)
        );
        assert_eq!(
            "수치감각/정확성 (품질·수율)".parse::<Strength>().ok(),
            Some(Strength::NumericalPrecision)
        );
        assert_eq!(
            "커뮤니케이션 (마케팅/전략/CS)".parse::<Strength>().ok(),
            Some(Strength::Communication)
        );
        assert_eq!("problem_solving".parse::<Strength>().ok(), Some(Strength::ProblemSolving));
    }

    #[test]
    fn business_language_does_not_confuse_negation() {
        assert_eq!("불가능".parse::<BusinessLanguage>().ok(), Some(BusinessLanguage::Incapable));
        assert_eq!("가능".parse::<BusinessLanguage>().ok(), Some(BusinessLanguage::Capable));
    }

    #[test]
    fn answers_parse_into_typed_response() {
        let answers = SurveyAnswers {
            industry: Some("반도체".to_string()),
            sub_industry: Some("메모리(HBM,DRAM)".to_string()),
            stage: Some("포트폴리오 준비".to_string()),
            major: Some("상경/인문계열".to_string()),
            job_role: Some("공정/제조/설비".to_string()),
            strength: Some("문제 해결 능력 (장비/엔지니어)".to_string()),
            theory_level: Some("하".to_string()),
            business_language: Some("불가능".to_string()),
            toeic: Some(" ".to_string()),
            opic: Some("IM2+".to_string()),
        };

        let survey = answers.parse().expect("answers should parse");
        assert_eq!(survey.industry, Industry::Semiconductor);
        assert_eq!(survey.stage, PreparationStage::Portfolio);
        assert_eq!(survey.major, Some(Major::BusinessHumanities));
        assert_eq!(survey.job_role, Some(JobRole::ProcessManufacturing));
        assert_eq!(survey.strength, Some(Strength::ProblemSolving));
        assert_eq!(survey.theory_level, Some(TheoryLevel::Low));
        assert_eq!(survey.business_language, Some(BusinessLanguage::Incapable));
        assert_eq!(survey.toeic, None);
        assert_eq!(survey.opic.as_deref(), Some("IM2+"));
        assert!(survey.targets_memory());
        assert!(!survey.targets_foundry());
    }

    #[test]
    fn answers_without_industry_are_rejected() {
        let error = SurveyAnswers::default().parse().expect_err("industry is required");
        assert!(matches!(error, DomainError::InvalidSurveyInput { field: "industry", .. }));
    }

    #[test]
    fn unrecognised_labels_are_treated_as_unanswered() {
        let answers = SurveyAnswers {
            industry: Some("반도체".to_string()),
            job_role: Some("R&D(회로/설계)".to_string()),
            strength: Some("리더십".to_string()),
            major: Some("천문학".to_string()),
            theory_level: Some("very high".to_string()),
            business_language: Some("maybe".to_string()),
            ..SurveyAnswers::default()
        };

        let survey = answers.parse().expect("unknown labels should not fail");
        assert_eq!(survey.job_role, Some(JobRole::RndCircuitDesign));
        assert_eq!(survey.strength, None);
        assert_eq!(survey.major, None);
        assert_eq!(survey.theory_level, None);
        assert_eq!(survey.business_language, None);

        let answers = SurveyAnswers {
            industry: Some("display".to_string()),
            job_role: Some("pilot".to_string()),
            ..SurveyAnswers::default()
        };
        assert_eq!(answers.parse().expect("parsed").job_role, None);
    }

    #[test]
    fn unknown_industry_is_still_rejected() {
        let answers = SurveyAnswers {
            industry: Some("shipbuilding".to_string()),
            ..SurveyAnswers::default()
        };
        assert!(answers.parse().is_err());
    }

    #[test]
    fn memory_focus_requires_semiconductor_industry() {
        let display = SurveyResponse::new(Industry::Display).with_sub_industry("DRAM");
        assert!(!display.targets_memory());

        let foundry = SurveyResponse::new(Industry::Semiconductor)
            .with_sub_industry("시스템 반도체(파운드리,팹리스)");
        assert!(foundry.targets_foundry());
        assert!(!foundry.targets_memory());
    }

    #[test]
    fn strength_profile_highlights_selected_axis() {
        let profile = strength_profile(Some(Strength::NumericalPrecision));
        assert_eq!(
            profile.map(|(_, value)| value),
            [2, 2, 5, 2],
            "only the selected axis is raised"
        );
        assert!(strength_profile(None).iter().all(|(_, value)| *value == 2));
    }
}
