use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use careerfit_core::errors::ApplicationError;
use careerfit_core::{
    format_growth, strength_profile, MetricRole, RecommendationBundle, RecommendationEngine,
    Strength, SurveyAnswers, SurveyResponse, TrendAnalyzer, TrendSet,
};
use serde::Serialize;

use super::{open_workspace, CommandResult, DataOptions, EXIT_INVALID_INPUT};

const COMMAND: &str = "recommend";

#[derive(Debug, Clone, Default)]
pub struct RecommendRequest {
    /// TOML file with survey answers; individual answers override it.
    pub survey_path: Option<PathBuf>,
    pub answers: SurveyAnswers,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct StrengthAxis {
    strength: Strength,
    label: &'static str,
    value: u8,
}

#[derive(Debug, Serialize)]
struct RecommendReport<'a> {
    survey: &'a SurveyResponse,
    window_start: i32,
    window_end: i32,
    strength_profile: Vec<StrengthAxis>,
    #[serde(flatten)]
    bundle: &'a RecommendationBundle,
}

pub fn run(request: RecommendRequest, options: &DataOptions) -> CommandResult {
    let answers = match collect_answers(request.survey_path.as_deref(), request.answers) {
        Ok(answers) => answers,
        Err(error) => {
            return CommandResult::failure(
                COMMAND,
                "invalid_input",
                format!("{error:#}"),
                EXIT_INVALID_INPUT,
            )
        }
    };
    let survey = match answers.parse() {
        Ok(survey) => survey,
        Err(error) => return CommandResult::application_failure(COMMAND, error.into()),
    };

    let workspace = match open_workspace(COMMAND, options) {
        Ok(workspace) => workspace,
        Err(result) => return result,
    };
    let analyzer = TrendAnalyzer::with_min_year(workspace.config.analysis.min_year);
    let trends = match analyzer.analyze(&workspace.dataset.table, survey.industry) {
        Ok(trends) => trends,
        Err(error) => {
            return CommandResult::application_failure(COMMAND, ApplicationError::from(error))
        }
    };

    let bundle = RecommendationEngine::new().recommend(&trends, &survey);

    if request.json {
        let report = RecommendReport {
            survey: &survey,
            window_start: trends.window_start,
            window_end: trends.window_end,
            strength_profile: strength_profile(survey.strength)
                .into_iter()
                .map(|(strength, value)| StrengthAxis { strength, label: strength.label(), value })
                .collect(),
            bundle: &bundle,
        };
        let message = format!("{} recommendation ({})", survey.industry, bundle.regime.label());
        return CommandResult::success_with_data(COMMAND, message, Some(report));
    }

    CommandResult::text(render_human(&survey, &trends, &bundle))
}

/// Reads the survey file, if any, and lays the individual answers over it.
fn collect_answers(path: Option<&Path>, flags: SurveyAnswers) -> anyhow::Result<SurveyAnswers> {
    let base = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("could not read survey file `{}`", path.display()))?;
            toml::from_str::<SurveyAnswers>(&raw)
                .with_context(|| format!("could not parse survey file `{}`", path.display()))?
        }
        None => SurveyAnswers::default(),
    };

    Ok(SurveyAnswers {
        industry: flags.industry.or(base.industry),
        sub_industry: flags.sub_industry.or(base.sub_industry),
        stage: flags.stage.or(base.stage),
        major: flags.major.or(base.major),
        job_role: flags.job_role.or(base.job_role),
        strength: flags.strength.or(base.strength),
        theory_level: flags.theory_level.or(base.theory_level),
        business_language: flags.business_language.or(base.business_language),
        toeic: flags.toeic.or(base.toeic),
        opic: flags.opic.or(base.opic),
    })
}

fn render_human(survey: &SurveyResponse, trends: &TrendSet, bundle: &RecommendationBundle) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "Market outlook: {} {}-{} ({})",
        survey.industry,
        trends.window_start,
        trends.window_end,
        bundle.regime.label()
    ));
    lines.push(format!("  {}", bundle.market_summary));
    for role in MetricRole::ALL {
        let name = match role {
            MetricRole::Price => trends.price_name.as_deref().unwrap_or("price"),
            other => other.as_str(),
        };
        lines.push(format!("  - {name}: {}", format_growth(trends.cagr(role))));
    }

    lines.push(String::new());
    lines.push("Strength profile".to_string());
    for (strength, value) in strength_profile(survey.strength) {
        lines.push(format!("  - {}: {value}", strength.label()));
    }

    lines.push(String::new());
    lines.push(format!("Preparation stage: {}", survey.stage.label()));
    lines.extend(bundle.status_tip.lines().map(|line| format!("  {line}")));

    if !bundle.core_advice.is_empty() {
        lines.push(String::new());
        lines.push("Role advice".to_string());
        lines.extend(bundle.core_advice.lines().map(|line| format!("  {line}")));
    }

    if !bundle.complement_tips.is_empty() {
        lines.push(String::new());
        lines.push("Gaps to close".to_string());
        lines.extend(bundle.complement_tips.iter().map(|tip| format!("  - {tip}")));
    }

    lines.push(String::new());
    lines.push("Interview questions".to_string());
    lines.extend(
        bundle
            .interview_questions
            .iter()
            .enumerate()
            .map(|(index, question)| format!("  {}. {question}", index + 1)),
    );

    lines.push(String::new());
    lines.push(format!(
        "Keywords: {}",
        bundle.keywords.iter().map(|keyword| format!("#{keyword}")).collect::<Vec<_>>().join(" ")
    ));

    lines.join("\n")
}
