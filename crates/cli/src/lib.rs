pub mod commands;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use careerfit_core::config::{AppConfig, LoadOptions, LogFormat};
use careerfit_core::SurveyAnswers;
use clap::{Args, Parser, Subcommand};
use commands::recommend::RecommendRequest;
use commands::DataOptions;

#[derive(Debug, Parser)]
#[command(
    name = "careerfit",
    about = "Semiconductor and display career fit advisor",
    long_about = "Analyze industry trends from yearly production, share, export and price data, then turn a self-assessment survey into tailored career advice.",
    after_help = "Examples:\n  careerfit analyze --industry semiconductor\n  careerfit recommend --survey survey.toml --json\n  careerfit companies --tier osat\n  careerfit doctor --json"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Config file (defaults to careerfit.toml or config/careerfit.toml)"
    )]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Compute growth rates and the market regime for an industry")]
    Analyze {
        #[arg(long, help = "semiconductor or display (Korean names accepted)")]
        industry: String,
        #[arg(long, help = "Industry CSV; must load, no sample fallback")]
        data: Option<PathBuf>,
    },
    #[command(about = "Show the latest-year raw values for an industry")]
    Snapshot {
        #[arg(long)]
        industry: String,
        #[arg(long)]
        data: Option<PathBuf>,
    },
    #[command(about = "Turn survey answers into a recommendation bundle")]
    Recommend(RecommendArgs),
    #[command(about = "List employers by tier")]
    Companies {
        #[arg(long, help = "idm|fabless|osat|foreign-equipment|local-equipment")]
        tier: Option<String>,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate config, dataset readiness and the recent analysis window")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

#[derive(Debug, Args)]
struct RecommendArgs {
    #[arg(long, help = "TOML file with survey answers")]
    survey: Option<PathBuf>,
    #[arg(long)]
    industry: Option<String>,
    #[arg(long)]
    sub_industry: Option<String>,
    #[arg(long, help = "Preparation stage label, matched by keyword")]
    stage: Option<String>,
    #[arg(long)]
    major: Option<String>,
    #[arg(long)]
    role: Option<String>,
    #[arg(long)]
    strength: Option<String>,
    #[arg(long, help = "Major theory level: low|mid|high")]
    theory: Option<String>,
    #[arg(long, help = "Business-level spoken language: capable|incapable")]
    business_language: Option<String>,
    #[arg(long)]
    toeic: Option<String>,
    #[arg(long)]
    opic: Option<String>,
    #[arg(long)]
    data: Option<PathBuf>,
    #[arg(long, help = "Emit machine-readable JSON output")]
    json: bool,
}

impl From<RecommendArgs> for RecommendRequest {
    fn from(args: RecommendArgs) -> Self {
        Self {
            survey_path: args.survey,
            answers: SurveyAnswers {
                industry: args.industry,
                sub_industry: args.sub_industry,
                stage: args.stage,
                major: args.major,
                job_role: args.role,
                strength: args.strength,
                theory_level: args.theory,
                business_language: args.business_language,
                toeic: args.toeic,
                opic: args.opic,
            },
            json: args.json,
        }
    }
}

/// Logs go to stderr so command payloads on stdout stay parseable.
fn init_logging(config_path: Option<&Path>) {
    use tracing::Level;

    let config = AppConfig::load(LoadOptions {
        config_path: config_path.map(Path::to_path_buf),
        ..LoadOptions::default()
    })
    .unwrap_or_default();
    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(log_level)
        .with_writer(std::io::stderr);

    let _ = match config.logging.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();
    init_logging(config_path);

    let data_options = |data: Option<PathBuf>| DataOptions {
        config_path: cli.config.clone(),
        data_path: data,
    };

    let result = match cli.command {
        Command::Analyze { industry, data } => commands::analyze::run(&industry, &data_options(data)),
        Command::Snapshot { industry, data } => {
            commands::snapshot::run(&industry, &data_options(data))
        }
        Command::Recommend(args) => {
            let options = data_options(args.data.clone());
            commands::recommend::run(RecommendRequest::from(args), &options)
        }
        Command::Companies { tier } => commands::companies::run(tier.as_deref()),
        Command::Config => commands::config::run(config_path),
        Command::Doctor { json } => commands::doctor::run(json, config_path),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
