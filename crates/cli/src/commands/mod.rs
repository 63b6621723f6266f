pub mod analyze;
pub mod companies;
pub mod config;
pub mod doctor;
pub mod recommend;
pub mod snapshot;

use std::path::{Path, PathBuf};

use careerfit_core::config::{AppConfig, ConfigError, LoadOptions};
use careerfit_core::dataset::{load_csv, load_or_sample, DataSource, LoadedDataset};
use careerfit_core::errors::ApplicationError;
use careerfit_core::Industry;
use serde::Serialize;
use serde_json::Value;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_CONFIG: u8 = 2;
pub const EXIT_DATASET: u8 = 3;
pub const EXIT_INSUFFICIENT_DATA: u8 = 4;
pub const EXIT_INVALID_INPUT: u8 = 5;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

impl CommandResult {
    pub fn success_with_data(
        command: &str,
        message: impl Into<String>,
        data: Option<impl Serialize>,
    ) -> Self {
        let data = match data.map(serde_json::to_value).transpose() {
            Ok(data) => data,
            Err(error) => {
                return Self::failure(
                    command,
                    "serialization",
                    format!("failed to serialize command output: {error}"),
                    EXIT_FAILURE,
                )
            }
        };
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
            data,
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    /// Output that bypasses the JSON envelope.
    pub fn text(output: impl Into<String>) -> Self {
        Self::text_with_exit(output, 0)
    }

    pub fn text_with_exit(output: impl Into<String>, exit_code: u8) -> Self {
        Self { exit_code, output: output.into() }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
            data: None,
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    pub fn config_failure(command: &str, error: &ConfigError) -> Self {
        Self::failure(
            command,
            "config_validation",
            format!("config validation failed: {error}"),
            EXIT_CONFIG,
        )
    }

    /// Maps an application error through its interface form so the message
    /// and class stay user safe.
    pub fn application_failure(command: &str, error: ApplicationError) -> Self {
        let interface = error.into_interface(command);
        let exit_code = match interface.error_class() {
            "invalid_input" => EXIT_INVALID_INPUT,
            "insufficient_data" => EXIT_INSUFFICIENT_DATA,
            "dataset" => EXIT_DATASET,
            _ => EXIT_FAILURE,
        };
        Self::failure(
            command,
            interface.error_class(),
            format!("{} ({interface})", interface.user_message()),
            exit_code,
        )
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

/// Flags shared by commands that read the industry dataset.
#[derive(Debug, Clone, Default)]
pub struct DataOptions {
    pub config_path: Option<PathBuf>,
    /// An explicit CSV must load; a configured one may fall back to the sample.
    pub data_path: Option<PathBuf>,
}

pub(crate) struct Workspace {
    pub config: AppConfig,
    pub dataset: LoadedDataset,
}

pub(crate) fn open_workspace(command: &str, options: &DataOptions) -> Result<Workspace, CommandResult> {
    let config = AppConfig::load(LoadOptions {
        config_path: options.config_path.clone(),
        ..LoadOptions::default()
    })
    .map_err(|error| CommandResult::config_failure(command, &error))?;

    let dataset = match options.data_path.as_deref() {
        Some(path) => load_explicit(path)
            .map_err(|error| CommandResult::application_failure(command, error))?,
        None => load_or_sample(config.data.path.as_deref()),
    };

    tracing::debug!(
        event_name = "cli.dataset.ready",
        command,
        source = %dataset.source.describe(),
        rows = dataset.table.len(),
        "dataset ready"
    );

    Ok(Workspace { config, dataset })
}

fn load_explicit(path: &Path) -> Result<LoadedDataset, ApplicationError> {
    let table = load_csv(path)?;
    Ok(LoadedDataset { table, source: DataSource::File { path: path.to_path_buf() } })
}

pub(crate) fn parse_industry(command: &str, value: &str) -> Result<Industry, CommandResult> {
    value
        .parse::<Industry>()
        .map_err(|error| CommandResult::application_failure(command, error.into()))
}
