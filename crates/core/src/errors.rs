use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("insufficient data: {rows} row(s) from {min_year} onward, at least 2 required")]
    InsufficientData { rows: usize, min_year: i32 },
    #[error("invalid survey answer for `{field}`: `{value}`")]
    InvalidSurveyInput { field: &'static str, value: String },
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("dataset failure: {0}")]
    Dataset(String),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InterfaceError {
    #[error("bad request: {message}")]
    BadRequest { message: String, correlation_id: String },
    #[error("insufficient data: {message}")]
    InsufficientData { message: String, correlation_id: String },
    #[error("data unavailable: {message}")]
    DataUnavailable { message: String, correlation_id: String },
    #[error("internal error: {message}")]
    Internal { message: String, correlation_id: String },
}

impl InterfaceError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => {
                "The survey answers could not be processed. Check inputs and try again."
            }
            Self::InsufficientData { .. } => {
                "There is not enough recent industry data to analyze trends."
            }
            Self::DataUnavailable { .. } => {
                "The industry dataset could not be read. Check the data source and try again."
            }
            Self::Internal { .. } => "An unexpected internal error occurred.",
        }
    }

    /// Stable machine-readable class used in command payloads.
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "invalid_input",
            Self::InsufficientData { .. } => "insufficient_data",
            Self::DataUnavailable { .. } => "dataset",
            Self::Internal { .. } => "internal",
        }
    }
}

impl ApplicationError {
    pub fn into_interface(self, correlation_id: impl Into<String>) -> InterfaceError {
        let correlation_id = correlation_id.into();
        let mut mapped = InterfaceError::from(self);
        match &mut mapped {
            InterfaceError::BadRequest { correlation_id: id, .. }
            | InterfaceError::InsufficientData { correlation_id: id, .. }
            | InterfaceError::DataUnavailable { correlation_id: id, .. }
            | InterfaceError::Internal { correlation_id: id, .. } => *id = correlation_id,
        }
        mapped
    }
}

impl From<ApplicationError> for InterfaceError {
    fn from(value: ApplicationError) -> Self {
        let correlation_id = "unassigned".to_owned();
        match value {
            ApplicationError::Domain(error @ DomainError::InsufficientData { .. }) => {
                Self::InsufficientData { message: error.to_string(), correlation_id }
            }
            ApplicationError::Domain(error @ DomainError::InvalidSurveyInput { .. }) => {
                Self::BadRequest { message: error.to_string(), correlation_id }
            }
            ApplicationError::Domain(DomainError::InvariantViolation(message))
            | ApplicationError::Dataset(message) => {
                Self::DataUnavailable { message, correlation_id }
            }
            ApplicationError::Configuration(message) => Self::Internal { message, correlation_id },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::{ApplicationError, DomainError, InterfaceError};

    #[test]
    fn insufficient_data_maps_to_dedicated_interface_error() {
        let interface =
            ApplicationError::from(DomainError::InsufficientData { rows: 1, min_year: 2020 })
                .into_interface("req-1");

        assert!(matches!(
            interface,
            InterfaceError::InsufficientData {
                ref correlation_id,
                ..
            } if correlation_id == "req-1"
        ));
        assert_eq!(interface.error_class(), "insufficient_data");
    }

    #[test]
    fn invalid_survey_input_maps_to_bad_request() {
        let interface = ApplicationError::from(DomainError::InvalidSurveyInput {
            field: "job_role",
            value: "pilot".to_owned(),
        })
        .into_interface("req-2");

        assert!(matches!(interface, InterfaceError::BadRequest { .. }));
        assert_eq!(
            interface.user_message(),
            "The survey answers could not be processed. Check inputs and try again."
        );
    }

    #[test]
    fn dataset_error_maps_to_data_unavailable() {
        let interface =
            ApplicationError::Dataset("missing `연도` column".to_owned()).into_interface("req-3");

        assert!(matches!(interface, InterfaceError::DataUnavailable { .. }));
        assert_eq!(interface.error_class(), "dataset");
    }

    #[test]
    fn configuration_error_maps_to_internal() {
        let interface = ApplicationError::Configuration("invalid min_year".to_owned())
            .into_interface("req-4");

        assert!(matches!(interface, InterfaceError::Internal { .. }));
        assert_eq!(interface.user_message(), "An unexpected internal error occurred.");
    }

    #[test]
    fn insufficient_data_message_names_window() {
        let error = DomainError::InsufficientData { rows: 0, min_year: 2020 };
        assert_eq!(
            error.to_string(),
            "insufficient data: 0 row(s) from 2020 onward, at least 2 required"
        );
    }
}
