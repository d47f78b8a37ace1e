//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::AwsConfig { .. } => crate::exitcode::CONFIG,
                InfraError::Io { .. } => crate::exitcode::SOFTWARE,
                InfraError::Application(app) => match app {
                    ApplicationError::Domain(_) => crate::exitcode::DATAERR,
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                    ApplicationError::OperationFailed { .. } => crate::exitcode::UNAVAILABLE,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::infrastructure::FisApiError;

    #[test]
    fn given_usage_error_when_exit_code_then_usage() {
        let err = CliError::Usage("pick one".into());
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }

    #[test]
    fn given_remote_failure_when_exit_code_then_unavailable_and_message_kept() {
        let err: CliError = ApplicationError::OperationFailed {
            context: "start experiment".into(),
            source: Box::new(FisApiError::new("ResourceNotFoundException: no template")),
        }
        .into();

        assert_eq!(err.exit_code(), crate::exitcode::UNAVAILABLE);
        assert_eq!(
            err.to_string(),
            "start experiment: ResourceNotFoundException: no template"
        );
    }

    #[test]
    fn given_config_errors_when_exit_code_then_config() {
        let aws = CliError::Infra(InfraError::AwsConfig {
            message: "no region".into(),
        });
        let file: CliError = ApplicationError::Config {
            message: "parse".into(),
        }
        .into();

        assert_eq!(aws.exit_code(), crate::exitcode::CONFIG);
        assert_eq!(file.exit_code(), crate::exitcode::CONFIG);
    }

    #[test]
    fn given_domain_error_when_exit_code_then_dataerr() {
        let err: CliError = ApplicationError::Domain(DomainError::MissingField("x")).into();
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
    }
}
