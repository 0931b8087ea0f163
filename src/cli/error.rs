//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

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
            CliError::InvalidArgs(_) | CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::InputNotFound(_) => crate::exitcode::NOINPUT,
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::Application(app) => match app {
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                    ApplicationError::InvalidOption { .. } => crate::exitcode::USAGE,
                    ApplicationError::Domain(DomainError::UnknownSymbolSet { .. })
                    | ApplicationError::Domain(DomainError::InvalidMarker { .. }) => {
                        crate::exitcode::USAGE
                    }
                    ApplicationError::Domain(_) | ApplicationError::Line { .. } => {
                        crate::exitcode::DATAERR
                    }
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MalformedReason;
    use std::path::PathBuf;

    #[test]
    fn given_errors_when_mapping_exit_codes_then_follow_sysexits() {
        let data: CliError = ApplicationError::at_line(
            3,
            DomainError::MalformedLine {
                reason: MalformedReason::MissingMarker,
            },
        )
        .into();
        let unknown: CliError = ApplicationError::Domain(DomainError::UnknownSymbolSet {
            name: "x".into(),
            known: "fancy, simple".into(),
        })
        .into();
        let config: CliError = ApplicationError::Config {
            message: "bad".into(),
        }
        .into();
        let missing = CliError::Infra(InfraError::InputNotFound(PathBuf::from("nope.txt")));

        assert_eq!(data.exit_code(), crate::exitcode::DATAERR);
        assert_eq!(unknown.exit_code(), crate::exitcode::USAGE);
        assert_eq!(config.exit_code(), crate::exitcode::CONFIG);
        assert_eq!(missing.exit_code(), crate::exitcode::NOINPUT);
        assert_eq!(
            CliError::Usage("x".into()).exit_code(),
            crate::exitcode::USAGE
        );
    }
}
