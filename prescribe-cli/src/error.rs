//! Error handling for the prescribe CLI

use prescribe_core::AlignError;
use thiserror::Error;

/// Main error type for prescribe CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Input/Output error: {message}")]
    Io { message: String },

    #[error("Invalid input: {message}")]
    Input { message: String },

    #[error("Alignment error: {source}")]
    Alignment {
        #[from]
        source: AlignError,
    },
}

impl CliError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io { message: message.into() }
    }

    pub fn input<S: Into<String>>(message: S) -> Self {
        Self::Input { message: message.into() }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Provide helpful error messages and suggestions
pub fn format_error_with_suggestions(error: &CliError) -> String {
    let mut message = error.to_string();

    match error {
        CliError::Alignment { source: AlignError::InvalidActionTag { .. } } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Write prescriptions with the tags M (match), R (replace), I (insert) and D (delete)\n\
                 • Use 'prescribe distance' to print the optimal prescription for two words"
            );
        }

        CliError::Alignment { source: AlignError::PrescriptionMismatch { .. } } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • M, R and D each consume one element of the original word\n\
                 • M, R and I each consume one element of the final word\n\
                 • Both words must be consumed completely by the end of the prescription"
            );
        }

        CliError::Alignment { source: AlignError::InvalidCosts { .. } } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Keep --match-cost at or below the insert, delete and replace costs\n\
                 • Lower the costs if the distance for these words would overflow a 32-bit value\n\
                 • Use 'prescribe config' to see the costs currently in effect"
            );
        }

        CliError::Config { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Check your prescribe.toml configuration file\n\
                 • Use 'prescribe config --example' to generate a sample configuration"
            );
        }

        _ => {}
    }

    message
}

/// Print error with helpful suggestions and exit
pub fn print_error_and_exit(error: &CliError) -> ! {
    eprintln!("Error: {}", format_error_with_suggestions(error));
    std::process::exit(1);
}
