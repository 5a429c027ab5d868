//! CLI error types and handling.

use std::process::ExitCode;

use colored::Colorize;

/// CLI error type.
#[derive(Debug)]
pub struct CliError {
    /// Error kind.
    pub kind: ErrorKind,
    /// Error message.
    pub message: String,
    /// Underlying cause.
    pub cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

/// Error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Configuration error.
    Config,
    /// API error.
    Api,
    /// Authentication error.
    Auth,
    /// Validation error.
    Validation,
    /// IO error.
    Io,
    /// Output/formatting error.
    Output,
    /// User cancelled operation.
    Cancelled,
}

impl CliError {
    /// Creates a new CLI error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a new CLI error with a cause.
    pub fn with_cause<E>(kind: ErrorKind, message: impl Into<String>, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            kind,
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, message)
    }

    /// Creates an output error.
    pub fn output(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Output, message)
    }

    /// Creates a cancelled error.
    pub fn cancelled() -> Self {
        Self::new(ErrorKind::Cancelled, "Operation cancelled")
    }

    /// Returns the numeric exit status for this error.
    pub fn exit_status(&self) -> u8 {
        match self.kind {
            ErrorKind::Api => 1,
            ErrorKind::Config => 2,
            ErrorKind::Auth => 3,
            ErrorKind::Validation => 4,
            ErrorKind::Io => 5,
            ErrorKind::Output => 6,
            ErrorKind::Cancelled => 130,
        }
    }

    /// Returns the exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref cause) = self.cause {
            write!(f, ": {cause}")?;
        }
        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause.as_ref().map(|e| e.as_ref() as _)
    }
}

impl From<renderbase_sdk::Error> for CliError {
    fn from(error: renderbase_sdk::Error) -> Self {
        use renderbase_sdk::Error;

        let kind = match &error {
            Error::Configuration { .. } => ErrorKind::Config,
            Error::Api { status: 401 | 403, .. } => ErrorKind::Auth,
            Error::Api { status: 400 | 422, .. } => ErrorKind::Validation,
            Error::Io(_) => ErrorKind::Io,
            _ => ErrorKind::Api,
        };

        Self::new(kind, error.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        Self::with_cause(ErrorKind::Io, "IO error", error)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        Self::with_cause(ErrorKind::Output, "JSON error", error)
    }
}

/// Prints an error to stderr.
pub fn print_error(error: &CliError) {
    let prefix = match error.kind {
        ErrorKind::Config => "Configuration error",
        ErrorKind::Api => "API error",
        ErrorKind::Auth => "Authentication error",
        ErrorKind::Validation => "Validation error",
        ErrorKind::Io => "IO error",
        ErrorKind::Output => "Output error",
        ErrorKind::Cancelled => "Cancelled",
    };

    eprintln!("{} {}", format!("{prefix}:").red().bold(), error.message);

    if let Some(ref cause) = error.cause {
        eprintln!("  {}", format!("Caused by: {cause}").dimmed());
    }

    match error.kind {
        ErrorKind::Auth | ErrorKind::Config => {
            eprintln!();
            eprintln!("{}", "Hint: Set your API key with:".dimmed());
            eprintln!("{}", "  export RENDERBASE_API_KEY=sk_live_xxxxx".dimmed());
            eprintln!("{}", "  renderbase --api-key sk_live_xxxxx ...".dimmed());
        }
        _ => {}
    }
}
