use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to tell a notice that needs review apart
/// from a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Notice generated
    Success = 0,
    /// Notice generated, but `--deny-unknown` was set and unknown licenses were found
    UnknownLicensesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (manifest error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::UnknownLicensesDetected => write!(f, "Unknown Licenses Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for notice generation.
///
/// Sparse package metadata is never an error; these cover failures of the
/// collaborators around the bucketing engine.
#[derive(Debug, Error)]
pub enum NoticeError {
    #[error("Package manifest not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse package manifest: {path}\nDetails: {details}\n\n💡 Hint: The manifest must be a JSON array of packages or an object with a \"packages\" array")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Package '{id}' was listed by the metadata source but could not be fetched\n\n💡 Hint: The source must return a package for every id it lists")]
    PackageNotFound { id: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for config and filter input
    #[error("Validation error: {message}")]
    Validation { message: String },
}
