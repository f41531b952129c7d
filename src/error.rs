//! Error types and handling for Graft
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Errors fall into two groups. Fatal errors (configuration, registry fetch,
//! circular dependency) stop a command before anything is written. Per-component
//! errors (not found, write failures) are caught by the sync engine, tallied,
//! and reported while the rest of the batch continues.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Graft operations
#[derive(Error, Diagnostic, Debug)]
pub enum GraftError {
    // Project / configuration errors
    #[error("No project found at or above: {path}")]
    #[diagnostic(
        code(graft::config::project_not_found),
        help("Run graft from inside a JavaScript project (a directory with package.json)")
    )]
    ProjectNotFound { path: String },

    #[error("Project at {path} is not initialized")]
    #[diagnostic(
        code(graft::config::not_initialized),
        help("Run 'graft init' to create graft.json")
    )]
    NotInitialized { path: String },

    #[error("Project is already initialized: {path}")]
    #[diagnostic(
        code(graft::config::already_initialized),
        help("Use 'graft init --force' to overwrite the existing configuration")
    )]
    AlreadyInitialized { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(graft::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(graft::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(graft::config::invalid))]
    ConfigInvalid { message: String },

    // Registry errors
    #[error("Failed to fetch from registry: {location}: {reason}")]
    #[diagnostic(
        code(graft::registry::fetch_failed),
        help("Check your network connection and the registry URL, or pass --registry-dir")
    )]
    RegistryFetchFailed { location: String, reason: String },

    #[error("Failed to parse registry index: {location}: {reason}")]
    #[diagnostic(code(graft::registry::parse_failed))]
    RegistryParseFailed { location: String, reason: String },

    #[error("Invalid registry: {message}")]
    #[diagnostic(
        code(graft::registry::invalid),
        help("The registry index must be fixed before components can be installed")
    )]
    RegistryInvalid { message: String },

    // Dependency errors
    #[error("Circular dependency detected: {}", .chain.join(" -> "))]
    #[diagnostic(
        code(graft::deps::circular),
        help("Remove the cycle from the registryDependencies of the listed components")
    )]
    CircularDependency { chain: Vec<String> },

    #[error("Unresolved registry dependencies: {}", .names.join(", "))]
    #[diagnostic(
        code(graft::deps::unresolved),
        help("The registry references components it does not publish; rerun without --strict to skip them")
    )]
    UnresolvedDependencies { names: Vec<String> },

    // Component errors
    #[error("Component '{name}' not found in registry")]
    #[diagnostic(
        code(graft::component::not_found),
        help("Run 'graft list' to see available components")
    )]
    ComponentNotFound { name: String },

    #[error("File already exists: {path}")]
    #[diagnostic(
        code(graft::component::file_exists),
        help("Pass --overwrite to replace existing files")
    )]
    FileExists { path: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(graft::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(graft::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(graft::fs::io_error))]
    IoError { message: String },
}

impl GraftError {
    /// Whether the error is scoped to a single component.
    ///
    /// Recoverable errors are caught at the per-component boundary and
    /// tallied; everything else aborts the command.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GraftError::ComponentNotFound { .. }
                | GraftError::FileExists { .. }
                | GraftError::FileWriteFailed { .. }
                | GraftError::FileReadFailed { .. }
                | GraftError::RegistryFetchFailed { .. }
        )
    }
}

impl From<std::io::Error> for GraftError {
    fn from(err: std::io::Error) -> Self {
        GraftError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for GraftError {
    fn from(err: inquire::InquireError) -> Self {
        GraftError::IoError {
            message: format!("Failed to read confirmation: {err}"),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, GraftError>;
