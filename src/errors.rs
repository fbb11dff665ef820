//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage (workbook)
    // ---------------------------
    #[error("Workbook not found or unreadable: {0}")]
    Storage(String),

    #[error("Worksheet '{0}' not found in the workbook")]
    SheetMissing(String),

    #[error("Failed to write the workbook: {0}")]
    Persistence(String),

    #[error("Column mismatch: expected {expected:?}, found {found:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    // ---------------------------
    // Authentication / session
    // ---------------------------
    #[error("Invalid user or password")]
    AuthFailure,

    #[error("Not logged in. Run `spotbook login` first")]
    NotLoggedIn,

    #[error("This command requires an admin account")]
    Forbidden,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid spot label: {0}")]
    InvalidSpot(String),

    // ---------------------------
    // State machine
    // ---------------------------
    #[error("No assignment found for {0}")]
    RowNotFound(String),

    #[error("Action not allowed: {0}")]
    TransitionNotAllowed(String),

    // ---------------------------
    // Admin operations
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
