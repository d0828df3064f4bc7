use thiserror::Error;

/// Errors raised by persistence and by edits issued without an open record.
/// The derivation rules themselves never fail.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no record is open; select a date and center first")]
    NoActiveRecord,

    #[error("cannot resolve app data directory: {0}")]
    AppDir(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
