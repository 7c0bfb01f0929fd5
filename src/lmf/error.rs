//! Custom error types for the lmf-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum LmfError {
    /// An error originating from I/O operations, including a source
    /// document that cannot be opened or read.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The document is not structurally valid WN-LMF: malformed XML,
    /// an element outside its required container, or an attribute that
    /// cannot be decoded. Fatal; no partial graph is returned.
    #[error("Invalid document structure: {0}")]
    Structural(String),

    /// The token stream produced an event kind outside the structural
    /// model (element open/close, character data, end of document).
    #[error("Unexpected structural event: {0}")]
    UnexpectedEvent(&'static str),

    /// The queried word has no primary or alternate-form entry.
    /// A normal lookup outcome, not a failure of the dictionary.
    #[error("Word not found: {0:?}")]
    WordNotFound(String),
}

/// A convenience `Result` type alias using the crate's `LmfError` type.
pub type Result<T> = std::result::Result<T, LmfError>;
