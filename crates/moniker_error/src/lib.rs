//! Error types for the Moniker username generation service.
//!
//! This crate provides the foundation error types used throughout the
//! Moniker workspace: per-concern errors with source location tracking
//! and a boxed top-level error with kind discrimination.

mod event;
mod gemini;
mod generation;

pub use event::{EventError, EventErrorKind};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use generation::GenerationError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum MonikerErrorKind {
    /// Gemini driver error
    Gemini(GeminiError),
    /// Event envelope encode/decode error
    Event(EventError),
    /// Username generation domain error
    Generation(GenerationError),
}

impl std::fmt::Display for MonikerErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MonikerErrorKind::Gemini(e) => write!(f, "{}", e),
            MonikerErrorKind::Event(e) => write!(f, "{}", e),
            MonikerErrorKind::Generation(e) => write!(f, "{}", e),
        }
    }
}

/// Moniker error with kind discrimination.
///
/// # Examples
///
/// ```
/// use moniker_error::{EventError, MonikerError, MonikerErrorKind};
///
/// let err = MonikerError::from(EventError::decode("missing field `topic`"));
/// assert!(matches!(err.kind(), MonikerErrorKind::Event(_)));
/// ```
#[derive(Debug)]
pub struct MonikerError(Box<MonikerErrorKind>);

impl MonikerError {
    /// Create a new error from a kind.
    pub fn new(kind: MonikerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MonikerErrorKind {
        &self.0
    }
}

impl std::fmt::Display for MonikerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Moniker Error: {}", self.0)
    }
}

impl std::error::Error for MonikerError {}

// Generic From implementation for any type that converts to MonikerErrorKind
impl<T> From<T> for MonikerError
where
    T: Into<MonikerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Moniker operations.
pub type MonikerResult<T> = std::result::Result<T, MonikerError>;
