//! Username generation domain errors.
//!
//! These variants describe the conditions a generation attempt can fail
//! with. Their `Display` output is the `error` field of a failure result,
//! so the messages carry no source locations.

/// Why a username generation attempt failed.
///
/// # Examples
///
/// ```
/// use moniker_error::GenerationError;
///
/// let err = GenerationError::MissingCredential;
/// assert_eq!(err.to_string(), "GEMINI_API_KEY not configured");
///
/// let err = GenerationError::Provider("HTTP 503 error: overloaded".to_string());
/// assert_eq!(err.to_string(), "HTTP 503 error: overloaded");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GenerationError {
    /// No Gemini credential was configured for the process
    MissingCredential,
    /// The text provider reported a fault
    Provider(String),
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationError::MissingCredential => write!(f, "GEMINI_API_KEY not configured"),
            GenerationError::Provider(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for GenerationError {}
