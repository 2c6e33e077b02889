//! Outbound result type for the `username.generated` topic.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The outcome of a username generation attempt.
///
/// A result is either a success carrying the generated usernames along
/// with the request's theme and keywords, or a failure carrying an error
/// description and an empty username list. The two shapes are only
/// constructible through [`GenerationResult::success`] and
/// [`GenerationResult::failure`], and `requestId`, `success`, and
/// `usernames` are present on the wire in both.
///
/// # Examples
///
/// ```
/// use moniker_core::GenerationResult;
///
/// let result = GenerationResult::failure("req-7", "GEMINI_API_KEY not configured");
///
/// assert!(!result.is_success());
/// assert!(result.usernames().is_empty());
/// assert_eq!(result.error().as_deref(), Some("GEMINI_API_KEY not configured"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Correlation token echoed from the request
    request_id: String,
    /// Whether generation succeeded
    #[getter(skip)]
    success: bool,
    /// Theme echoed from the request (success only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
    /// Keywords echoed from the request (success only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    keywords: Option<Vec<String>>,
    /// Generated usernames, empty on failure
    usernames: Vec<String>,
    /// Description of the fault (failure only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl GenerationResult {
    /// Whether generation succeeded.
    ///
    /// Named to stay clear of the [`GenerationResult::success`]
    /// constructor.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Creates a success result echoing the request's theme and keywords.
    pub fn success(
        request_id: impl Into<String>,
        theme: impl Into<String>,
        keywords: Vec<String>,
        usernames: Vec<String>,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            success: true,
            theme: Some(theme.into()),
            keywords: Some(keywords),
            usernames,
            error: None,
        }
    }

    /// Creates a failure result with an empty username list.
    pub fn failure(request_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            success: false,
            theme: None,
            keywords: None,
            usernames: Vec::new(),
            error: Some(error.into()),
        }
    }
}
