//! Inbound request type for the `username.requested` topic.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Theme substituted when a request carries none.
pub const DEFAULT_THEME: &str = "general";
/// Number of usernames requested when a request carries no count.
pub const DEFAULT_COUNT: usize = 5;
/// Correlation token substituted when a request carries none.
pub const DEFAULT_REQUEST_ID: &str = "unknown";

/// A request to generate usernames.
///
/// Every field is optional on the wire; absent fields take the documented
/// defaults at deserialization, so an empty payload is a valid request.
/// No bounds validation is applied to `count` or content validation to
/// `theme` at this layer.
///
/// # Examples
///
/// ```
/// use moniker_core::GenerationRequest;
///
/// let request: GenerationRequest = serde_json::from_str("{}").unwrap();
///
/// assert_eq!(request.theme(), "general");
/// assert!(request.keywords().is_empty());
/// assert_eq!(*request.count(), 5);
/// assert_eq!(request.request_id(), "unknown");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Free-text category guiding the generated usernames
    #[serde(default = "default_theme")]
    #[builder(default = "DEFAULT_THEME.to_string()")]
    theme: String,
    /// Keywords to incorporate into the usernames
    #[serde(default)]
    #[builder(default)]
    keywords: Vec<String>,
    /// Number of usernames to produce
    #[serde(default = "default_count")]
    #[builder(default = "DEFAULT_COUNT")]
    count: usize,
    /// Opaque correlation token echoed into the result
    #[serde(default = "default_request_id")]
    #[builder(default = "DEFAULT_REQUEST_ID.to_string()")]
    request_id: String,
}

impl GenerationRequest {
    /// Creates a new request with every field supplied.
    pub fn new(
        theme: impl Into<String>,
        keywords: Vec<String>,
        count: usize,
        request_id: impl Into<String>,
    ) -> Self {
        Self {
            theme: theme.into(),
            keywords,
            count,
            request_id: request_id.into(),
        }
    }

    /// Returns a builder for constructing a GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            keywords: Vec::new(),
            count: DEFAULT_COUNT,
            request_id: default_request_id(),
        }
    }
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

fn default_request_id() -> String {
    DEFAULT_REQUEST_ID.to_string()
}
