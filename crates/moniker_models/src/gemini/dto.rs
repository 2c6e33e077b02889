//! Gemini generateContent API data transfer objects.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Request body for the generateContent endpoint.
#[derive(Debug, Clone, Serialize, Getters)]
pub struct GenerateContentRequest {
    /// Conversation contents, oldest first
    contents: Vec<RequestContent>,
}

impl GenerateContentRequest {
    /// Wraps a single text prompt in the request envelope.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![TextPart {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

/// One content block of a request.
#[derive(Debug, Clone, Serialize, Getters)]
pub struct RequestContent {
    /// Parts making up this content block
    parts: Vec<TextPart>,
}

/// A text part of a request content block.
#[derive(Debug, Clone, Serialize, Getters)]
pub struct TextPart {
    /// The prompt text
    text: String,
}

/// Response body from the generateContent endpoint.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct GenerateContentResponse {
    /// Generated candidates, best first
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts.
    ///
    /// Returns `None` when the response carries no candidates or the
    /// first candidate holds no text parts.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();

        if text.is_empty() { None } else { Some(text) }
    }
}

/// A generated candidate.
#[derive(Debug, Clone, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content, absent on safety blocks
    #[serde(default)]
    content: Option<CandidateContent>,
    /// Why generation stopped
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Content block of a candidate.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct CandidateContent {
    /// Parts making up the candidate text
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

/// One part of a candidate's content.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct CandidatePart {
    /// Text payload, absent for non-text parts
    #[serde(default)]
    text: Option<String>,
}
