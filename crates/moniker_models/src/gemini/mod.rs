//! Gemini generateContent driver.

mod client;
mod dto;

pub use client::{DEFAULT_GEMINI_MODEL, GeminiClient};
pub use dto::{
    Candidate, CandidateContent, CandidatePart, GenerateContentRequest, GenerateContentResponse,
    RequestContent, TextPart,
};
