//! Text provider integrations for the Moniker username generation service.
//!
//! The [`TextDriver`] trait is the seam between the event handlers and
//! any text-generation backend; [`GeminiClient`] is the production
//! driver for Google's Gemini generateContent API.

mod driver;
mod gemini;

pub use driver::TextDriver;
pub use gemini::{
    Candidate, CandidateContent, CandidatePart, DEFAULT_GEMINI_MODEL, GeminiClient,
    GenerateContentRequest, GenerateContentResponse, RequestContent, TextPart,
};
