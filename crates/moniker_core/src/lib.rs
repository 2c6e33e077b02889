//! Core data types for the Moniker username generation service.
//!
//! This crate provides the wire types exchanged over the event topics,
//! the deterministic prompt sent to the text provider, and the parser
//! that turns raw provider output into a bounded username list.

mod parse;
mod prompt;
mod request;
mod result;
mod topic;

pub use parse::{MAX_USERNAME_LEN, parse_usernames};
pub use prompt::username_prompt;
pub use request::{
    DEFAULT_COUNT, DEFAULT_REQUEST_ID, DEFAULT_THEME, GenerationRequest, GenerationRequestBuilder,
};
pub use result::GenerationResult;
pub use topic::{USERNAME_GENERATED, USERNAME_REQUESTED};
