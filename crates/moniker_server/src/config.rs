//! Server configuration.

use crate::DEFAULT_CHANNEL_CAPACITY;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Configuration for the moniker server.
///
/// # Examples
///
/// ```
/// use moniker_server::ServerConfig;
///
/// let config = ServerConfig::builder()
///     .addr("127.0.0.1:3000")
///     .model("gemini-2.5-flash")
///     .build();
///
/// assert_eq!(*config.channel_capacity(), 64);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Getters, TypedBuilder)]
pub struct ServerConfig {
    /// Socket address the HTTP listener binds to
    #[builder(setter(into))]
    addr: String,
    /// Gemini model identifier
    #[builder(setter(into))]
    model: String,
    /// Per-topic broadcast channel capacity of the event bus
    #[builder(default = DEFAULT_CHANNEL_CAPACITY)]
    #[serde(default = "default_channel_capacity")]
    channel_capacity: usize,
}

fn default_channel_capacity() -> usize {
    DEFAULT_CHANNEL_CAPACITY
}
