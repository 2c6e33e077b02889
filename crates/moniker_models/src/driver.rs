//! The text generation driver seam.

use async_trait::async_trait;
use moniker_error::MonikerResult;

/// A backend that turns a prompt into raw generated text.
///
/// Implementors make exactly one generation attempt per call; retry and
/// timeout policy belong to the caller, not the driver.
#[async_trait]
pub trait TextDriver: Send + Sync {
    /// Returns the model identifier used for generation.
    fn model(&self) -> &str;

    /// Generates raw text for the given prompt.
    async fn generate_text(&self, prompt: &str) -> MonikerResult<String>;
}
