//! Shared test driver for exercising the event steps.

// Not every test binary uses every helper.
#![allow(dead_code)]

use async_trait::async_trait;
use moniker_error::{GeminiError, GeminiErrorKind, MonikerResult};
use moniker_models::TextDriver;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Driver returning a canned outcome and counting invocations.
///
/// The call counter is shared so tests can keep a handle after moving
/// the driver into a step.
pub struct CannedDriver {
    response: Result<String, String>,
    calls: Arc<AtomicUsize>,
}

impl CannedDriver {
    /// A driver answering every prompt with the given text.
    pub fn with_response(text: impl Into<String>) -> Self {
        Self {
            response: Ok(text.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A driver failing every prompt with the given message.
    pub fn with_fault(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Handle to the invocation counter.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl TextDriver for CannedDriver {
    fn model(&self) -> &str {
        "test-model"
    }

    async fn generate_text(&self, _prompt: &str) -> MonikerResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(message) => {
                Err(GeminiError::new(GeminiErrorKind::ApiRequest(message.clone())).into())
            }
        }
    }
}
