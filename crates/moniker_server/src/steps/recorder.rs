//! The result recording step.

use crate::{Event, EventStep, GeneratedRecord, UsernameStore};
use async_trait::async_trait;
use chrono::Utc;
use moniker_core::{GenerationResult, USERNAME_GENERATED};
use moniker_error::MonikerResult;
use tracing::{error, info, instrument};

/// Step that logs `username.generated` outcomes and retains successful
/// ones in the [`UsernameStore`].
///
/// Failures are logged and nothing is stored for them.
pub struct UsernameRecorder {
    store: UsernameStore,
}

impl UsernameRecorder {
    /// Creates a new recorder writing to the given store.
    pub fn new(store: UsernameStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EventStep for UsernameRecorder {
    fn name(&self) -> &'static str {
        "LogGeneratedUsernames"
    }

    fn topic(&self) -> &'static str {
        USERNAME_GENERATED
    }

    #[instrument(skip(self, event))]
    async fn handle(&self, event: Event) -> MonikerResult<()> {
        let result: GenerationResult = event.decode()?;

        if result.is_success() {
            let theme = result.theme().clone().unwrap_or_default();
            info!(
                request_id = %result.request_id(),
                theme = %theme,
                count = result.usernames().len(),
                "Usernames generated successfully"
            );
            for (index, username) in result.usernames().iter().enumerate() {
                info!("  {}. @{}", index + 1, username);
            }

            let record = GeneratedRecord::new(theme, result.usernames().clone(), Utc::now());
            self.store.insert(result.request_id(), record).await;
        } else {
            error!(
                request_id = %result.request_id(),
                error = result.error().as_deref().unwrap_or("unknown"),
                "Username generation failed"
            );
        }

        Ok(())
    }
}
