//! The username generation step.

use crate::{Event, EventBus, EventStep};
use async_trait::async_trait;
use moniker_core::{
    GenerationRequest, GenerationResult, USERNAME_GENERATED, USERNAME_REQUESTED, parse_usernames,
    username_prompt,
};
use moniker_error::{GenerationError, MonikerErrorKind, MonikerResult};
use moniker_models::TextDriver;
use tracing::{error, info, instrument};

/// Step that turns `username.requested` events into `username.generated`
/// results.
///
/// The driver is injected at construction and is present only when a
/// credential was configured; a missing driver is a per-request reported
/// condition, not a startup failure. Every inbound request yields exactly
/// one result event, success or failure, and no fault escapes the
/// handler.
pub struct UsernameGenerator<D> {
    driver: Option<D>,
    bus: EventBus,
}

impl<D: TextDriver> UsernameGenerator<D> {
    /// Creates a new generator publishing results to the given bus.
    pub fn new(driver: Option<D>, bus: EventBus) -> Self {
        Self { driver, bus }
    }

    /// Runs one generation attempt against the driver.
    ///
    /// Makes no provider call when the driver is absent. Driver faults
    /// are reduced to their kind description so wire error messages
    /// carry no source locations.
    async fn generate(&self, request: &GenerationRequest) -> Result<Vec<String>, GenerationError> {
        let driver = self
            .driver
            .as_ref()
            .ok_or(GenerationError::MissingCredential)?;

        let prompt = username_prompt(request.theme(), request.keywords(), *request.count());
        let raw = driver.generate_text(&prompt).await.map_err(|e| {
            let message = match e.kind() {
                MonikerErrorKind::Gemini(gemini) => gemini.kind.to_string(),
                other => other.to_string(),
            };
            GenerationError::Provider(message)
        })?;

        Ok(parse_usernames(&raw, *request.count()))
    }
}

#[async_trait]
impl<D: TextDriver> EventStep for UsernameGenerator<D> {
    fn name(&self) -> &'static str {
        "GenerateUsernames"
    }

    fn topic(&self) -> &'static str {
        USERNAME_REQUESTED
    }

    #[instrument(skip(self, event))]
    async fn handle(&self, event: Event) -> MonikerResult<()> {
        let request: GenerationRequest = event.decode()?;
        info!(
            request_id = %request.request_id(),
            theme = %request.theme(),
            count = request.count(),
            "Generating usernames"
        );

        let result = match self.generate(&request).await {
            Ok(usernames) => {
                info!(
                    request_id = %request.request_id(),
                    generated = usernames.len(),
                    "Usernames generated"
                );
                GenerationResult::success(
                    request.request_id(),
                    request.theme(),
                    request.keywords().clone(),
                    usernames,
                )
            }
            Err(e) => {
                error!(request_id = %request.request_id(), error = %e, "Generation failed");
                GenerationResult::failure(request.request_id(), e.to_string())
            }
        };

        self.bus.emit(Event::new(USERNAME_GENERATED, &result)?).await;
        Ok(())
    }
}
