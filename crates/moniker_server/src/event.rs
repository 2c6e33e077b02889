//! In-process event infrastructure: envelope, bus, step trait, runner.

use async_trait::async_trait;
use moniker_error::{EventError, MonikerResult};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{RwLock, broadcast};
use tracing::{debug, error, info, warn};

/// Broadcast channel capacity used when none is configured.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// A topic-addressed event carrying a JSON payload.
///
/// # Examples
///
/// ```
/// use moniker_core::{GenerationRequest, USERNAME_REQUESTED};
/// use moniker_server::Event;
///
/// let request = GenerationRequest::default();
/// let event = Event::new(USERNAME_REQUESTED, &request).unwrap();
///
/// assert_eq!(event.topic(), "username.requested");
/// assert_eq!(event.decode::<GenerationRequest>().unwrap(), request);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    topic: String,
    data: serde_json::Value,
}

impl Event {
    /// Creates an event by serializing the payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be represented as JSON.
    pub fn new<T: Serialize>(topic: impl Into<String>, payload: &T) -> MonikerResult<Self> {
        let data =
            serde_json::to_value(payload).map_err(|e| EventError::encode(e.to_string()))?;
        Ok(Self {
            topic: topic.into(),
            data,
        })
    }

    /// Returns the topic this event was published to.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Returns the raw JSON payload.
    pub fn data(&self) -> &serde_json::Value {
        &self.data
    }

    /// Deserializes the payload into a typed value.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload does not match the target type.
    pub fn decode<T: DeserializeOwned>(&self) -> MonikerResult<T> {
        serde_json::from_value(self.data.clone())
            .map_err(|e| EventError::decode(e.to_string()).into())
    }
}

/// Event bus distributing events to topic subscribers.
///
/// Each topic is backed by a lazily created broadcast channel; emitting
/// to a topic with no subscribers is logged, not an error.
#[derive(Debug, Clone)]
pub struct EventBus {
    channels: Arc<RwLock<HashMap<String, broadcast::Sender<Event>>>>,
    capacity: usize,
}

impl EventBus {
    /// Creates a new event bus with the given per-topic channel capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            channels: Arc::new(RwLock::new(HashMap::new())),
            capacity,
        }
    }

    /// Creates a new event bus with [`DEFAULT_CHANNEL_CAPACITY`].
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Emits an event to all current subscribers of its topic.
    pub async fn emit(&self, event: Event) {
        let topic = event.topic().to_string();
        let channels = self.channels.read().await;

        if let Some(sender) = channels.get(&topic) {
            match sender.send(event) {
                Ok(receiver_count) => {
                    debug!(topic = %topic, receivers = receiver_count, "Event emitted");
                }
                Err(_) => {
                    debug!(topic = %topic, "Event emitted with no receivers");
                }
            }
        } else {
            debug!(topic = %topic, "No channel for topic - creating one");
            drop(channels);

            let mut channels = self.channels.write().await;
            let sender = channels
                .entry(topic.clone())
                .or_insert_with(|| broadcast::channel(self.capacity).0)
                .clone();
            drop(channels);

            if sender.send(event).is_err() {
                debug!(topic = %topic, "Event sent to new channel with no receivers");
            }
        }
    }

    /// Subscribes to a topic, creating its channel if needed.
    pub async fn subscribe(&self, topic: &str) -> broadcast::Receiver<Event> {
        let channels = self.channels.read().await;

        if let Some(sender) = channels.get(topic) {
            sender.subscribe()
        } else {
            debug!(topic = %topic, "Creating channel for subscription");
            drop(channels);

            let mut channels = self.channels.write().await;
            channels
                .entry(topic.to_string())
                .or_insert_with(|| broadcast::channel(self.capacity).0)
                .subscribe()
        }
    }
}

/// A step subscribed to a single topic.
///
/// Steps own whatever handles they need (bus clone, store) via
/// constructor injection and must absorb their own domain faults;
/// an error returned here is logged by the runner, never retried.
#[async_trait]
pub trait EventStep: Send + Sync {
    /// Step name used in logs.
    fn name(&self) -> &'static str;

    /// The topic this step subscribes to.
    fn topic(&self) -> &'static str;

    /// Handles one inbound event.
    async fn handle(&self, event: Event) -> MonikerResult<()>;
}

/// Runs registered steps against the event bus.
///
/// Each step gets its own listener task, and each inbound event is
/// handled in its own spawned task, so invocations are mutually
/// independent with no ordering guarantee.
pub struct StepRunner {
    steps: Vec<Arc<dyn EventStep>>,
    bus: EventBus,
}

impl StepRunner {
    /// Creates a runner for the given bus.
    pub fn new(bus: EventBus) -> Self {
        Self {
            steps: Vec::new(),
            bus,
        }
    }

    /// Registers a step. It starts receiving events once `start` is called.
    pub fn add_step(&mut self, step: Arc<dyn EventStep>) {
        info!(step = step.name(), topic = step.topic(), "Registering step");
        self.steps.push(step);
    }

    /// Subscribes every registered step and spawns its listener task.
    pub async fn start(self) {
        info!(steps = self.steps.len(), "Starting step runner");

        for step in self.steps {
            let mut receiver = self.bus.subscribe(step.topic()).await;

            tokio::spawn(async move {
                loop {
                    match receiver.recv().await {
                        Ok(event) => {
                            let step = step.clone();
                            tokio::spawn(async move {
                                debug!(
                                    step = step.name(),
                                    topic = event.topic(),
                                    "Handling event"
                                );
                                if let Err(e) = step.handle(event).await {
                                    error!(step = step.name(), error = %e, "Step failed");
                                }
                            });
                        }
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            warn!(step = step.name(), skipped, "Step lagged behind the bus");
                        }
                        Err(broadcast::error::RecvError::Closed) => {
                            info!(step = step.name(), "Channel closed - listener stopping");
                            break;
                        }
                    }
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moniker_error::GenerationError;
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::time::{Duration, sleep};

    struct CountingStep {
        name: &'static str,
        topic: &'static str,
        call_count: AtomicU32,
    }

    impl CountingStep {
        fn new(name: &'static str, topic: &'static str) -> Arc<Self> {
            Arc::new(Self {
                name,
                topic,
                call_count: AtomicU32::new(0),
            })
        }

        fn call_count(&self) -> u32 {
            self.call_count.load(Ordering::Relaxed)
        }
    }

    #[async_trait]
    impl EventStep for CountingStep {
        fn name(&self) -> &'static str {
            self.name
        }

        fn topic(&self) -> &'static str {
            self.topic
        }

        async fn handle(&self, _event: Event) -> MonikerResult<()> {
            self.call_count.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }
    }

    struct FailingStep {
        topic: &'static str,
    }

    #[async_trait]
    impl EventStep for FailingStep {
        fn name(&self) -> &'static str {
            "FailingStep"
        }

        fn topic(&self) -> &'static str {
            self.topic
        }

        async fn handle(&self, _event: Event) -> MonikerResult<()> {
            Err(GenerationError::Provider("simulated failure".to_string()).into())
        }
    }

    #[tokio::test]
    async fn bus_delivers_to_all_topic_subscribers() {
        let bus = EventBus::with_default_capacity();
        let mut first = bus.subscribe("greetings").await;
        let mut second = bus.subscribe("greetings").await;

        let event = Event::new("greetings", &json!({"text": "hello"})).unwrap();
        bus.emit(event.clone()).await;

        assert_eq!(first.recv().await.unwrap(), event);
        assert_eq!(second.recv().await.unwrap(), event);
    }

    #[tokio::test]
    async fn bus_isolates_topics() {
        let bus = EventBus::with_default_capacity();
        let mut other = bus.subscribe("other.topic").await;

        bus.emit(Event::new("greetings", &json!({})).unwrap()).await;

        assert!(other.try_recv().is_err());
    }

    #[tokio::test]
    async fn runner_routes_events_to_subscribed_steps() {
        let bus = EventBus::with_default_capacity();
        let mut runner = StepRunner::new(bus.clone());

        let greeter = CountingStep::new("greeter", "greetings");
        let other = CountingStep::new("other", "other.topic");
        runner.add_step(greeter.clone());
        runner.add_step(other.clone());
        runner.start().await;
        sleep(Duration::from_millis(10)).await;

        bus.emit(Event::new("greetings", &json!({})).unwrap()).await;
        sleep(Duration::from_millis(50)).await;

        assert_eq!(greeter.call_count(), 1);
        assert_eq!(other.call_count(), 0);
    }

    #[tokio::test]
    async fn failing_step_does_not_disturb_others() {
        let bus = EventBus::with_default_capacity();
        let mut runner = StepRunner::new(bus.clone());

        let counting = CountingStep::new("counting", "greetings");
        runner.add_step(Arc::new(FailingStep { topic: "greetings" }));
        runner.add_step(counting.clone());
        runner.start().await;
        sleep(Duration::from_millis(10)).await;

        bus.emit(Event::new("greetings", &json!({})).unwrap()).await;
        bus.emit(Event::new("greetings", &json!({})).unwrap()).await;
        sleep(Duration::from_millis(50)).await;

        assert_eq!(counting.call_count(), 2);
    }
}
