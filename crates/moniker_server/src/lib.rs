//! Event runtime, HTTP API, and server wiring for the Moniker username
//! generation service.
//!
//! Events flow through an in-process [`EventBus`]: the HTTP ingress
//! publishes `username.requested`, the [`UsernameGenerator`] step turns
//! each request into exactly one `username.generated` result, and the
//! [`UsernameRecorder`] step logs results and retains successful ones in
//! the [`UsernameStore`].

mod api;
mod config;
mod event;
mod state;
mod steps;

pub use api::{ApiState, create_router};
pub use config::ServerConfig;
pub use event::{DEFAULT_CHANNEL_CAPACITY, Event, EventBus, EventStep, StepRunner};
pub use state::{GeneratedRecord, UsernameStore};
pub use steps::{UsernameGenerator, UsernameRecorder};
