//! Event topic names shared by producers and subscribers.

/// Topic carrying inbound generation requests.
pub const USERNAME_REQUESTED: &str = "username.requested";

/// Topic carrying generation results.
pub const USERNAME_GENERATED: &str = "username.generated";
