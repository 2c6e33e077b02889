//! Event envelope error types.

/// Event-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventErrorKind {
    /// Payload could not be serialized into an event
    Encode(String),
    /// Event payload could not be deserialized
    Decode(String),
}

impl std::fmt::Display for EventErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventErrorKind::Encode(msg) => write!(f, "Failed to encode event payload: {}", msg),
            EventErrorKind::Decode(msg) => write!(f, "Failed to decode event payload: {}", msg),
        }
    }
}

/// Event error with source location tracking.
///
/// # Examples
///
/// ```
/// use moniker_error::EventError;
///
/// let err = EventError::decode("invalid type: string, expected usize");
/// assert!(format!("{}", err).contains("decode"));
/// ```
#[derive(Debug, Clone)]
pub struct EventError {
    /// The kind of error that occurred
    pub kind: EventErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl EventError {
    /// Create a new EventError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: EventErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create an encode error at the current location.
    #[track_caller]
    pub fn encode(message: impl Into<String>) -> Self {
        Self::new(EventErrorKind::Encode(message.into()))
    }

    /// Create a decode error at the current location.
    #[track_caller]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(EventErrorKind::Decode(message.into()))
    }
}

impl std::fmt::Display for EventError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Event Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for EventError {}
