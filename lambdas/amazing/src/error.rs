use std::fmt::Display;
use thiserror::Error;

/// Which invocation record failed to serialize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationRecord {
    Event,
    Context,
}

impl Display for InvocationRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvocationRecord::Event => f.write_str("event"),
            InvocationRecord::Context => f.write_str("context"),
        }
    }
}

/// Error produced when an invocation record cannot be written out as JSON
#[derive(Debug, Error)]
#[error("failed to serialize invocation {record}")]
pub struct SerializationError {
    pub record: InvocationRecord,
    #[source]
    pub source: serde_json::Error,
}
