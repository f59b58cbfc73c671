use std::fmt;
use thiserror::Error;

/// Why a transport's lifecycle scope is no longer live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelCause {
    /// The transport itself was closed.
    Closed,
    /// The scope the transport was created under was cancelled.
    ParentCancelled,
}

impl fmt::Display for CancelCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelCause::Closed => write!(f, "transport closed"),
            CancelCause::ParentCancelled => write!(f, "parent context cancelled"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Failed to construct transport: {0}")]
    Construction(String),

    #[error("Unknown DNS server format: {0}")]
    UnknownTransport(String),

    #[error("Transport is no longer usable: {0}")]
    LifecycleClosed(CancelCause),

    #[error("Invalid query: expected exactly one question, got {0}")]
    InvalidQuery(usize),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

impl TransportError {
    pub fn is_closed(&self) -> bool {
        matches!(self, TransportError::LifecycleClosed(_))
    }
}
