use dns_transport_domain::{CancelCause, TransportError};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio_util::sync::CancellationToken;

/// Cancellable lifecycle scope owned by a transport.
///
/// The scope is a child of the caller supplied token: cancelling the parent
/// cancels it too, while closing the transport only cancels its own scope.
#[derive(Debug)]
pub struct Lifecycle {
    token: CancellationToken,
    closed: AtomicBool,
}

impl Lifecycle {
    pub fn new(parent: &CancellationToken) -> Self {
        Self {
            token: parent.child_token(),
            closed: AtomicBool::new(false),
        }
    }

    /// Non-blocking liveness check.
    pub fn check(&self) -> Result<(), TransportError> {
        if self.token.is_cancelled() {
            return Err(TransportError::LifecycleClosed(self.cause()));
        }
        Ok(())
    }

    /// Idempotent. Does not touch the parent token.
    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
        self.token.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Token for work derived from this transport (e.g. connection tasks of
    /// network backends). It fires when the transport is closed.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    fn cause(&self) -> CancelCause {
        if self.closed.load(Ordering::Acquire) {
            CancelCause::Closed
        } else {
            CancelCause::ParentCancelled
        }
    }
}
