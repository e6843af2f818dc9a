//! Scope token passed to context-aware log calls.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

/// Ambient request scope: cancellation, an optional deadline, and an
/// optional request id for correlating log lines.
///
/// Cloning is cheap; clones share the same cancellation state.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use logshim::log::Scope;
///
/// let scope = Scope::background()
///     .with_request_id("req-42")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(scope.request_id(), Some("req-42"));
/// assert!(!scope.is_done());
///
/// scope.cancel();
/// assert!(scope.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scope {
    cancel: CancellationToken,
    deadline: Option<Instant>,
    request_id: Option<Arc<str>>,
}

impl Scope {
    /// An empty scope: never cancelled unless [`cancel`](Self::cancel) is
    /// called, no deadline, no request id.
    pub fn background() -> Self {
        Self::default()
    }

    /// Attach a request id.
    pub fn with_request_id(mut self, request_id: impl Into<Arc<str>>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Set an absolute deadline. An earlier existing deadline is kept.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) if existing < deadline => existing,
            _ => deadline,
        });
        self
    }

    /// Set a deadline relative to now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Replace the cancellation token, e.g. with a service shutdown token.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Derive a child scope.
    ///
    /// Cancelling the parent cancels the child, not the reverse. The deadline
    /// and request id are inherited.
    pub fn child(&self) -> Self {
        Self {
            cancel: self.cancel.child_token(),
            deadline: self.deadline,
            request_id: self.request_id.clone(),
        }
    }

    /// Cancel this scope and all of its children.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the deadline, if any, has passed.
    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Cancelled or past its deadline.
    pub fn is_done(&self) -> bool {
        self.is_cancelled() || self.is_expired()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }
}
