use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::core::EnkaError;

/// Cancellation and deadline scope for one or more API calls.
///
/// Every public operation takes a `&RequestContext`. The network round trip, the body read
/// and any retry backoff are raced against it, so cancelling the token or passing the
/// deadline ends the call with [`EnkaError::Cancelled`] or [`EnkaError::DeadlineExceeded`].
///
/// Contexts are cheap to clone; clones share the same token and deadline.
///
/// ```
/// use std::time::Duration;
/// use enka_rs::RequestContext;
///
/// let ctx = RequestContext::with_timeout(Duration::from_secs(15));
/// assert!(ctx.err().is_none());
/// ctx.cancel();
/// assert!(ctx.err().is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context that is never cancelled on its own and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// A context whose deadline is `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// A context that expires at `deadline`.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: Some(deadline),
        }
    }

    /// A context driven by an existing token, e.g. a child of an application-wide shutdown token.
    pub fn with_token(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// Returns a copy of this context with `deadline`, keeping the earlier of the two.
    #[must_use]
    pub fn deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) => current.min(deadline),
            None => deadline,
        });
        self
    }

    /// Cancels the context and every clone of it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// The underlying token.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// `None` while the context is live; otherwise the error a call would end with.
    pub fn err(&self) -> Option<EnkaError> {
        if self.token.is_cancelled() {
            return Some(EnkaError::Cancelled);
        }
        match self.deadline {
            Some(d) if Instant::now() >= d => Some(EnkaError::DeadlineExceeded),
            _ => None,
        }
    }

    /// Resolves once the context is cancelled or its deadline passes.
    pub(crate) async fn done(&self) -> EnkaError {
        match self.deadline {
            Some(deadline) => tokio::select! {
                biased;
                () = self.token.cancelled() => EnkaError::Cancelled,
                () = tokio::time::sleep_until(deadline) => EnkaError::DeadlineExceeded,
            },
            None => {
                self.token.cancelled().await;
                EnkaError::Cancelled
            }
        }
    }

    /// Runs `fut` unless the context finishes first.
    pub(crate) async fn run<F>(&self, fut: F) -> Result<F::Output, EnkaError>
    where
        F: Future,
    {
        tokio::select! {
            biased;
            err = self.done() => Err(err),
            out = fut => Ok(out),
        }
    }

    /// Sleeps for `delay` unless the context finishes first.
    pub(crate) async fn sleep(&self, delay: Duration) -> Result<(), EnkaError> {
        if delay.is_zero() {
            return self.err().map_or(Ok(()), Err);
        }
        self.run(tokio::time::sleep(delay)).await
    }
}
