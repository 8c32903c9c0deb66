//! Deferred values - handles to results that are not yet computed
//!
//! A [`Deferred<T>`] resolves exactly once. Every clone of the handle observes
//! the same resolution, and a transform attached with [`Deferred::map`] runs
//! exactly once, after the input resolves. Failures travel through the same
//! channel as values and are passed through unmodified.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use thiserror::Error;
use tokio::sync::oneshot;

/// Why a deferred value failed to resolve
///
/// `Clone` is required so every holder of a shared handle can observe the
/// same failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The upstream producer reported a failure.
    #[error("upstream value failed to resolve: {0}")]
    Upstream(String),

    /// The resolver was dropped before producing a value.
    #[error("resolver dropped before a value was produced")]
    Abandoned,
}

type SharedResolution<T> = Shared<BoxFuture<'static, Result<T, ResolveError>>>;

/// A handle to a value of type `T` that is not yet computed
///
/// Cloning is cheap and clones share the underlying resolution: the value is
/// computed once and memoized, no matter how many handles are awaited.
#[derive(Clone)]
pub struct Deferred<T: Clone> {
    inner: SharedResolution<T>,
}

impl<T> Deferred<T>
where
    T: Clone + Send + 'static,
{
    /// Create a deferred value that is already resolved
    pub fn ready(value: T) -> Self {
        Self::from_future(async move { Ok(value) })
    }

    /// Create an unresolved deferred value and the resolver that completes it
    ///
    /// Dropping the [`Resolver`] without calling [`Resolver::resolve`] or
    /// [`Resolver::fail`] resolves the deferred to [`ResolveError::Abandoned`].
    pub fn pending() -> (Resolver<T>, Self) {
        let (tx, rx) = oneshot::channel::<Result<T, ResolveError>>();
        let deferred = Self::from_future(async move {
            match rx.await {
                Ok(result) => result,
                Err(_) => Err(ResolveError::Abandoned),
            }
        });
        (Resolver { tx }, deferred)
    }

    /// Attach a transform that runs once the value resolves
    ///
    /// The transform must be pure computation: it runs to completion on
    /// whatever task first polls the resulting deferred, so it must not block
    /// or perform I/O. If this deferred fails, the transform never runs and
    /// the failure is passed through unmodified.
    pub fn map<U, F>(self, transform: F) -> Deferred<U>
    where
        T: Sync,
        U: Clone + Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        Deferred::from_future(async move { self.inner.await.map(transform) })
    }

    fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, ResolveError>> + Send + 'static,
    {
        Self {
            inner: future.boxed().shared(),
        }
    }
}

impl<T: Clone> Future for Deferred<T> {
    type Output = Result<T, ResolveError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.inner).poll(cx)
    }
}

impl<T: Clone> std::fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Peeking at the value here would force Debug bounds on T and could
        // print data the holder considers sensitive.
        f.write_str("Deferred(..)")
    }
}

/// Completes a [`Deferred`] created with [`Deferred::pending`]
///
/// Consumed on use: a deferred value resolves at most once.
pub struct Resolver<T> {
    tx: oneshot::Sender<Result<T, ResolveError>>,
}

impl<T> Resolver<T> {
    /// Resolve the deferred value
    pub fn resolve(self, value: T) {
        // The receiver may already be gone; nothing observes the value then.
        let _ = self.tx.send(Ok(value));
    }

    /// Fail the deferred value
    pub fn fail(self, error: ResolveError) {
        let _ = self.tx.send(Err(error));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[tokio::test]
    async fn test_ready_resolves_immediately() {
        let deferred = Deferred::ready(7u32);
        assert_eq!(deferred.await, Ok(7));
    }

    #[tokio::test]
    async fn test_pending_resolves_after_resolver_fires() {
        let (resolver, deferred) = Deferred::pending();

        let mut task = tokio_test::task::spawn(deferred);
        tokio_test::assert_pending!(task.poll());

        resolver.resolve("late".to_string());
        assert_eq!(task.await, Ok("late".to_string()));
    }

    #[tokio::test]
    async fn test_dropped_resolver_fails_the_deferred() {
        let (resolver, deferred) = Deferred::<String>::pending();
        drop(resolver);

        assert_eq!(deferred.await, Err(ResolveError::Abandoned));
    }

    #[tokio::test]
    async fn test_explicit_failure_passes_through() {
        let (resolver, deferred) = Deferred::<String>::pending();
        resolver.fail(ResolveError::Upstream("store unreachable".to_string()));

        let mapped = deferred.map(|s| s.len());
        assert_eq!(
            mapped.await,
            Err(ResolveError::Upstream("store unreachable".to_string()))
        );
    }

    #[tokio::test]
    async fn test_map_runs_exactly_once_across_clones() {
        let (resolver, deferred) = Deferred::pending();
        let calls = Arc::new(AtomicUsize::new(0));

        let counted = {
            let calls = Arc::clone(&calls);
            deferred.map(move |v: u32| {
                calls.fetch_add(1, Ordering::SeqCst);
                v * 2
            })
        };

        let a = counted.clone();
        let b = counted.clone();
        resolver.resolve(21);

        assert_eq!(a.await, Ok(42));
        assert_eq!(b.await, Ok(42));
        assert_eq!(counted.await, Ok(42));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_map_chain_preserves_attachment_order() {
        let (resolver, deferred) = Deferred::pending();
        let chained = deferred.map(|v: String| format!("{v}-first")).map(|v| format!("{v}-second"));

        resolver.resolve("base".to_string());
        assert_eq!(chained.await, Ok("base-first-second".to_string()));
    }

    #[tokio::test]
    async fn test_clones_share_one_resolution() {
        let (resolver, deferred) = Deferred::pending();
        let other = deferred.clone();

        resolver.resolve(vec![1u8, 2, 3]);

        assert_eq!(deferred.await, Ok(vec![1, 2, 3]));
        assert_eq!(other.await, Ok(vec![1, 2, 3]));
    }
}
