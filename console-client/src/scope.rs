//! View lifetime scope
//!
//! Every view instance owns one `ViewScope`. Work the view starts is tied to
//! the scope's cancellation token, and results are tagged with the scope's
//! epoch so the event loop can tell stale deliveries apart from live ones.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{ClientError, ClientResult};

static NEXT_EPOCH: AtomicU64 = AtomicU64::new(1);

/// Cancellation token plus a process-unique epoch
#[derive(Debug)]
pub struct ViewScope {
    epoch: u64,
    token: CancellationToken,
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewScope {
    pub fn new() -> Self {
        Self {
            epoch: NEXT_EPOCH.fetch_add(1, Ordering::Relaxed),
            token: CancellationToken::new(),
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Tear the scope down. Pending work is abandoned.
    pub fn cancel(&self) {
        if !self.token.is_cancelled() {
            tracing::debug!(epoch = self.epoch, "view scope cancelled");
        }
        self.token.cancel();
    }

    /// Await `fut` unless the scope is cancelled first.
    pub async fn guard<F, T>(&self, fut: F) -> ClientResult<T>
    where
        F: Future<Output = ClientResult<T>>,
    {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(ClientError::Cancelled),
            result = fut => result,
        }
    }

    /// Run `fut` on the runtime and hand its output to `sink`.
    ///
    /// `sink` receives the scope epoch alongside the output and is never
    /// called once the scope has been cancelled.
    pub fn spawn<F, S>(&self, fut: F, sink: S) -> JoinHandle<()>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
        S: FnOnce(u64, F::Output) + Send + 'static,
    {
        let token = self.token.clone();
        let epoch = self.epoch;
        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    tracing::debug!(epoch, "discarding work from torn down view");
                }
                output = fut => {
                    if !token.is_cancelled() {
                        sink(epoch, output);
                    }
                }
            }
        })
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;
    use std::time::Duration;

    #[test]
    fn test_epochs_are_unique() {
        let a = ViewScope::new();
        let b = ViewScope::new();
        assert_ne!(a.epoch(), b.epoch());
    }

    #[tokio::test]
    async fn test_spawn_delivers_while_live() {
        let scope = ViewScope::new();
        let (tx, rx) = tokio::sync::oneshot::channel();
        let epoch = scope.epoch();
        scope
            .spawn(async { 7 }, move |e, v| {
                let _ = tx.send((e, v));
            })
            .await
            .unwrap();
        assert_eq!(rx.await.unwrap(), (epoch, 7));
    }

    #[tokio::test]
    async fn test_cancelled_scope_never_calls_sink() {
        let scope = ViewScope::new();
        let called = Arc::new(AtomicBool::new(false));
        let flag = called.clone();
        let handle = scope.spawn(
            async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                1
            },
            move |_, _| flag.store(true, Ordering::SeqCst),
        );
        drop(scope);
        handle.await.unwrap();
        assert!(!called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_guard_reports_cancellation() {
        let scope = ViewScope::new();
        scope.cancel();
        let result = scope
            .guard(async { Ok::<_, ClientError>(1) })
            .await;
        assert!(matches!(result, Err(ClientError::Cancelled)));
    }
}
