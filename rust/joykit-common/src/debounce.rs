//! Time-debounced scheduling of a single superseding task.

use std::future::Future;
use std::time::Duration;

/// A cancellable, time-debounced task slot of depth one.
///
/// Each call to [`Debouncer::schedule`] cancels whatever task is still
/// pending and arms a fresh one that runs after the configured delay.
/// Superseded tasks produce no observable effect. This is the shape of
/// "validate this input field, but only once the user stops typing":
/// rapid-fire events collapse into a single trailing execution.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use joykit_common::Debouncer;
///
/// # async fn example() {
/// let mut debouncer = Debouncer::new(Duration::from_millis(500));
///
/// // Only the last of these ever runs.
/// debouncer.schedule(async { /* validate "c" */ });
/// debouncer.schedule(async { /* validate "ck" */ });
/// debouncer.schedule(async { /* validate "ckb" */ });
/// # }
/// ```
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,

    #[cfg(not(target_arch = "wasm32"))]
    pending: Option<tokio::task::JoinHandle<()>>,

    #[cfg(target_arch = "wasm32")]
    pending: Option<tokio::sync::oneshot::Sender<()>>,
}

impl Debouncer {
    /// Create a debouncer that delays scheduled tasks by `delay`.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// The configured debounce delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether a scheduled task is still waiting to run.
    pub fn is_pending(&self) -> bool {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.pending
                .as_ref()
                .is_some_and(|handle| !handle.is_finished())
        }

        #[cfg(target_arch = "wasm32")]
        {
            self.pending
                .as_ref()
                .is_some_and(|cancel| !cancel.is_closed())
        }
    }

    /// Schedule `task` to run after the debounce delay, superseding any
    /// pending task.
    ///
    /// Must be called from within a tokio runtime.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn schedule<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();

        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));
    }

    /// Schedule `task` to run after the debounce delay, superseding any
    /// pending task.
    #[cfg(target_arch = "wasm32")]
    pub fn schedule<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + 'static,
    {
        use futures_util::future::{Either, select};

        self.cancel();

        let (cancel, cancelled) = tokio::sync::oneshot::channel::<()>();
        let delay = u32::try_from(self.delay.as_millis()).unwrap_or(u32::MAX);

        wasm_bindgen_futures::spawn_local(async move {
            let timeout = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(delay));
            match select(timeout, cancelled).await {
                Either::Left(_) => task.await,
                // The sender was dropped: the task was superseded or
                // explicitly cancelled before the timeout elapsed.
                Either::Right(_) => (),
            }
        });

        self.pending = Some(cancel);
    }

    /// Drop the pending task, if any, without running it.
    pub fn cancel(&mut self) {
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        #[cfg(target_arch = "wasm32")]
        {
            self.pending = None;
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
