use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

type Action<T> = Arc<dyn Fn(T) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

/// Collapses bursts of calls into one trailing call.
///
/// Every [`call`](Debouncer::call) aborts the previously scheduled run and
/// schedules the action again with the new argument, so only the argument of
/// the last call in a burst is used. A run whose delay already elapsed is
/// aborted too if it is still executing. At most one task is alive per
/// debouncer and it is aborted on drop.
///
/// Must be used from inside a tokio runtime.
pub struct Debouncer<T> {
    delay: Duration,
    action: Action<T>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F, Fut>(delay: Duration, action: F) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            delay,
            action: Arc::new(move |arg| -> Pin<Box<dyn Future<Output = ()> + Send>> {
                Box::pin(action(arg))
            }),
            pending: Mutex::new(None),
        }
    }

    pub fn call(&self, arg: T) {
        let action = Arc::clone(&self.action);
        let delay = self.delay;

        let mut pending = self.lock();
        if let Some(handle) = pending.take() {
            handle.abort();
        }

        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action(arg).await;
        }));
    }

    /// Drop the scheduled run, returns true if one was still alive
    pub fn cancel(&self) -> bool {
        match self.lock().take() {
            Some(handle) => {
                let alive = !handle.is_finished();
                handle.abort();
                alive
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.lock().as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Debouncer<T> {
    fn lock(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.lock().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    fn recording(delay_ms: u64) -> (Debouncer<u32>, Arc<Mutex<Vec<u32>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let debouncer = Debouncer::new(Duration::from_millis(delay_ms), move |n| {
            let sink = Arc::clone(&sink);
            async move {
                sink.lock().unwrap().push(n);
            }
        });
        (debouncer, seen)
    }

    #[tokio::test(start_paused = true)]
    async fn burst_runs_once_with_last_argument() {
        let (debouncer, seen) = recording(500);

        for n in 1..=5 {
            debouncer.call(n);
            sleep(Duration::from_millis(100)).await;
        }
        assert!(debouncer.is_pending());
        assert!(seen.lock().unwrap().is_empty());

        sleep(Duration::from_secs(1)).await;
        assert_eq!(*seen.lock().unwrap(), vec![5]);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn quiet_gaps_run_each_call() {
        let (debouncer, seen) = recording(500);

        debouncer.call(1);
        sleep(Duration::from_millis(600)).await;
        debouncer.call(2);
        sleep(Duration::from_millis(600)).await;

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_scheduled_run() {
        let (debouncer, seen) = recording(500);

        debouncer.call(7);
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());

        sleep(Duration::from_secs(1)).await;
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn drop_aborts_pending_run() {
        let (debouncer, seen) = recording(500);

        debouncer.call(9);
        drop(debouncer);

        sleep(Duration::from_secs(1)).await;
        assert!(seen.lock().unwrap().is_empty());
    }
}
