//! Debouncing of repeated calls
//!
//! [`Debouncer`] keeps at most one pending timer per key: scheduling a call
//! for a key aborts the timer already waiting for that key. [`DebounceTimer`]
//! is the polled variant for callers that run their own event loop.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use std::time::{Duration, Instant};
use tokio::runtime::{Builder, Handle, Runtime};
use tokio::task::JoinHandle;

struct PendingTimer {
    id: u64,
    task: JoinHandle<()>,
}

type TimerMap = Arc<Mutex<HashMap<String, PendingTimer>>>;

fn lock(timers: &TimerMap) -> MutexGuard<'_, HashMap<String, PendingTimer>> {
    timers.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Keyed debounce registry backed by tokio tasks
pub struct Debouncer {
    handle: Handle,
    /// Set when the debouncer owns its runtime
    _runtime: Option<Runtime>,
    timers: TimerMap,
    next_id: AtomicU64,
}

impl Debouncer {
    /// Debouncer spawning its timers on `handle`
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            _runtime: None,
            timers: Arc::new(Mutex::new(HashMap::new())),
            next_id: AtomicU64::new(0),
        }
    }

    /// Debouncer on the runtime of the calling task
    pub fn current() -> Result<Self, tokio::runtime::TryCurrentError> {
        Handle::try_current().map(Self::new)
    }

    fn with_runtime(runtime: Runtime) -> Self {
        let mut debouncer = Self::new(runtime.handle().clone());
        debouncer._runtime = Some(runtime);
        debouncer
    }

    /// Run `f` after `delay`, replacing any call still pending for `key`
    pub fn debounce<F>(&self, key: impl Into<String>, delay: Duration, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let key = key.into();
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        // Held until the new timer is recorded so it cannot fire unregistered
        let mut timers = lock(&self.timers);
        if let Some(previous) = timers.remove(&key) {
            previous.task.abort();
            tracing::trace!(target: "debounce", "Cancelled pending call for '{}'", key);
        }

        let registry = Arc::clone(&self.timers);
        let task_key = key.clone();
        let task = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;

            let still_current = {
                let mut timers = lock(&registry);
                match timers.get(&task_key) {
                    Some(pending) if pending.id == id => {
                        timers.remove(&task_key);
                        true
                    }
                    _ => false,
                }
            };

            if still_current {
                tracing::trace!(target: "debounce", "Firing '{}'", task_key);
                f();
            }
        });

        tracing::trace!(
            target: "debounce",
            "Scheduled '{}' in {}ms",
            key,
            delay.as_millis()
        );
        timers.insert(key, PendingTimer { id, task });
    }

    /// Cancel the pending call for `key`; returns whether one was pending
    pub fn cancel(&self, key: &str) -> bool {
        match lock(&self.timers).remove(key) {
            Some(pending) => {
                pending.task.abort();
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&self) {
        for (_, pending) in lock(&self.timers).drain() {
            pending.task.abort();
        }
    }

    pub fn is_pending(&self, key: &str) -> bool {
        lock(&self.timers).contains_key(key)
    }

    pub fn pending_count(&self) -> usize {
        lock(&self.timers).len()
    }
}

impl Drop for Debouncer {
    /// Pending calls die with their debouncer
    fn drop(&mut self) {
        self.cancel_all();
    }
}

static GLOBAL: OnceLock<Debouncer> = OnceLock::new();
static GLOBAL_INIT: Mutex<()> = Mutex::new(());

/// Process-wide debouncer with its own single-worker runtime
pub fn global() -> std::io::Result<&'static Debouncer> {
    if let Some(debouncer) = GLOBAL.get() {
        return Ok(debouncer);
    }

    let _guard = GLOBAL_INIT.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(debouncer) = GLOBAL.get() {
        return Ok(debouncer);
    }

    let runtime = Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("t3s-debounce")
        .enable_time()
        .build()?;
    Ok(GLOBAL.get_or_init(|| Debouncer::with_runtime(runtime)))
}

/// Debounce `f` on the process-wide debouncer
pub fn debounce<F>(key: impl Into<String>, delay: Duration, f: F) -> std::io::Result<()>
where
    F: FnOnce() + Send + 'static,
{
    global()?.debounce(key, delay, f);
    Ok(())
}

/// Polled debouncer: tracks when an action should be triggered
/// after a period of inactivity
#[derive(Debug, Clone)]
pub struct DebounceTimer {
    delay: Duration,
    last_event: Option<Instant>,
}

impl DebounceTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_event: None,
        }
    }

    /// Register that an event occurred
    pub fn trigger(&mut self) {
        self.last_event = Some(Instant::now());
    }

    /// True once `delay` has passed since the last event; clears the event
    pub fn should_execute(&mut self) -> bool {
        match self.last_event {
            Some(last) if last.elapsed() >= self.delay => {
                self.last_event = None;
                true
            }
            _ => false,
        }
    }

    /// Time left before the pending action fires
    pub fn time_remaining(&self) -> Option<Duration> {
        self.last_event
            .map(|last| self.delay.saturating_sub(last.elapsed()))
    }

    pub fn reset(&mut self) {
        self.last_event = None;
    }

    pub fn is_pending(&self) -> bool {
        self.last_event.is_some()
    }
}
