//! Cancelable trailing-edge timer

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

/// A single-slot scheduled task on the tokio runtime.
///
/// Scheduling replaces whatever was armed before. Only the waiting part is
/// cancelable: once the delay elapses the task runs synchronously, so any
/// work it spawns is out of the debouncer's reach.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    timer: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period
    pub fn new(delay: Duration) -> Self {
        Self { delay, timer: None }
    }

    /// Arm the timer, canceling any previously armed one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let deadline = Instant::now() + self.delay;
        self.timer = Some(tokio::spawn(async move {
            sleep_until(deadline).await;
            task();
        }));
    }

    /// Cancel the armed timer. Returns whether one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.timer.take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }

    /// Whether a timer is armed and has not fired yet
    pub fn is_armed(&self) -> bool {
        self.timer
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
