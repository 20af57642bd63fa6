//! A cooperative-cancellation token shared between the session and its
//! background threads.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

#[derive(Debug, Default)]
struct Inner {
    done: AtomicBool,
    lock: Mutex<()>,
    wake: Condvar,
}

/// A cancellation token backed by an [`AtomicBool`].
///
/// Clones share the same flag. Unlike a bare flag, a context can also be
/// slept on: [`sleep`](Context::sleep) returns as soon as the context is
/// cancelled, so a worker between two steps notices a pause immediately.
#[derive(Clone, Debug, Default)]
pub struct Context {
    inner: Arc<Inner>,
}

impl Context {
    /// Create a new, non-cancelled context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.inner.done.load(Ordering::Acquire)
    }

    /// Request cancellation and wake every sleeper.
    pub fn cancel(&self) {
        let _guard = self.inner.lock.lock();
        self.inner.done.store(true, Ordering::Release);
        self.inner.wake.notify_all();
    }

    /// Sleep for `duration` or until cancelled, whichever comes first.
    ///
    /// Returns `true` if the full duration elapsed without cancellation.
    pub fn sleep(&self, duration: Duration) -> bool {
        let deadline = Instant::now() + duration;
        let mut guard = self.inner.lock.lock();
        while !self.is_done() {
            if self.inner.wake.wait_until(&mut guard, deadline).timed_out() {
                return !self.is_done();
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clones_share_cancellation() {
        let ctx = Context::new();
        let other = ctx.clone();
        assert!(!other.is_done());
        ctx.cancel();
        assert!(other.is_done());
    }

    #[test]
    fn sleep_runs_to_completion() {
        let ctx = Context::new();
        assert!(ctx.sleep(Duration::from_millis(5)));
    }

    #[test]
    fn cancel_wakes_sleeper() {
        let ctx = Context::new();
        let sleeper = ctx.clone();
        let started = Instant::now();
        let handle = thread::spawn(move || sleeper.sleep(Duration::from_secs(30)));
        thread::sleep(Duration::from_millis(20));
        ctx.cancel();
        assert!(!handle.join().unwrap());
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn cancelled_context_does_not_sleep() {
        let ctx = Context::new();
        ctx.cancel();
        assert!(!ctx.sleep(Duration::from_secs(30)));
    }
}
