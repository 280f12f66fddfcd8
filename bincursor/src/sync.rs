//! Task coordination around shared cursors
//!
//! Cursors carry no internal locking. When several async tasks take turns on
//! the same window, they serialise through a [`TaskLock`]: acquisition is
//! first-come first-served and releasing wakes exactly one waiter.
//!
//! A [`Cursor`](crate::Cursor) shares its storage through `Rc` and is not
//! `Send`. A `TaskLock<Cursor>` is therefore shared with `Rc` between tasks
//! started by `tokio::task::spawn_local` on a `LocalSet`. Values that are
//! `Send` can be shared with `Arc` across `tokio::spawn` tasks as usual.

use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};
use tracing::trace;

/// Fair async mutual exclusion over a value
#[derive(Debug, Default)]
pub struct TaskLock<T> {
    inner: Mutex<T>,
    waiting: AtomicUsize,
}

/// Exclusive access to a [`TaskLock`]'s value, released on drop
#[derive(Debug)]
pub struct TaskGuard<'a, T> {
    guard: MutexGuard<'a, T>,
}

// Keeps the waiter count accurate when an acquire future is dropped early
struct Waiting<'a>(&'a AtomicUsize);

impl Drop for Waiting<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

impl<T> TaskLock<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(value),
            waiting: AtomicUsize::new(0),
        }
    }

    /// Wait for exclusive access
    ///
    /// Waiters are served in the order they called `acquire`. Dropping the
    /// returned future before it completes gives up the place in line.
    pub async fn acquire(&self) -> TaskGuard<'_, T> {
        let queued = self.waiting.fetch_add(1, Ordering::AcqRel);
        let waiting = Waiting(&self.waiting);
        trace!(queued, "waiting for task lock");

        let guard = self.inner.lock().await;
        drop(waiting);
        trace!("task lock acquired");
        TaskGuard { guard }
    }

    /// Take the lock only if it is free right now
    pub fn try_acquire(&self) -> Option<TaskGuard<'_, T>> {
        self.inner.try_lock().ok().map(|guard| TaskGuard { guard })
    }

    /// Number of tasks currently waiting in `acquire`
    pub fn waiting(&self) -> usize {
        self.waiting.load(Ordering::Acquire)
    }

    pub fn get_mut(&mut self) -> &mut T {
        self.inner.get_mut()
    }

    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}

impl<T> TaskGuard<'_, T> {
    /// Hand the lock to the next waiter
    pub fn release(self) {
        trace!("task lock released");
    }
}

impl<T> Deref for TaskGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.guard
    }
}

impl<T> DerefMut for TaskGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.guard
    }
}

/// Suspend the current task for `duration`
pub async fn delay(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Let other ready tasks run before continuing
pub async fn yield_now() {
    tokio::task::yield_now().await;
}
