//! Callback Recorder
//!
//! Sink for results delivered through hardware callbacks. Each recorder hands
//! out callbacks that append every delivered batch, and lets a test wait for
//! deliveries that happen on background threads.

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

struct Inner<T> {
    batches: Mutex<Vec<Vec<T>>>,
    delivered: Condvar,
}

/// Records every batch passed to the callbacks it creates
pub struct CallbackRecorder<T> {
    inner: Arc<Inner<T>>,
}

impl<T> CallbackRecorder<T>
where
    T: Clone + Send + 'static,
{
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                batches: Mutex::new(Vec::new()),
                delivered: Condvar::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Vec<T>>> {
        self.inner.batches.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(inner: &Inner<T>, batch: Vec<T>) {
        inner
            .batches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(batch);
        inner.delivered.notify_all();
    }

    /// Completion callback for `get_values` / `set_values`
    pub fn callback(&self) -> Arc<dyn Fn(Vec<T>) + Send + Sync> {
        let inner = Arc::clone(&self.inner);
        Arc::new(move |batch: Vec<T>| Self::push(&inner, batch))
    }

    /// Listener for `register_on_property_change_event`
    pub fn boxed(&self) -> Box<dyn Fn(Vec<T>) + Send + Sync> {
        let inner = Arc::clone(&self.inner);
        Box::new(move |batch: Vec<T>| Self::push(&inner, batch))
    }

    /// Snapshot of every batch delivered so far, in delivery order
    pub fn batches(&self) -> Vec<Vec<T>> {
        self.lock().clone()
    }

    /// Remove and return everything delivered so far
    pub fn take(&self) -> Vec<Vec<T>> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Wait until at least `count` batches were delivered.
    ///
    /// Returns false if `timeout` elapsed first.
    pub fn wait_for(&self, count: usize, timeout: Duration) -> bool {
        let batches = self.lock();
        let (batches, _) = self
            .inner
            .delivered
            .wait_timeout_while(batches, timeout, |batches| batches.len() < count)
            .unwrap_or_else(PoisonError::into_inner);
        batches.len() >= count
    }
}

impl<T> Clone for CallbackRecorder<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for CallbackRecorder<T>
where
    T: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
