//! Cancellation for fetches owned by a component.

use futures::future::{AbortHandle, Abortable, Aborted};
use std::cell::{Cell, RefCell};
use std::future::Future;

/// Owns the abort handles of every task spawned on behalf of one component.
///
/// Disposing the scope (or dropping it) aborts all of them, so a response that
/// arrives after the component is gone never reaches its state.
#[derive(Default)]
pub struct TaskScope {
    handles: RefCell<Vec<AbortHandle>>,
    disposed: Cell<bool>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `future` so it resolves to `Err(Aborted)` once the scope is
    /// disposed. A future registered on a disposed scope is aborted up front.
    pub fn register<F>(&self, future: F) -> Abortable<F>
    where
        F: Future,
    {
        let (handle, registration) = AbortHandle::new_pair();
        if self.disposed.get() {
            handle.abort();
        } else {
            self.handles.borrow_mut().push(handle);
        }
        Abortable::new(future, registration)
    }

    /// Like `register`, discarding the output. For fire-and-forget spawns.
    pub fn guard<F>(&self, future: F) -> impl Future<Output = ()>
    where
        F: Future<Output = ()>,
    {
        let task = self.register(future);
        async move {
            if let Err(Aborted) = task.await {
                tracing::trace!("Scoped task aborted");
            }
        }
    }

    pub fn dispose(&self) {
        self.disposed.set(true);
        for handle in self.handles.borrow_mut().drain(..) {
            handle.abort();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }

    pub fn active(&self) -> usize {
        self.handles
            .borrow()
            .iter()
            .filter(|h| !h.is_aborted())
            .count()
    }
}

impl Drop for TaskScope {
    fn drop(&mut self) {
        self.dispose();
    }
}
