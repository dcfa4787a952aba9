//! Request lifetimes tied to the view that started them.
//!
//! A view creates one [`RequestScope`] when it mounts and cancels it when it is torn
//! down. Every backend call runs through [`RequestScope::run`], so a response that
//! arrives after the view is gone never reaches its state.

use std::{
    cell::{Cell, RefCell},
    future::Future,
    rc::Rc,
};

use dioxus_logger::tracing;
use futures::future::{AbortHandle, Abortable};

use crate::client::error::Error;

/// Cancellation scope for in-flight requests
///
/// Clones share the same scope.
#[derive(Clone, Default)]
pub struct RequestScope {
    inner: Rc<RequestScopeRef>,
}

/// Two handles are equal when they share the same scope
impl PartialEq for RequestScope {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

#[derive(Default)]
struct RequestScopeRef {
    cancelled: Cell<bool>,
    handles: RefCell<Vec<(u64, AbortHandle)>>,
    next_handle_id: Cell<u64>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a request inside the scope
    ///
    /// # Returns
    /// - `Ok(output)` - The request completed while the scope was live
    /// - `Err(Error::Cancelled)` - The scope was cancelled before or while the request ran
    pub async fn run<F>(&self, request: F) -> Result<F::Output, Error>
    where
        F: Future,
    {
        if self.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let (handle, registration) = AbortHandle::new_pair();
        let handle_id = self.inner.next_handle_id.get();
        self.inner.next_handle_id.set(handle_id + 1);
        self.inner.handles.borrow_mut().push((handle_id, handle));

        let output = Abortable::new(request, registration).await;

        self.inner
            .handles
            .borrow_mut()
            .retain(|(id, _)| *id != handle_id);

        match output {
            Ok(output) if !self.is_cancelled() => Ok(output),
            _ => {
                tracing::debug!("Dropped response of a cancelled request");
                Err(Error::Cancelled)
            }
        }
    }

    /// Run a fallible request inside the scope, flattening its error
    pub async fn run_fallible<F, T, E>(&self, request: F) -> Result<T, Error>
    where
        F: Future<Output = Result<T, E>>,
        E: Into<Error>,
    {
        self.run(request).await?.map_err(Into::into)
    }

    /// Abort every in-flight request and fail later ones immediately
    pub fn cancel(&self) {
        if self.inner.cancelled.replace(true) {
            return;
        }

        let handles: Vec<AbortHandle> = self
            .inner
            .handles
            .borrow_mut()
            .drain(..)
            .map(|(_, handle)| handle)
            .collect();

        tracing::debug!(in_flight = handles.len(), "Cancelling request scope");

        for handle in handles {
            handle.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }

    /// Number of requests currently running in the scope
    pub fn in_flight(&self) -> usize {
        self.inner.handles.borrow().len()
    }
}
