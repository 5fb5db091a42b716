//! Completion-callback adapter.
//!
//! Every network operation in this crate is an `async fn`. Callers that want
//! the `(error, result)` callback style hand the future to
//! [`spawn_with_callback`], which runs it on the current tokio runtime and
//! invokes the callback exactly once with either `(None, Some(value))` or
//! `(Some(error), None)`. Without a runtime the operation is not started and
//! the callback receives a [`Runtime`](crate::ErrorKind::Runtime) error instead.

use std::future::Future;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::{runtime_error, Error};

/// Boxed completion callback.
pub type Callback<T> = Box<dyn FnOnce(Option<Error>, Option<T>) + Send + 'static>;

/// Deliver a settled result to a completion callback.
pub fn complete<T, C>(result: Result<T, Error>, callback: C)
where
    C: FnOnce(Option<Error>, Option<T>),
{
    match result {
        Ok(value) => callback(None, Some(value)),
        Err(err) => callback(Some(err), None),
    }
}

/// Spawn `operation` and report its outcome to `callback`.
///
/// Returns the task handle, which may be awaited to know when the callback
/// has run. Returns `None` when called outside a tokio runtime; the callback
/// has then already been invoked with the error.
pub fn spawn_with_callback<F, T, C>(operation: F, callback: C) -> Option<JoinHandle<()>>
where
    F: Future<Output = Result<T, Error>> + Send + 'static,
    T: Send + 'static,
    C: FnOnce(Option<Error>, Option<T>) + Send + 'static,
{
    match Handle::try_current() {
        Ok(handle) => Some(handle.spawn(async move { complete(operation.await, callback) })),
        Err(err) => {
            complete(Err(runtime_error(err)), callback);
            None
        }
    }
}
