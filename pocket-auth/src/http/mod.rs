//! Outbound HTTP: the request executor and the response interpreter.

mod client;
mod interpret;

#[cfg(test)]
pub use client::MockExecute;
pub use client::{Execute, HttpClientConfig, HttpExecutor, X_ACCEPT};
pub use interpret::interpret;
