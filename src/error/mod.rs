//! Error handling
//!
//! Raw client failures (`ClientError`) are normalized exactly once into the
//! uniform `AppError` model, then routed by `ErrorDispatcher` to registered
//! handlers or a user-facing notifier.

mod client_error;
mod dispatcher;
mod types;

#[cfg(test)]
mod tests;

pub use client_error::{ClientError, Result};
pub use dispatcher::{ErrorDispatcher, ErrorHandler, LogNotifier, Notifier};
pub use types::{AppError, ErrorKind, messages};
