//! Kind-based error dispatch

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{error, warn};

use super::types::{AppError, ErrorKind};

/// Callback invoked with a normalized error
pub type ErrorHandler = Box<dyn Fn(&AppError) + Send + Sync>;

/// Sink surfacing error messages to the user. Injected so embedders can
/// plug in their own notification mechanism (toast, dialog, status bar).
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Surface a user-visible message.
    fn notify(&self, message: &str);
}

/// Default notifier: surfaces messages through the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        warn!("{message}");
    }
}

#[derive(Default)]
struct Registry {
    handlers: HashMap<ErrorKind, ErrorHandler>,
    fallback: Option<ErrorHandler>,
}

/// Routes normalized errors to registered per-kind handlers, a global
/// fallback, or the default notifier. Cheaply clonable; clones share the
/// same registry.
#[derive(Clone)]
pub struct ErrorDispatcher {
    registry: Arc<RwLock<Registry>>,
    notifier: Arc<dyn Notifier>,
}

impl ErrorDispatcher {
    /// Dispatcher with the default log-based notifier.
    pub fn new() -> Self {
        Self::with_notifier(Arc::new(LogNotifier))
    }

    /// Dispatcher surfacing unhandled errors through `notifier`.
    pub fn with_notifier(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            registry: Arc::new(RwLock::new(Registry::default())),
            notifier,
        }
    }

    /// Register a handler for one error kind. At most one handler per
    /// kind; the last registration wins.
    pub fn register<F>(&self, kind: ErrorKind, handler: F)
    where
        F: Fn(&AppError) + Send + Sync + 'static,
    {
        self.registry.write().handlers.insert(kind, Box::new(handler));
    }

    /// Replace the global fallback handler.
    pub fn set_global_handler<F>(&self, handler: F)
    where
        F: Fn(&AppError) + Send + Sync + 'static,
    {
        self.registry.write().fallback = Some(Box::new(handler));
    }

    /// Normalize `err` and dispatch it: the handler registered for its
    /// kind, else the global fallback, else the default notifier. Always
    /// returns the normalized error.
    ///
    /// Handlers run under the registry lock: they must not call
    /// `register` or `set_global_handler`.
    pub fn handle(&self, err: impl Into<AppError>) -> AppError {
        let err = err.into();
        error!(kind = ?err.kind, status = ?err.status_code, "{}", err.message);

        let registry = self.registry.read();
        if let Some(handler) = registry.handlers.get(&err.kind) {
            handler(&err);
        } else if let Some(fallback) = &registry.fallback {
            fallback(&err);
        } else {
            self.notifier.notify(&err.message);
        }

        err
    }
}

impl Default for ErrorDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
