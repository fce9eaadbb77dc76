//! Per-call loading scope

use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;

use super::tracker::LoadingTracker;
use crate::error::{AppError, Result};

/// Scoped view over a tracker for one call site: a fixed key plus the last
/// error observed under that key. Clones share the same error slot.
#[derive(Clone)]
pub struct LoadingScope {
    tracker: LoadingTracker,
    key: String,
    last_error: Arc<Mutex<Option<AppError>>>,
}

impl LoadingScope {
    /// Scope `key` on the given tracker.
    pub fn new(tracker: &LoadingTracker, key: impl Into<String>) -> Self {
        Self {
            tracker: tracker.clone(),
            key: key.into(),
            last_error: Arc::new(Mutex::new(None)),
        }
    }

    /// Mark the scope busy and clear the last error.
    pub fn start(&self) {
        *self.last_error.lock() = None;
        self.tracker.start(&self.key);
    }

    /// Release one `start`.
    pub fn end(&self) {
        self.tracker.end(&self.key);
    }

    /// Whether this scope's key is busy.
    pub fn is_loading(&self) -> bool {
        self.tracker.is_loading(&self.key)
    }

    /// Last error recorded by a failed `run`, if any.
    pub fn last_error(&self) -> Option<AppError> {
        self.last_error.lock().clone()
    }

    /// Record an error without going through `run`.
    pub fn set_error(&self, err: AppError) {
        *self.last_error.lock() = Some(err);
    }

    /// Run `fut` under this scope. Clears the last error up front; a
    /// failure is normalized into the error slot before propagating. The
    /// key is released on every exit path.
    pub async fn run<F, T>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        *self.last_error.lock() = None;
        let _guard = self.tracker.guard(&self.key);

        match fut.await {
            Ok(value) => Ok(value),
            Err(err) => {
                *self.last_error.lock() = Some(AppError::from(&err));
                Err(err)
            }
        }
    }
}
