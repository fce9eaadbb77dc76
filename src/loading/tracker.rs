//! Keyed busy-state tracking

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

/// Key used by callers that don't scope their work.
pub const GLOBAL_KEY: &str = "global";

/// Tracks independently keyed busy flags. A key is busy while its
/// re-entrancy depth is above zero; the busy count is derived from the map,
/// so unmatched `start`/`end` calls cannot desynchronize it. Cheaply
/// clonable; clones share the same state.
#[derive(Clone, Default)]
pub struct LoadingTracker {
    states: Arc<Mutex<HashMap<String, usize>>>,
}

impl LoadingTracker {
    /// Create an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` busy. Re-entrant: each `start` must be paired with an
    /// `end` before the key goes idle again.
    pub fn start(&self, key: &str) {
        let mut states = self.states.lock();
        let depth = states.entry(key.to_string()).or_insert(0);
        *depth += 1;
        debug!(key, depth = *depth, "loading started");
    }

    /// Release one `start` on `key`. Calls without a matching `start` are
    /// ignored.
    pub fn end(&self, key: &str) {
        let mut states = self.states.lock();
        if let Some(depth) = states.get_mut(key) {
            *depth -= 1;
            if *depth == 0 {
                states.remove(key);
            }
        }
    }

    /// Whether `key` is currently busy.
    pub fn is_loading(&self, key: &str) -> bool {
        self.states.lock().contains_key(key)
    }

    /// Number of distinct busy keys.
    pub fn busy_count(&self) -> usize {
        self.states.lock().len()
    }

    /// True while any key is busy.
    pub fn is_busy(&self) -> bool {
        self.busy_count() > 0
    }

    /// Reset every key to idle.
    pub fn clear(&self) {
        self.states.lock().clear();
    }

    /// RAII handle: `key` stays busy until the guard drops.
    pub fn guard(&self, key: &str) -> LoadingGuard {
        self.start(key);
        LoadingGuard {
            tracker: self.clone(),
            key: key.to_string(),
        }
    }

    /// Run `fut` with `key` busy. The key is released on every exit path:
    /// success, failure, and cancellation of the returned future.
    pub async fn with_loading<F, T>(&self, key: &str, fut: F) -> T
    where
        F: Future<Output = T>,
    {
        let _guard = self.guard(key);
        fut.await
    }
}

/// Releases its key when dropped.
pub struct LoadingGuard {
    tracker: LoadingTracker,
    key: String,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.tracker.end(&self.key);
    }
}
