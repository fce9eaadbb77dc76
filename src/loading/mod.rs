//! Loading-state coordination
//!
//! Keyed busy/idle flags with a derived global busy flag, released through
//! RAII guards so every exit path (success, failure, cancellation) leaves
//! the state clean.

mod scope;
mod tracker;


pub use scope::LoadingScope;
pub use tracker::{GLOBAL_KEY, LoadingGuard, LoadingTracker};
