//! # webscan-client
//!
//! Async client SDK for the WebScan vulnerability-scanning backend.
//! Wraps the backend's REST surface in typed calls and provides the two
//! coordination pieces every embedder needs: normalized error handling and
//! keyed loading-state tracking.
//!
//! ## Features
//!
//! - **Typed endpoint surface**: scan operations, task and report
//!   management, POC scans, settings, and health checks
//! - **Normalized errors**: every raw failure classifies into one tagged
//!   model (`Network`, `Api`, `Validation`, `Auth`, `Unknown`) exactly once
//! - **Handler dispatch**: per-kind handlers, a global fallback, and an
//!   injectable user-notification sink
//! - **Loading coordination**: independently keyed busy flags with RAII
//!   release on success, failure, and cancellation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use webscan_client::{ApiClient, ErrorDispatcher, ErrorKind, LoadingTracker};
//! use webscan_client::models::PortScanRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::from_env()?;
//!     let loading = LoadingTracker::new();
//!     let errors = ErrorDispatcher::new();
//!
//!     // Auth failures get their own handling; redirect-to-login goes here.
//!     errors.register(ErrorKind::Auth, |err| {
//!         eprintln!("session expired: {}", err.message);
//!     });
//!
//!     let request = PortScanRequest::with_ports("192.168.1.10", "1-1000");
//!     let result = loading
//!         .with_loading("port-scan", client.port_scan(&request))
//!         .await;
//!
//!     match result {
//!         Ok(response) => println!("scan finished: {}", response.message),
//!         Err(err) => {
//!             errors.handle(err);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod client;
pub mod config;
pub mod error;
pub mod loading;
pub mod models;

// Re-export main types
pub use client::ApiClient;
pub use config::{ClientConfig, ConfigBuilder};
pub use error::{AppError, ClientError, ErrorDispatcher, ErrorKind, Notifier, Result};
pub use loading::{LoadingScope, LoadingTracker};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the SDK with default logging
pub fn init() {
    tracing_subscriber::fmt::init();
}
