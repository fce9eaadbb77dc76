//! Backend client
//!
//! `ApiClient` issues JSON requests against the configured base endpoint;
//! one impl file per endpoint group the dashboard consumes.

mod client;
mod poc;
mod reports;
mod scan;
mod settings;
mod tasks;


pub use client::ApiClient;
