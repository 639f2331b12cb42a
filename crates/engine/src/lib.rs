//! CineGraph Engine library.
//!
//! This crate contains the data-access layer of the movie application.
//!
//! ## Structure
//!
//! - `infrastructure/` - Port traits and their Neo4j implementations,
//!   connection configuration, schema bootstrap, fixture loading
//! - `app` - Application composition
//!
//! The HTTP layer that consumes [`App`] lives outside this workspace.

pub mod app;
pub mod infrastructure;

/// Testcontainers-backed Neo4j harness for integration tests.
#[cfg(test)]
pub mod test_support;

pub use app::App;
