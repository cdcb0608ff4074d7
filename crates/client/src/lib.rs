//! `starwars-client` library crate.
//!
//! Re-exports internal modules for integration testing. The binary
//! entrypoint lives in `main.rs`.

pub mod api;
pub mod config;
pub mod poller;
