//! mg-core: shared error type and configuration.
//!
//! This crate is the foundational dependency for the other mg-* crates. It
//! carries the unified [`Error`] (with its HTTP status mapping) and the
//! JSON-backed [`config::Config`] every service reads at startup.

pub mod config;
pub mod error;

pub use error::{Error, Result};
