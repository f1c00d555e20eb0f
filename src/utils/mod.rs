//! Shared utilities for the Breezy browser shell

pub mod error;

pub use error::{BreezyError, Result};
