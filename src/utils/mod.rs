//! Utility functions and helpers
//!
//! Filename normalization, file access, application paths and the
//! tracing setup shared by the rest of the crate.

pub mod app_paths;
pub mod files;
pub mod logging;
pub mod paths;
