//! Utility functions and helpers.

pub mod agents;
pub mod http;
pub mod log;
pub mod url;
