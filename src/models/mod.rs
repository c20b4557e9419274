// src/models/mod.rs

//! Domain models for the scraper.

mod comment;
mod config;
mod search;

// Re-export all public types
pub use comment::CommentPage;
pub use config::{Config, LoggingConfig, ScraperConfig};
pub use search::{SearchQuery, SearchResult};
