// src/lib.rs

//! Pantip scraper library.
//!
//! Topic pages, comments and search results are fetched and decoded through
//! pipelines of fallible steps composed with [`either::Either`].
//! [`client::PantipClient`] runs those pipelines and returns plain values.

pub mod client;
pub mod either;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use client::PantipClient;
pub use either::{Either, Failure, Maybe, Success};
pub use error::{AppError, Result};
