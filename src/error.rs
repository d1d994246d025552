//! Unified error handling for the wikimeta crate
//!
//! This module provides the library's error type. Transport failures keep
//! their [`FetchError`] so callers can match on the status or timeout.
//!
//! An empty DBPedia result is not an error: it is reported through
//! [`crate::models::MetadataResult::error`]. Missing predicates are never
//! errors either.

use std::io;
use thiserror::Error;

pub use crate::utils::error::FetchError;

/// Unified error type for the wikimeta crate
#[derive(Error, Debug)]
pub enum Error {
    /// Graph fetch failed; surfaced verbatim from the transport
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// JSON that is not an RDF/JSON graph
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading a saved RDF/JSON document failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
