//! Error types for the DBPedia transport
//!
//! This module defines the errors surfaced by the graph fetch collaborator.

use thiserror::Error;

/// Errors that can occur while fetching a graph from the SPARQL endpoint
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the endpoint
    #[error("Server error: {0}")]
    ServerError(u16),

    /// Request timeout
    #[error("Request timeout")]
    Timeout,

    /// Response body is not JSON
    #[error("Decoding error: {0}")]
    Decode(String),

    /// Invalid endpoint URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Configured header value cannot be sent
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
}
