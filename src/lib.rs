//! wikimeta - Wikipedia topic metadata from DBPedia
//!
//! Resolves a Wikipedia URL or page name to a DBPedia resource, fetches its
//! RDF/JSON description and normalizes it into a flat [`models::Summary`].
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and settings
//! - [`dbpedia`] - URL resolution, SPARQL client and summary extraction
//! - [`models`] - RDF/JSON graph types and the summary record
//! - [`error`] - Unified error type
//! - [`utils`] - Common utilities and helpers
//!
//! # Example
//!
//! ```no_run
//! use wikimeta::config::Config;
//! use wikimeta::dbpedia::{self, DbpediaClient};
//! use wikimeta::models::GetDataOptions;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = DbpediaClient::from_config(&config.dbpedia)?;
//!     let result = dbpedia::get_data(
//!         &client,
//!         "https://en.wikipedia.org/wiki/Ada_Lovelace",
//!         GetDataOptions::default(),
//!     )
//!     .await?;
//!     println!("{}", serde_json::to_string_pretty(&result)?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dbpedia;
pub mod error;
pub mod models;
pub mod utils;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::dbpedia::{
        extract_summary, get_data, read_document, resolve, DbpediaClient, GraphSource,
    };
    pub use crate::error::{Error, FetchError, Result};
    pub use crate::models::{GetDataOptions, MetadataResult, RdfGraph, RdfValue, Summary};
}

// Direct re-exports for convenience
pub use models::{MetadataResult, Summary};
