//! DBPedia metadata lookup
//!
//! This module turns a Wikipedia URL or page name into a normalized
//! [`Summary`]:
//! - [`resolver`] - input to DBPedia resource URI
//! - [`client`] - `DESCRIBE` query against the SPARQL endpoint
//! - [`vocab`] - namespace prefixes and English-first property lookup
//! - [`summary`] - RDF/JSON graph to [`Summary`]
//!
//! # Example
//!
//! ```no_run
//! use wikimeta::dbpedia::{self, client::DbpediaClient};
//! use wikimeta::models::GetDataOptions;
//!
//! #[tokio::main]
//! async fn main() -> wikimeta::error::Result<()> {
//!     let client = DbpediaClient::new()?;
//!     let result = dbpedia::get_data(&client, "World War II", GetDataOptions::default()).await?;
//!     if let Some(summary) = result.summary {
//!         println!("{:?}", summary.title);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod resolver;
pub mod summary;
pub mod vocab;

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::models::{
    is_empty_graph, GetDataOptions, MetadataResult, RdfGraph, Summary, EMPTY_RESULT_MESSAGE,
};

pub use client::{DbpediaClient, GraphSource};
pub use resolver::resolve;
pub use summary::{extract_summary, property_names};

/// Fetch and summarize the DBPedia resource behind `input`
///
/// An empty graph is not an error: the result carries
/// [`EMPTY_RESULT_MESSAGE`] and no summary.
///
/// # Errors
///
/// Fetch failures are returned unchanged as `Error::Fetch`. A non-empty
/// document that is not an RDF/JSON graph yields `Error::Json`.
pub async fn get_data<S>(source: &S, input: &str, options: GetDataOptions) -> Result<MetadataResult>
where
    S: GraphSource + ?Sized,
{
    let dbpedia_url = resolve(input);
    info!(input = %input, dbpedia_url = %dbpedia_url, "Fetching DBPedia resource");

    let raw = source.fetch_graph(&dbpedia_url).await?;
    let result = summarize(dbpedia_url, raw, options)?;

    if let Some(summary) = &result.summary {
        info!(
            dbpedia_url = %result.dbpedia_url,
            title = ?summary.title,
            kind = ?summary.kind,
            "Extracted summary"
        );
    }

    Ok(result)
}

/// Build a [`MetadataResult`] from an already fetched RDF/JSON document
///
/// # Errors
///
/// Returns `Error::Json` when a non-empty document is not an RDF/JSON graph
pub fn summarize(dbpedia_url: String, raw: Value, options: GetDataOptions) -> Result<MetadataResult> {
    if is_empty_graph(&raw) {
        warn!(dbpedia_url = %dbpedia_url, "DBPedia returned no data");
        return Ok(MetadataResult {
            raw: options.include_raw.then_some(raw),
            dbpedia_url,
            summary: None,
            error: Some(EMPTY_RESULT_MESSAGE.to_string()),
        });
    }

    let graph = parse_graph(&raw)?;
    let summary: Summary = extract_summary(&dbpedia_url, &graph);

    Ok(MetadataResult {
        raw: options.include_raw.then_some(raw),
        dbpedia_url,
        summary: Some(summary),
        error: None,
    })
}

/// Fetch the graph behind `input` without summarizing it
///
/// Returns the resolved resource URI with the parsed graph. An empty
/// document yields an empty graph.
///
/// # Errors
///
/// Same as [`get_data`]
pub async fn fetch_graph<S>(source: &S, input: &str) -> Result<(String, RdfGraph)>
where
    S: GraphSource + ?Sized,
{
    let dbpedia_url = resolve(input);
    info!(input = %input, dbpedia_url = %dbpedia_url, "Fetching DBPedia resource");

    let raw = source.fetch_graph(&dbpedia_url).await?;
    let graph = if is_empty_graph(&raw) {
        RdfGraph::new()
    } else {
        parse_graph(&raw)?
    };

    Ok((dbpedia_url, graph))
}

/// Load a saved RDF/JSON document, e.g. a previous `summary --raw` output
///
/// The document is only checked to be JSON here; pass it to [`summarize`] or
/// [`parse_graph`] for the graph shape.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be read and `Error::Json` if it is
/// not valid JSON
pub async fn read_document(path: &Path) -> Result<Value> {
    let content = tokio::fs::read_to_string(path).await?;
    debug!(path = %path.display(), bytes = content.len(), "Read RDF/JSON document");

    Ok(serde_json::from_str(&content)?)
}

/// Interpret a JSON document as an RDF/JSON graph
///
/// # Errors
///
/// Returns `Error::Json` if the document does not have the
/// subject -> predicate -> values shape
pub fn parse_graph(raw: &Value) -> Result<RdfGraph> {
    Ok(RdfGraph::deserialize(raw)?)
}
