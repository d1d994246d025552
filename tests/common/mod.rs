//! Common test utilities

use serde_json::Value;
use wikimeta::models::RdfGraph;

pub const EINSTEIN_URI: &str = "http://dbpedia.org/resource/Albert_Einstein";
#[allow(dead_code)]
pub const BERLIN_URI: &str = "http://dbpedia.org/resource/Berlin";

/// RDF/JSON description of Albert Einstein
pub fn einstein_json() -> Value {
    serde_json::from_str(include_str!("../fixtures/albert_einstein.json"))
        .expect("einstein fixture is valid JSON")
}

/// RDF/JSON description of Berlin
#[allow(dead_code)]
pub fn berlin_json() -> Value {
    serde_json::from_str(include_str!("../fixtures/berlin.json"))
        .expect("berlin fixture is valid JSON")
}

#[allow(dead_code)]
pub fn einstein_graph() -> RdfGraph {
    wikimeta::dbpedia::parse_graph(&einstein_json()).expect("einstein fixture is RDF/JSON")
}

#[allow(dead_code)]
pub fn berlin_graph() -> RdfGraph {
    wikimeta::dbpedia::parse_graph(&berlin_json()).expect("berlin fixture is RDF/JSON")
}
