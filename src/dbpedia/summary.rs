//! Summary extraction from DBPedia RDF/JSON graphs
//!
//! Maps the property dictionary of one subject onto the flat [`Summary`]
//! record:
//! - English or untagged values only
//! - type classification from `rdf:type`
//! - date and place fallback chains
//!
//! Extraction never fails. Missing predicates leave fields empty.

use crate::models::{Location, PropertyMap, RdfGraph, Summary};
use crate::utils::{last_segment, non_empty};

use super::vocab::{self, lookup, lookup_all};

/// `rdf:type` namespaces that contribute to [`Summary::types`]
const TYPE_NAMESPACES: &[&str] = &["dbpedia.org/ontology", "schema.org", "foaf/0.1"];

/// Namespace whose types take priority for [`Summary::kind`]
const PREFERRED_TYPE_NAMESPACE: &str = "schema.org";

/// Extract the summary of `subject_uri` from an RDF/JSON graph
///
/// A subject missing from the graph yields an empty summary.
///
/// # Examples
///
/// ```
/// use wikimeta::dbpedia::summary::extract_summary;
/// use wikimeta::models::RdfGraph;
///
/// let graph: RdfGraph = serde_json::from_str(r#"{
///     "http://dbpedia.org/resource/Ulm": {
///         "http://www.w3.org/2000/01/rdf-schema#label": [
///             {"type": "literal", "value": "Ulm", "lang": "en"}
///         ]
///     }
/// }"#).unwrap();
///
/// let summary = extract_summary("http://dbpedia.org/resource/Ulm", &graph);
/// assert_eq!(summary.title.as_deref(), Some("Ulm"));
/// assert!(summary.images.is_empty());
/// ```
pub fn extract_summary(subject_uri: &str, graph: &RdfGraph) -> Summary {
    let properties = graph.get(subject_uri);

    let scalar = |name: &str| lookup(properties, name).map(str::to_owned);
    let list = |names: &[&str]| -> Vec<String> {
        lookup_all(properties, names)
            .into_iter()
            .map(str::to_owned)
            .collect()
    };

    let mut summary = Summary {
        title: scalar(vocab::TITLE),
        description: scalar(vocab::DESCRIPTION),
        summary: scalar(vocab::SUMMARY),
        start_dates: list(vocab::START_DATES),
        end_dates: scalar(vocab::END_DATES),
        date: scalar(vocab::DATE),
        place: scalar(vocab::PLACE),
        birth_place: scalar(vocab::BIRTH_PLACE),
        death_place: scalar(vocab::DEATH_PLACE),
        source: scalar(vocab::SOURCE),
        images: list(vocab::IMAGES),
        location: Location {
            lat: scalar(vocab::LATITUDE),
            lon: scalar(vocab::LONGITUDE),
            title: None,
        },
        ..Default::default()
    };

    let (types, kind) = classify_types(properties);
    summary.types = types;
    summary.kind = kind;

    summary.start = summary
        .start_dates
        .first()
        .cloned()
        .or_else(|| summary.date.clone());
    // Not reduced to a first element, unlike `start`
    summary.end = summary.end_dates.clone();

    summary.place = resolve_place(&summary);
    summary.location.title = summary.place.clone();
    summary.image = summary.images.first().cloned();

    summary
}

/// Classify `rdf:type` values into `(types, type)`
///
/// Language tags are ignored here. Duplicate local names are kept.
fn classify_types(properties: Option<&PropertyMap>) -> (Vec<String>, Option<String>) {
    let mut types = Vec::new();
    let mut kind: Option<String> = None;

    let rdf_type = vocab::expand(vocab::RDF_TYPE);
    let values = properties
        .and_then(|props| props.get(&*rdf_type))
        .map(Vec::as_slice)
        .unwrap_or_default();

    for value in values.iter().map(|v| v.value.as_str()) {
        if !TYPE_NAMESPACES.iter().any(|ns| value.contains(ns)) {
            continue;
        }
        let name = last_segment(value);
        types.push(name.to_string());
        // Last schema.org type wins
        if value.contains(PREFERRED_TYPE_NAMESPACE) {
            kind = Some(name.to_string());
        }
    }

    if non_empty(kind.as_deref()).is_none() {
        if let Some(first) = types.first() {
            kind = Some(first.clone());
        }
    }

    (types, kind)
}

/// `dbp:place`, else death place, else birth place, reduced to a local name
fn resolve_place(summary: &Summary) -> Option<String> {
    let place = non_empty(summary.place.as_deref())
        .or_else(|| non_empty(summary.death_place.as_deref()))
        .or(summary.birth_place.as_deref())?;

    Some(last_segment(place).to_string())
}

/// Predicate URIs of `subject_uri`, sorted
///
/// The length of the list is the subject's property count.
pub fn property_names<'a>(graph: &'a RdfGraph, subject_uri: &str) -> Vec<&'a str> {
    graph
        .get(subject_uri)
        .map(|props| props.keys().map(String::as_str).collect())
        .unwrap_or_default()
}
