//! RDF namespace prefixes and property lookup
//!
//! RDF/JSON property maps are keyed by full predicate URIs. Lookups here take
//! either a full URI or a prefixed name such as `dbo:birthDate`, which is
//! expanded against [`PREFIXES`] first.

use std::borrow::Cow;

use crate::models::PropertyMap;

/// Known namespace prefixes
pub const PREFIXES: &[(&str, &str)] = &[
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("dc", "http://purl.org/dc/terms/"),
    ("foaf", "http://xmlns.com/foaf/0.1/"),
    ("vcard", "http://www.w3.org/2006/vcard/ns#"),
    ("dbp", "http://dbpedia.org/property/"),
    ("dbo", "http://dbpedia.org/ontology/"),
    ("geo", "http://www.geonames.org/ontology#"),
    ("wgs", "http://www.w3.org/2003/01/geo/wgs84_pos#"),
];

// Summary field predicates
pub const TITLE: &str = "rdfs:label";
pub const DESCRIPTION: &str = "dbo:abstract";
pub const SUMMARY: &str = "rdfs:comment";
pub const START_DATES: &[&str] = &["dbo:birthDate", "dbo:formationDate", "dbo:foundingYear"];
pub const END_DATES: &str = "dbo:deathDate";
/// `dbp:date` is often a bare integer, the ontology value is cleaner
pub const DATE: &str = "dbo:date";
pub const PLACE: &str = "dbp:place";
pub const BIRTH_PLACE: &str = "dbo:birthPlace";
pub const DEATH_PLACE: &str = "dbo:deathPlace";
pub const SOURCE: &str = "foaf:page";
pub const IMAGES: &[&str] = &["dbo:thumbnail", "foaf:depiction", "foaf:img"];
pub const LATITUDE: &str = "wgs:lat";
pub const LONGITUDE: &str = "wgs:long";
pub const RDF_TYPE: &str = "rdf:type";

/// Expand a prefixed name to a full URI
///
/// Only the first matching prefix is applied. Unknown prefixes and full URIs
/// are returned unchanged.
///
/// # Examples
///
/// ```
/// use wikimeta::dbpedia::vocab::expand;
///
/// assert_eq!(expand("dbo:abstract"), "http://dbpedia.org/ontology/abstract");
/// assert_eq!(expand("http://example.org/p"), "http://example.org/p");
/// ```
pub fn expand(name: &str) -> Cow<'_, str> {
    for (prefix, ns) in PREFIXES {
        if let Some(local) = name.strip_prefix(prefix).and_then(|rest| rest.strip_prefix(':')) {
            return Cow::Owned(format!("{ns}{local}"));
        }
    }
    Cow::Borrowed(name)
}

/// Look up the first English or untagged value of a property
///
/// Values are scanned in order and the first one without a language tag, or
/// tagged `en`, wins. Properties that only carry other languages yield `None`.
pub fn lookup<'a>(properties: Option<&'a PropertyMap>, property: &str) -> Option<&'a str> {
    properties?
        .get(&*expand(property))?
        .iter()
        .find(|v| v.is_english_or_untagged())
        .map(|v| v.value.as_str())
}

/// Look up several properties, keeping the non-empty results in order
pub fn lookup_all<'a>(properties: Option<&'a PropertyMap>, names: &[&str]) -> Vec<&'a str> {
    names
        .iter()
        .filter_map(|name| lookup(properties, name))
        .filter(|value| !value.is_empty())
        .collect()
}
