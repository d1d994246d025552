// Core data structures for wikimeta

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Message reported when DBPedia returns no data for a resource
pub const EMPTY_RESULT_MESSAGE: &str = "Failed to retrieve data. Is the URL or page name correct?";

/// A single RDF/JSON object value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RdfValue {
    pub value: String,

    /// Node kind: "uri", "literal" or "bnode"
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
}

impl RdfValue {
    /// Plain literal without language or datatype
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: Some("literal".to_string()),
            ..Default::default()
        }
    }

    /// Language-tagged literal
    pub fn lang_literal(value: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: Some("literal".to_string()),
            lang: Some(lang.into()),
            datatype: None,
        }
    }

    pub fn uri(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: Some("uri".to_string()),
            ..Default::default()
        }
    }

    /// True when the value carries no language tag or is tagged English.
    /// An empty tag counts as no tag.
    pub fn is_english_or_untagged(&self) -> bool {
        match self.lang.as_deref() {
            None | Some("") => true,
            Some(lang) => lang == "en",
        }
    }
}

/// Predicate URI -> values, for a single subject
pub type PropertyMap = BTreeMap<String, Vec<RdfValue>>;

/// Subject URI -> predicates
pub type RdfGraph = BTreeMap<String, PropertyMap>;

/// True when a fetched document carries no triples at all
pub fn is_empty_graph(raw: &Value) -> bool {
    match raw {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Geographic position of the topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Location {
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub title: Option<String>,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let has_coordinates = if let (Some(lat), Some(lon)) = (&self.lat, &self.lon) {
            write!(f, "{lat}, {lon}")?;
            true
        } else {
            false
        };
        if let Some(title) = &self.title {
            if has_coordinates {
                write!(f, " ")?;
            }
            write!(f, "({title})")?;
        }
        Ok(())
    }
}

/// Flat, display-ready summary of a DBPedia resource
///
/// Scalar fields are `None` when the graph lacks the predicate. List fields
/// are always present and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub title: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub start_dates: Vec<String>,
    pub end_dates: Option<String>,
    pub date: Option<String>,
    pub place: Option<String>,
    pub birth_place: Option<String>,
    pub death_place: Option<String>,
    pub source: Option<String>,
    pub images: Vec<String>,
    pub location: Location,
    pub types: Vec<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub image: Option<String>,
}

/// Borrowed view of one summary field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryValue<'a> {
    Scalar(Option<&'a str>),
    List(&'a [String]),
    Location(&'a Location),
}

impl fmt::Display for SummaryValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(value) => write!(f, "{}", value.unwrap_or_default()),
            Self::List(values) => write!(f, "{}", values.join(", ")),
            Self::Location(location) => write!(f, "{location}"),
        }
    }
}

impl Summary {
    /// All fields as (name, value) pairs in a fixed order
    ///
    /// Names match the serialized JSON keys.
    pub fn fields(&self) -> Vec<(&'static str, SummaryValue<'_>)> {
        use SummaryValue::{List, Scalar};

        vec![
            ("title", Scalar(self.title.as_deref())),
            ("description", Scalar(self.description.as_deref())),
            ("summary", Scalar(self.summary.as_deref())),
            ("startDates", List(&self.start_dates)),
            ("endDates", Scalar(self.end_dates.as_deref())),
            ("date", Scalar(self.date.as_deref())),
            ("place", Scalar(self.place.as_deref())),
            ("birthPlace", Scalar(self.birth_place.as_deref())),
            ("deathPlace", Scalar(self.death_place.as_deref())),
            ("source", Scalar(self.source.as_deref())),
            ("images", List(&self.images)),
            ("location", SummaryValue::Location(&self.location)),
            ("types", List(&self.types)),
            ("type", Scalar(self.kind.as_deref())),
            ("start", Scalar(self.start.as_deref())),
            ("end", Scalar(self.end.as_deref())),
            ("image", Scalar(self.image.as_deref())),
        ]
    }
}

/// Options for a metadata request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetDataOptions {
    /// Include the unmodified RDF/JSON document in the result
    pub include_raw: bool,
}

impl Default for GetDataOptions {
    fn default() -> Self {
        Self { include_raw: true }
    }
}

/// Result of a metadata request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<Value>,

    /// Resolved DBPedia resource URI
    pub dbpedia_url: String,

    pub summary: Option<Summary>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rdf_value_deserialize() {
        let value: RdfValue = serde_json::from_value(json!({
            "type": "literal",
            "value": "Albert Einstein",
            "lang": "en"
        }))
        .unwrap();

        assert_eq!(value.kind.as_deref(), Some("literal"));
        assert_eq!(value.lang.as_deref(), Some("en"));
        assert!(value.datatype.is_none());
    }

    #[test]
    fn test_english_or_untagged() {
        assert!(RdfValue::literal("x").is_english_or_untagged());
        assert!(RdfValue::lang_literal("x", "en").is_english_or_untagged());
        assert!(RdfValue::lang_literal("x", "").is_english_or_untagged());
        assert!(!RdfValue::lang_literal("x", "fr").is_english_or_untagged());
        assert!(!RdfValue::lang_literal("x", "en-GB").is_english_or_untagged());
    }

    #[test]
    fn test_is_empty_graph() {
        assert!(is_empty_graph(&Value::Null));
        assert!(is_empty_graph(&json!({})));
        assert!(!is_empty_graph(&json!({"http://dbpedia.org/resource/X": {}})));
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = Summary {
            birth_place: Some("Ulm".to_string()),
            kind: Some("Person".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["birthPlace"], "Ulm");
        assert_eq!(json["type"], "Person");
        assert_eq!(json["images"], json!([]));
        assert_eq!(json["startDates"], json!([]));
        assert!(json["image"].is_null());
        assert!(json["location"]["lat"].is_null());
    }

    #[test]
    fn test_fields_order_matches_json_keys() {
        let summary = Summary::default();
        let names: Vec<&str> = summary.fields().iter().map(|(name, _)| *name).collect();

        assert_eq!(names.first(), Some(&"title"));
        assert_eq!(names.last(), Some(&"image"));
        assert_eq!(names.len(), 17);

        let json = serde_json::to_value(&summary).unwrap();
        for name in names {
            assert!(json.get(name).is_some(), "missing key {name}");
        }
    }

    #[test]
    fn test_summary_value_display() {
        let dates = vec!["1879-03-14".to_string(), "1880".to_string()];
        assert_eq!(SummaryValue::List(&dates).to_string(), "1879-03-14, 1880");
        assert_eq!(SummaryValue::Scalar(None).to_string(), "");

        let location = Location {
            lat: Some("48.4".to_string()),
            lon: Some("9.98".to_string()),
            title: Some("Ulm".to_string()),
        };
        assert_eq!(location.to_string(), "48.4, 9.98 (Ulm)");
    }

    #[test]
    fn test_metadata_result_omits_missing_raw() {
        let result = MetadataResult {
            raw: None,
            dbpedia_url: "http://dbpedia.org/resource/X".to_string(),
            summary: None,
            error: Some(EMPTY_RESULT_MESSAGE.to_string()),
        };
        let json = serde_json::to_value(&result).unwrap();

        assert!(json.get("raw").is_none());
        assert_eq!(json["dbpediaUrl"], "http://dbpedia.org/resource/X");
        assert!(json["summary"].is_null());
    }
}
