//! Resolution of Wikipedia URLs and page names to DBPedia resource URIs
//!
//! Accepted inputs:
//! - Wikipedia URLs: `https://en.wikipedia.org/wiki/World_War_II`
//! - DBPedia URLs: `http://dbpedia.org/resource/World_War_II`
//! - Bare page names: `World War II`
//!
//! No validation or percent-encoding is applied; every input resolves.

use crate::utils::last_segment;

/// Namespace of DBPedia resources
pub const RESOURCE_BASE: &str = "http://dbpedia.org/resource/";

/// Resolve a Wikipedia URL, DBPedia URL or page name to a DBPedia resource URI
///
/// # Examples
///
/// ```
/// use wikimeta::dbpedia::resolver::resolve;
///
/// assert_eq!(
///     resolve("https://en.wikipedia.org/wiki/Ada_Lovelace"),
///     "http://dbpedia.org/resource/Ada_Lovelace"
/// );
/// assert_eq!(
///     resolve("World War II"),
///     "http://dbpedia.org/resource/World_War_II"
/// );
/// ```
pub fn resolve(input: &str) -> String {
    if input.contains("wikipedia") {
        // Page title is the last path segment
        format!("{RESOURCE_BASE}{}", last_segment(input))
    } else if input.contains("dbpedia.org") {
        input.to_string()
    } else {
        format!("{RESOURCE_BASE}{}", input.replace(' ', "_"))
    }
}
