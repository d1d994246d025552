//! Property tests for Wikipedia URL / page name resolution

use proptest::prelude::*;
use wikimeta::dbpedia::resolver::{resolve, RESOURCE_BASE};

#[test]
fn test_world_war_ii() {
    assert_eq!(
        resolve("World War II"),
        "http://dbpedia.org/resource/World_War_II"
    );
}

#[test]
fn test_mobile_wikipedia_url() {
    assert_eq!(
        resolve("https://en.m.wikipedia.org/wiki/Marie_Curie"),
        "http://dbpedia.org/resource/Marie_Curie"
    );
}

proptest! {
    #[test]
    fn resolve_is_idempotent(input in "\\PC*") {
        let once = resolve(&input);
        prop_assert_eq!(resolve(&once), once);
    }

    #[test]
    fn canonical_uris_unchanged(title in "[A-Za-z0-9_(),]{1,40}") {
        let uri = format!("{RESOURCE_BASE}{title}");
        prop_assert_eq!(resolve(&uri), uri);
    }

    #[test]
    fn page_names_have_no_spaces(name in "[A-Za-z ]{1,40}") {
        prop_assume!(!name.contains("wikipedia"));
        let resolved = resolve(&name);
        prop_assert!(resolved.starts_with(RESOURCE_BASE));
        prop_assert!(!resolved.contains(' '));
    }

    #[test]
    fn wikipedia_urls_keep_title(title in "[A-Za-z0-9_]{1,40}") {
        let url = format!("https://en.wikipedia.org/wiki/{title}");
        prop_assert_eq!(resolve(&url), format!("{RESOURCE_BASE}{title}"));
    }
}
