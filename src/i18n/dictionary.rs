//! Bundled translation dictionaries.
//!
//! One JSON document per supported language, embedded at compile time.
//! Top-level keys are namespaces ("common", "auth", ...), nested objects
//! below, string leaves. Parsed once on first access.

use super::Language;
use serde_json::Value;
use std::sync::OnceLock;
use tracing::warn;

const SPANISH_JSON: &str = include_str!("locales/es.json");
const CATALAN_JSON: &str = include_str!("locales/ca.json");

static SPANISH_TREE: OnceLock<Value> = OnceLock::new();
static CATALAN_TREE: OnceLock<Value> = OnceLock::new();

/// The parsed dictionary tree for `language`.
///
/// A malformed bundle parses to an empty object so every lookup falls back
/// to the key instead of panicking.
pub(crate) fn tree(language: Language) -> &'static Value {
    let (cell, raw) = match language.code() {
        "ca" => (&CATALAN_TREE, CATALAN_JSON),
        _ => (&SPANISH_TREE, SPANISH_JSON),
    };

    cell.get_or_init(|| {
        serde_json::from_str(raw).unwrap_or_else(|e| {
            warn!("Malformed bundled dictionary for '{}': {}", language.code(), e);
            Value::Object(serde_json::Map::new())
        })
    })
}

/// Walk `namespace`, then each `.`-separated segment of `key`.
///
/// Returns `None` on any structural miss: absent namespace, absent segment,
/// a non-object interior node, or a non-string leaf.
pub(crate) fn resolve<'a>(tree: &'a Value, namespace: &str, key: &str) -> Option<&'a str> {
    let mut node = tree.get(namespace)?;
    for segment in key.split('.') {
        node = node.get(segment)?;
    }
    node.as_str()
}

/// Namespace names present in a language's dictionary, sorted.
#[cfg(test)]
pub(crate) fn namespaces(language: Language) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = tree(language)
        .as_object()
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== Resolution Tests ====================

    #[test]
    fn test_resolve_flat_key() {
        let text = resolve(tree(Language::SPANISH), "common", "accept");
        assert_eq!(text, Some("Aceptar"));
    }

    #[test]
    fn test_resolve_nested_key() {
        let text = resolve(tree(Language::SPANISH), "auth", "recovery.sent");
        assert_eq!(text, Some("Te hemos enviado un correo con las instrucciones"));
    }

    #[test]
    fn test_resolve_catalan() {
        let text = resolve(tree(Language::CATALAN), "auth", "loginButton");
        assert_eq!(text, Some("Inicia la sessió"));
    }

    #[test]
    fn test_resolve_missing_namespace() {
        assert_eq!(resolve(tree(Language::SPANISH), "nope", "accept"), None);
    }

    #[test]
    fn test_resolve_missing_key() {
        assert_eq!(resolve(tree(Language::SPANISH), "common", "doesNotExist"), None);
    }

    #[test]
    fn test_resolve_walk_through_leaf_fails() {
        // "accept" is a string leaf; walking past it must miss, not panic
        assert_eq!(resolve(tree(Language::SPANISH), "common", "accept.further"), None);
    }

    #[test]
    fn test_resolve_interior_node_is_not_a_string() {
        // "recovery" is an object, not a displayable string
        assert_eq!(resolve(tree(Language::SPANISH), "auth", "recovery"), None);
    }

    // ==================== Parity Tests ====================

    #[test]
    fn test_both_languages_share_namespaces() {
        assert_eq!(
            namespaces(Language::SPANISH),
            namespaces(Language::CATALAN)
        );
        assert!(!namespaces(Language::SPANISH).is_empty());
    }

    #[test]
    fn test_both_languages_share_keys() {
        // Every dotted key reachable in one dictionary must exist in the other
        fn collect(prefix: String, node: &Value, out: &mut Vec<String>) {
            match node {
                Value::Object(map) => {
                    for (name, child) in map {
                        let path = if prefix.is_empty() {
                            name.clone()
                        } else {
                            format!("{}.{}", prefix, name)
                        };
                        collect(path, child, out);
                    }
                }
                _ => out.push(prefix),
            }
        }

        let mut spanish = Vec::new();
        let mut catalan = Vec::new();
        collect(String::new(), tree(Language::SPANISH), &mut spanish);
        collect(String::new(), tree(Language::CATALAN), &mut catalan);
        spanish.sort();
        catalan.sort();

        assert_eq!(spanish, catalan);
    }

    // ==================== Totality Property ====================

    proptest! {
        #[test]
        fn prop_resolve_never_panics(
            namespace in "[a-zA-Z0-9._-]{0,16}",
            key in "[a-zA-Z0-9._-]{0,48}",
        ) {
            // Resolution over arbitrary inputs either finds a string or
            // misses cleanly; it must never panic
            let _ = resolve(tree(Language::SPANISH), &namespace, &key);
            let _ = resolve(tree(Language::CATALAN), &namespace, &key);
        }

        #[test]
        fn prop_found_values_are_nonempty(key in "[a-z]{1,12}") {
            if let Some(text) = resolve(tree(Language::SPANISH), "common", &key) {
                prop_assert!(!text.is_empty());
            }
        }
    }
}
