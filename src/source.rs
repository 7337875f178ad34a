//! Docgen JSON loading.
//!
//! Accepts the three layouts extractors commonly write:
//!
//! - a single component object (`{ "displayName": ..., "props": {...} }`)
//! - an array of component objects
//! - an info file mapping source paths to component objects

use crate::model::ComponentDoc;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Parse docgen JSON into component docs, in input order.
pub fn parse(content: &str) -> Result<Vec<ComponentDoc>> {
    let value: Value = serde_json::from_str(content).context("invalid docgen JSON")?;

    let components = match value {
        Value::Object(map) if is_component(&map) => {
            debug!("reading single component");
            vec![component(None, Value::Object(map))]
        }
        Value::Object(map) => {
            debug!(entries = map.len(), "reading component map");
            map.into_iter()
                .filter_map(|(key, entry)| entry_component(&key, Some(key.as_str()), entry))
                .collect()
        }
        Value::Array(items) => {
            debug!(entries = items.len(), "reading component list");
            items
                .into_iter()
                .enumerate()
                .filter_map(|(i, entry)| entry_component(&format!("entry {}", i), None, entry))
                .collect()
        }
        _ => bail!("expected a component object, an array of components, or a map of components"),
    };

    Ok(components)
}

fn is_component(map: &Map<String, Value>) -> bool {
    map.contains_key("props") || map.contains_key("displayName")
}

fn entry_component(label: &str, key: Option<&str>, entry: Value) -> Option<ComponentDoc> {
    if !entry.is_object() {
        warn!("skipping {}: not a component object", label);
        return None;
    }
    Some(component(key.map(str::to_string), entry))
}

fn component(key: Option<String>, value: Value) -> ComponentDoc {
    // Every field is lenient, so any object reads successfully.
    let mut doc = ComponentDoc::deserialize(value).unwrap_or_default();
    doc.key = key;
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_component() {
        let docs = parse(r#"{ "displayName": "Button", "props": { "a": {} } }"#).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].title().as_deref(), Some("Button"));
        assert_eq!(docs[0].props.len(), 1);
    }

    #[test]
    fn props_only_component() {
        let docs = parse(r#"{ "props": {} }"#).unwrap();
        assert_eq!(docs.len(), 1);
        assert!(docs[0].props.is_empty());
        assert_eq!(docs[0].title(), None);
    }

    #[test]
    fn component_map_uses_keys() {
        let docs = parse(
            r#"{
                "src/elements/Label/Label.js": { "props": { "color": {} } },
                "src/addons/Portal/index.js": { "displayName": "Portal" }
            }"#,
        )
        .unwrap();
        assert_eq!(docs.len(), 2);
        let titles: Vec<String> = docs.iter().filter_map(|d| d.title()).collect();
        assert!(titles.contains(&"Label".to_string()));
        assert!(titles.contains(&"Portal".to_string()));
    }

    #[test]
    fn component_map_keeps_input_order() {
        let docs = parse(
            r#"{
                "src/Zebra.js": { "props": {} },
                "src/Apple.js": { "props": {} },
                "src/Mango.js": { "props": {} }
            }"#,
        )
        .unwrap();
        let titles: Vec<String> = docs.iter().filter_map(|d| d.title()).collect();
        assert_eq!(titles, ["Zebra", "Apple", "Mango"]);
    }

    #[test]
    fn component_list() {
        let docs = parse(r#"[{ "displayName": "A" }, 5, { "displayName": "B" }]"#).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].key, None);
        assert_eq!(docs[1].title().as_deref(), Some("B"));
    }

    #[test]
    fn map_skips_non_objects() {
        let docs = parse(r#"{ "a.js": "nope", "b.js": { "props": {} } }"#).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].title().as_deref(), Some("b"));
    }

    #[test]
    fn invalid_json_fails() {
        let err = parse("{ not json").unwrap_err();
        assert!(err.to_string().contains("invalid docgen JSON"));
    }

    #[test]
    fn scalar_fails() {
        assert!(parse("42").is_err());
    }
}
