//! Data model for component property docs: format-agnostic.
//!
//! Input types mirror the JSON emitted by docgen-style extractors. Every
//! field is optional and ill-typed values are read as absent, so any JSON
//! object deserializes into a (possibly sparse) definition.

use crate::table::PropTable;
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Documentation for a single component, as read from a docgen info file.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDoc {
    /// Key the component was found under (usually its source path).
    #[serde(skip)]
    pub key: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_props")]
    pub props: BTreeMap<String, PropDefinition>,
    /// Free-form meta info (e.g. `{ "name": "Button", "type": "element" }`).
    #[serde(default)]
    pub meta: Option<Value>,
}

impl ComponentDoc {
    /// Human-facing component name: `displayName`, then `meta.name`, then
    /// the stem of the key it was found under.
    pub fn title(&self) -> Option<String> {
        if let Some(name) = self.display_name.as_deref().filter(|n| !n.is_empty()) {
            return Some(name.to_string());
        }
        if let Some(name) = self
            .meta
            .as_ref()
            .and_then(|m| m.get("name"))
            .and_then(Value::as_str)
            .filter(|n| !n.is_empty())
        {
            return Some(name.to_string());
        }
        self.key.as_deref().and_then(title_from_key)
    }
}

/// "src/elements/Button/Button.js" → "Button", "src/addons/Portal/index.js" → "Portal"
fn title_from_key(key: &str) -> Option<String> {
    let path = Path::new(key);
    let stem = path.file_stem()?.to_string_lossy();
    if stem == "index" {
        return path
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string());
    }
    Some(stem.to_string())
}

/// One property of a component.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropDefinition {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub prop_type: Option<PropType>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub required: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub default_value: Option<DefaultValue>,
    #[serde(default, deserialize_with = "lenient")]
    pub doc_block: Option<DocBlock>,
    /// Plain description some extractors emit beside `docBlock`.
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PropType {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    /// Union members, enum values, shape fields... kept raw.
    #[serde(default)]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DefaultValue {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub computed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DocBlock {
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub tags: Option<Vec<Tag>>,
}

/// A doc block tag such as `@param {number} x The value`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Tag {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub tag_type: Option<TagType>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TagType {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A property prepared for display. One per input property.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    pub name: String,
    /// Brace-wrapped type, e.g. `{string}` or `{string|number}`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub prop_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DefaultValue>,
    /// Description split into lines; each is rendered followed by a break.
    pub description: Vec<String>,
}

/// Everything a renderer needs for one run.
#[derive(Debug, Default, Serialize)]
pub struct Document {
    pub components: Vec<ComponentPage>,
}

/// One component's property table, ready to render.
#[derive(Debug, Serialize)]
pub struct ComponentPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub rows: Vec<DisplayRow>,
    pub table: PropTable,
}

// -- Lenient field readers ----------------------------------------------------

/// Read a field as `T`, treating a value of the wrong shape as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient::<D, bool>(deserializer)?.unwrap_or(false))
}

/// Read a list, dropping elements that are not of the expected shape.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .filter_map(|item| T::deserialize(item).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}

/// Read the props mapping. Every key yields a definition, even when its
/// value is not an object.
fn lenient_props<'de, D>(deserializer: D) -> Result<BTreeMap<String, PropDefinition>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map
            .into_iter()
            .map(|(name, config)| {
                let def = PropDefinition::deserialize(config).unwrap_or_default();
                (name, def)
            })
            .collect()),
        _ => Ok(BTreeMap::new()),
    }
}
