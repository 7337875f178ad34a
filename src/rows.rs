//! Turn property definitions into sorted display rows.

use crate::model::{DisplayRow, PropDefinition, PropType};
use serde_json::Value;

/// Build one row per property, ordered by name.
///
/// The sort is stable, so rows sharing a name keep their input order.
pub fn build_rows<'a, I>(props: I) -> Vec<DisplayRow>
where
    I: IntoIterator<Item = (&'a String, &'a PropDefinition)>,
{
    let mut rows: Vec<DisplayRow> = props
        .into_iter()
        .map(|(name, config)| build_row(name, config))
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    rows
}

fn build_row(name: &str, config: &PropDefinition) -> DisplayRow {
    let doc_block = config.doc_block.as_ref();
    let description = doc_block
        .and_then(|b| b.description.as_deref())
        .or(config.description.as_deref())
        .unwrap_or("");

    DisplayRow {
        name: name.to_string(),
        prop_type: resolve_type(config.prop_type.as_ref()),
        value: config.prop_type.as_ref().and_then(|t| t.value.clone()),
        tags: doc_block.and_then(|b| b.tags.clone()),
        required: config.required,
        default_value: config.default_value.clone(),
        description: split_description(description),
    }
}

/// Format a type for display: `{name}`, or `{a|b}` for unions.
///
/// Returns `None` when there is no non-empty name to show.
pub fn resolve_type(prop_type: Option<&PropType>) -> Option<String> {
    let prop_type = prop_type?;
    let name = match prop_type.name.as_deref()? {
        "union" => union_members(prop_type.value.as_ref()),
        other => other.to_string(),
    };
    if name.is_empty() {
        return None;
    }
    Some(format!("{{{}}}", name))
}

/// Pipe-join member names; members without a name contribute nothing.
fn union_members(value: Option<&Value>) -> String {
    let Some(Value::Array(members)) = value else {
        return String::new();
    };
    members
        .iter()
        .map(|m| m.get("name").and_then(Value::as_str).unwrap_or(""))
        .collect::<Vec<_>>()
        .join("|")
}

/// Split a description into its lines. Empty descriptions have no lines.
pub fn split_description(description: &str) -> Vec<String> {
    if description.is_empty() {
        return Vec::new();
    }
    description.split('\n').map(str::to_string).collect()
}
