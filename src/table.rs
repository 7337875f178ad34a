//! Property table model: the cells a renderer lays out, without markup.

use crate::model::{ComponentDoc, ComponentPage, DefaultValue, DisplayRow};
use crate::rows;
use crate::signature::{function_params, Signature};
use serde::Serialize;

/// Display type that marks a prop as a callback with a signature block.
const FUNC_TYPE: &str = "{func}";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PropTable {
    pub rows: Vec<TableRow>,
}

/// Cells of one table row, in column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub name: String,
    pub required: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub prop_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultCell>,
    pub description: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<Signature>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefaultCell {
    /// Shown value; function sources are cut down to their parameter list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub computed: bool,
}

impl PropTable {
    /// Column headings. The second column holds the required badge.
    pub const HEADER: [&'static str; 5] = ["Name", "", "Type", "Default", "Description"];

    pub fn from_rows(rows: &[DisplayRow]) -> PropTable {
        PropTable {
            rows: rows.iter().map(TableRow::from_row).collect(),
        }
    }
}

impl TableRow {
    fn from_row(row: &DisplayRow) -> TableRow {
        let signature = if row.prop_type.as_deref() == Some(FUNC_TYPE) {
            Some(Signature::from_tags(
                &row.name,
                row.tags.as_deref().unwrap_or_default(),
            ))
        } else {
            None
        };

        TableRow {
            name: row.name.clone(),
            required: row.required,
            prop_type: row.prop_type.clone(),
            default: row.default_value.as_ref().map(DefaultCell::from_default),
            description: row.description.clone(),
            signature,
        }
    }
}

impl DefaultCell {
    fn from_default(default: &DefaultValue) -> DefaultCell {
        DefaultCell {
            value: default
                .value
                .as_deref()
                .map(|v| function_params(v).unwrap_or(v).to_string()),
            computed: default.computed,
        }
    }
}

/// Build the renderable page for one component.
pub fn build_page(component: &ComponentDoc) -> ComponentPage {
    let rows = rows::build_rows(&component.props);
    let table = PropTable::from_rows(&rows);
    ComponentPage {
        title: component.title(),
        description: component.description.clone().filter(|d| !d.is_empty()),
        rows,
        table,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn component(props: serde_json::Value) -> ComponentDoc {
        serde_json::from_value(json!({ "displayName": "Button", "props": props })).unwrap()
    }

    #[test]
    fn row_count_matches_props() {
        let page = build_page(&component(json!({
            "b": {}, "a": {}, "c": { "required": true }
        })));
        assert_eq!(page.table.rows.len(), 3);
        assert_eq!(page.rows.len(), 3);
        assert_eq!(page.table.rows[0].name, "a");
    }

    #[test]
    fn empty_props_header_only() {
        let page = build_page(&component(json!({})));
        assert!(page.table.rows.is_empty());
        assert_eq!(PropTable::HEADER.len(), 5);
    }

    #[test]
    fn function_default_truncated() {
        let page = build_page(&component(json!({
            "onClick": { "defaultValue": { "value": "function () { return 1; }", "computed": false } }
        })));
        let default = page.table.rows[0].default.as_ref().unwrap();
        assert_eq!(default.value.as_deref(), Some("()"));
        assert!(!default.computed);
    }

    #[test]
    fn computed_default_kept() {
        let page = build_page(&component(json!({
            "as": { "defaultValue": { "value": "getDefault()", "computed": true } }
        })));
        let default = page.table.rows[0].default.as_ref().unwrap();
        assert_eq!(default.value.as_deref(), Some("getDefault()"));
        assert!(default.computed);
    }

    #[test]
    fn missing_default_is_empty() {
        let page = build_page(&component(json!({ "x": {} })));
        assert_eq!(page.table.rows[0].default, None);
    }

    #[test]
    fn func_type_gets_signature() {
        let page = build_page(&component(json!({
            "propName": {
                "type": { "name": "func" },
                "docBlock": { "tags": [{ "title": "param", "name": "x", "type": { "name": "number" } }] }
            }
        })));
        let sig = page.table.rows[0].signature.as_ref().unwrap();
        assert_eq!(sig.text, "propName(x: number)");
    }

    #[test]
    fn func_type_without_tags() {
        let page = build_page(&component(json!({ "onHide": { "type": { "name": "func" } } })));
        let sig = page.table.rows[0].signature.as_ref().unwrap();
        assert_eq!(sig.text, "onHide()");
    }

    #[test]
    fn other_types_have_no_signature() {
        let page = build_page(&component(json!({
            "content": {
                "type": { "name": "node" },
                "docBlock": { "tags": [{ "title": "param", "name": "x" }] }
            }
        })));
        assert_eq!(page.table.rows[0].signature, None);
    }

    #[test]
    fn page_title_and_description() {
        let mut doc = component(json!({}));
        doc.description = Some(String::new());
        let page = build_page(&doc);
        assert_eq!(page.title.as_deref(), Some("Button"));
        assert_eq!(page.description, None);
    }
}
