//! JSON renderer: structured output for tooling integration.
//!
//! Serializes the Document model directly: display rows keep the raw
//! docgen data, table rows carry the cells exactly as other formats show them.

use crate::model::*;
use crate::render::Renderer;
use tracing::error;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, doc: &Document) -> String {
        match serde_json::to_string_pretty(doc) {
            Ok(mut out) => {
                out.push('\n');
                out
            }
            Err(e) => {
                error!("failed to serialize document: {}", e);
                String::new()
            }
        }
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
