//! GitHub-flavored markdown (MDX-safe) renderer.
//!
//! Each component becomes an optional heading and description followed by a
//! GFM table. Table cells cannot hold newlines, so line breaks are `<br>`.

use crate::model::*;
use crate::render::Renderer;
use crate::table::{DefaultCell, PropTable, TableRow};
use crate::toc;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &Document) -> String {
        let mut output = String::new();

        // Index, only useful when several components share one page
        let titles: Vec<&str> = doc
            .components
            .iter()
            .filter_map(|c| c.title.as_deref())
            .collect();
        if doc.components.len() > 1 && !titles.is_empty() {
            output.push_str("## Index\n\n");
            for title in &titles {
                output.push_str(&toc::render_toc_item(title));
                output.push('\n');
            }
            output.push('\n');
        }

        for (i, page) in doc.components.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            output.push_str(&render_component(page));
        }

        output
    }

    fn file_extension(&self) -> &str {
        "mdx"
    }
}

fn render_component(page: &ComponentPage) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(ref title) = page.title {
        lines.push(format!("## {}\n", title));
    }

    if let Some(ref desc) = page.description {
        lines.push(escape_text(desc));
        lines.push(String::new());
    }

    lines.push(table_line(PropTable::HEADER.iter().map(|h| h.to_string())));
    lines.push(table_line(PropTable::HEADER.iter().map(|_| "---".to_string())));
    for row in &page.table.rows {
        lines.push(table_line(row_cells(row)));
    }
    lines.push(String::new());

    lines.join("\n")
}

fn table_line<I: IntoIterator<Item = String>>(cells: I) -> String {
    format!("| {} |", cells.into_iter().collect::<Vec<_>>().join(" | "))
}

fn row_cells(row: &TableRow) -> [String; 5] {
    [
        code_span(&row.name),
        if row.required {
            "`required`".to_string()
        } else {
            String::new()
        },
        row.prop_type.as_deref().map(code_span).unwrap_or_default(),
        row.default.as_ref().map(render_default).unwrap_or_default(),
        render_description(row),
    ]
}

fn render_default(default: &DefaultCell) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(value) = default.value.as_deref().filter(|v| !v.is_empty()) {
        parts.push(code_span(value));
    }
    if default.computed {
        parts.push("`computed`".to_string());
    }
    parts.join(" ")
}

/// Description lines, then the call signature for function props.
fn render_description(row: &TableRow) -> String {
    let mut parts: Vec<String> = row.description.iter().map(|l| cell_text(l)).collect();

    if let Some(ref sig) = row.signature {
        let mut block = format!("**Signature:**<br>{}", code_span(&sig.text));
        for param in &sig.params {
            block.push_str(&format!(
                "<br>**{}** - {}",
                cell_text(&param.name),
                cell_text(&param.description)
            ));
        }
        parts.push(block);
    }

    parts.join("<br>")
}

/// Inline code that survives inside a table cell. `<br>` is literal inside
/// code, so line breaks collapse to spaces.
fn code_span(text: &str) -> String {
    let text = text
        .replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
        .replace('|', "\\|");
    if text.contains('`') {
        format!("`` {} ``", text)
    } else {
        format!("`{}`", text)
    }
}

/// Escaped text for a table cell, with line breaks as `<br>`.
fn cell_text(text: &str) -> String {
    escape_text(text)
        .replace("\r\n", "<br>")
        .replace('\n', "<br>")
        .replace('\r', "")
}

/// Escape characters that break table cells or read as MDX/JSX.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '|' | '<' | '>' | '{' | '}') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
