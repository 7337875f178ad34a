//! HTML renderer: standalone HTML page with one property table per component.

use crate::model::*;
use crate::render::Renderer;
use crate::table::{DefaultCell, PropTable, TableRow};
use crate::toc;

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, doc: &Document) -> String {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        if let [only] = doc.components.as_slice() {
            if let Some(ref title) = only.title {
                out.push_str(&format!("<title>{}</title>\n", html_escape(title)));
            }
        }
        out.push_str("<style>\n");
        out.push_str("body { font-family: system-ui, sans-serif; max-width: 60em; margin: 2em auto; padding: 0 1em; }\n");
        out.push_str("code { background: #f4f4f4; padding: 0.15em 0.3em; border-radius: 3px; }\n");
        out.push_str("pre { background: #f4f4f4; padding: 1em; border-radius: 5px; overflow-x: auto; }\n");
        out.push_str("table { border-collapse: collapse; width: 100%; }\n");
        out.push_str("th, td { text-align: left; vertical-align: top; padding: 0.4em 0.6em; border-bottom: 1px solid #eee; }\n");
        out.push_str(".label { display: inline-block; font-size: 0.75em; padding: 0.1em 0.5em; border-radius: 1em; }\n");
        out.push_str(".label.red { background: #db2828; color: white; }\n");
        out.push_str(".label.gray { background: #767676; color: white; }\n");
        out.push_str(".param { color: #888; }\n");
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");

        // Index
        let titles: Vec<&str> = doc
            .components
            .iter()
            .filter_map(|c| c.title.as_deref())
            .collect();
        if doc.components.len() > 1 && !titles.is_empty() {
            out.push_str("<h2>Index</h2>\n<ul>\n");
            for title in titles {
                out.push_str(&format!(
                    "  <li><a href=\"#{}\">{}</a></li>\n",
                    html_escape(&toc::github_slug(title)),
                    html_escape(title)
                ));
            }
            out.push_str("</ul>\n");
        }

        for page in &doc.components {
            out.push_str(&render_component_html(page));
        }

        out.push_str("</body>\n</html>\n");
        out
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn render_component_html(page: &ComponentPage) -> String {
    let mut out = String::new();

    if let Some(ref title) = page.title {
        out.push_str(&format!(
            "<h2 id=\"{}\">{}</h2>\n",
            html_escape(&toc::github_slug(title)),
            html_escape(title)
        ));
    }
    if let Some(ref desc) = page.description {
        out.push_str(&format!("<p>{}</p>\n", html_escape(desc)));
    }

    out.push_str("<table class=\"very basic compact\">\n<thead>\n<tr>");
    for heading in PropTable::HEADER {
        out.push_str(&format!("<th>{}</th>", heading));
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in &page.table.rows {
        out.push_str(&render_row_html(row));
    }
    out.push_str("</tbody>\n</table>\n");

    out
}

fn render_row_html(row: &TableRow) -> String {
    let mut out = String::from("<tr>\n");

    out.push_str(&format!("  <td><code>{}</code></td>\n", html_escape(&row.name)));

    if row.required {
        out.push_str("  <td><span class=\"ui mini red circular label\">required</span></td>\n");
    } else {
        out.push_str("  <td></td>\n");
    }

    out.push_str(&format!(
        "  <td>{}</td>\n",
        row.prop_type.as_deref().map(html_escape).unwrap_or_default()
    ));

    match row.default {
        Some(ref default) => out.push_str(&format!("  <td>{}</td>\n", render_default_html(default))),
        None => out.push_str("  <td></td>\n"),
    }

    out.push_str("  <td>");
    if !row.description.is_empty() {
        out.push_str("<p>");
        for line in &row.description {
            out.push_str(&html_escape(line));
            out.push_str("<br>");
        }
        out.push_str("</p>");
    }
    if let Some(ref sig) = row.signature {
        out.push_str("<div><strong>Signature:</strong>");
        out.push_str(&format!("<pre><code>{}</code></pre>", html_escape(&sig.text)));
        for param in &sig.params {
            out.push_str(&format!(
                "<div class=\"param\"><strong>{}</strong> - {}</div>",
                html_escape(&param.name),
                html_escape(&param.description)
            ));
        }
        out.push_str("</div>");
    }
    out.push_str("</td>\n");

    out.push_str("</tr>\n");
    out
}

fn render_default_html(default: &DefaultCell) -> String {
    let mut out = String::from("<div>");
    if let Some(ref value) = default.value {
        out.push_str(&html_escape(value));
    }
    if default.computed {
        out.push_str(" <span class=\"ui mini gray circular label\">computed</span>");
    }
    out.push_str("</div>");
    out
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::build_page;
    use serde_json::json;

    fn render(value: serde_json::Value) -> String {
        let page = build_page(&serde_json::from_value(value).unwrap());
        HtmlRenderer.render(&Document {
            components: vec![page],
        })
    }

    #[test]
    fn standalone_page() {
        let out = render(json!({ "displayName": "Label", "props": {} }));
        assert!(out.starts_with("<!DOCTYPE html>\n"));
        assert!(out.contains("<title>Label</title>"));
        assert!(out.contains("<th>Name</th><th></th><th>Type</th><th>Default</th><th>Description</th>"));
        assert!(out.contains("<tbody>\n</tbody>"));
        assert!(out.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn badges_and_escaping() {
        let out = render(json!({
            "props": {
                "content": {
                    "type": { "name": "node" },
                    "required": true,
                    "defaultValue": { "value": "<span />", "computed": true },
                    "docBlock": { "description": "Shorthand for <Icon>.\nSecond line" }
                }
            }
        }));
        assert!(out.contains("<span class=\"ui mini red circular label\">required</span>"));
        assert!(out.contains("<td>{node}</td>"));
        assert!(out.contains(
            "<div>&lt;span /&gt; <span class=\"ui mini gray circular label\">computed</span></div>"
        ));
        assert!(out.contains("<p>Shorthand for &lt;Icon&gt;.<br>Second line<br></p>"));
    }

    #[test]
    fn index_only_with_titles() {
        let untitled = || build_page(&serde_json::from_value(json!({ "props": {} })).unwrap());
        let out = HtmlRenderer.render(&Document {
            components: vec![untitled(), untitled()],
        });
        assert!(!out.contains("<h2>Index</h2>"));

        let titled = build_page(&serde_json::from_value(json!({ "displayName": "Menu" })).unwrap());
        let out = HtmlRenderer.render(&Document {
            components: vec![titled, untitled()],
        });
        assert!(out.contains("<h2>Index</h2>\n<ul>\n  <li><a href=\"#menu\">Menu</a></li>\n</ul>\n"));
    }

    #[test]
    fn signature_block() {
        let out = render(json!({
            "props": {
                "onClick": {
                    "type": { "name": "func" },
                    "docBlock": { "tags": [
                        { "title": "param", "name": "e", "description": "Event.", "type": { "name": "SyntheticEvent" } },
                        { "title": "param", "name": "data", "description": "All props.", "type": { "name": "object" } }
                    ] }
                }
            }
        }));
        assert!(out.contains("<pre><code>onClick(e: SyntheticEvent, data: object)</code></pre>"));
        assert!(out.contains("<div class=\"param\"><strong>data</strong> - All props.</div>"));
    }
}
