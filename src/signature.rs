//! Function-valued props: default-value truncation and call signatures.

use crate::model::Tag;
use serde::Serialize;

/// Default values starting with this are function sources.
const FUNCTION_PREFIX: &str = "function ";

/// Extract the parameter list from a function-source default value.
///
/// `function () { return 1; }` → `()`, `function noop(a, b) {}` → `(a, b)`.
///
/// Scans from the first `(` and stops at the first `{` outside the
/// parameter list, so braces in destructured or default parameters do not
/// cut the list short. Returns `None` when the value is not a function
/// source or has no recognisable parameter list and body.
pub fn function_params(src: &str) -> Option<&str> {
    if !src.starts_with(FUNCTION_PREFIX) {
        return None;
    }
    let open = src.find('(')?;

    let mut depth = 0usize;
    let mut params_closed = false;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (offset, c) in src[open..].char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' | '`' => quote = Some(c),
            '{' if depth == 0 && params_closed => {
                return Some(src[open..open + offset].trim());
            }
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => {
                depth = depth.saturating_sub(1);
                if c == ')' && depth == 0 {
                    params_closed = true;
                }
            }
            _ => {}
        }
    }
    None
}

/// Call signature of a function-typed prop, built from its `@param` tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signature {
    /// e.g. `onClick(event: SyntheticEvent, data: object)`
    pub text: String,
    pub params: Vec<ParamDoc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamDoc {
    pub name: String,
    pub description: String,
}

impl Signature {
    /// Build from doc tags, keeping only `param` tags in their given order.
    pub fn from_tags(prop_name: &str, tags: &[Tag]) -> Signature {
        let params: Vec<&Tag> = tags
            .iter()
            .filter(|t| t.title.as_deref() == Some("param"))
            .collect();

        let list = params
            .iter()
            .map(|p| {
                let name = p.name.as_deref().unwrap_or("");
                match p.tag_type.as_ref().and_then(|t| t.name.as_deref()) {
                    Some(type_name) => format!("{}: {}", name, type_name),
                    None => name.to_string(),
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        Signature {
            text: format!("{}({})", prop_name, list),
            params: params
                .iter()
                .map(|p| ParamDoc {
                    name: p.name.clone().unwrap_or_default(),
                    description: p.description.clone().unwrap_or_default(),
                })
                .collect(),
        }
    }
}
