//! Template rendering
//!
//! Placeholders use `{{ name }}` markers. Rendering is pure and stateless:
//! recognized placeholders are replaced by the textual form of their context
//! value, unrecognized placeholders are left in the output verbatim. The
//! pass-through behavior is what makes the two-stage pipeline work: the first
//! pass fills the tenant fields and leaves the date markers for the second.

use serde_json::Value;
use thiserror::Error;

/// Placeholder name to substitution value
pub type Context = serde_json::Map<String, Value>;

/// Template syntax failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("unclosed placeholder starting at byte {offset}")]
    UnclosedPlaceholder { offset: usize },
}

/// Render a template string against a context.
///
/// `{{ name }}` looks up `name` in the context; `{{ name.2 }}` indexes into
/// an array value. Whitespace inside the braces is ignored. A lookup miss
/// leaves the marker untouched.
pub fn render(template: &str, context: &Context) -> Result<String, RenderError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            let offset = template.len() - rest.len() + start;
            return Err(RenderError::UnclosedPlaceholder { offset });
        };

        let marker = &rest[start..start + end + 4];
        match lookup(after[..end].trim(), context) {
            Some(text) => out.push_str(&text),
            None => out.push_str(marker),
        }
        rest = &rest[start + end + 4..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Resolve a placeholder name, with optional `.N` array indexing.
fn lookup(key: &str, context: &Context) -> Option<String> {
    if let Some((name, index)) = key.split_once('.') {
        let index: usize = index.parse().ok()?;
        match context.get(name)? {
            Value::Array(items) => items.get(index).map(value_text),
            _ => None,
        }
    } else {
        context.get(key).map(value_text)
    }
}

/// Textual form of a context value. Arrays render one element per line, so a
/// three-line tenant_info block substitutes as three lines.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_text)
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
