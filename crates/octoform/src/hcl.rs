//! Minimal HCL block construction.
//!
//! The renderers emit Terraform blocks where most attribute lines are
//! conditional on the source value being present. Instead of a templating
//! engine, [`BlockBuilder`] keeps an ordered list of attribute lines and
//! appends them under per-attribute conditions, which preserves both the
//! attribute order and the conditional-emission rules of each resource kind.

use std::fmt::Display;

use thiserror::Error;

use crate::identifier;

/// A rendering failure for a single entity.
///
/// Render errors are contained: the affected entity is logged and skipped,
/// and the resource kind's export continues with the next entity.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("webhook configuration is missing required field `{0}`")]
    MissingConfigField(&'static str),

    #[error("webhook configuration field `{field}` has an unexpected shape (expected {expected})")]
    UnexpectedConfigShape {
        field: &'static str,
        expected: &'static str,
    },
}

/// Quote a string value for HCL, escaping the characters that would break
/// out of the literal. Values come straight from the API and are untrusted.
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

enum Entry {
    Attr(String),
    Block(BlockBuilder),
}

/// An ordered, conditionally-populated HCL block.
pub struct BlockBuilder {
    header: String,
    entries: Vec<Entry>,
}

impl BlockBuilder {
    /// Start a `resource "<kind>" "<label>"` block.
    pub fn resource(kind: &str, label: &str) -> Self {
        Self {
            header: format!("resource \"{kind}\" \"{label}\""),
            entries: Vec::new(),
        }
    }

    /// Start a nested block such as `configuration`.
    pub fn nested(name: &str) -> Self {
        Self {
            header: name.to_string(),
            entries: Vec::new(),
        }
    }

    /// Unconditionally emit `key = <value>` with the value rendered verbatim
    /// (booleans, numbers).
    pub fn attr(mut self, key: &str, value: impl Display) -> Self {
        self.entries.push(Entry::Attr(format!("{key} = {value}")));
        self
    }

    /// Unconditionally emit `key = "<value>"`.
    pub fn attr_str(self, key: &str, value: &str) -> Self {
        let quoted = quote(value);
        self.attr(key, quoted)
    }

    /// Emit `key = "<value>"` only when the value is present and non-empty.
    pub fn attr_str_opt(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => self.attr_str(key, v),
            _ => self,
        }
    }

    /// Emit `key = true` only when the flag is set.
    pub fn attr_flag(self, key: &str, value: bool) -> Self {
        if value { self.attr(key, true) } else { self }
    }

    /// Emit `key = [ "a", "b", ]` only when the list is non-empty,
    /// preserving source order.
    pub fn attr_list(self, key: &str, items: &[String]) -> Self {
        if items.is_empty() {
            return self;
        }
        let mut list = String::from("[ ");
        for item in items {
            list.push_str(&quote(item));
            list.push_str(", ");
        }
        list.push(']');
        self.attr(key, list)
    }

    /// Append a nested block.
    pub fn block(mut self, inner: BlockBuilder) -> Self {
        self.entries.push(Entry::Block(inner));
        self
    }

    /// Render the block, two-space indented, with a trailing newline.
    pub fn build(self) -> String {
        let mut out = String::new();
        self.write_into(&mut out, 0);
        out
    }

    fn write_into(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        out.push_str(&self.header);
        out.push_str(" {\n");
        for entry in &self.entries {
            match entry {
                Entry::Attr(line) => {
                    out.push_str(&indent);
                    out.push_str("  ");
                    out.push_str(line);
                    out.push('\n');
                }
                Entry::Block(inner) => inner.write_into(out, depth + 1),
            }
        }
        out.push_str(&indent);
        out.push_str("}\n");
    }
}

/// The warning comment emitted ahead of a resource whose display name starts
/// with a digit, suggesting a valid underscore-prefixed identifier.
pub fn leading_digit_warning(ident: &str) -> String {
    format!(
        "# WARNING this resource has an invalid identifier when used with Terraform 0.12+\n\
         # Suggestion: use this identifier instead _{ident}\n"
    )
}

/// The import-binding comment pairing a generated identifier with the
/// real-world resource address.
pub fn import_comment(kind: &str, ident: &str, address: impl Display) -> String {
    format!("# terraform import {kind}.{ident} {address}\n")
}

/// Assemble the full text for one entity: optional leading-digit warning
/// (checked against the original display name), import-binding comment, the
/// block itself, and a separating blank line.
pub fn render_entity(
    kind: &str,
    ident: &str,
    display_name: &str,
    address: impl Display,
    block: String,
) -> String {
    let mut out = String::new();
    if identifier::has_leading_digit(display_name) {
        out.push_str(&leading_digit_warning(ident));
    }
    out.push_str(&import_comment(kind, ident, address));
    out.push_str(&block);
    out.push('\n');
    out
}
