//! Terraform identifier derivation from GitHub display names.
//!
//! Repository, team, and user names are free-form from Terraform's point of
//! view: they may contain characters that are not valid in a resource
//! identifier, and they come straight from the API, so they are treated as
//! untrusted input.

/// Map a display name to a configuration-safe identifier.
///
/// Replaces the characters Terraform rejects in identifiers with fixed
/// substitutions: `.` and space become `_`, `*` becomes `star`. Everything
/// else passes through untouched, so the mapping is idempotent.
pub fn sanitize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '.' | ' ' => out.push('_'),
            '*' => out.push_str("star"),
            _ => out.push(c),
        }
    }
    out
}

/// Whether a name starts with a decimal digit.
///
/// Terraform 0.12+ rejects identifiers with a leading digit, so renderers
/// prepend a warning comment when this returns true. Only the first
/// character of the original (pre-sanitized) name is inspected; the empty
/// string is not a leading-digit name.
pub fn has_leading_digit(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_digit())
}
