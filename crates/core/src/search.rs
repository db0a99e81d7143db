//! Helpers for composing search predicates and cleaning list inputs.

/// Escape `ILIKE` metacharacters so user input matches literally.
///
/// Postgres' default escape character for `LIKE`/`ILIKE` is backslash.
pub fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Build a case-insensitive substring pattern for `ILIKE`.
///
/// Returns `None` for blank input so callers can skip the predicate.
pub fn contains_pattern(term: &str) -> Option<String> {
    let term = term.trim();
    if term.is_empty() {
        None
    } else {
        Some(format!("%{}%", escape_like(term)))
    }
}

/// Split a comma-separated query value into trimmed, non-empty entries.
pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trim every entry and drop blanks, preserving order.
pub fn clean_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
