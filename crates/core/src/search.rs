//! Name search helpers.
//!
//! Searches are case-insensitive substring matches executed with
//! PostgreSQL `ILIKE`. The user's term is matched literally: `%`, `_` and
//! the escape character itself are escaped before being wrapped in
//! wildcards.

/// Escape character used in the generated `ILIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Build an `ILIKE` pattern matching any name containing `term`.
///
/// An empty term yields `%`, which matches every row.
///
/// # Examples
///
/// ```
/// use fyyur_core::search::contains_pattern;
/// assert_eq!(contains_pattern("Hop"), "%Hop%");
/// assert_eq!(contains_pattern(""), "%");
/// assert_eq!(contains_pattern("100%"), "%100\\%%");
/// ```
pub fn contains_pattern(term: &str) -> String {
    if term.is_empty() {
        return "%".to_string();
    }

    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
