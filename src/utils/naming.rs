//! Naming utilities
//!
//! Deterministic names for generated database objects, plus the small
//! word-form helpers the foreign-key inference relies on.

use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern used for index names.
pub const INDEX_PATTERN: &str = "idx_{table}_{column}";

/// Pattern used for foreign-key constraint names.
pub const CONSTRAINT_PATTERN: &str = "fk_{table}_{column}";

/// Format a name according to a pattern with placeholders.
pub fn format_name(pattern: &str, replacements: &[(&str, &str)]) -> String {
    let mut result = pattern.to_string();

    for (placeholder, value) in replacements {
        result = result.replace(&format!("{{{}}}", placeholder), value);
    }

    result
}

/// Get index name for a table/column pair.
pub fn index_name(table: &str, column: &str) -> String {
    format_name(INDEX_PATTERN, &[("table", table), ("column", column)])
}

/// Get foreign-key constraint name for a table/column pair.
pub fn constraint_name(table: &str, column: &str) -> String {
    format_name(CONSTRAINT_PATTERN, &[("table", table), ("column", column)])
}

/// Naive plural form: append a trailing `s`.
pub fn pluralize(name: &str) -> String {
    format!("{}s", name)
}

/// Naive singular form: strip one trailing `s`, if present.
pub fn singularize(name: &str) -> String {
    name.strip_suffix('s').unwrap_or(name).to_string()
}

static SAFE_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex"));

/// Check whether a name can be embedded in SQL without quoting. Descriptors
/// are compiled-in constants, so an unsafe name is logged rather than
/// rejected.
pub fn is_safe_identifier(name: &str) -> bool {
    SAFE_IDENTIFIER.is_match(name)
}
