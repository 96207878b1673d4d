//! Abstract-type to SQL-type mapping
//!
//! Total function over arbitrary tags: anything the mapper does not recognize
//! maps to TEXT, the widest common denominator. The fallback silently absorbs
//! unknown or evolving abstract types instead of raising an error, so a newer
//! client can introduce a type tag without breaking script generation here.

/// Map an abstract column type tag to its Postgres SQL type.
pub fn sql_type(abstract_type: &str) -> &'static str {
    match abstract_type.to_lowercase().as_str() {
        "text" | "string" => "TEXT",
        "integer" | "int" => "BIGINT",
        "float" | "double" => "DOUBLE PRECISION",
        "boolean" | "bool" => "BOOLEAN",
        "timestamp" | "date" => "TIMESTAMPTZ",
        "uuid" | "identifier" => "UUID",
        "blob" | "binary" => "BYTEA",
        _ => "TEXT",
    }
}
