//! Index generation
//!
//! One index on each table's primary key, then heuristic secondary indexes on
//! columns whose names suggest lookup patterns: an `_id` suffix, or `name` or
//! `date` anywhere in the name. The substring rule is a guess, not a declared
//! property — a column named `surname` gets indexed too. That imprecision is
//! accepted; the heuristic lives here, isolated, so it stays testable on its
//! own.

use crate::schema::types::TableDescriptor;
use crate::utils::naming;

/// Whether a non-primary-key column name looks index-worthy.
pub fn wants_secondary_index(column_name: &str) -> bool {
    column_name.ends_with("_id")
        || column_name.contains("name")
        || column_name.contains("date")
}

/// Generate CREATE INDEX statements for one table. Primary key first, then
/// heuristic matches in descriptor order. Empty when the table has no
/// relationally-synced columns.
pub fn create_indexes_sql(table: &TableDescriptor) -> String {
    let columns = table.relational_columns();
    if columns.is_empty() {
        return String::new();
    }

    let mut sql = String::new();

    if let Some(pk) = &table.primary_key {
        sql.push_str(&format!(
            "CREATE INDEX IF NOT EXISTS {} ON {} ({});\n",
            naming::index_name(&table.name, pk),
            table.name,
            pk
        ));
    }

    for column in &columns {
        if table.is_primary_key(&column.name) {
            continue;
        }
        if wants_secondary_index(&column.name) {
            sql.push_str(&format!(
                "CREATE INDEX IF NOT EXISTS {} ON {} ({});\n",
                naming::index_name(&table.name, &column.name),
                table.name,
                column.name
            ));
        }
    }

    sql
}
