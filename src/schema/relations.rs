//! Foreign-key inference
//!
//! Relationships are not declared anywhere; they are guessed from column
//! naming. A relational column `project_id` is taken to reference a
//! registered table named `project`, `projects`, or the singular form of the
//! stripped name. The rule table is deliberately small and lives in
//! [`referenced_table`] so the guessing stays isolated and testable.

use crate::schema::registry::SchemaRegistry;
use crate::schema::types::{TableDescriptor, ColumnDescriptor};
use crate::utils::naming;

/// Resolve the table a `_id` column probably references. Tries, in order:
/// the name with `_id` stripped, its plural form, its singular form.
/// Returns `None` when nothing matches; the caller skips silently.
pub fn referenced_table<'a>(
    registry: &'a SchemaRegistry,
    column_name: &str,
) -> Option<&'a TableDescriptor> {
    let base = column_name.strip_suffix("_id")?;

    registry
        .table(base)
        .or_else(|| registry.table(&naming::pluralize(base)))
        .or_else(|| registry.table(&naming::singularize(base)))
}

/// Generate ALTER TABLE statements adding inferred foreign keys for every
/// table in the registry. Cascade deletes are hard-coded; per-relationship
/// configurability does not exist in this schema model.
pub fn foreign_keys_sql(registry: &SchemaRegistry) -> String {
    let mut sql = String::new();

    for table in registry.tables() {
        for column in table.relational_columns() {
            sql.push_str(&foreign_key_for_column(registry, table, column));
        }
    }

    sql
}

fn foreign_key_for_column(
    registry: &SchemaRegistry,
    table: &TableDescriptor,
    column: &ColumnDescriptor,
) -> String {
    if table.is_primary_key(&column.name) || !column.name.ends_with("_id") {
        return String::new();
    }

    let Some(referenced) = referenced_table(registry, &column.name) else {
        tracing::debug!(
            table = %table.name,
            column = %column.name,
            "no registered table matches column name, skipping foreign key"
        );
        return String::new();
    };

    // The referenced table is not checked for relationally-synced columns; a
    // constraint against a table that emitted no DDL is a known limitation.
    let referenced_pk = referenced.primary_key.as_deref().unwrap_or("id");

    format!(
        "ALTER TABLE {} ADD CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {}({}) ON DELETE CASCADE;\n",
        table.name,
        naming::constraint_name(&table.name, &column.name),
        column.name,
        referenced.name,
        referenced_pk
    )
}
