//! Table DDL generation
//!
//! Emits `CREATE TABLE IF NOT EXISTS` statements restricted to the columns
//! synced to the relational backend. A table with no relationally-synced
//! column is invisible to the relational schema and emits nothing; this
//! filter alone decides what ends up in the backend at all.

use crate::schema::type_map;
use crate::schema::types::TableDescriptor;

/// Generate the CREATE TABLE statement for one table, plus column comments
/// for encrypted fields. Returns an empty string when no column is synced
/// relationally.
pub fn create_table_sql(table: &TableDescriptor) -> String {
    let columns = table.relational_columns();
    if columns.is_empty() {
        return String::new();
    }

    let mut sql = format!("CREATE TABLE IF NOT EXISTS {} (\n", table.name);

    let mut column_defs = Vec::new();
    for column in &columns {
        let mut def = format!("  {} {}", column.name, type_map::sql_type(&column.abstract_type));

        if table.is_primary_key(&column.name) {
            def.push_str(" NOT NULL");
        }
        if column.is_unique {
            def.push_str(" UNIQUE");
        }
        if table.is_primary_key(&column.name) {
            def.push_str(" PRIMARY KEY");
        }

        column_defs.push(def);
    }

    sql.push_str(&column_defs.join(",\n"));
    sql.push_str("\n);\n");

    // Annotate client-side encrypted fields for operators. This documents the
    // encryption, it does not enforce it.
    for column in &columns {
        if column.encrypted {
            sql.push_str(&format!(
                "COMMENT ON COLUMN {}.{} IS 'Encrypted client-side; stored as opaque ciphertext';\n",
                table.name, column.name
            ));
        }
    }

    sql
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::ColumnDescriptor;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_without_relational_columns_emits_nothing() {
        let table = TableDescriptor::new(
            "device_settings",
            vec![
                ColumnDescriptor::new("key", "text").local_only(),
                ColumnDescriptor::new("value", "text").local_only(),
            ],
        )
        .primary_key("key");

        assert_eq!(create_table_sql(&table), "");
    }

    #[test]
    fn primary_key_token_appears_exactly_once_on_pk_line() {
        let table = TableDescriptor::new(
            "projects",
            vec![
                ColumnDescriptor::new("id", "uuid"),
                ColumnDescriptor::new("name", "text"),
            ],
        )
        .primary_key("id");

        let sql = create_table_sql(&table);
        assert_eq!(sql.matches("PRIMARY KEY").count(), 1);
        assert!(sql.contains("  id UUID NOT NULL PRIMARY KEY"));
        assert!(sql.contains("  name TEXT"));
    }

    #[test]
    fn clause_order_is_not_null_unique_primary_key() {
        let table = TableDescriptor::new(
            "accounts",
            vec![ColumnDescriptor::new("email", "text").unique()],
        )
        .primary_key("email");

        let sql = create_table_sql(&table);
        assert!(sql.contains("  email TEXT NOT NULL UNIQUE PRIMARY KEY"));
    }

    #[test]
    fn unique_without_primary_key() {
        let table = TableDescriptor::new(
            "user_profiles",
            vec![
                ColumnDescriptor::new("id", "uuid"),
                ColumnDescriptor::new("email", "text").unique(),
            ],
        )
        .primary_key("id");

        let sql = create_table_sql(&table);
        assert!(sql.contains("  email TEXT UNIQUE"));
        assert!(!sql.contains("email TEXT NOT NULL"));
    }

    #[test]
    fn encrypted_relational_column_gets_comment() {
        let table = TableDescriptor::new(
            "tasks",
            vec![
                ColumnDescriptor::new("id", "uuid"),
                ColumnDescriptor::new("notes", "text").encrypted(),
                ColumnDescriptor::new("secret_draft", "text").local_only().encrypted(),
            ],
        )
        .primary_key("id");

        let sql = create_table_sql(&table);
        assert!(sql.contains("COMMENT ON COLUMN tasks.notes IS"));
        // local-only columns never reach the relational schema, encrypted or not
        assert!(!sql.contains("secret_draft"));
    }

    #[test]
    fn local_only_columns_are_filtered_out_of_ddl() {
        let table = TableDescriptor::new(
            "user_profiles",
            vec![
                ColumnDescriptor::new("id", "uuid"),
                ColumnDescriptor::new("api_token", "text").local_only(),
            ],
        )
        .primary_key("id");

        let sql = create_table_sql(&table);
        assert!(sql.contains("id UUID"));
        assert!(!sql.contains("api_token"));
    }

    #[test]
    fn output_is_deterministic_for_unchanged_input() {
        let table = TableDescriptor::new(
            "tasks",
            vec![
                ColumnDescriptor::new("id", "uuid"),
                ColumnDescriptor::new("title", "text"),
            ],
        )
        .primary_key("id");

        assert_eq!(create_table_sql(&table), create_table_sql(&table));
    }
}
