//! Schema registry
//!
//! The single source of truth for which tables and columns exist. Built once,
//! read-only afterwards, and passed by reference into every generator.

use crate::schema::ddl;
use crate::schema::types::{ColumnDescriptor, SyncDestination, TableDescriptor};
use crate::utils::naming;

/// Ordered collection of table descriptors. Order is generation order and
/// affects only output ordering.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    tables: Vec<TableDescriptor>,
}

impl SchemaRegistry {
    /// Build a registry from a table list. Names that would need quoting in
    /// SQL are logged but never rejected; descriptors are trusted constants.
    pub fn new(tables: Vec<TableDescriptor>) -> Self {
        for table in &tables {
            if !naming::is_safe_identifier(&table.name) {
                tracing::warn!(table = %table.name, "table name is not a safe SQL identifier");
            }
            for column in &table.columns {
                if !naming::is_safe_identifier(&column.name) {
                    tracing::warn!(
                        table = %table.name,
                        column = %column.name,
                        "column name is not a safe SQL identifier"
                    );
                }
            }
        }

        Self { tables }
    }

    /// All registered tables, in registration order.
    pub fn tables(&self) -> &[TableDescriptor] {
        &self.tables
    }

    /// Look up a table by name. First match wins when duplicate names exist.
    pub fn table(&self, name: &str) -> Option<&TableDescriptor> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// DDL for a single table, or a placeholder comment for unknown names.
    /// Never fails; an unknown name is an operator typo, not a program error.
    pub fn table_sql(&self, name: &str) -> String {
        match self.table(name) {
            Some(table) => ddl::create_table_sql(table),
            None => format!("-- table not found: {}\n", name),
        }
    }

    /// The application's compiled-in table set: the tables the desktop client
    /// mirrors across the local store, the document store, and the relational
    /// backend.
    pub fn application_default() -> Self {
        use SyncDestination::{DocumentStore, LocalStore, RelationalStore};

        let user_profiles = TableDescriptor::new(
            "user_profiles",
            vec![
                ColumnDescriptor::new("id", "uuid"),
                ColumnDescriptor::new("email", "text").unique(),
                ColumnDescriptor::new("display_name", "text"),
                ColumnDescriptor::new("avatar_url", "text")
                    .destinations(&[LocalStore, DocumentStore]),
                ColumnDescriptor::new("api_token", "text").local_only().encrypted(),
                ColumnDescriptor::new("created_at", "timestamp"),
                ColumnDescriptor::new("updated_at", "timestamp"),
            ],
        )
        .primary_key("id");

        let projects = TableDescriptor::new(
            "projects",
            vec![
                ColumnDescriptor::new("id", "uuid"),
                ColumnDescriptor::new("user_id", "uuid"),
                ColumnDescriptor::new("name", "text"),
                ColumnDescriptor::new("color", "text").destinations(&[LocalStore, DocumentStore]),
                ColumnDescriptor::new("archived", "boolean"),
                ColumnDescriptor::new("created_at", "timestamp"),
                ColumnDescriptor::new("updated_at", "timestamp"),
            ],
        )
        .primary_key("id");

        let tasks = TableDescriptor::new(
            "tasks",
            vec![
                ColumnDescriptor::new("id", "uuid"),
                ColumnDescriptor::new("project_id", "uuid"),
                ColumnDescriptor::new("title", "text"),
                ColumnDescriptor::new("notes", "text").encrypted(),
                ColumnDescriptor::new("due_date", "timestamp"),
                ColumnDescriptor::new("completed", "boolean"),
                ColumnDescriptor::new("updated_at", "timestamp"),
            ],
        )
        .primary_key("id");

        let attachments = TableDescriptor::new(
            "attachments",
            vec![
                ColumnDescriptor::new("id", "uuid"),
                ColumnDescriptor::new("task_id", "uuid"),
                ColumnDescriptor::new("file_name", "text"),
                ColumnDescriptor::new("payload", "blob")
                    .destinations(&[LocalStore, DocumentStore]),
                ColumnDescriptor::new("byte_size", "integer"),
                ColumnDescriptor::new("created_at", "timestamp"),
            ],
        )
        .primary_key("id");

        // Device-local preferences never leave the machine, so this table is
        // invisible to the relational schema.
        let device_settings = TableDescriptor::new(
            "device_settings",
            vec![
                ColumnDescriptor::new("key", "text").local_only(),
                ColumnDescriptor::new("value", "text").local_only(),
                ColumnDescriptor::new("updated_at", "timestamp").local_only(),
            ],
        )
        .primary_key("key");

        Self::new(vec![
            user_profiles,
            projects,
            tasks,
            attachments,
            device_settings,
        ])
    }
}
