//! Type definitions for schema metadata
//!
//! The descriptors in this module are the vocabulary the generators consume:
//! which tables exist, which columns they have, and which storage tiers each
//! column is synced to.

use serde::{Deserialize, Serialize};

/// A storage tier a column can be synced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncDestination {
    /// On-device store (always present for offline use).
    LocalStore,
    /// Cloud document store.
    DocumentStore,
    /// Relational backend. Only columns carrying this tag are visible to
    /// the SQL generators.
    RelationalStore,
}

/// Describes one column of one table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    /// Abstract type tag (text, integer, float, boolean, timestamp, uuid,
    /// blob). Unknown tags are allowed; the type mapper falls back to TEXT.
    pub abstract_type: String,
    /// Marks a field encrypted client-side before sync. Documentation-only:
    /// the generator annotates the column, it does not enforce anything.
    #[serde(default)]
    pub encrypted: bool,
    pub sync_destinations: Vec<SyncDestination>,
    #[serde(default)]
    pub is_unique: bool,
    /// Alternate column name for the relational tier. Carried as metadata
    /// but not applied during generation; lookups match on `name`.
    #[serde(default)]
    pub relational_name_override: Option<String>,
}

impl ColumnDescriptor {
    /// Create a new column with the given name and abstract type, synced to
    /// all three tiers.
    pub fn new(name: &str, abstract_type: &str) -> Self {
        Self {
            name: name.to_string(),
            abstract_type: abstract_type.to_string(),
            encrypted: false,
            sync_destinations: vec![
                SyncDestination::LocalStore,
                SyncDestination::DocumentStore,
                SyncDestination::RelationalStore,
            ],
            is_unique: false,
            relational_name_override: None,
        }
    }

    /// Restrict the column to the given sync destinations.
    pub fn destinations(mut self, destinations: &[SyncDestination]) -> Self {
        self.sync_destinations = destinations.to_vec();
        self
    }

    /// Keep the column on-device only.
    pub fn local_only(mut self) -> Self {
        self.sync_destinations = vec![SyncDestination::LocalStore];
        self
    }

    /// Mark the column as encrypted client-side.
    pub fn encrypted(mut self) -> Self {
        self.encrypted = true;
        self
    }

    /// Add a UNIQUE constraint to the column.
    pub fn unique(mut self) -> Self {
        self.is_unique = true;
        self
    }

    /// Whether the column is synced to the relational backend.
    pub fn is_relational(&self) -> bool {
        self.sync_destinations
            .contains(&SyncDestination::RelationalStore)
    }
}

/// Describes one logical entity's shape across the storage tiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDescriptor {
    /// Used verbatim as the backend table identifier. No escaping is
    /// performed, so it must be a valid identifier by construction.
    pub name: String,
    pub columns: Vec<ColumnDescriptor>,
    /// Name of the primary key column, if any. Must name an existing column.
    #[serde(default)]
    pub primary_key: Option<String>,
}

impl TableDescriptor {
    pub fn new(name: &str, columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            name: name.to_string(),
            columns,
            primary_key: None,
        }
    }

    /// Set the primary key column for the table.
    pub fn primary_key(mut self, column: &str) -> Self {
        self.primary_key = Some(column.to_string());
        self
    }

    /// Columns synced to the relational backend, in descriptor order.
    pub fn relational_columns(&self) -> Vec<&ColumnDescriptor> {
        self.columns.iter().filter(|c| c.is_relational()).collect()
    }

    /// Whether the given column name is this table's primary key.
    pub fn is_primary_key(&self, column_name: &str) -> bool {
        self.primary_key.as_deref() == Some(column_name)
    }
}
