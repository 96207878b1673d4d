//! Schema metadata and SQL generation
//!
//! This module holds the schema vocabulary, the registry, and the generators
//! that compile the registry into migration SQL.

pub mod ddl;
pub mod indexes;
pub mod policies;
pub mod registry;
pub mod relations;
pub mod script;
pub mod type_map;
pub mod types;

// Re-export key types
pub use registry::SchemaRegistry;
pub use script::ScriptGenerator;
pub use types::{ColumnDescriptor, SyncDestination, TableDescriptor};
