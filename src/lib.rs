//! tier_schema: schema registry and SQL generation for multi-tier synced tables
//!
//! A desktop client mirrors a small set of application tables across three
//! storage tiers: an on-device store, a cloud document store, and a relational
//! backend. This crate holds the declarative description of those tables
//! (per-column sync destinations, encryption flags, uniqueness) and compiles
//! it into idempotent Postgres migration scripts: table creation, indexes,
//! inferred foreign keys, row-level-security policies, and update-timestamp
//! triggers.
//!
//! The generators are pure: registry in, SQL text out. Executing the script
//! against a backend is the operator's job, not this crate's.
//!
//! ```
//! use tier_schema::{SchemaRegistry, ScriptGenerator};
//!
//! let registry = SchemaRegistry::application_default();
//! let sql = ScriptGenerator::new(&registry).full_script();
//! assert!(sql.contains("CREATE TABLE IF NOT EXISTS projects"));
//! ```

pub mod config;
pub mod error;
pub mod schema;
pub mod utils;

// Re-export main types for easier access
pub use config::Config;
pub use error::{Error, Result};
pub use schema::registry::SchemaRegistry;
pub use schema::script::ScriptGenerator;
pub use schema::types::{ColumnDescriptor, SyncDestination, TableDescriptor};
