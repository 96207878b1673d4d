//! Script orchestration
//!
//! Assembles the per-table generator outputs into migration scripts. The full
//! script is four independently committed transactions in a fixed order:
//! tables, foreign keys, update-timestamp triggers, RLS policies. A failure
//! in a later section leaves the earlier ones committed; the script is meant
//! to be idempotent and re-runnable, not atomic.

use chrono::Utc;

use crate::schema::registry::SchemaRegistry;
use crate::schema::{ddl, indexes, policies, relations};

/// Name of the shared trigger function that touches `updated_at`.
const TOUCH_FUNCTION: &str = "set_updated_at";

/// Generates migration scripts from a registry borrowed for the generator's
/// lifetime.
pub struct ScriptGenerator<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> ScriptGenerator<'a> {
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Header comment. The timestamp is metadata only and must be excluded
    /// from any idempotence comparison.
    fn header(&self) -> String {
        format!(
            "-- tier_schema migration script\n-- generated at {}\n\n",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )
    }

    /// The complete migration script: tables, foreign keys, triggers, RLS.
    pub fn full_script(&self) -> String {
        let mut sql = self.header();

        sql.push_str("BEGIN;\n\n");
        sql.push_str(&self.tables_section());
        sql.push_str("COMMIT;\n\n");

        sql.push_str("BEGIN;\n\n");
        sql.push_str(&self.foreign_keys_section());
        sql.push_str("COMMIT;\n\n");

        sql.push_str("BEGIN;\n\n");
        sql.push_str(&self.triggers_section());
        sql.push_str("COMMIT;\n\n");

        sql.push_str("BEGIN;\n\n");
        sql.push_str(&self.rls_section());
        sql.push_str("COMMIT;\n");

        tracing::info!(
            tables = self.registry.tables().len(),
            bytes = sql.len(),
            "generated full migration script"
        );

        sql
    }

    /// Table DDL and indexes only.
    pub fn tables_script(&self) -> String {
        format!("{}{}", self.header(), self.tables_section())
    }

    /// Inferred foreign-key constraints only.
    pub fn foreign_keys_script(&self) -> String {
        format!("{}{}", self.header(), self.foreign_keys_section())
    }

    /// Row-level-security policies only.
    pub fn rls_script(&self) -> String {
        format!("{}{}", self.header(), self.rls_section())
    }

    fn tables_section(&self) -> String {
        let mut sql = String::new();

        for table in self.registry.tables() {
            let table_sql = ddl::create_table_sql(table);
            if table_sql.is_empty() {
                continue;
            }
            sql.push_str(&table_sql);
            sql.push_str(&indexes::create_indexes_sql(table));
            sql.push('\n');
        }

        sql
    }

    fn foreign_keys_section(&self) -> String {
        let mut sql = relations::foreign_keys_sql(self.registry);
        if !sql.is_empty() {
            sql.push('\n');
        }
        sql
    }

    fn triggers_section(&self) -> String {
        let mut sql = format!(
            "CREATE OR REPLACE FUNCTION {f}() RETURNS TRIGGER AS $$\n\
             BEGIN\n\
             \x20 NEW.updated_at = now();\n\
             \x20 RETURN NEW;\n\
             END;\n\
             $$ LANGUAGE plpgsql;\n\n",
            f = TOUCH_FUNCTION
        );

        for table in self.registry.tables() {
            let has_updated_at = table
                .relational_columns()
                .iter()
                .any(|c| c.name == "updated_at");
            if !has_updated_at {
                continue;
            }

            sql.push_str(&format!(
                "DROP TRIGGER IF EXISTS trg_{t}_updated_at ON {t};\n\
                 CREATE TRIGGER trg_{t}_updated_at BEFORE UPDATE ON {t}\n\
                 \x20 FOR EACH ROW EXECUTE FUNCTION {f}();\n",
                t = table.name,
                f = TOUCH_FUNCTION
            ));
        }

        sql.push('\n');
        sql
    }

    fn rls_section(&self) -> String {
        let mut sql = String::new();

        for table in self.registry.tables() {
            let policy_sql = policies::policies_sql(table);
            if policy_sql.is_empty() {
                continue;
            }
            sql.push_str(&policy_sql);
            sql.push('\n');
        }

        sql
    }
}
