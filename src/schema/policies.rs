//! Row-level-security policy generation
//!
//! Every table that reaches the relational backend gets RLS enabled plus one
//! policy per verb. The scope of those policies is chosen by an ordered rule
//! list, first match wins:
//!
//! 1. table name contains `user` -> rows are keyed on the table's primary key
//!    (user tables key directly on the caller's identity);
//! 2. a relational column named exactly `user_id` or `owner_id` -> rows are
//!    keyed on that column;
//! 3. otherwise -> any authenticated caller, no row filter.
//!
//! Rule 1 is evaluated before rule 2 on purpose, even when the table also has
//! a `user_id` column. The precedence is encoded in [`RULES`] so it is
//! visible, not buried in nested conditionals.

use crate::schema::types::{ColumnDescriptor, TableDescriptor};

/// How rows of a table are scoped for access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyScope {
    /// Caller identity must equal the named column.
    OwnedBy(String),
    /// Any authenticated role, no row filter.
    Authenticated,
}

type Rule = fn(&TableDescriptor, &[&ColumnDescriptor]) -> Option<PolicyScope>;

/// Ordered precedence chain. First rule returning `Some` wins.
const RULES: &[Rule] = &[user_table_rule, owner_column_rule, authenticated_rule];

fn user_table_rule(table: &TableDescriptor, _columns: &[&ColumnDescriptor]) -> Option<PolicyScope> {
    if table.name.contains("user") {
        let pk = table.primary_key.as_deref().unwrap_or("id");
        Some(PolicyScope::OwnedBy(pk.to_string()))
    } else {
        None
    }
}

fn owner_column_rule(
    _table: &TableDescriptor,
    columns: &[&ColumnDescriptor],
) -> Option<PolicyScope> {
    columns
        .iter()
        .find(|c| c.name == "user_id" || c.name == "owner_id")
        .map(|c| PolicyScope::OwnedBy(c.name.clone()))
}

fn authenticated_rule(
    _table: &TableDescriptor,
    _columns: &[&ColumnDescriptor],
) -> Option<PolicyScope> {
    Some(PolicyScope::Authenticated)
}

/// Select the policy scope for a table.
pub fn policy_scope(table: &TableDescriptor) -> PolicyScope {
    let columns = table.relational_columns();

    RULES
        .iter()
        .find_map(|rule| rule(table, &columns))
        .unwrap_or(PolicyScope::Authenticated)
}

/// Generate the ENABLE ROW LEVEL SECURITY statement and the four per-verb
/// policies for one table. Empty when the table has no relational columns.
pub fn policies_sql(table: &TableDescriptor) -> String {
    if table.relational_columns().is_empty() {
        return String::new();
    }

    let mut sql = format!("ALTER TABLE {} ENABLE ROW LEVEL SECURITY;\n", table.name);

    match policy_scope(table) {
        PolicyScope::OwnedBy(column) => {
            sql.push_str(&format!(
                "CREATE POLICY {t}_select_own ON {t} FOR SELECT USING (auth.uid() = {c});\n",
                t = table.name,
                c = column
            ));
            sql.push_str(&format!(
                "CREATE POLICY {t}_insert_own ON {t} FOR INSERT WITH CHECK (auth.uid() = {c});\n",
                t = table.name,
                c = column
            ));
            sql.push_str(&format!(
                "CREATE POLICY {t}_update_own ON {t} FOR UPDATE USING (auth.uid() = {c});\n",
                t = table.name,
                c = column
            ));
            sql.push_str(&format!(
                "CREATE POLICY {t}_delete_own ON {t} FOR DELETE USING (auth.uid() = {c});\n",
                t = table.name,
                c = column
            ));
        }
        PolicyScope::Authenticated => {
            sql.push_str(&format!(
                "CREATE POLICY {t}_select_auth ON {t} FOR SELECT TO authenticated USING (true);\n",
                t = table.name
            ));
            sql.push_str(&format!(
                "CREATE POLICY {t}_insert_auth ON {t} FOR INSERT TO authenticated WITH CHECK (true);\n",
                t = table.name
            ));
            sql.push_str(&format!(
                "CREATE POLICY {t}_update_auth ON {t} FOR UPDATE TO authenticated USING (true);\n",
                t = table.name
            ));
            sql.push_str(&format!(
                "CREATE POLICY {t}_delete_auth ON {t} FOR DELETE TO authenticated USING (true);\n",
                t = table.name
            ));
        }
    }

    sql
}
