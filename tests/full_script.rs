//! End-to-end tests for script generation against a registry.

use std::io::Write;

use pretty_assertions::assert_eq;
use rstest::rstest;

use tier_schema::{ColumnDescriptor, SchemaRegistry, ScriptGenerator, TableDescriptor};

fn keyed(name: &str, extra: Vec<ColumnDescriptor>) -> TableDescriptor {
    let mut columns = vec![ColumnDescriptor::new("id", "uuid")];
    columns.extend(extra);
    TableDescriptor::new(name, columns).primary_key("id")
}

fn strip_comments(sql: &str) -> String {
    sql.lines()
        .filter(|line| !line.starts_with("--"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn full_script_covers_all_four_sections_for_default_registry() {
    let registry = SchemaRegistry::application_default();
    let sql = ScriptGenerator::new(&registry).full_script();

    assert!(sql.contains("CREATE TABLE IF NOT EXISTS user_profiles"));
    assert!(sql.contains("CREATE INDEX IF NOT EXISTS idx_projects_id ON projects (id);"));
    assert!(sql.contains(
        "ALTER TABLE tasks ADD CONSTRAINT fk_tasks_project_id \
         FOREIGN KEY (project_id) REFERENCES projects(id) ON DELETE CASCADE;"
    ));
    assert!(sql.contains("CREATE TRIGGER trg_tasks_updated_at"));
    assert!(sql.contains("ALTER TABLE projects ENABLE ROW LEVEL SECURITY;"));
}

#[test]
fn regenerating_an_unchanged_registry_is_stable_modulo_timestamp() {
    let registry = SchemaRegistry::application_default();
    let generator = ScriptGenerator::new(&registry);

    assert_eq!(
        strip_comments(&generator.full_script()),
        strip_comments(&generator.full_script())
    );
}

#[test]
fn foreign_key_inference_matches_plural_table() {
    let registry = SchemaRegistry::new(vec![
        keyed("projects", vec![]),
        keyed(
            "milestones",
            vec![ColumnDescriptor::new("project_id", "uuid")],
        ),
    ]);
    let sql = ScriptGenerator::new(&registry).foreign_keys_script();

    let expected = "ALTER TABLE milestones ADD CONSTRAINT fk_milestones_project_id \
                    FOREIGN KEY (project_id) REFERENCES projects(id) ON DELETE CASCADE;";
    assert_eq!(sql.matches(expected).count(), 1);
}

#[rstest]
#[case::user_table_keys_on_pk("users_public", None, "auth.uid() = id")]
#[case::owner_column("widgets", Some("owner_id"), "auth.uid() = owner_id")]
#[case::fallback("widgets", None, "TO authenticated")]
fn rls_scope_selection(
    #[case] table_name: &str,
    #[case] owner_column: Option<&str>,
    #[case] expected_fragment: &str,
) {
    let mut extra = vec![ColumnDescriptor::new("label", "text")];
    if let Some(owner) = owner_column {
        extra.push(ColumnDescriptor::new(owner, "uuid"));
    }
    let registry = SchemaRegistry::new(vec![keyed(table_name, extra)]);

    let sql = ScriptGenerator::new(&registry).rls_script();
    assert!(
        sql.contains(expected_fragment),
        "expected {:?} in:\n{}",
        expected_fragment,
        sql
    );
}

#[test]
fn tables_without_relational_columns_are_absent_everywhere() {
    let registry = SchemaRegistry::new(vec![
        keyed("projects", vec![]),
        TableDescriptor::new(
            "scratch",
            vec![ColumnDescriptor::new("blob", "blob").local_only()],
        ),
    ]);
    let sql = ScriptGenerator::new(&registry).full_script();

    assert!(!sql.contains("scratch"));
}

#[test]
fn registry_loaded_from_config_file_drives_generation() {
    let config_toml = r#"
    [[tables]]
    name = "projects"
    primary_key = "id"

    [[tables.columns]]
    name = "id"
    abstract_type = "uuid"
    sync_destinations = ["relational_store"]

    [[tables]]
    name = "tasks"
    primary_key = "id"

    [[tables.columns]]
    name = "id"
    abstract_type = "uuid"
    sync_destinations = ["relational_store"]

    [[tables.columns]]
    name = "project_id"
    abstract_type = "uuid"
    sync_destinations = ["relational_store"]
    "#;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(config_toml.as_bytes()).unwrap();

    let config = tier_schema::config::load_from_file(file.path().to_str().unwrap()).unwrap();
    let registry = config.registry();
    let sql = ScriptGenerator::new(&registry).full_script();

    assert!(sql.contains("CREATE TABLE IF NOT EXISTS projects"));
    assert!(sql.contains("fk_tasks_project_id"));
    assert!(!sql.contains("user_profiles"));
}

#[test]
fn unknown_abstract_types_surface_as_text_columns() {
    let registry = SchemaRegistry::new(vec![keyed(
        "sensors",
        vec![ColumnDescriptor::new("reading", "geo_point")],
    )]);
    let sql = ScriptGenerator::new(&registry).tables_script();

    assert!(sql.contains("  reading TEXT"));
}
