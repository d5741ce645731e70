use crate::schema::{ColumnType, TableSchema, ALL_TABLES};

/// Generate CREATE TABLE SQL for a table schema
pub fn generate_create_table(schema: &TableSchema) -> String {
    let mut sql = format!("CREATE TABLE {} (\n", schema.name);
    let mut columns = Vec::new();

    if schema.surrogate_id {
        columns.push("    id INTEGER PRIMARY KEY".to_string());
    }

    for col in schema.columns {
        let sql_type = match col.col_type {
            ColumnType::Integer => "INTEGER",
            ColumnType::Real => "REAL",
            ColumnType::Text => "TEXT",
        };

        let null_constraint = if !col.nullable { " NOT NULL" } else { "" };

        columns.push(format!("    {} {}{}", col.name, sql_type, null_constraint));
    }

    // Add foreign key constraints
    for fk in schema.foreign_keys {
        columns.push(format!(
            "    FOREIGN KEY ({}) REFERENCES {}({})",
            fk.column, fk.references_table, fk.references_column
        ));
    }

    sql.push_str(&columns.join(",\n"));
    sql.push_str("\n);");

    sql
}

/// Generate CREATE INDEX statements for foreign key columns
pub fn generate_indexes(schema: &TableSchema) -> Vec<String> {
    schema
        .foreign_keys
        .iter()
        .map(|fk| {
            format!(
                "CREATE INDEX idx_{}_{} ON {}({});",
                schema.name, fk.column, schema.name, fk.column
            )
        })
        .collect()
}

/// Full schema script for every target table, parents first
pub fn generate_schema() -> String {
    let mut statements = Vec::new();

    for schema in ALL_TABLES {
        statements.push(generate_create_table(schema));
        statements.extend(generate_indexes(schema));
    }

    statements.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::tables::{LANDMARKS, TOUR_LANDMARKS};

    #[test]
    fn test_generate_create_table() {
        let sql = generate_create_table(&LANDMARKS);
        assert!(sql.contains("CREATE TABLE landmarks"));
        assert!(sql.contains("id INTEGER PRIMARY KEY"));
        assert!(sql.contains("description TEXT,"));
        assert!(sql.contains("lat REAL NOT NULL"));

        let sql = generate_create_table(&TOUR_LANDMARKS);
        assert!(!sql.contains("PRIMARY KEY"));
        assert!(sql.contains("FOREIGN KEY (landmark_id) REFERENCES landmarks(id)"));
    }

    #[test]
    fn test_generate_indexes() {
        let indexes = generate_indexes(&TOUR_LANDMARKS);
        assert_eq!(indexes.len(), 2);
        assert!(indexes.iter().any(|i| i.contains("idx_tour_landmarks_tour_id")));
    }

    #[test]
    fn test_generate_schema_covers_all_tables() {
        let script = generate_schema();
        assert_eq!(script.matches("CREATE TABLE").count(), ALL_TABLES.len());
    }
}
