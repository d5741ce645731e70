use serde_json::Number;
use std::fmt;

use crate::schema::TableSchema;

/// A value ready to be placed into an INSERT statement
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Integer(u64),
    Number(Number),
    Text(String),
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Integer(i) => write!(f, "{}", i),
            SqlValue::Number(n) => write!(f, "{}", n),
            SqlValue::Text(s) => write!(f, "'{}'", escape_literal(s)),
        }
    }
}

impl From<u64> for SqlValue {
    fn from(value: u64) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<&Number> for SqlValue {
    fn from(value: &Number) -> Self {
        SqlValue::Number(value.clone())
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

/// Double every single quote so the text can sit inside a `'...'` literal.
///
/// This is the only substitution made. It is not a general sanitizer and
/// must not be used on untrusted input.
pub fn escape_literal(s: &str) -> String {
    s.replace('\'', "''")
}

/// Render a single-row INSERT for `schema`, values given in column order.
pub fn render_insert(schema: &TableSchema, values: &[SqlValue]) -> String {
    debug_assert_eq!(
        schema.columns.len(),
        values.len(),
        "value count mismatch for {}",
        schema.name
    );

    let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();

    format!(
        "INSERT INTO {} ({}) VALUES ({});",
        schema.name,
        schema.column_names().join(", "),
        rendered.join(schema.value_separator)
    )
}
