/// Column data type
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnType {
    Integer,
    Real,
    Text,
}

/// Column definition
#[derive(Debug, Clone)]
pub struct Column {
    pub name: &'static str,
    pub col_type: ColumnType,
    pub nullable: bool,
}

impl Column {
    /// Create an optional (nullable) column
    pub const fn new(name: &'static str, col_type: ColumnType) -> Self {
        Self {
            name,
            col_type,
            nullable: true,
        }
    }

    /// Create a required (non-nullable) column
    pub const fn required(name: &'static str, col_type: ColumnType) -> Self {
        Self {
            name,
            col_type,
            nullable: false,
        }
    }
}

/// Foreign key reference
#[derive(Debug, Clone)]
pub struct ForeignKey {
    pub column: &'static str,
    pub references_table: &'static str,
    pub references_column: &'static str,
}

impl ForeignKey {
    pub const fn new(column: &'static str, references_table: &'static str) -> Self {
        Self {
            column,
            references_table,
            references_column: "id",
        }
    }
}

/// Target table definition
#[derive(Debug, Clone)]
pub struct TableSchema {
    pub name: &'static str,
    /// Columns in insert order. The surrogate `id` is not listed; the
    /// database assigns it.
    pub columns: &'static [Column],
    pub foreign_keys: &'static [ForeignKey],
    /// Whether the table has an auto-assigned `id` primary key.
    /// Join tables don't.
    pub surrogate_id: bool,
    /// Separator placed between values in the `VALUES (...)` list
    pub value_separator: &'static str,
}

impl TableSchema {
    /// Column names in insert order
    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }
}
