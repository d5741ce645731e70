pub mod schema_gen;
pub mod sql_file;
pub mod statement;

pub use schema_gen::{generate_create_table, generate_indexes, generate_schema};
pub use sql_file::{write_statements, OutputTarget, SqlFileWriter};
pub use statement::{escape_literal, render_insert, SqlValue};
