pub mod cli;
pub mod parser;
pub mod schema;
pub mod transform;
pub mod writer;

pub use cli::{Cli, Commands};
pub use transform::{transform, SeedSummary, Transformer};

use anyhow::Result;
use std::path::Path;
use tracing::info;

use writer::{write_statements, OutputTarget};

/// Read `input`, generate the statements, then write them to `output`.
///
/// The output is only opened once every statement has been generated, so
/// a bad input never leaves a truncated or partial output file behind.
pub fn convert_file(input: &Path, output: &OutputTarget) -> Result<SeedSummary> {
    info!(?input, "reading tours document");
    let document = parser::load_document(input)?;

    let (statements, summary) = transform(&document);
    info!(
        categories = summary.categories,
        tours = summary.tours,
        landmarks = summary.landmarks,
        photos = summary.photos,
        "generated {} statements",
        summary.statements
    );

    let written = write_statements(output, &statements)?;
    info!(?output, written, "statements written");

    Ok(summary)
}
