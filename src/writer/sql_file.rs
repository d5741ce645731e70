use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where generated statements go
#[derive(Debug, Clone, PartialEq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `-` means stdout, anything else is a file path
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(path.to_path_buf())
        }
    }
}

/// Writes one statement per line to an underlying sink
pub struct SqlFileWriter<W: Write> {
    out: W,
    written: u64,
}

impl SqlFileWriter<BufWriter<File>> {
    /// Create (or truncate) the output file
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {:?}", path))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> SqlFileWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    pub fn write_statement(&mut self, statement: &str) -> Result<()> {
        writeln!(self.out, "{}", statement).context("Failed to write statement")?;
        self.written += 1;
        Ok(())
    }

    pub fn write_lines<S: AsRef<str>>(&mut self, statements: &[S]) -> Result<()> {
        for statement in statements {
            self.write_statement(statement.as_ref())?;
        }
        Ok(())
    }

    /// Flush and hand back the sink along with the number of lines written
    pub fn finish(mut self) -> Result<(W, u64)> {
        self.out.flush().context("Failed to flush output")?;
        Ok((self.out, self.written))
    }
}

/// Write all statements to the target, one per line
pub fn write_statements<S: AsRef<str>>(target: &OutputTarget, statements: &[S]) -> Result<u64> {
    match target {
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            let mut writer = SqlFileWriter::new(stdout.lock());
            writer.write_lines(statements)?;
            let (_, written) = writer.finish()?;
            Ok(written)
        }
        OutputTarget::File(path) => {
            let mut writer = SqlFileWriter::create(path)?;
            writer.write_lines(statements)?;
            let (_, written) = writer.finish()?;
            Ok(written)
        }
    }
}
