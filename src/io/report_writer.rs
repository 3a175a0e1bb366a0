use crate::{constants::FIELD_DELIMITER, utils::util::Result};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

/// Tab-separated writer for the annotated report, stdout unless an output path is given.
pub struct ReportWriter {
    writer: BufWriter<Box<dyn Write>>,
    n_rows: usize,
}

impl ReportWriter {
    pub fn new(output: Option<&str>) -> Result<Self> {
        let writer: Box<dyn Write> = match output {
            Some(path) => {
                let file = File::create(Path::new(path)).map_err(|e| {
                    crate::svlink_error!("Failed to create output file {path}: {e}")
                })?;
                Box::new(file)
            }
            None => Box::new(io::stdout().lock()),
        };
        Ok(Self::from_writer(writer))
    }

    pub fn from_writer(writer: Box<dyn Write>) -> Self {
        Self {
            writer: BufWriter::new(writer),
            n_rows: 0,
        }
    }

    pub fn write_row<S: AsRef<str>>(&mut self, fields: &[S]) -> Result<()> {
        for (idx, field) in fields.iter().enumerate() {
            if idx > 0 {
                write!(self.writer, "{FIELD_DELIMITER}")?;
            }
            self.writer.write_all(field.as_ref().as_bytes())?;
        }
        writeln!(self.writer)?;
        self.n_rows += 1;
        Ok(())
    }

    /// Rows written so far, header included.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
