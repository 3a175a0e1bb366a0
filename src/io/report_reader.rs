use super::readers::open_report_reader;
use crate::{
    constants::{
        ALT_COLUMN, CHROM_COLUMN, END_COLUMN, FIELD_DELIMITER, REQUIRED_COLUMNS, START_COLUMN,
        SV_TYPE_COLUMN,
    },
    core::candidates::VariantRecord,
    error::SvlinkError,
    utils::util::Result,
};
use std::{
    collections::HashMap,
    io::{BufRead, BufReader, Read as ioRead},
    path::{Path, PathBuf},
};

/// Positions of the required columns in the report header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    indices: HashMap<&'static str, usize>,
}

impl ColumnIndex {
    /// Looks up every required column, failing with all missing names at once.
    /// The first occurrence of a repeated column name wins.
    pub fn from_header<S: AsRef<str>>(header: &[S]) -> Result<Self> {
        let mut indices = HashMap::with_capacity(REQUIRED_COLUMNS.len());
        let mut missing = Vec::new();
        for column in REQUIRED_COLUMNS {
            match header.iter().position(|name| name.as_ref() == column) {
                Some(idx) => {
                    indices.insert(column, idx);
                }
                None => {
                    log::error!("Missing a required column: {column}");
                    missing.push(column.to_string());
                }
            }
        }
        if !missing.is_empty() {
            return Err(SvlinkError::MissingColumns { columns: missing });
        }
        Ok(Self { indices })
    }

    pub fn get(&self, column: &str) -> Option<usize> {
        self.indices.get(column).copied()
    }

    /// Borrows the variant fields out of a data row. Fields past the end of a short row read
    /// as empty, which never matches a plot on disk.
    pub fn record<'a, S: AsRef<str>>(&self, row: &'a [S]) -> VariantRecord<'a> {
        let field = |column: &str| {
            self.get(column)
                .and_then(|idx| row.get(idx))
                .map_or("", |value| value.as_ref())
        };
        VariantRecord {
            sv_type: field(SV_TYPE_COLUMN),
            chrom: field(CHROM_COLUMN),
            start: field(START_COLUMN),
            end: field(END_COLUMN),
            alt: field(ALT_COLUMN),
        }
    }
}

pub fn split_fields(line: &str) -> Vec<String> {
    line.trim_end_matches(['\n', '\r'])
        .split(FIELD_DELIMITER)
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub line_number: usize,
    pub fields: Vec<String>,
}

/// Forward-only reader over a tab-separated SV report.
pub struct ReportReader {
    reader: BufReader<Box<dyn ioRead>>,
    header: Vec<String>,
    columns: ColumnIndex,
    line_number: usize,
    buffer: String,
}

impl ReportReader {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_report_reader(path)?;
        Self::from_reader(reader, path)
    }

    /// Reads and indexes the header; `source` is only used in error messages.
    pub fn from_reader(mut reader: BufReader<Box<dyn ioRead>>, source: &Path) -> Result<Self> {
        let mut buffer = String::new();
        let n_read = reader.read_line(&mut buffer).map_err(|e| {
            crate::svlink_error!("Error reading header of {}: {e}", source.display())
        })?;
        if n_read == 0 {
            return Err(SvlinkError::EmptyReport {
                path: PathBuf::from(source),
            });
        }
        let header = split_fields(&buffer);
        let columns = ColumnIndex::from_header(&header)?;
        log::debug!(
            "Indexed {} header columns: {:?}",
            header.len(),
            REQUIRED_COLUMNS
                .iter()
                .map(|column| (*column, columns.get(column)))
                .collect::<Vec<_>>()
        );
        buffer.clear();
        Ok(Self {
            reader,
            header,
            columns,
            line_number: 1,
            buffer,
        })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn columns(&self) -> &ColumnIndex {
        &self.columns
    }

    fn read_row(&mut self) -> Result<Option<ReportRow>> {
        loop {
            self.buffer.clear();
            let n_read = self.reader.read_line(&mut self.buffer).map_err(|e| {
                crate::svlink_error!("Error at report line {}: {e}", self.line_number + 1)
            })?;
            if n_read == 0 {
                return Ok(None);
            }
            self.line_number += 1;
            let line = self.buffer.trim_end_matches(['\n', '\r']);
            if line.is_empty() {
                log::debug!("Skipping blank report line {}", self.line_number);
                continue;
            }
            let fields = split_fields(line);
            if fields.len() != self.header.len() {
                log::debug!(
                    "Report line {} has {} fields, header has {}",
                    self.line_number,
                    fields.len(),
                    self.header.len()
                );
            }
            return Ok(Some(ReportRow {
                line_number: self.line_number,
                fields,
            }));
        }
    }
}

impl Iterator for ReportReader {
    type Item = Result<ReportRow>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_row().transpose()
    }
}
