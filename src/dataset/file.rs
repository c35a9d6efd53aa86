//! Single-column CSV datasets
//!
//! One header row, then one numeric record per value in sequence order.

use std::fs::File;
use std::io;
use std::path::Path;

use super::DatasetError;

/// Header written above the value column
pub const VALUE_COLUMN: &str = "value";

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).trim(csv::Trim::All);
    builder
}

/// Streaming iterator over the values of a CSV dataset
///
/// Parses one record per call to `next`, so a file of any length is read in
/// constant memory.
pub struct CsvValues<R> {
    records: csv::DeserializeRecordsIntoIter<R, f64>,
}

impl CsvValues<File> {
    /// Open a dataset file
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let reader = reader_builder()
            .from_path(path)
            .map_err(|source| DatasetError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            records: reader.into_deserialize(),
        })
    }
}

impl<R: io::Read> CsvValues<R> {
    /// Read a dataset from any reader
    pub fn from_reader(reader: R) -> Self {
        Self {
            records: reader_builder().from_reader(reader).into_deserialize(),
        }
    }
}

impl<R: io::Read> Iterator for CsvValues<R> {
    type Item = Result<f64, DatasetError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        Some(record.map_err(DatasetError::from_record))
    }
}

/// Read a whole dataset from a reader
pub fn read_values<R: io::Read>(reader: R) -> Result<Vec<f64>, DatasetError> {
    CsvValues::from_reader(reader).collect()
}

/// Read a whole dataset file into memory
pub fn read_csv(path: impl AsRef<Path>) -> Result<Vec<f64>, DatasetError> {
    let path = path.as_ref();
    let values = CsvValues::open(path)?.collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(path = %path.display(), len = values.len(), "loaded dataset");
    Ok(values)
}

/// Write values below a `value` header
pub fn write_values<W: io::Write>(writer: W, values: &[f64]) -> Result<(), DatasetError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record([VALUE_COLUMN])?;
    for value in values {
        writer.serialize(value)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a dataset file, replacing any existing file
pub fn write_csv(path: impl AsRef<Path>, values: &[f64]) -> Result<(), DatasetError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_values(io::BufWriter::new(file), values)?;
    tracing::debug!(path = %path.display(), len = values.len(), "wrote dataset");
    Ok(())
}
