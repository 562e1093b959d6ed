//! Record output as a stream of concatenated JSON objects
//!
//! Every record is written as one compact object followed by a newline, so the
//! output is both a concatenated-object stream and a JSON-lines file.

use crate::analysis::record::ImageRecord;
use crate::io::error::{QuadrantError, Result};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Destination that accepts records one at a time
pub trait RecordSink {
    /// Write one record
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be serialized or written. The sink
    /// should be treated as broken afterwards.
    fn accept(&mut self, record: &ImageRecord) -> Result<()>;

    /// Flush anything still buffered
    ///
    /// # Errors
    ///
    /// Returns an error if buffered output cannot be written.
    fn finish(&mut self) -> Result<()>;
}

/// Writes each record as JSON to an underlying writer
#[derive(Debug)]
pub struct JsonSink<W: Write> {
    writer: W,
    records_written: usize,
}

impl JsonSink<BufWriter<File>> {
    /// Create (or truncate) the file at `path` and write records to it
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| QuadrantError::OutputCreate {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> JsonSink<W> {
    /// Wrap an existing writer
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            records_written: 0,
        }
    }

    /// Number of records accepted so far
    pub const fn records_written(&self) -> usize {
        self.records_written
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordSink for JsonSink<W> {
    fn accept(&mut self, record: &ImageRecord) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer
            .write_all(b"\n")
            .map_err(|source| QuadrantError::OutputWrite { source })?;
        self.records_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|source| QuadrantError::OutputWrite { source })
    }
}

/// Collects records in memory
impl RecordSink for Vec<ImageRecord> {
    fn accept(&mut self, record: &ImageRecord) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Parse a stream of concatenated JSON records, such as a previous run's output
///
/// # Errors
///
/// Returns an error if the stream cannot be read or holds anything other than records.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<ImageRecord>> {
    let records = serde_json::Deserializer::from_reader(reader)
        .into_iter::<ImageRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(records)
}
