//! Loading rows from delimited text.
//!
//! Records are decoded with the `csv` crate and fed through the ordinary
//! row methods of [`Table`], so loaded rows behave exactly like rows added
//! by hand. Every record must have the same number of fields.

use std::fmt;
use std::io::{self, Read, Write};

use crate::table::Table;

/// Error type for loading delimited data.
#[derive(Debug)]
pub enum IngestError {
    /// A record could not be decoded.
    Decode(csv::Error),
    /// Reading the input failed.
    Io(io::Error),
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "Invalid delimited data: {err}"),
            Self::Io(err) => write!(f, "Failed to read delimited data: {err}"),
        }
    }
}

impl std::error::Error for IngestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for IngestError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return Self::Decode(err);
        }
        match err.into_kind() {
            csv::ErrorKind::Io(io) => Self::Io(io),
            kind => Self::Io(io::Error::other(format!("{kind:?}"))),
        }
    }
}

impl<W: Write> Table<W> {
    /// Load comma-separated rows from `reader`.
    ///
    /// With `has_headers`, the first record replaces the header row.
    ///
    /// # Errors
    ///
    /// See [`Table::load_delimited`].
    pub fn load_csv<R: Read>(&mut self, reader: R, has_headers: bool) -> Result<(), IngestError> {
        self.load_delimited(reader, b',', has_headers)
    }

    /// Load rows separated by `delimiter` from `reader`.
    ///
    /// With `has_headers`, the first record replaces the header row. Every
    /// following record is added as a content row. Empty input is not an
    /// error: nothing is loaded and `Ok(())` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError`] on the first record that cannot be read or
    /// decoded. Rows loaded before the failure stay in the table.
    pub fn load_delimited<R: Read>(
        &mut self,
        reader: R,
        delimiter: u8,
        has_headers: bool,
    ) -> Result<(), IngestError> {
        let mut records = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(delimiter)
            .from_reader(reader)
            .into_records();

        if has_headers {
            match records.next() {
                Some(record) => {
                    self.set_headers(record?.iter());
                }
                None => return Ok(()),
            }
        }

        let mut loaded = 0usize;
        for record in records {
            self.add_row(record?.iter());
            loaded += 1;
        }
        log::debug!("loaded {loaded} rows (headers: {has_headers})");
        Ok(())
    }
}
