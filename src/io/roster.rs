use std::fs::File;
use std::path::Path;

use csv::StringRecord;

use crate::error::{Error, Result};

/// Lazy reader over the roster CSV, one record per student row.
///
/// The file is parsed with comma-separated, quoted-field conventions and no
/// header row. Rows of varying width are accepted here; width against the
/// configured column indices is checked downstream, per row.
#[derive(Debug)]
pub struct RosterReader {
    reader: csv::Reader<File>,
}

impl RosterReader {
    /// Open the roster at `path`. An unreadable path fails immediately with
    /// an I/O error; nothing is parsed until the rows are consumed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);
        Ok(Self { reader })
    }

    /// Consume the reader, yielding rows in file order.
    pub fn rows(self) -> impl Iterator<Item = Result<StringRecord>> {
        self.reader.into_records().map(|r| r.map_err(Error::from))
    }
}
