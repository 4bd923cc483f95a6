//! Shared types used across openbook.
//! Includes the ephemeral `Student` view over a roster row and the row field
//! accessor used by validation and extraction.
use csv::StringRecord;
use serde::{Deserialize, Serialize};

use crate::core::config::Config;
use crate::error::{Error, Result};

/// A student derived from one validated roster row.
///
/// Exists only for the duration of a single processing cycle; nothing is
/// retained across rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl Student {
    /// Build a student from a roster row using the configured column indices.
    ///
    /// Width-checks every configured column before extracting, so a row
    /// narrower than any of them fails here, before any artifact or email
    /// work begins.
    pub fn from_row(record: &StringRecord, config: &Config) -> Result<Self> {
        let id = field(record, config.student_id_column)?;
        let name = field(record, config.student_name_column)?;
        let email = field(record, config.student_email_column)?;
        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
        })
    }
}

/// Extract a field by zero-based column index, or fail with a row-shape error.
pub fn field(record: &StringRecord, column: usize) -> Result<&str> {
    record.get(column).ok_or(Error::RowShape {
        line: record_line(record),
        column,
        width: record.len(),
    })
}

/// Line number of a record in its source file, or 0 for synthetic records.
pub fn record_line(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}
