//! High-level, ergonomic library API: validate roster rows, run the
//! per-student pipeline, and drive whole-roster batches. Prefer these
//! entrypoints over the low-level modules when embedding openbook.
use std::fs;

use csv::StringRecord;
use regex::Regex;
use tracing::{info, warn};

use crate::core::config::Config;
use crate::error::Result;
use crate::io::inserts::write_inserts;
use crate::io::roster::RosterReader;
use crate::mail::{self, Mailer};
use crate::typeset::{self, Typesetter};
use crate::types::{self, Student};

/// Outcome counters for one roster run.
///
/// `processed` counts students carried through the whole pipeline,
/// `skipped` counts rows the validator rejected, and `errors` counts rows
/// whose processing failed after validation (row shape, typesetting,
/// composition, or transport).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Test the identifier column of `record` against the configured pattern,
/// matching from the start of the field (a prefix match, not a full match).
///
/// A row too narrow to hold the identifier column is a row-shape error, not
/// a mismatch.
pub fn matches_identifier(record: &StringRecord, config: &Config, pattern: &Regex) -> Result<bool> {
    let id = types::field(record, config.student_id_column)?;
    Ok(pattern.find(id).is_some_and(|m| m.start() == 0))
}

/// Run the per-student pipeline: overwrite the hand-off fragments, invoke
/// the typesetting toolchain, read the generated PDF back, compose the
/// message, and deliver it unless the configuration asks for a dry run.
pub fn process_student(
    config: &Config,
    student: &Student,
    typesetter: &dyn Typesetter,
    mailer: &dyn Mailer,
) -> Result<()> {
    info!("Processing: {} : {}", student.name, student.email);

    write_inserts(&config.workdir, student)?;
    typesetter.typeset(&config.workdir)?;
    let pdf = fs::read(typeset::pdf_path(&config.workdir))?;

    let message = mail::compose(config, student, pdf)?;
    if config.dry_run {
        info!("Dry run: not sending to {}", student.email);
        return Ok(());
    }
    mailer.deliver(&message)
}

/// Process the configured roster in file order.
///
/// The identifier pattern is compiled up front; a malformed pattern or an
/// unreadable roster aborts before any row is touched. Per-row failures
/// after validation are contained: the row is reported, counted, and the
/// batch continues with the next student.
pub fn process_roster(
    config: &Config,
    typesetter: &dyn Typesetter,
    mailer: &dyn Mailer,
) -> Result<BatchReport> {
    let pattern = config.identifier_regex()?;
    let reader = RosterReader::open(&config.input_file)?;

    let mut report = BatchReport::default();
    for record in reader.rows() {
        let record = record?;
        let line = types::record_line(&record);

        match matches_identifier(&record, config, &pattern) {
            Ok(true) => {
                let outcome = Student::from_row(&record, config)
                    .and_then(|student| process_student(config, &student, typesetter, mailer));
                match outcome {
                    Ok(()) => report.processed += 1,
                    Err(e) => {
                        warn!("Error processing row at line {line}: {e}");
                        report.errors += 1;
                    }
                }
            }
            Ok(false) => {
                info!("Skipping: non matching row at line {line}");
                report.skipped += 1;
            }
            Err(e) => {
                warn!("Error processing row at line {line}: {e}");
                report.errors += 1;
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    fn default_pattern() -> Regex {
        Config::default().identifier_regex().unwrap()
    }

    #[test]
    fn identifier_must_match_from_field_start() {
        let config = Config::default();
        let pattern = default_pattern();

        let matching = record(&["x", "B100", "Alice"]);
        assert!(matches_identifier(&matching, &config, &pattern).unwrap());

        // Prefix semantics: trailing garbage after the match is fine.
        let prefixed = record(&["x", "B100x", "Alice"]);
        assert!(matches_identifier(&prefixed, &config, &pattern).unwrap());

        // A match later in the field is not a match from the start.
        let offset = record(&["x", "xB100", "Alice"]);
        assert!(!matches_identifier(&offset, &config, &pattern).unwrap());
    }

    #[test]
    fn bare_b_does_not_match_default_pattern() {
        let config = Config::default();
        let pattern = default_pattern();
        let row = record(&["x", "B", "Alice"]);
        assert!(!matches_identifier(&row, &config, &pattern).unwrap());
    }

    #[test]
    fn row_without_identifier_column_is_a_shape_error() {
        let config = Config::default();
        let pattern = default_pattern();
        let row = record(&["only"]);
        assert!(matches_identifier(&row, &config, &pattern).is_err());
    }
}
