use std::fmt;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Effective run configuration, immutable once resolution is complete.
///
/// Resolution layers, in order: built-in defaults, command-line flags, and
/// (unless batch mode is set) interactive overrides read from a prompt
/// source via [`Config::resolve_overrides`]. Column indices are zero-based.
///
/// The identifier pattern is carried as a plain string and only compiled
/// when a batch starts; a malformed pattern is not detected here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Roster CSV, one row per student.
    pub input_file: PathBuf,
    pub student_id_column: usize,
    pub student_name_column: usize,
    pub student_email_column: usize,
    /// Pattern a student id must match from the start of the field.
    pub student_id_regexp: String,
    /// SMTP relay as `host` or `host:port`.
    pub smtp_server: String,
    pub email_subject: String,
    pub email_sender: String,
    /// Run non-interactively; forces `interactive_mode` off.
    pub batch_mode: bool,
    pub interactive_mode: bool,
    /// Compose messages but never open a transport connection.
    pub dry_run: bool,
    /// Directory holding the master document, inserts, and generated PDF.
    pub workdir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("students.csv"),
            student_id_column: 1,
            student_name_column: 2,
            student_email_column: 9,
            student_id_regexp: "B[0-9]+".to_string(),
            smtp_server: "localhost".to_string(),
            email_subject: "IMPORTANT: Your semi-open-book Guide Sheet".to_string(),
            email_sender: "noreply@nowhere.org".to_string(),
            batch_mode: false,
            interactive_mode: true,
            dry_run: false,
            workdir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Whether interactive prompting is active. Batch mode wins
    /// unconditionally over the interactive flag.
    pub fn interactive(&self) -> bool {
        self.interactive_mode && !self.batch_mode
    }

    /// Compile the identifier pattern. Called once per batch.
    pub fn identifier_regex(&self) -> Result<Regex> {
        Ok(Regex::new(&self.student_id_regexp)?)
    }

    /// Apply interactive overrides, one prompt per configurable field.
    ///
    /// Each prompt shows the current value; empty input keeps it, non-empty
    /// input replaces it. Column overrides must parse as integers. Does
    /// nothing when prompting is inactive. The source and sink are generic
    /// so resolution is testable without a terminal.
    pub fn resolve_overrides<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<()> {
        if !self.interactive() {
            return Ok(());
        }

        if let Some(v) = prompt(
            &mut input,
            &mut output,
            "CSV filename",
            &self.input_file.display(),
        )? {
            self.input_file = PathBuf::from(v);
        }
        if let Some(v) = prompt(
            &mut input,
            &mut output,
            "Student ID Column",
            &self.student_id_column,
        )? {
            self.student_id_column = parse_column("student-id-column", &v)?;
        }
        if let Some(v) = prompt(
            &mut input,
            &mut output,
            "Student Name Column",
            &self.student_name_column,
        )? {
            self.student_name_column = parse_column("student-name-column", &v)?;
        }
        if let Some(v) = prompt(
            &mut input,
            &mut output,
            "Student Email Column",
            &self.student_email_column,
        )? {
            self.student_email_column = parse_column("student-email-column", &v)?;
        }
        if let Some(v) = prompt(
            &mut input,
            &mut output,
            "Student ID Regular Expression",
            &self.student_id_regexp,
        )? {
            self.student_id_regexp = v;
        }
        if let Some(v) = prompt(&mut input, &mut output, "SMTP Server", &self.smtp_server)? {
            self.smtp_server = v;
        }
        if let Some(v) = prompt(
            &mut input,
            &mut output,
            "Email subject",
            &self.email_subject,
        )? {
            self.email_subject = v;
        }
        if let Some(v) = prompt(
            &mut input,
            &mut output,
            "Email sender address",
            &self.email_sender,
        )? {
            self.email_sender = v;
        }

        Ok(())
    }
}

fn parse_column(arg: &'static str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidArgument {
            arg,
            value: value.to_string(),
        })
}

/// Show the current value and read one override line. Returns `None` on
/// empty input or end of stream.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    current: &dyn fmt::Display,
) -> Result<Option<String>> {
    write!(output, "{label}? default=[{current}] :")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        Ok(None)
    } else {
        Ok(Some(line.to_string()))
    }
}
