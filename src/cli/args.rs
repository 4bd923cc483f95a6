use clap::Parser;
use std::path::PathBuf;

use openbook::Config;

#[derive(Parser)]
#[command(
    name = "openbook",
    version,
    about = "Email students personalized guide sheets for a semi-open-book exam",
    after_help = "Note that column arguments are zero-based indices."
)]
pub struct CliArgs {
    /// Run automatically with the values given, no prompting
    #[arg(short = 'b', long)]
    pub batch_mode: bool,

    /// Prompt the user for details (default; batch mode wins)
    #[arg(long, default_value_t = true)]
    pub interactive_mode: bool,

    /// Input CSV file with one row per student
    #[arg(short = 'i', long, default_value = "students.csv")]
    pub input_file: PathBuf,

    /// Column containing the student id
    #[arg(long, default_value_t = 1)]
    pub student_id_column: usize,

    /// Column containing the student name
    #[arg(long, default_value_t = 2)]
    pub student_name_column: usize,

    /// Column containing the student email address
    #[arg(long, default_value_t = 9)]
    pub student_email_column: usize,

    /// Regular expression valid student ids match from the start
    #[arg(long, default_value = "B[0-9]+")]
    pub student_id_regexp: String,

    /// Address of an SMTP server, as host or host:port
    #[arg(long, default_value = "localhost")]
    pub smtp_server: String,

    /// Subject of the emails that are sent
    #[arg(long, default_value = "IMPORTANT: Your semi-open-book Guide Sheet")]
    pub email_subject: String,

    /// Sender address from which to send emails
    #[arg(long, default_value = "noreply@nowhere.org")]
    pub email_sender: String,

    /// Compose everything but do not send any emails
    #[arg(short = 't', long)]
    pub test_only: bool,

    /// Directory holding the master document and generated artifacts
    #[arg(long, default_value = ".")]
    pub workdir: PathBuf,

    /// Enable verbose logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    /// Fold the flag layer over the built-in defaults.
    pub fn into_config(self) -> Config {
        Config {
            input_file: self.input_file,
            student_id_column: self.student_id_column,
            student_name_column: self.student_name_column,
            student_email_column: self.student_email_column,
            student_id_regexp: self.student_id_regexp,
            smtp_server: self.smtp_server,
            email_subject: self.email_subject,
            email_sender: self.email_sender,
            batch_mode: self.batch_mode,
            interactive_mode: self.interactive_mode,
            dry_run: self.test_only,
            workdir: self.workdir,
        }
    }
}
