#![doc = r#"
openbook — generate and email personalized guide sheets for semi-open-book exams.

This crate reads a roster CSV of students, writes two small LaTeX hand-off
fragments (a `\psbarcode` directive for the student id and the display name),
invokes the external `latex` + `dvipdf` toolchain against a master document,
and emails the resulting PDF to each student over SMTP. It powers the
openbook CLI and can be embedded in your own Rust applications.

Requirements
------------
- `latex` and `dvipdf` available on the PATH (the master `open-book.tex`
  document itself is yours to provide in the working directory).
- An SMTP relay reachable over a plain connection, e.g. on localhost.

Quick start: process a roster
-----------------------------
```rust,no_run
use openbook::{Config, LatexToolchain, SmtpMailer, process_roster};

fn main() -> openbook::Result<()> {
    let config = Config {
        batch_mode: true,
        dry_run: true,
        ..Config::default()
    };

    let typesetter = LatexToolchain;
    let mailer = SmtpMailer::new(&config.smtp_server);
    let report = process_roster(&config, &typesetter, &mailer)?;

    println!(
        "processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(())
}
```

Interactive configuration
-------------------------
`Config` resolves in three layers: built-in defaults, whatever the caller
sets on the value (the CLI maps its flags here), and optional interactive
overrides applied from any `BufRead` source via `Config::resolve_overrides`.
Batch mode disables the override pass unconditionally.

Capability seams
----------------
The external toolchain and the mail transport sit behind the `Typesetter`
and `Mailer` traits. Substitute them to test a batch end to end without a
LaTeX installation or a network:

```rust,no_run
use std::path::Path;
use openbook::{Config, Mailer, Message, Typesetter, process_roster};

struct FakeTypesetter;
impl Typesetter for FakeTypesetter {
    fn typeset(&self, workdir: &Path) -> openbook::Result<()> {
        std::fs::write(openbook::typeset::pdf_path(workdir), b"%PDF-1.4")?;
        Ok(())
    }
}

struct NullMailer;
impl Mailer for NullMailer {
    fn deliver(&self, _message: &Message) -> openbook::Result<()> {
        Ok(())
    }
}

fn main() -> openbook::Result<()> {
    let config = Config { batch_mode: true, ..Config::default() };
    process_roster(&config, &FakeTypesetter, &NullMailer)?;
    Ok(())
}
```

Error handling
--------------
All public functions return `openbook::Result<T>`; match on `openbook::Error`
to handle specific cases, e.g. row-shape or SMTP transport errors. Within a
batch, per-row failures after validation are contained and counted in the
returned `BatchReport` rather than aborting the run.

Useful modules
--------------
- [`api`] — high-level entry points (`process_roster`, `process_student`).
- [`core`] — the `Config` value and its resolution.
- [`io`] — roster reading and hand-off fragment writing.
- [`typeset`] / [`mail`] — the external-toolchain and delivery seams.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod mail;
pub mod typeset;
pub mod types;

// Curated public API surface
pub use core::config::Config;
pub use error::{Error, Result};
pub use types::Student;

pub use io::inserts::{BARCODE_INSERT, NAME_INSERT, write_inserts};
pub use io::roster::RosterReader;

pub use mail::{Mailer, Message, SmtpMailer, compose};
pub use typeset::{LatexToolchain, MASTER_DOCUMENT, Typesetter, pdf_path};

pub use api::{BatchReport, matches_identifier, process_roster, process_student};
