//! Capability interface over the external typesetting pipeline.
//!
//! The production toolchain runs `latex` then `dvipdf` against the master
//! document in the working directory. Both tools are opaque processes; the
//! only observable outcome is their exit status and the PDF they leave
//! behind. Callers substitute their own [`Typesetter`] in tests or when
//! embedding the library.
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Basename of the master LaTeX document the external tools operate on.
pub const MASTER_DOCUMENT: &str = "open-book";

/// Location of the generated PDF inside the working directory. A single
/// shared slot, overwritten for each student; sequential processing is what
/// keeps two students' artifacts from ever coexisting.
pub fn pdf_path(workdir: &Path) -> PathBuf {
    workdir.join(format!("{MASTER_DOCUMENT}.pdf"))
}

/// Produces the per-student PDF from the master document and the current
/// hand-off fragments.
pub trait Typesetter {
    fn typeset(&self, workdir: &Path) -> Result<()>;
}

/// The real `latex` + `dvipdf` toolchain.
///
/// Exit codes are checked: a nonzero status or a spawn failure aborts that
/// student's processing rather than silently mailing a stale PDF.
pub struct LatexToolchain;

impl Typesetter for LatexToolchain {
    fn typeset(&self, workdir: &Path) -> Result<()> {
        run_tool("latex", workdir)?;
        run_tool("dvipdf", workdir)
    }
}

/// Run one tool against the master document, stdout suppressed, stderr left
/// visible for the tool's own diagnostics.
fn run_tool(tool: &'static str, workdir: &Path) -> Result<()> {
    let status = Command::new(tool)
        .arg(MASTER_DOCUMENT)
        .current_dir(workdir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .status()
        .map_err(|e| Error::ExternalTool {
            tool,
            status: e.to_string(),
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::ExternalTool {
            tool,
            status: status.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_path_is_inside_workdir() {
        assert_eq!(
            pdf_path(Path::new("/tmp/run")),
            PathBuf::from("/tmp/run/open-book.pdf")
        );
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run_tool("true", dir.path()).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_tool("false", dir.path()).unwrap_err();
        assert!(matches!(err, Error::ExternalTool { tool: "false", .. }));
    }

    #[test]
    fn missing_tool_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_tool("definitely-not-a-real-tool", dir.path()).unwrap_err();
        assert!(matches!(err, Error::ExternalTool { .. }));
    }
}
