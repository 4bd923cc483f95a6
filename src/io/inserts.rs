use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::types::Student;

/// Barcode hand-off fragment, included by the master document.
pub const BARCODE_INSERT: &str = "open-book-insert-barcode.tex";
/// Name hand-off fragment, included by the master document.
pub const NAME_INSERT: &str = "open-book-insert-name.tex";

/// Overwrite the two LaTeX hand-off fragments for one student.
///
/// The barcode fragment embeds the identifier in a `\psbarcode` directive and
/// the name fragment carries the display name, both verbatim. TeX-active
/// characters in either field are not escaped and will corrupt the generated
/// document; this is a known limitation of the hand-off format.
pub fn write_inserts(workdir: &Path, student: &Student) -> Result<()> {
    let barcode = format!(
        "\\psbarcode{{{}}}{{includetext height=0.25}}{{code39}}",
        student.id
    );
    fs::write(workdir.join(BARCODE_INSERT), barcode)?;
    fs::write(workdir.join(NAME_INSERT), &student.name)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: &str, name: &str) -> Student {
        Student {
            id: id.to_string(),
            name: name.to_string(),
            email: "a@example.com".to_string(),
        }
    }

    #[test]
    fn writes_barcode_directive_and_name() {
        let dir = tempfile::tempdir().unwrap();
        write_inserts(dir.path(), &student("B100", "Alice")).unwrap();

        let barcode = fs::read_to_string(dir.path().join(BARCODE_INSERT)).unwrap();
        assert_eq!(
            barcode,
            "\\psbarcode{B100}{includetext height=0.25}{code39}"
        );
        let name = fs::read_to_string(dir.path().join(NAME_INSERT)).unwrap();
        assert_eq!(name, "Alice");
    }

    #[test]
    fn second_write_leaves_no_residue() {
        let dir = tempfile::tempdir().unwrap();
        write_inserts(dir.path(), &student("B100", "Alice")).unwrap();
        write_inserts(dir.path(), &student("B200", "Bob")).unwrap();

        let barcode = fs::read_to_string(dir.path().join(BARCODE_INSERT)).unwrap();
        assert!(barcode.contains("B200"));
        assert!(!barcode.contains("B100"));
        let name = fs::read_to_string(dir.path().join(NAME_INSERT)).unwrap();
        assert_eq!(name, "Bob");
    }
}
