use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use crate::Field;

/// Read a field of side `size` from the file at `path`.
///
/// # Errors
///
/// Fails only if the file cannot be opened or read; malformed content is
/// tolerated per the scanning rules of [`Field::from_reader`].
pub fn load(path: impl AsRef<Path>, size: usize) -> io::Result<Field> {
    let file = File::open(path)?;
    Field::from_reader(size, BufReader::new(file))
}

/// Read a field from the file at `path` and annotate it in one step.
///
/// # Errors
///
/// Same failure modes as [`load`].
pub fn annotated(path: impl AsRef<Path>, size: usize) -> io::Result<Field> {
    let mut field = load(path, size)?;
    field
        .annotate()
        .expect("a freshly parsed field is never annotated");
    Ok(field)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_reads_a_file_without_annotating() {
        let file = write_temp("XO\nOO\n");
        let field = load(file.path(), 2).unwrap();
        assert_eq!(field.mines(), &[(0, 0)]);
        // Counts are still untouched.
        assert_eq!(field.to_string(), "X 0\n0 0");
    }

    #[test]
    fn annotated_reads_and_counts() {
        let file = write_temp("XO\nOO");
        let field = annotated(file.path(), 2).unwrap();
        assert_eq!(field.to_string(), "X 1\n1 1");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load("/definitely/not/a/real/minefield", 8).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
