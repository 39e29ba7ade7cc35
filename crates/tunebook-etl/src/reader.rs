//! Lossy source-file reading.

use std::fs;
use std::io;
use std::path::Path;

/// Read a file as text, substituting undecodable byte sequences with
/// U+FFFD instead of failing the whole file. ABC collections scraped
/// from old archives routinely carry Latin-1 stragglers; a bad byte
/// must not cost us the rest of the book.
pub fn read_to_string_lossy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reads_valid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tune.abc");
        fs::write(&path, "X:1\nT:Cl\u{e9}armont\n").unwrap();

        let text = read_to_string_lossy(&path).unwrap();
        assert!(text.contains("Cl\u{e9}armont"));
    }

    #[test]
    fn test_substitutes_invalid_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tune.abc");
        // 0xE9 is 'é' in Latin-1 but invalid on its own in UTF-8.
        fs::write(&path, b"X:1\nT:Cl\xe9armont\n").unwrap();

        let text = read_to_string_lossy(&path).unwrap();
        assert!(text.contains('\u{fffd}'));
        assert!(text.starts_with("X:1\n"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no-such.abc");
        assert!(read_to_string_lossy(&path).is_err());
    }
}
