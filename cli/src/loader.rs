//! Cast dataset loading.
//!
//! Two formats: the classic line format (a movie title line followed by
//! one cast member per line, groups separated by blank lines) and a JSON
//! array of `{title, cast}` records for files ending in `.json`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use costar_core::CastRecord;

/// Read cast records from a file, picking the format by extension.
pub fn read_cast_file(path: &Path) -> Result<Vec<CastRecord>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading cast file {}", path.display()))?;
    if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&text)
            .with_context(|| format!("parsing JSON cast records from {}", path.display()))
    } else {
        Ok(parse_cast_lines(&text))
    }
}

/// Parse the line format. The first non-blank line opens a group as the
/// movie title; subsequent lines are cast members until a blank line
/// closes the group. A title immediately followed by a blank line yields
/// a movie with no cast.
pub fn parse_cast_lines(text: &str) -> Vec<CastRecord> {
    let mut records = Vec::new();
    let mut lines = text.lines();
    while let Some(line) = lines.next() {
        let title = line.trim();
        if title.is_empty() {
            continue;
        }
        let mut cast = Vec::new();
        for line in lines.by_ref() {
            let name = line.trim();
            if name.is_empty() {
                break;
            }
            cast.push(name.to_string());
        }
        records.push(CastRecord {
            title: title.to_string(),
            cast,
        });
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_line_format() {
        let text = "Movie A\nKevin Bacon\nAlice\n\nMovie B\nAlice\nBob\n";
        let records = parse_cast_lines(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Movie A");
        assert_eq!(records[0].cast, vec!["Kevin Bacon", "Alice"]);
        assert_eq!(records[1].title, "Movie B");
        assert_eq!(records[1].cast, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_parse_empty_cast_group() {
        let records = parse_cast_lines("Movie A\n\nMovie B\nAlice\n");
        assert_eq!(records.len(), 2);
        assert!(records[0].cast.is_empty());
        assert_eq!(records[1].cast, vec!["Alice"]);
    }

    #[test]
    fn test_parse_skips_leading_blank_lines() {
        let records = parse_cast_lines("\n\nMovie A\nAlice\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Movie A");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let records = parse_cast_lines("  Movie A  \n  Alice  \n");
        assert_eq!(records[0].title, "Movie A");
        assert_eq!(records[0].cast, vec!["Alice"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_cast_lines("").is_empty());
        assert!(parse_cast_lines("\n\n\n").is_empty());
    }

    #[test]
    fn test_read_line_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Movie A\nKevin Bacon\nAlice\n").unwrap();
        let records = read_cast_file(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].cast.len(), 2);
    }

    #[test]
    fn test_read_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cast.json");
        fs::write(
            &path,
            r#"[{"title": "Movie A", "cast": ["Kevin Bacon", "Alice"]}, {"title": "Movie B"}]"#,
        )
        .unwrap();
        let records = read_cast_file(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].cast, vec!["Kevin Bacon", "Alice"]);
        assert!(records[1].cast.is_empty());
    }

    #[test]
    fn test_read_missing_file() {
        assert!(read_cast_file(Path::new("/nonexistent/cast.txt")).is_err());
    }

    #[test]
    fn test_read_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cast.json");
        fs::write(&path, "not json").unwrap();
        assert!(read_cast_file(&path).is_err());
    }
}
