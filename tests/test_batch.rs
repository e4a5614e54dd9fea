//! Tests for line-oriented batch input

use std::io::{BufReader, Write};
use tempfile::NamedTempFile;
use truth_table::{
    generate_tables, generate_tables_from_file, generate_tables_from_reader, Classification,
    ValidationError,
};

const INPUT: &str = "\
# classic laws
p ∨ ¬p

(p → q) ↔ (¬q → ¬p)
   # indented comment
p ∧ ¬p
(p ∧ q
p ∧ x
p q
";

#[test]
fn test_skips_blank_and_comment_lines() {
    let entries = generate_tables(INPUT);
    let lines: Vec<usize> = entries.iter().map(|e| e.line()).collect();
    assert_eq!(lines, [2, 4, 6, 7, 8, 9]);
}

#[test]
fn test_each_line_is_independent() {
    let entries = generate_tables(INPUT);

    let classifications: Vec<Option<Classification>> = entries
        .iter()
        .map(|e| e.outcome().ok().map(|r| r.classification()))
        .collect();
    assert_eq!(
        classifications[..3],
        [
            Some(Classification::Tautology),
            Some(Classification::Tautology),
            Some(Classification::Contradiction),
        ]
    );

    assert_eq!(
        entries[3].outcome().unwrap_err(),
        &ValidationError::UnbalancedParentheses
    );
    assert_eq!(
        entries[4].outcome().unwrap_err(),
        &ValidationError::InvalidCharacterSet
    );
    assert!(matches!(
        entries[5].outcome().unwrap_err(),
        ValidationError::EvaluationFailure(_)
    ));
}

#[test]
fn test_expressions_are_trimmed() {
    let entries = generate_tables("   p → q   \n");
    assert_eq!(entries[0].expression(), "p → q");
}

#[test]
fn test_from_reader_matches_from_str() {
    let reader = BufReader::new(INPUT.as_bytes());
    assert_eq!(
        generate_tables_from_reader(reader).unwrap(),
        generate_tables(INPUT)
    );
}

#[test]
fn test_from_file() -> std::io::Result<()> {
    let mut temp = NamedTempFile::new()?;
    temp.write_all(INPUT.as_bytes())?;
    temp.flush()?;

    let entries = generate_tables_from_file(temp.path())?;
    assert_eq!(entries.len(), 6);
    assert_eq!(entries.iter().filter(|e| e.is_ok()).count(), 3);
    Ok(())
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    assert!(generate_tables_from_file(missing).is_err());
}
