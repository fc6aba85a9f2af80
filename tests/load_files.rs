use std::io::Write;

use autocorrectrs::{AutocorrectError, SpellCorrector, Vocabulary};
use tempfile::NamedTempFile;

#[test]
fn test_from_corpus_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Python is a language. Python is small.").unwrap();

    let sc = SpellCorrector::from_corpus_file(file.path()).unwrap();
    assert_eq!(sc.table().frequency("python"), Some(2));
    assert_eq!(sc.table().total(), 7);
    assert_eq!(sc.autocorrect("pyhton"), "python");
}

#[test]
fn test_from_counts_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# counts").unwrap();
    writeln!(file, "cart 5").unwrap();
    writeln!(file, "cast 2").unwrap();

    let sc = SpellCorrector::from_counts_file(file.path()).unwrap();
    assert_eq!(sc.table().most_common(1), vec![("cart", 5)]);
    assert_eq!(sc.autocorrect("cat"), "cart");
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");

    let err = SpellCorrector::from_corpus_file(&missing).unwrap_err();
    match &err {
        AutocorrectError::Io { path, .. } => assert_eq!(path, &missing),
        other => panic!("expected io error, got {:?}", other),
    }
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn test_malformed_counts_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "cart 5").unwrap();
    writeln!(file, "cast two").unwrap();

    let err = SpellCorrector::from_counts_file(file.path()).unwrap_err();
    assert!(matches!(err, AutocorrectError::Parse { line: 2, .. }));
}
