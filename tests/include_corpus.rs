use autocorrectrs::{include_corpus, SpellCorrector, Vocabulary, SAMPLE_CORPUS};

#[test]
fn test_include_corpus_corrects_sample_misspellings() {
    // Counted at compile time from tests/data/corpus.txt
    let embedded = include_corpus!("tests/data/corpus.txt");

    assert_eq!(embedded.frequency("spelling"), Some(1));
    assert_eq!(embedded.frequency("this"), Some(1));
    assert_eq!(embedded.frequency("This"), None);

    let pairs = embedded.autocorrect_all(["speling", "exampl", "langauge", "pythno", "smal"]);
    let corrected: Vec<&str> = pairs.iter().map(|(_, c)| c.as_str()).collect();
    assert_eq!(
        corrected,
        vec!["spelling", "example", "language", "python", "small"]
    );
}

#[test]
fn test_include_corpus_matches_runtime_table() {
    let embedded = include_corpus!("tests/data/corpus.txt", lowercase = true);
    let runtime = SpellCorrector::from_corpus(SAMPLE_CORPUS);

    assert_eq!(&embedded.to_table(), runtime.table());
    for word in ["speling", "corectoin", "a", "", "sytem"] {
        assert_eq!(embedded.autocorrect(word), runtime.autocorrect(word));
    }
}

#[test]
fn test_include_corpus_with_counts() {
    let embedded = include_corpus!("tests/data/counts.txt", has_freq = true);

    assert_eq!(embedded.len(), 5);
    // cart (5) beats cast and coat (2 each)
    assert_eq!(embedded.autocorrect("cat"), "cart");
    // a known word is kept even though "the" is far more frequent
    assert_eq!(embedded.autocorrect("hat"), "hat");
    assert_eq!(embedded.autocorrect("teh"), "the");
}

#[test]
fn test_misspellings_in_corpus_are_trusted() {
    // The full demo text mentions the misspellings themselves, which makes
    // them part of the vocabulary.
    let embedded = include_corpus!("tests/data/demo_sample.txt");

    assert_eq!(embedded.autocorrect("speling"), "speling");
    assert_eq!(embedded.autocorrect("pythno"), "pythno");
    // "smal" never appears, so it is still corrected
    assert_eq!(embedded.autocorrect("smal"), "small");
}
