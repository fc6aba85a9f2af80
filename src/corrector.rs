/*!
corrector module

This module provides a frequency ranked spelling corrector in the style of
Peter Norvig's classic essay. It implements:

- `tokenize` to split a corpus into lowercase word tokens
- `FrequencyTable`, the word -> count vocabulary built from a corpus
- `generate_edits1` to produce every string one edit away from a word
- the `Vocabulary` trait, which provides `known`, `candidates` and
  `autocorrect` over any word -> count source
- `SpellCorrector`, the runtime corrector owning a `FrequencyTable`
- `EmbeddedCorrector`, the PHF-backed corrector returned by `include_corpus!`

How to populate a corrector
- Runtime: `SpellCorrector::from_corpus` from a text sample, or
  `SpellCorrector::from_counts` from `(word, count)` pairs.
- Compile-time: the `include_corpus!` proc-macro (provided by the
  `autocorrectrs_macros` crate) reads a corpus file at compile time and emits
  a `phf` map wrapped in an `EmbeddedCorrector`.

Only edit distance 1 is searched. A misspelling two or more edits away from
every known word is returned unchanged.
*/

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{AutocorrectError, Result};

/// Letters used for replacements and insertions.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// A small built-in corpus, enough to correct the classic demo misspellings.
pub const SAMPLE_CORPUS: &str = "
This is a simple corpus for building an autocorrect system.
It contains words like spelling, correction, python, language, example, and small.
";

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"\w+").expect("word pattern is valid");
}

/// Split `text` into maximal runs of word characters, lowercased.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    WORD_RE.find_iter(text).map(|m| m.as_str().to_lowercase())
}

/// Word -> occurrence count.
///
/// Every stored count is positive; the key set is the whole vocabulary the
/// corrector can ever suggest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Count the tokens of `text`.
    pub fn from_corpus(text: &str) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut tokens = 0usize;
        for word in tokenize(text) {
            *counts.entry(word).or_insert(0) += 1;
            tokens += 1;
        }
        log::debug!(
            "built frequency table: {} distinct words from {} tokens",
            counts.len(),
            tokens
        );
        Self { counts }
    }

    /// Build a table from `(word, count)` pairs.
    ///
    /// Words are lowercased and duplicate words have their counts summed,
    /// saturating at `usize::MAX`. Empty words and zero counts are skipped.
    pub fn from_counts<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
        S: AsRef<str>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for (word, count) in iter {
            let word = word.as_ref().to_lowercase();
            if word.is_empty() || count == 0 {
                continue;
            }
            let slot = counts.entry(word).or_insert(0);
            *slot = slot.saturating_add(count);
        }
        Self { counts }
    }

    /// Parse a `word count` per line listing.
    ///
    /// Blank lines and lines starting with `#` are ignored, zero counts are
    /// dropped and repeated words are summed. A line whose count would push
    /// a word past `usize::MAX` is rejected like a malformed one.
    pub fn read_counts<R: BufRead>(reader: R) -> Result<Self> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let parse_error = || AutocorrectError::Parse {
                line: lineno + 1,
                content: trimmed.to_string(),
            };
            let mut parts = trimmed.split_whitespace();
            let (Some(word), Some(count), None) = (parts.next(), parts.next(), parts.next())
            else {
                return Err(parse_error());
            };
            let count = count.parse::<usize>().map_err(|_| parse_error())?;
            if count == 0 {
                continue;
            }
            let slot = counts.entry(word.to_lowercase()).or_insert(0);
            *slot = slot.checked_add(count).ok_or_else(parse_error)?;
        }
        let table = Self { counts };
        log::debug!("loaded {} words from counts listing", table.len());
        Ok(table)
    }

    pub fn frequency(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens the table was built from.
    /// Saturates at `usize::MAX`.
    pub fn total(&self) -> usize {
        self.counts
            .values()
            .fold(0usize, |acc, &c| acc.saturating_add(c))
    }

    /// Iterate over `(word, count)` in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// The `n` most frequent words, count descending then word ascending.
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }
}

/// Read-only access to a word -> count vocabulary, and the correction
/// pipeline built on top of it.
///
/// Implementors only supply `frequency`; every other method is derived from
/// it, so runtime and embedded vocabularies correct identically.
pub trait Vocabulary {
    /// Count of `word`, or `None` when it is not in the vocabulary.
    fn frequency(&self, word: &str) -> Option<usize>;

    fn contains(&self, word: &str) -> bool {
        self.frequency(word).is_some()
    }

    /// Keep only the words present in the vocabulary.
    fn known<I, S>(&self, words: I) -> HashSet<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        words
            .into_iter()
            .map(Into::into)
            .filter(|w| self.contains(w))
            .collect()
    }

    /// Possible corrections for `word`, by priority:
    ///
    /// 1. `{word}` when `word` is itself known, even if a more frequent word
    ///    is one edit away.
    /// 2. The known words one edit away.
    /// 3. `{word}` when nothing else matched.
    ///
    /// The result is never empty. The empty string yields `{""}`.
    fn candidates(&self, word: &str) -> HashSet<String> {
        if word.is_empty() || self.contains(word) {
            return HashSet::from([word.to_string()]);
        }
        let edits = self.known(generate_edits1(word));
        if !edits.is_empty() {
            return edits;
        }
        HashSet::from([word.to_string()])
    }

    /// The most frequent candidate for `word`.
    ///
    /// Candidates sharing the highest count are resolved in favour of the
    /// lexicographically smallest word.
    fn autocorrect(&self, word: &str) -> String {
        let best = self
            .candidates(word)
            .into_iter()
            .map(|c| (self.frequency(&c).unwrap_or(0), c))
            .max_by(|a, b| rank(a, b))
            .map(|(_, c)| c)
            // unreachable: candidates always holds at least `word`
            .unwrap_or_else(|| word.to_string());
        log::trace!("autocorrect {:?} -> {:?}", word, best);
        best
    }

    /// Correct each word, returning `(original, corrected)` pairs in input
    /// order.
    fn autocorrect_all<'a, I>(&self, words: I) -> Vec<(String, String)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        words
            .into_iter()
            .map(|w| (w.to_string(), self.autocorrect(w)))
            .collect()
    }
}

// Higher count wins; on equal counts the smaller word ranks higher.
fn rank(a: &(usize, String), b: &(usize, String)) -> Ordering {
    a.0.cmp(&b.0).then_with(|| b.1.cmp(&a.1))
}

impl Vocabulary for FrequencyTable {
    fn frequency(&self, word: &str) -> Option<usize> {
        FrequencyTable::frequency(self, word)
    }
}

/// Runtime spelling corrector over an owned `FrequencyTable`.
#[derive(Debug, Clone, Default)]
pub struct SpellCorrector {
    table: FrequencyTable,
}

impl SpellCorrector {
    pub fn new(table: FrequencyTable) -> Self {
        Self { table }
    }

    /// Build a corrector whose vocabulary is the tokens of `text`.
    pub fn from_corpus(text: &str) -> Self {
        Self::new(FrequencyTable::from_corpus(text))
    }

    /// Read `path` and build a corrector from its text.
    pub fn from_corpus_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| AutocorrectError::io(path, e))?;
        log::info!("loaded corpus from {}", path.display());
        Ok(Self::from_corpus(&text))
    }

    /// Build a corrector from `(word, count)` pairs.
    pub fn from_counts<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
        S: AsRef<str>,
    {
        Self::new(FrequencyTable::from_counts(iter))
    }

    /// Build a corrector from a `word count` listing on disk.
    pub fn from_counts_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| AutocorrectError::io(path, e))?;
        let table = FrequencyTable::read_counts(BufReader::new(file))?;
        log::info!("loaded counts from {}", path.display());
        Ok(Self::new(table))
    }

    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }
}

impl Vocabulary for SpellCorrector {
    fn frequency(&self, word: &str) -> Option<usize> {
        self.table.frequency(word)
    }
}

/// EmbeddedCorrector: PHF-backed corrector.
///
/// The `include_corpus!` proc-macro tokenizes and counts a corpus at compile
/// time, emits a `::phf::Map<&'static str, usize>` static and calls
/// `from_phf` in its expansion. Nothing is built at runtime.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedCorrector {
    dict: &'static ::phf::Map<&'static str, usize>,
}

impl EmbeddedCorrector {
    pub fn from_phf(dict: &'static ::phf::Map<&'static str, usize>) -> Self {
        Self { dict }
    }

    pub fn len(&self) -> usize {
        self.dict.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dict.is_empty()
    }

    /// Return a reference to the underlying PHF map (word -> count).
    pub fn dict_map(&self) -> &'static ::phf::Map<&'static str, usize> {
        self.dict
    }

    /// Copy the embedded counts into a runtime `FrequencyTable`.
    ///
    /// Keys are copied as embedded, so a map built with `lowercase = false`
    /// keeps its case variants apart.
    pub fn to_table(&self) -> FrequencyTable {
        let counts = self
            .dict
            .entries()
            .map(|(w, c)| (w.to_string(), *c))
            .collect();
        FrequencyTable { counts }
    }
}

impl Vocabulary for EmbeddedCorrector {
    fn frequency(&self, word: &str) -> Option<usize> {
        self.dict.get(word).copied()
    }
}

/// Every string exactly one edit away from `word`.
///
/// An edit is a deletion, a swap of two adjacent characters, a replacement by
/// a letter of `ALPHABET`, or an insertion of such a letter at any of the
/// `n + 1` positions. Edits that give back `word` itself (replacing a letter
/// by itself, swapping two equal letters) are left out, so for `n > 0` the
/// result has at most `n + (n - 1) + 25n + 26(n + 1)` entries.
pub fn generate_edits1(word: &str) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    let mut edits: HashSet<String> = HashSet::with_capacity(54 * n + 26);

    for i in 0..=n {
        let (left, right) = chars.split_at(i);
        if let Some((&first, rest)) = right.split_first() {
            // deletion
            edits.insert(assemble(&[left, rest]));
            // transposition
            if let Some((&second, tail)) = rest.split_first() {
                if first != second {
                    let swapped = [second, first];
                    edits.insert(assemble(&[left, &swapped[..], tail]));
                }
            }
            // replacement
            for c in ALPHABET.chars().filter(|&c| c != first) {
                edits.insert(assemble(&[left, &[c][..], rest]));
            }
        }
        // insertion
        for c in ALPHABET.chars() {
            edits.insert(assemble(&[left, &[c][..], right]));
        }
    }
    edits
}

fn assemble(parts: &[&[char]]) -> String {
    parts.iter().flat_map(|p| p.iter()).collect()
}
