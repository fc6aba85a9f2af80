//! autocorrectrs - frequency ranked spelling correction
//!
//! This crate exposes the `corrector` module which contains the core
//! implementation: an edit-distance-1 candidate generator, a vocabulary
//! filter and a frequency ranked corrector over a table counted from a text
//! corpus. It also re-exports a compile-time proc-macro `include_corpus!`
//! (from the `autocorrectrs_macros` crate) that counts a corpus at compile
//! time, embeds the counts as a PHF map and returns an `EmbeddedCorrector`.
//!
//! Examples
//!
//! - Runtime construction from a text sample:
//!
//! ```
//! use autocorrectrs::{SpellCorrector, Vocabulary};
//!
//! let sc = SpellCorrector::from_corpus("spelling correction python language example small");
//! assert_eq!(sc.autocorrect("speling"), "spelling");
//! assert_eq!(sc.autocorrect("pythno"), "python");
//! ```
//!
//! - Compile-time embedding:
//!
//! ```ignore
//! use autocorrectrs::{include_corpus, Vocabulary};
//!
//! let embedded = include_corpus!("path/to/corpus.txt", lowercase = true);
//! let fixed = embedded.autocorrect("langauge");
//! ```

pub mod corrector;
pub mod error;

/// Re-export commonly used types from the `corrector` module.
pub use corrector::{
    generate_edits1, tokenize, EmbeddedCorrector, FrequencyTable, SpellCorrector, Vocabulary,
    ALPHABET, SAMPLE_CORPUS,
};
pub use error::{AutocorrectError, Result};

/// Re-export the compile-time corpus macro from the proc-macro crate.
///
/// The proc-macro crate is the workspace member `autocorrectrs-macros` and
/// exposes the macro as `autocorrectrs_macros::include_corpus`.
pub use autocorrectrs_macros::include_corpus;
