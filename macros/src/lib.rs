use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;
use syn::parse::{Parse, ParseStream};
use syn::{Expr, Ident, LitStr, Token};

/// Macro input representation:
/// include_corpus!("path/to/corpus.txt", lowercase = true, has_freq = false)
struct IncludeCorpusArgs {
    path: LitStr,
    assignments: Vec<(Ident, Expr)>,
}

impl Parse for IncludeCorpusArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let path: LitStr = input.parse()?;

        let mut assignments = Vec::new();

        while input.parse::<Token![,]>().is_ok() {
            // trailing comma
            if input.is_empty() {
                break;
            }

            let ident: Ident = input.parse()?;
            let _eq: Token![=] = input.parse()?;
            let value: Expr = input.parse()?;

            assignments.push((ident, value));
        }

        if !input.is_empty() {
            return Err(input.error("expected `,` followed by `name = value`"));
        }

        Ok(IncludeCorpusArgs { path, assignments })
    }
}

struct Options {
    lowercase: bool,
    has_freq: bool,
}

impl Options {
    fn from_assignments(assignments: &[(Ident, Expr)]) -> syn::Result<Self> {
        let mut options = Options {
            lowercase: true,
            has_freq: false,
        };
        for (ident, expr) in assignments {
            let name = ident.to_string();
            match name.as_str() {
                "lowercase" => options.lowercase = bool_literal(&name, expr)?,
                "has_freq" => options.has_freq = bool_literal(&name, expr)?,
                _ => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown argument to include_corpus: {}", name),
                    ))
                }
            }
        }
        Ok(options)
    }
}

fn bool_literal(name: &str, expr: &Expr) -> syn::Result<bool> {
    match expr {
        Expr::Lit(el) => match &el.lit {
            syn::Lit::Bool(lb) => Ok(lb.value),
            other => Err(syn::Error::new_spanned(
                other,
                format!("{} must be a boolean literal", name),
            )),
        },
        other => Err(syn::Error::new_spanned(
            other,
            format!("{} must be a boolean literal expression", name),
        )),
    }
}

/// Count `\w+` tokens of `text`, the same rule `autocorrectrs::tokenize` uses.
fn count_tokens(text: &str, lowercase: bool) -> BTreeMap<String, usize> {
    let word_re = Regex::new(r"\w+").expect("word pattern is valid");
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for m in word_re.find_iter(text) {
        let word = if lowercase {
            m.as_str().to_lowercase()
        } else {
            m.as_str().to_string()
        };
        *counts.entry(word).or_insert(0) += 1;
    }
    counts
}

/// Parse `word count` lines. Blank lines and `#` comments are skipped,
/// zero counts are dropped and duplicates are summed; a sum past
/// `usize::MAX` is an error.
fn parse_counts(text: &str, lowercase: bool) -> Result<BTreeMap<String, usize>, String> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for (lineno, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let mut parts = trimmed.split_whitespace();
        let (Some(word), Some(count), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(format!(
                "expected `word count` on line {}: {}",
                lineno + 1,
                trimmed
            ));
        };
        let count = count
            .parse::<usize>()
            .map_err(|_| format!("invalid count on line {}: {}", lineno + 1, trimmed))?;
        if count == 0 {
            continue;
        }
        let word = if lowercase {
            word.to_lowercase()
        } else {
            word.to_string()
        };
        let slot = counts.entry(word).or_insert(0);
        *slot = slot.checked_add(count).ok_or_else(|| {
            format!(
                "count overflows usize on line {}: {}",
                lineno + 1,
                trimmed
            )
        })?;
    }
    Ok(counts)
}

/// include_corpus!("path/to/corpus.txt", lowercase = true, has_freq = false)
///
/// Reads the file at compile time (relative to `CARGO_MANIFEST_DIR` of the
/// invoking crate) and counts its word tokens. With `has_freq = true` the file
/// is instead read as `word count` lines. The counts are emitted as
///  - FREQ_PHF: ::phf::Map<&'static str, usize> (word -> count)
///
/// and the expansion evaluates to an `::autocorrectrs::EmbeddedCorrector`.
///
/// Defaults: `lowercase = true`, `has_freq = false`.
#[proc_macro]
pub fn include_corpus(input: TokenStream) -> TokenStream {
    let args = syn::parse_macro_input!(input as IncludeCorpusArgs);
    match expand(&args) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(args: &IncludeCorpusArgs) -> syn::Result<proc_macro2::TokenStream> {
    let options = Options::from_assignments(&args.assignments)?;

    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").map_err(|_| {
        syn::Error::new(
            args.path.span(),
            "CARGO_MANIFEST_DIR environment variable not set",
        )
    })?;
    let file_path = Path::new(&manifest_dir).join(args.path.value());

    let text = std::fs::read_to_string(&file_path).map_err(|e| {
        syn::Error::new(
            args.path.span(),
            format!(
                "include_corpus!: failed to read corpus file '{}': {}",
                file_path.display(),
                e
            ),
        )
    })?;

    let counts = if options.has_freq {
        parse_counts(&text, options.lowercase).map_err(|msg| {
            syn::Error::new(
                args.path.span(),
                format!("include_corpus!: {}: {}", file_path.display(), msg),
            )
        })?
    } else {
        count_tokens(&text, options.lowercase)
    };

    // BTreeMap iteration keeps the expansion deterministic.
    let entries = counts.iter().map(|(word, count)| {
        let key = LitStr::new(word, Span::call_site());
        let val = syn::LitInt::new(&format!("{}usize", count), Span::call_site());
        quote! {
            #key => #val
        }
    });

    // Track the file so edits to the corpus trigger a rebuild.
    let tracked = LitStr::new(&file_path.to_string_lossy(), Span::call_site());

    Ok(quote! {
        {
            const _: &[u8] = include_bytes!(#tracked);

            static FREQ_PHF: ::phf::Map<&'static str, usize> = ::phf::phf_map! {
                #(#entries, )*
            };

            ::autocorrectrs::EmbeddedCorrector::from_phf(&FREQ_PHF)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_tokens_lowercases() {
        let counts = count_tokens("The cat, the HAT.", true);
        assert_eq!(counts.get("the"), Some(&2));
        assert_eq!(counts.get("hat"), Some(&1));
        assert_eq!(counts.len(), 3);

        let raw = count_tokens("The the", false);
        assert_eq!(raw.get("The"), Some(&1));
        assert_eq!(raw.get("the"), Some(&1));
    }

    #[test]
    fn test_parse_counts() {
        let counts = parse_counts("# words\nHello 3\nhello 2\nnever 0\n", true).unwrap();
        assert_eq!(counts.get("hello"), Some(&5));
        assert!(!counts.contains_key("never"));
    }

    #[test]
    fn test_parse_counts_rejects_bad_line() {
        let err = parse_counts("ok 1\nbroken\n", true).unwrap_err();
        assert!(err.contains("line 2"));
    }

    #[test]
    fn test_parse_counts_rejects_overflowing_sum() {
        let text = format!("a {}\nA 1\n", usize::MAX);
        let err = parse_counts(&text, true).unwrap_err();
        assert!(err.contains("line 2"), "{err}");

        // kept apart when case is preserved
        let counts = parse_counts(&text, false).unwrap();
        assert_eq!(counts.get("a"), Some(&usize::MAX));
        assert_eq!(counts.get("A"), Some(&1));
    }

    #[test]
    fn test_parse_args() {
        let args: IncludeCorpusArgs =
            syn::parse_str(r#""data/corpus.txt", lowercase = false, has_freq = true,"#).unwrap();
        assert_eq!(args.path.value(), "data/corpus.txt");
        let options = Options::from_assignments(&args.assignments).unwrap();
        assert!(!options.lowercase);
        assert!(options.has_freq);

        let args: IncludeCorpusArgs = syn::parse_str(r#""x.txt", max_distance = 2"#).unwrap();
        assert!(Options::from_assignments(&args.assignments).is_err());
    }
}
